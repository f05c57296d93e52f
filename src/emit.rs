//! Go code emitter.
//!
//! Two passes over the AST: a recursive walk collecting the standard
//! library imports the program needs, then emission into an in-memory
//! buffer. A stack of declared-name sets tracks lexical scopes so a
//! `dance` introduces each name with `:=` exactly once per scope and
//! reassigns with `=` afterwards.

use std::collections::{BTreeSet, HashSet};

use crate::ast::*;

/// Emit a parsed program as Go source. Emission is total: every node
/// kind has an output shape, and semantically dubious input is left
/// for the Go compiler to reject.
pub fn emit_program(program: &Program) -> String {
    Emitter::new().emit(program)
}

struct Emitter {
    out: String,
    indent: usize,
    imports: BTreeSet<String>,
    scopes: Vec<HashSet<String>>,
}

impl Emitter {
    fn new() -> Self {
        let mut emitter = Self {
            out: String::new(),
            indent: 0,
            imports: BTreeSet::new(),
            scopes: Vec::new(),
        };
        // Root scope backs the main body.
        emitter.push_scope();
        emitter
    }

    fn emit(mut self, program: &Program) -> String {
        self.out.push_str("package main\n\n");

        for stmt in &program.statements {
            self.collect_imports_stmt(stmt);
        }

        if !self.imports.is_empty() {
            let imports: Vec<String> = self.imports.iter().cloned().collect();
            self.out.push_str("import (\n");
            self.indent += 1;
            for import in &imports {
                self.write_indent();
                self.out.push('"');
                self.out.push_str(import);
                self.out.push_str("\"\n");
            }
            self.indent -= 1;
            self.out.push_str(")\n\n");
        }

        self.out.push_str("func main() {\n");
        self.indent += 1;
        for stmt in &program.statements {
            self.emit_statement(stmt);
        }
        self.indent -= 1;
        self.out.push_str("}\n");

        self.out
    }

    // --- Pass 1: import collection ---

    fn collect_imports_stmt(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Dance(s) => self.collect_imports_expr(&s.value),
            Statement::Expr(s) => self.collect_imports_expr(&s.expression),
            Statement::Sway(s) => {
                self.collect_imports_expr(&s.from);
                self.collect_imports_expr(&s.to);
                self.collect_imports_block(&s.body);
            }
            Statement::Start(s) => self.collect_imports_stmt(&s.statement),
            Statement::Send(s) => {
                self.collect_imports_expr(&s.channel);
                self.collect_imports_expr(&s.value);
            }
            Statement::If(s) => {
                self.collect_imports_expr(&s.condition);
                self.collect_imports_block(&s.consequence);
                if let Some(alt) = &s.alternative {
                    self.collect_imports_block(alt);
                }
            }
            Statement::Block(b) => self.collect_imports_block(b),
        }
    }

    fn collect_imports_block(&mut self, block: &BlockStatement) {
        for stmt in &block.statements {
            self.collect_imports_stmt(stmt);
        }
    }

    fn collect_imports_expr(&mut self, expr: &Expression) {
        match expr {
            Expression::Spin(spin) => {
                if is_builtin_print(spin) {
                    self.imports.insert("fmt".to_string());
                }
                self.collect_imports_expr(&spin.callee);
                for arg in &spin.arguments {
                    self.collect_imports_expr(arg);
                }
            }
            Expression::Infix(infix) => {
                self.collect_imports_expr(&infix.left);
                self.collect_imports_expr(&infix.right);
            }
            Expression::Flow(flow) => self.collect_imports_expr(&flow.channel_type),
            Expression::Match(m) => {
                self.collect_imports_expr(&m.scrutinee);
                for case in &m.cases {
                    self.collect_imports_expr(&case.pattern);
                    self.collect_imports_expr(&case.consequence);
                }
            }
            Expression::Ident(_)
            | Expression::Int(_)
            | Expression::Float(_)
            | Expression::Str(_)
            | Expression::Bool(_) => {}
        }
    }

    // --- Pass 2: emission ---

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Dance(s) => self.emit_dance(s),
            Statement::Expr(s) => {
                self.write_indent();
                self.emit_expression(&s.expression);
                self.out.push('\n');
            }
            Statement::Sway(s) => self.emit_sway(s),
            Statement::Start(s) => self.emit_start(s),
            Statement::Send(s) => self.emit_send(s),
            Statement::If(s) => self.emit_if(s),
            Statement::Block(b) => self.emit_bare_block(b),
        }
    }

    fn emit_dance(&mut self, stmt: &DanceStatement) {
        self.write_indent();
        let name = &stmt.name.value;
        self.out.push_str(name);
        if self.is_declared(name) {
            self.out.push_str(" = ");
        } else {
            self.out.push_str(" := ");
            self.declare(name);
        }
        self.emit_expression(&stmt.value);
        self.out.push('\n');
    }

    fn emit_sway(&mut self, stmt: &SwayStatement) {
        let var = &stmt.variable.value;

        self.write_indent();
        self.out.push_str("for ");
        self.out.push_str(var);
        self.out.push_str(" := ");
        self.emit_expression(&stmt.from);
        self.out.push_str("; ");
        self.out.push_str(var);
        self.out.push_str(" <= ");
        self.emit_expression(&stmt.to);
        self.out.push_str("; ");
        self.out.push_str(var);
        self.out.push_str("++ {\n");

        self.push_scope();
        // The loop variable is declared into the body scope as if by
        // a dance statement.
        self.declare(var);
        self.indent += 1;
        for s in &stmt.body.statements {
            self.emit_statement(s);
        }
        self.indent -= 1;
        self.pop_scope();

        self.write_indent();
        self.out.push_str("}\n");
    }

    fn emit_start(&mut self, stmt: &StartStatement) {
        self.write_indent();
        self.out.push_str("go func() {\n");

        self.push_scope();
        self.indent += 1;
        self.emit_statement(&stmt.statement);
        self.indent -= 1;
        self.pop_scope();

        self.write_indent();
        self.out.push_str("}()\n");
    }

    fn emit_send(&mut self, stmt: &SendStatement) {
        self.write_indent();
        self.emit_expression(&stmt.channel);
        self.out.push_str(" <- ");
        self.emit_expression(&stmt.value);
        self.out.push('\n');
    }

    fn emit_if(&mut self, stmt: &IfStatement) {
        self.write_indent();
        self.out.push_str("if ");
        self.emit_expression(&stmt.condition);
        self.out.push_str(" {\n");

        self.push_scope();
        self.indent += 1;
        for s in &stmt.consequence.statements {
            self.emit_statement(s);
        }
        self.indent -= 1;
        self.pop_scope();

        self.write_indent();
        self.out.push('}');

        if let Some(alt) = &stmt.alternative {
            self.out.push_str(" else {\n");
            self.push_scope();
            self.indent += 1;
            for s in &alt.statements {
                self.emit_statement(s);
            }
            self.indent -= 1;
            self.pop_scope();
            self.write_indent();
            self.out.push('}');
        }

        self.out.push('\n');
    }

    fn emit_bare_block(&mut self, block: &BlockStatement) {
        self.write_indent();
        self.out.push_str("{\n");

        self.push_scope();
        self.indent += 1;
        for s in &block.statements {
            self.emit_statement(s);
        }
        self.indent -= 1;
        self.pop_scope();

        self.write_indent();
        self.out.push_str("}\n");
    }

    fn emit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Ident(id) => self.out.push_str(&id.value),
            Expression::Int(lit) => {
                let s = lit.value.to_string();
                self.out.push_str(&s);
            }
            Expression::Float(lit) => {
                let s = lit.value.to_string();
                self.out.push_str(&s);
            }
            Expression::Str(lit) => {
                // The lexeme is the raw inner text; no re-escaping.
                self.out.push('"');
                self.out.push_str(&lit.value);
                self.out.push('"');
            }
            Expression::Bool(lit) => self.out.push_str(if lit.value { "true" } else { "false" }),
            Expression::Infix(infix) => {
                self.out.push('(');
                self.emit_expression(&infix.left);
                self.out.push(' ');
                self.out.push_str(&infix.operator);
                self.out.push(' ');
                self.emit_expression(&infix.right);
                self.out.push(')');
            }
            Expression::Spin(spin) => self.emit_spin(spin),
            Expression::Flow(flow) => self.emit_flow(flow),
            Expression::Match(m) => self.emit_match(m),
        }
    }

    fn emit_spin(&mut self, spin: &SpinExpression) {
        if is_builtin_print(spin) {
            self.out.push_str("fmt.Println(");
        } else {
            self.emit_expression(&spin.callee);
            self.out.push('(');
        }
        for (i, arg) in spin.arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.emit_expression(arg);
        }
        self.out.push(')');
    }

    fn emit_flow(&mut self, flow: &FlowExpression) {
        // `flow channel` collapses to an opaque boxed-value channel;
        // any other channel-type expression passes straight to make().
        match &*flow.channel_type {
            Expression::Ident(id) if id.value == "channel" => {
                self.out.push_str("make(chan interface{})");
            }
            other => {
                self.out.push_str("make(");
                self.emit_expression(other);
                self.out.push(')');
            }
        }
    }

    /// A match lowers to an immediately-invoked anonymous function
    /// wrapping a switch on the scrutinee; falling off the cases
    /// returns nil.
    fn emit_match(&mut self, m: &MatchExpression) {
        self.out.push_str("func() interface{} {\n");
        self.indent += 1;

        self.write_indent();
        self.out.push_str("switch ");
        self.emit_expression(&m.scrutinee);
        self.out.push_str(" {\n");

        for case in &m.cases {
            self.write_indent();
            self.out.push_str("case ");
            self.emit_expression(&case.pattern);
            self.out.push_str(":\n");
            self.indent += 1;
            self.write_indent();
            self.out.push_str("return ");
            self.emit_expression(&case.consequence);
            self.out.push('\n');
            self.indent -= 1;
        }

        self.write_indent();
        self.out.push_str("}\n");
        self.write_indent();
        self.out.push_str("return nil\n");

        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}()");
    }

    // --- Scope stack ---

    /// Child scopes copy the parent's names down, so the declaration
    /// check only ever consults the top set.
    fn push_scope(&mut self) {
        let scope = match self.scopes.last() {
            Some(parent) => parent.clone(),
            None => HashSet::new(),
        };
        self.scopes.push(scope);
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn is_declared(&self, name: &str) -> bool {
        self.scopes.last().is_some_and(|scope| scope.contains(name))
    }

    fn declare(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string());
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
    }
}

fn is_builtin_print(spin: &SpinExpression) -> bool {
    matches!(&*spin.callee, Expression::Ident(id) if id.value == "print" || id.value == "println")
}
