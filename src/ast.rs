//! Abstract Syntax Tree for the Choreo language.
//!
//! Statements and expressions are two disjoint tagged families. Every
//! node carries the token that introduced it, for diagnostics.

use crate::token::Token;

/// A complete program: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Dance(DanceStatement),
    Expr(ExpressionStatement),
    Sway(SwayStatement),
    Start(StartStatement),
    Send(SendStatement),
    If(IfStatement),
    Block(BlockStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Ident(Identifier),
    Int(IntegerLiteral),
    Float(FloatLiteral),
    Str(StringLiteral),
    Bool(BooleanLiteral),
    Infix(InfixExpression),
    Spin(SpinExpression),
    Flow(FlowExpression),
    Match(MatchExpression),
}

/// `dance NAME = VALUE`: declares on first use in a scope,
/// reassigns afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DanceStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

/// `sway VAR from FROM to TO { BODY }`: inclusive integer loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SwayStatement {
    pub token: Token,
    pub variable: Identifier,
    pub from: Expression,
    pub to: Expression,
    pub body: BlockStatement,
}

/// `start STMT`: runs the inner statement as a concurrent task in
/// the emitted program.
#[derive(Debug, Clone, PartialEq)]
pub struct StartStatement {
    pub token: Token,
    pub statement: Box<Statement>,
}

/// `send CHANNEL <- VALUE`
#[derive(Debug, Clone, PartialEq)]
pub struct SendStatement {
    pub token: Token,
    pub channel: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub token: Token,
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

/// A string literal. `value` is the raw inner text; escape sequences
/// are carried through unexpanded.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `spin CALLEE(ARGS...)`: a call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinExpression {
    pub token: Token,
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// `flow CHANNEL_TYPE`: a channel-construction expression. The
/// sub-syntax is parsed as an ordinary expression and interpreted by
/// the emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowExpression {
    pub token: Token,
    pub channel_type: Box<Expression>,
}

/// `match SCRUTINEE { when PATTERN: CONSEQUENCE ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchExpression {
    pub token: Token,
    pub scrutinee: Box<Expression>,
    pub cases: Vec<WhenCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhenCase {
    pub token: Token,
    pub pattern: Expression,
    pub consequence: Expression,
}
