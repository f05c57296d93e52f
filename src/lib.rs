//! Choreo: a dance-themed toy language that translates to Go.
//!
//! The pipeline is strictly linear: lexer → parser → AST → emitter.
//! The [`Translator`] facade runs it end to end; the individual
//! stages are public for callers that want the token stream or the
//! tree.

pub mod ast;
pub mod emit;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Program;
pub use error::TranslateError;

use emit::emit_program;
use lexer::Lexer;
use parser::Parser;

/// The Choreo translator.
pub struct Translator;

impl Translator {
    /// Parse source text into a [`Program`]. A non-empty diagnostic
    /// list means the tree is untrustworthy, so it is returned as an
    /// error instead of an AST.
    pub fn parse(source: &str) -> Result<Program, TranslateError> {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        let errors = parser.into_errors();
        if errors.is_empty() {
            Ok(program)
        } else {
            Err(TranslateError::new(errors))
        }
    }

    /// Translate source text into Go source.
    pub fn translate(source: &str) -> Result<String, TranslateError> {
        let program = Self::parse(source)?;
        Ok(emit_program(&program))
    }
}
