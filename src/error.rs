//! Error types for the translator.

use std::fmt;

/// Returned when a source text cannot be translated. Carries every
/// diagnostic the parser accumulated, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateError {
    pub diagnostics: Vec<String>,
}

impl TranslateError {
    pub fn new(diagnostics: Vec<String>) -> Self {
        Self { diagnostics }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse errors:")?;
        for diagnostic in &self.diagnostics {
            write!(f, "\n  {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TranslateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_diagnostic() {
        let err = TranslateError::new(vec!["first problem".to_string(), "second".to_string()]);
        assert_eq!(err.to_string(), "parse errors:\n  first problem\n  second");
    }
}
