//! Lexical analysis
//!
//! Sequences are built from the raw units a [`Lexer`] returns. The crate
//! ships [`PhpLexer`]; any other tokenizer can be plugged in by implementing
//! the trait, and closures of the right shape implement it already.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::RawToken;

pub use analyzer::{LexerError, LexicalMetrics, PhpLexer};

/// Turns source text into an ordered list of raw units
pub trait Lexer {
    type Error: std::error::Error;

    fn tokenize(&mut self, source: &str) -> Result<Vec<RawToken>, Self::Error>;
}

impl<F, E> Lexer for F
where
    F: FnMut(&str) -> Result<Vec<RawToken>, E>,
    E: std::error::Error,
{
    type Error = E;

    fn tokenize(&mut self, source: &str) -> Result<Vec<RawToken>, E> {
        self(source)
    }
}

/// Tokenize PHP source with default preferences
pub fn tokenize(source: &str) -> Result<Vec<RawToken>, LexerError> {
    PhpLexer::new().tokenize_source(source)
}

/// Create lexer with custom runtime preferences
pub fn create_lexer_with_preferences(preferences: LexicalPreferences) -> PhpLexer {
    PhpLexer::with_preferences(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenType;

    #[derive(Debug, thiserror::Error)]
    #[error("refused")]
    struct Refused;

    #[test]
    fn test_closure_lexer() {
        let mut lexer = |source: &str| -> Result<Vec<RawToken>, Refused> {
            Ok(source.split(' ').map(RawToken::bare).collect())
        };

        let tokens = lexer.tokenize("a b").unwrap();
        assert_eq!(tokens, [RawToken::bare("a"), RawToken::bare("b")]);
    }

    #[test]
    fn test_module_tokenize() {
        let tokens = tokenize("<?php echo 1;").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].token_type(), Some(TokenType::IntegerLiteral));
    }
}
