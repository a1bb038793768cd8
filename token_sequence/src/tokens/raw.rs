//! Raw lexical units as produced by a lexer
use crate::tokens::token::TokenType;
use serde::{Deserialize, Serialize};

/// A unit before it has been placed in a sequence.
///
/// Lexers report most units with a type tag. Simple punctuation may arrive
/// as bare text, which becomes an identifier-typed token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawToken {
    Typed { token_type: TokenType, text: String },
    Bare(String),
}

impl RawToken {
    pub fn typed(token_type: TokenType, text: impl Into<String>) -> Self {
        Self::Typed {
            token_type,
            text: text.into(),
        }
    }

    pub fn bare(text: impl Into<String>) -> Self {
        Self::Bare(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Typed { text, .. } | Self::Bare(text) => text,
        }
    }

    /// Explicit type tag, if the lexer supplied one
    pub fn token_type(&self) -> Option<TokenType> {
        match self {
            Self::Typed { token_type, .. } => Some(*token_type),
            Self::Bare(_) => None,
        }
    }
}

impl From<(TokenType, &str)> for RawToken {
    fn from((token_type, text): (TokenType, &str)) -> Self {
        Self::typed(token_type, text)
    }
}

impl From<&str> for RawToken {
    fn from(text: &str) -> Self {
        Self::bare(text)
    }
}
