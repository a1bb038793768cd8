//! Trivia classification
use crate::tokens::{Token, TokenType};
use serde::{Deserialize, Serialize};

/// Token types that carry no syntactic meaning and are skipped by
/// significant-token searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaSet {
    types: Vec<TokenType>,
}

impl TriviaSet {
    pub fn new(types: impl IntoIterator<Item = TokenType>) -> Self {
        let mut set = Self::empty();
        for token_type in types {
            set = set.with(token_type);
        }
        set
    }

    /// A set under which every token is significant
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    pub fn with(mut self, token_type: TokenType) -> Self {
        if !self.types.contains(&token_type) {
            self.types.push(token_type);
        }
        self
    }

    pub fn contains(&self, token_type: TokenType) -> bool {
        self.types.contains(&token_type)
    }

    pub fn is_trivia(&self, token: &Token) -> bool {
        token.is_type(&self.types)
    }

    pub fn types(&self) -> &[TokenType] {
        &self.types
    }
}

impl Default for TriviaSet {
    /// Comments, doc comments and whitespace
    fn default() -> Self {
        Self::new([
            TokenType::Comment,
            TokenType::DocComment,
            TokenType::Whitespace,
        ])
    }
}
