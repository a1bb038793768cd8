//! Token value type
//!
//! A token is one lexical unit at a fixed position in its owning sequence.
//! It carries its index, a type tag, and the literal source text. Tokens are
//! immutable once built and hold no reference back to the sequence.
use crate::tokens::keywords::{Keyword, Operator};
use crate::tokens::raw::RawToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === TEMPLATE BOUNDARIES ===
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    InlineHtml,

    // === TRIVIA ===
    Whitespace,
    Comment,
    DocComment,

    // === NAMES ===
    Variable,
    /// Names and any unit the lexer emitted without an explicit type
    Identifier,
    NsSeparator,

    // === LITERALS ===
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,

    // === RESERVED WORDS AND OPERATORS ===
    Keyword(Keyword),
    Operator(Operator),
}

impl TokenType {
    /// Stable tokenizer-style name used in logs and `Display`
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenTag => "T_OPEN_TAG",
            Self::OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
            Self::CloseTag => "T_CLOSE_TAG",
            Self::InlineHtml => "T_INLINE_HTML",
            Self::Whitespace => "T_WHITESPACE",
            Self::Comment => "T_COMMENT",
            Self::DocComment => "T_DOC_COMMENT",
            Self::Variable => "T_VARIABLE",
            Self::Identifier => "T_STRING",
            Self::NsSeparator => "T_NS_SEPARATOR",
            Self::StringLiteral => "T_CONSTANT_ENCAPSED_STRING",
            Self::IntegerLiteral => "T_LNUMBER",
            Self::FloatLiteral => "T_DNUMBER",
            Self::Keyword(keyword) => keyword.name(),
            Self::Operator(operator) => operator.name(),
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    pub fn as_keyword(self) -> Option<Keyword> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn as_operator(self) -> Option<Operator> {
        match self {
            Self::Operator(operator) => Some(operator),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Keyword> for TokenType {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Operator> for TokenType {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

/// One lexical unit at a fixed index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    index: usize,
    token_type: TokenType,
    content: String,
}

impl Token {
    /// Build a token with an explicit type
    pub fn from_type_and_content(
        index: usize,
        token_type: TokenType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            index,
            token_type,
            content: content.into(),
        }
    }

    /// Build a token from a bare unit; it receives the identifier type
    pub fn from_string(index: usize, content: impl Into<String>) -> Self {
        Self::from_type_and_content(index, TokenType::Identifier, content)
    }

    /// Build a token from either shape of raw unit
    pub fn from_value(index: usize, value: RawToken) -> Self {
        match value {
            RawToken::Typed { token_type, text } => {
                Self::from_type_and_content(index, token_type, text)
            }
            RawToken::Bare(text) => Self::from_string(index, text),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True if the type equals any of `types`; an empty slice never matches
    pub fn is_type(&self, types: &[TokenType]) -> bool {
        types.contains(&self.token_type)
    }

    /// True if the content equals any of `contents` exactly
    pub fn is_content(&self, contents: &[&str]) -> bool {
        contents.iter().any(|candidate| *candidate == self.content)
    }

    /// Check if this token is a specific reserved word
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.token_type.as_keyword() == Some(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {:?}",
            self.index,
            self.token_type.name(),
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_and_content() {
        let token = Token::from_type_and_content(3, TokenType::Keyword(Keyword::Class), "class");

        assert_eq!(token.index(), 3);
        assert_eq!(token.token_type(), TokenType::Keyword(Keyword::Class));
        assert_eq!(token.content(), "class");
    }

    #[test]
    fn test_from_string_uses_identifier_type() {
        let token = Token::from_string(0, ";");

        assert_eq!(token.token_type(), TokenType::Identifier);
        assert_eq!(token.content(), ";");
    }

    #[test]
    fn test_from_value_dispatches_on_shape() {
        let typed = Token::from_value(1, RawToken::typed(TokenType::Whitespace, "\n"));
        let bare = Token::from_value(2, RawToken::bare("{"));

        assert_eq!(
            typed,
            Token::from_type_and_content(1, TokenType::Whitespace, "\n")
        );
        assert_eq!(bare, Token::from_string(2, "{"));
    }

    #[test]
    fn test_empty_content_is_allowed() {
        let token = Token::from_type_and_content(0, TokenType::InlineHtml, "");
        assert_eq!(token.content(), "");
        assert!(token.is_content(&[""]));
    }

    #[test]
    fn test_is_type() {
        let token = Token::from_type_and_content(0, TokenType::Comment, "// hi");

        assert!(token.is_type(&[TokenType::Comment]));
        assert!(token.is_type(&[TokenType::Whitespace, TokenType::Comment]));
        assert!(!token.is_type(&[TokenType::DocComment]));
        assert!(!token.is_type(&[]));
    }

    #[test]
    fn test_is_content_is_exact() {
        let token = Token::from_string(0, "Foo");

        assert!(token.is_content(&["Foo"]));
        assert!(token.is_content(&["bar", "Foo"]));
        assert!(!token.is_content(&["foo"]));
        assert!(!token.is_content(&[]));
    }

    #[test]
    fn test_display_and_names() {
        let token = Token::from_type_and_content(5, TokenType::Operator(Operator::DoubleColon), "::");
        assert_eq!(token.to_string(), "#5 T_DOUBLE_COLON \"::\"");
        assert_eq!(TokenType::Identifier.name(), "T_STRING");
        assert!(token.token_type().as_operator().is_some());
    }
}
