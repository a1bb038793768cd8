//! Token model
//!
//! - [`Token`] is one lexical unit: index, type tag, literal text.
//! - [`TokenType`] is the lexical category; reserved words and multi-character
//!   operators carry a [`Keyword`] or [`Operator`].
//! - [`RawToken`] is what a lexer hands over before units are indexed. It is
//!   either a typed pair or bare text.

pub mod keywords;
pub mod raw;
pub mod token;

pub use keywords::{Keyword, Operator};
pub use raw::RawToken;
pub use token::{Token, TokenType};
