//! Immutable token sequences with significant-token lookup
//!
//! A [`Sequence`] wraps the ordered raw units of a lexed source as indexed
//! [`Token`]s, trivia included, and answers bounds-checked access plus
//! "nearest significant token before/after" queries.
//!
//! ```ignore
//! let sequence = token_sequence::Sequence::from_source("<?php\n\nnamespace Foo;\n\nclass Bar \n{\n}")?;
//! assert_eq!(sequence.significant_before(7)?.content(), ";");
//! ```

#[macro_use]
pub mod logging;
pub mod config;
pub mod lexical;
pub mod sequence;
pub mod tokens;
pub mod utils;

pub use lexical::{Lexer, LexerError, LexicalMetrics, PhpLexer};
pub use sequence::{Direction, Sequence, SequenceBuilder, SequenceError, TriviaSet};
pub use tokens::{Keyword, Operator, RawToken, Token, TokenType};
