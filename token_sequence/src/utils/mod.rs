//! Shared primitive types used by the lexer and logging.

pub mod span;

pub use span::{Position, Span};
