//! Token sequences and significant-token search

pub mod error;
#[allow(clippy::module_inception)]
pub mod sequence;
pub mod trivia;

pub use error::{Direction, SequenceError};
pub use sequence::{Sequence, SequenceBuilder};
pub use trivia::TriviaSet;
