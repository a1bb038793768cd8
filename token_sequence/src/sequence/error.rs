//! Sequence query failures
use crate::logging::{codes, Code};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a significant-token search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward lower indices
    Backward,
    /// Toward higher indices
    Forward,
}

impl Direction {
    pub const BACKWARD_STEP: isize = -1;
    pub const FORWARD_STEP: isize = 1;

    /// Index delta applied per search step
    pub const fn step(self) -> isize {
        match self {
            Self::Backward => Self::BACKWARD_STEP,
            Self::Forward => Self::FORWARD_STEP,
        }
    }

    /// Preposition used in error messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backward => "before",
            Self::Forward => "after",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error(
        "Index needs to be equal to or greater than \"0\" and less than \"{count}\", but \"{index}\" is not."
    )]
    IndexOutOfBounds { count: usize, index: isize },

    #[error("Could not find a significant token {direction} index \"{index}\".")]
    NoSignificantTokenFound { direction: Direction, index: isize },
}

impl SequenceError {
    /// The index the failed query was made with
    pub fn index(&self) -> isize {
        match self {
            Self::IndexOutOfBounds { index, .. } | Self::NoSignificantTokenFound { index, .. } => {
                *index
            }
        }
    }

    /// Sequence length at the time of an out-of-bounds query
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::IndexOutOfBounds { count, .. } => Some(*count),
            Self::NoSignificantTokenFound { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::NoSignificantTokenFound { direction, .. } => Some(*direction),
            Self::IndexOutOfBounds { .. } => None,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::IndexOutOfBounds { .. } => codes::sequence::INDEX_OUT_OF_BOUNDS,
            Self::NoSignificantTokenFound { .. } => codes::sequence::NO_SIGNIFICANT_TOKEN_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_message() {
        let error = SequenceError::IndexOutOfBounds {
            count: 14,
            index: -1,
        };

        assert_eq!(
            error.to_string(),
            "Index needs to be equal to or greater than \"0\" and less than \"14\", but \"-1\" is not."
        );
        assert_eq!(error.count(), Some(14));
        assert_eq!(error.index(), -1);
        assert_eq!(error.direction(), None);
        assert_eq!(error.error_code().as_str(), "E040");
    }

    #[test]
    fn test_no_significant_token_message() {
        let before = SequenceError::NoSignificantTokenFound {
            direction: Direction::Backward,
            index: 0,
        };
        let after = SequenceError::NoSignificantTokenFound {
            direction: Direction::Forward,
            index: 15,
        };

        assert_eq!(
            before.to_string(),
            "Could not find a significant token before index \"0\"."
        );
        assert_eq!(
            after.to_string(),
            "Could not find a significant token after index \"15\"."
        );
        assert_eq!(after.direction(), Some(Direction::Forward));
        assert_eq!(after.count(), None);
        assert_eq!(after.error_code().as_str(), "E041");
    }

    #[test]
    fn test_direction_steps() {
        assert_eq!(Direction::Backward.step(), -1);
        assert_eq!(Direction::Forward.step(), 1);
    }
}
