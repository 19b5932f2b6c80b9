use thiserror::Error;

/// Errors from parsing a textual hand.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseHandError {
    /// A comma separated token wasn't 2 or 3 characters after trimming.
    #[error("Invalid card token: {0:?}")]
    InvalidToken(String),

    /// The rank character wasn't one of 2-9, T, J, Q, K, A or 1.
    #[error("Invalid rank character: {0:?}")]
    InvalidRankChar(char),

    /// The suit character wasn't one of D, S, C or H.
    #[error("Invalid suit character: {0:?}")]
    InvalidSuitChar(char),

    /// The input didn't contain exactly five cards.
    #[error("Expected five cards, got {0}")]
    InvalidCardCount(usize),
}
