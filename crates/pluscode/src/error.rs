use thiserror::Error;

/// Errors raised while parsing, encoding or decoding a plus code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The string is not a valid plus code.
    #[error("invalid plus code: {0:?}")]
    InvalidCode(String),

    /// The operation needs a full code but was given a short one.
    #[error("not a full plus code: {0:?}")]
    NotFull(String),

    /// Requested code length cannot be encoded.
    #[error("invalid code length: {0}")]
    InvalidLength(usize),

    /// Character outside of the 20-symbol alphabet.
    #[error("character {0:?} is not part of the plus code alphabet")]
    InvalidCharacter(char),
}
