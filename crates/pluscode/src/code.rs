use std::fmt;
use std::str::FromStr;

use crate::{codec, CodeArea, CodeError, PADDING_CHARACTER, SEPARATOR};

/// A full plus code, stored in upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlusCode(String);

impl PlusCode {
    /// Parse `code`, which must be a full code of at most ten digits.
    pub fn new(code: &str) -> Result<Self, CodeError> {
        codec::check_full(code)?;
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Encode a location at `code_length` digits.
    pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<Self, CodeError> {
        codec::encode(latitude, longitude, code_length).map(Self)
    }

    /// The code as text, including separator and padding.
    #[inline] pub fn code(&self) -> &str { &self.0 }

    /// The significant digits, without separator or padding.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER).collect()
    }

    /// Decode the area covered by this code.
    pub fn decode(&self) -> Result<CodeArea, CodeError> { codec::decode(&self.0) }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlusCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::new(s) }
}

impl AsRef<str> for PlusCode {
    fn as_ref(&self) -> &str { &self.0 }
}
