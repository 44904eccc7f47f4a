//! Open Location Code ("Plus Code") encoding and decoding for tile addressing.
//!
//! Only full codes of up to ten digits (the pair section) are handled:
//! checking that a code is full, encoding a latitude/longitude pair at 2, 4,
//! 6, 8 or 10 digits, and decoding a full code back into the area it covers.

pub mod area;
pub mod code;
pub mod codec;
pub mod error;

pub use area::CodeArea;
pub use code::PlusCode;
pub use codec::{decode, digit_index, encode, is_full};
pub use error::CodeError;

/// The 20 symbols used for digits, ordered by value.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Number base of every digit.
pub const ENCODING_BASE: i64 = 20;

/// Separator between the first eight digits and the rest of the code.
pub const SEPARATOR: char = '+';

/// Position of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad codes shorter than the separator position.
pub const PADDING_CHARACTER: char = '0';

/// Longest supported code, in digits (separator and padding excluded).
pub const MAX_DIGIT_COUNT: usize = 10;

pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Integer units per degree at ten digits, on both axes.
pub(crate) const UNITS_PER_DEGREE: i64 = 8000;
