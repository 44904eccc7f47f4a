use pluscode::CodeError;
use thiserror::Error;

use crate::tile::TileSize;

/// Errors raised by tile construction and tile algebra.
///
/// Every variant describes an invalid argument supplied by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    /// The requested tile size is finer than the code's precision (its
    /// padding, or its digit count for unpadded codes).
    #[error("plus code {code:?} is too coarse for tile size {size}")]
    CodeTooCoarse { code: String, size: TileSize },

    /// Tile addresses are 2, 4, 6, 8 or 10 characters long.
    #[error("unsupported tile address length {0}")]
    UnsupportedAddressLength(usize),

    /// No tile size matches the number of digits in a code.
    #[error("no tile size has a code length of {0}")]
    UnsupportedCodeLength(usize),

    /// Distance and bearing are only defined between tiles of the same size.
    #[error("tile sizes don't match: {0} vs {1}")]
    SizeMismatch(TileSize, TileSize),

    /// The codec rejected a code, character or length.
    #[error(transparent)]
    Code(#[from] CodeError),
}

pub type Result<T, E = TileError> = std::result::Result<T, E>;
