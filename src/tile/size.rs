use std::fmt;

use serde::{Deserialize, Serialize};

/// The five tile granularities, ordered from coarsest to finest.
///
/// Each step refines the previous size by a factor of 20 on both axes, which
/// corresponds to one more digit pair in the tile address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    /// 20° x 20°, up to ~2200km across. Addresses are 2 characters long.
    Global,
    /// 1° x 1°, up to ~110km across. Addresses are 4 characters long.
    Region,
    /// 0.05° x 0.05°, up to ~5.5km across. Addresses are 6 characters long.
    #[default]
    District,
    /// 0.0025° x 0.0025°, up to ~275m across. Addresses are 8 characters long.
    Neighborhood,
    /// 0.000125° x 0.000125°, up to ~14m across. Addresses are 10 characters long.
    Pinpoint,
}

impl TileSize {
    /// All sizes, coarsest first.
    pub const ALL: [TileSize; 5] = [
        TileSize::Global,
        TileSize::Region,
        TileSize::District,
        TileSize::Neighborhood,
        TileSize::Pinpoint,
    ];

    /// Length of a tile address at this size.
    #[inline]
    pub const fn code_length(self) -> usize {
        match self {
            TileSize::Global       => 2,
            TileSize::Region       => 4,
            TileSize::District     => 6,
            TileSize::Neighborhood => 8,
            TileSize::Pinpoint     => 10,
        }
    }

    /// Side length of a tile in degrees (latitude and longitude alike).
    #[inline]
    pub const fn coordinate_increment(self) -> f64 {
        match self {
            TileSize::Global       => 20.0,
            TileSize::Region       => 1.0,
            TileSize::District     => 0.05,
            TileSize::Neighborhood => 0.0025,
            TileSize::Pinpoint     => 0.000125,
        }
    }

    /// The size whose addresses are `code_length` characters long.
    pub fn from_code_length(code_length: usize) -> Option<TileSize> {
        Self::ALL.into_iter().find(|size| size.code_length() == code_length)
    }

    /// Next coarser size, `None` for `Global`.
    pub fn parent(self) -> Option<TileSize> {
        Self::from_code_length(self.code_length().checked_sub(2)?)
    }

    /// Next finer size, `None` for `Pinpoint`.
    pub fn child(self) -> Option<TileSize> {
        Self::from_code_length(self.code_length() + 2)
    }

    /// Returns `true` if tiles of this size are smaller than tiles of `other`.
    #[inline]
    pub fn is_finer_than(self, other: TileSize) -> bool { self.code_length() > other.code_length() }

    pub fn to_str(self) -> &'static str {
        match self {
            TileSize::Global       => "global",
            TileSize::Region       => "region",
            TileSize::District     => "district",
            TileSize::Neighborhood => "neighborhood",
            TileSize::Pinpoint     => "pinpoint",
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
