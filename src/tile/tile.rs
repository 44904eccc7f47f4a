use std::fmt;
use std::hash::{Hash, Hasher};

use geo::{Coord, Rect};
use pluscode::{CodeArea, CodeError, PlusCode, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{Result, TileError};
use crate::tile::distance::{digit_distance, Axis};
use crate::tile::TileSize;

/// Unit offsets (lat, lng) to the eight surrounding tiles: NW, N, NE, E, SE, S, SW, W.
const NEIGHBOR_OFFSETS: [(f64, f64); 8] = [
    ( 1.0, -1.0),
    ( 1.0,  0.0),
    ( 1.0,  1.0),
    ( 0.0,  1.0),
    (-1.0,  1.0),
    (-1.0,  0.0),
    (-1.0, -1.0),
    ( 0.0, -1.0),
];

/// Up to eight neighboring tiles.
pub type Neighbors = SmallVec<[Tile; 8]>;

/// A rectangular grid cell at one of the fixed [`TileSize`]s, identified by a
/// truncated plus code (its *address*).
///
/// A tile keeps the full code it was built from, which may be more precise
/// than the tile itself. Equality and hashing only look at size and address.
#[derive(Debug, Clone)]
pub struct Tile {
    /// The full code this tile was built from.
    code: PlusCode,
    size: TileSize,
    /// `code` without separator, truncated to `size.code_length()`.
    address: Box<str>,
    /// Canonical padded code of the whole tile.
    tile_code: PlusCode,
    /// Area of the whole tile.
    area: CodeArea,
}

impl Tile {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Wrap a full plus code at `size`.
    ///
    /// Fails if the code has fewer significant digits than
    /// `size.code_length()` (the code is less precise than the tile).
    pub fn new(code: PlusCode, size: TileSize) -> Result<Self> {
        let digits = code.digits();
        if digits.len() < size.code_length() {
            return Err(TileError::CodeTooCoarse { code: code.code().to_string(), size });
        }

        let address: Box<str> = digits[..size.code_length()].into();
        let tile_code = PlusCode::new(&padded_code(&address))?;
        let area = tile_code.decode()?;

        Ok(Self { code, size, address, tile_code, area })
    }

    /// Wrap a full plus code, inferring the size from its precision.
    ///
    /// Padded codes map to the size of their unpadded prefix; unpadded codes
    /// map to `Neighborhood` (8 digits) or `Pinpoint` (10 digits).
    pub fn from_code(code: PlusCode) -> Result<Self> {
        let digits = code.digits().len();
        let size = TileSize::from_code_length(digits).ok_or(TileError::UnsupportedCodeLength(digits))?;
        Self::new(code, size)
    }

    /// Tile of `size` containing the given location.
    pub fn from_lat_lng(latitude: f64, longitude: f64, size: TileSize) -> Result<Self> {
        let code = PlusCode::encode(latitude, longitude, TileSize::Pinpoint.code_length())?;
        Self::new(code, size)
    }

    /// Tile of `size` containing a lon/lat coordinate (`x` = longitude).
    #[inline]
    pub fn from_coord(coord: Coord<f64>, size: TileSize) -> Result<Self> {
        Self::from_lat_lng(coord.y, coord.x, size)
    }

    /// Parse a plus code string and wrap it at `size`.
    pub fn from_plus_code(code: &str, size: TileSize) -> Result<Self> {
        Self::new(PlusCode::new(code)?, size)
    }

    /// Rebuild a tile from its address (2, 4, 6, 8 or 10 characters).
    pub fn from_address(address: &str) -> Result<Self> {
        if !address.is_ascii() {
            return Err(CodeError::InvalidCode(address.to_string()).into());
        }
        let size = TileSize::from_code_length(address.len())
            .ok_or(TileError::UnsupportedAddressLength(address.len()))?;
        Self::new(PlusCode::new(&padded_code(address))?, size)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline] pub fn size(&self) -> TileSize { self.size }

    /// The full code this tile was built from.
    #[inline] pub fn wrapped_code(&self) -> &PlusCode { &self.code }

    /// Canonical padded code for the whole tile, e.g. `C9000000+` for `C9`.
    #[inline] pub fn tile_geocode(&self) -> &PlusCode { &self.tile_code }

    /// Tile address: the code without separator, truncated to the tile size.
    #[inline] pub fn address(&self) -> &str { &self.address }

    /// Address of the parent tile; empty for `Global` tiles.
    #[inline]
    pub fn address_prefix(&self) -> &str { &self.address[..self.address.len() - 2] }

    /// The tile one size coarser that contains this one.
    pub fn parent(&self) -> Option<Tile> {
        if self.size == TileSize::Global { return None }
        Tile::from_address(self.address_prefix()).ok()
    }

    /// Area of the whole tile.
    #[inline] pub fn area(&self) -> &CodeArea { &self.area }

    /// Center of the tile (`x` = longitude, `y` = latitude).
    #[inline] pub fn center(&self) -> Coord<f64> { self.area.center() }

    /// Bounds of the tile in lon/lat.
    #[inline] pub fn bounds(&self) -> Rect<f64> { self.area.to_rect() }

    // -----------------------------------------------------------------------
    // Relations
    // -----------------------------------------------------------------------

    /// Returns `true` if `other` lies completely within this tile (including
    /// when both are the same tile).
    #[inline]
    pub fn contains(&self, other: &Tile) -> bool { other.address.starts_with(&*self.address) }

    /// Returns `true` if both tiles have the same size and address.
    #[inline]
    pub fn is_same_tile(&self, other: &Tile) -> bool {
        self.size == other.size && self.address == other.address
    }

    /// The distinct same-size tiles around this one.
    ///
    /// Offsets that clip back onto this tile at the poles are dropped, so
    /// polar tiles have fewer than eight neighbors.
    pub fn neighbors(&self) -> Neighbors {
        let increment = self.size.coordinate_increment();
        let center = self.center();

        let mut neighbors = Neighbors::new();
        for (dlat, dlng) in NEIGHBOR_OFFSETS {
            // A decoded center offset by one increment is always finite and encodable.
            let Ok(tile) = Tile::from_lat_lng(center.y + dlat * increment, center.x + dlng * increment, self.size) else {
                continue;
            };
            if !tile.is_same_tile(self) && !neighbors.iter().any(|n| n.is_same_tile(&tile)) {
                neighbors.push(tile);
            }
        }
        neighbors
    }

    /// Returns `true` if the tiles share an edge or a corner.
    ///
    /// Tiles of different sizes are adjacent if the smaller one touches the
    /// bigger one from outside; a tile containing the other is not adjacent.
    pub fn is_neighbor(&self, other: &Tile) -> bool {
        if self.size == other.size {
            return !self.is_same_tile(other)
                && self.neighbors().iter().any(|n| n.is_same_tile(other));
        }

        let (small, big) = if self.size.is_finer_than(other.size) { (self, other) } else { (other, self) };
        if big.contains(small) { return false }
        small.neighbors().iter().any(|n| big.contains(n))
    }

    // -----------------------------------------------------------------------
    // Distance and direction
    // -----------------------------------------------------------------------

    fn check_same_size(&self, other: &Tile) -> Result<()> {
        if self.size != other.size {
            return Err(TileError::SizeMismatch(self.size, other.size));
        }
        Ok(())
    }

    /// Signed (latitude, longitude) distance in tiles from `other` to `self`.
    fn signed_distances(&self, other: &Tile) -> Result<(i64, i64)> {
        self.check_same_size(other)?;
        Ok((
            digit_distance(&self.address, &other.address, Axis::Latitude)?,
            digit_distance(&self.address, &other.address, Axis::Longitude)?,
        ))
    }

    /// Number of tile steps along both axes between two tiles of equal size.
    pub fn manhattan_distance(&self, other: &Tile) -> Result<u64> {
        let (lat, lng) = self.signed_distances(other)?;
        Ok(lat.unsigned_abs() + lng.unsigned_abs())
    }

    /// Number of king moves between two tiles of equal size.
    pub fn chebyshev_distance(&self, other: &Tile) -> Result<u64> {
        let (lat, lng) = self.signed_distances(other)?;
        Ok(lat.unsigned_abs().max(lng.unsigned_abs()))
    }

    /// Rough direction between two tiles of equal size, in radians: `0` is
    /// east, `π/2` north, `±π` west.
    ///
    /// The angle is computed on the tile grid and is not a geodesic bearing.
    pub fn bearing(&self, other: &Tile) -> Result<f64> {
        let (lat, lng) = self.signed_distances(other)?;
        Ok((lat as f64).atan2(lng as f64))
    }
}

/// Reconstruct a full, padded plus code from an ASCII tile address.
fn padded_code(address: &str) -> String {
    let mut code = String::with_capacity(SEPARATOR_POSITION + 3);
    if address.len() > SEPARATOR_POSITION {
        code.push_str(&address[..SEPARATOR_POSITION]);
        code.push(SEPARATOR);
        code.push_str(&address[SEPARATOR_POSITION..]);
    } else {
        code.push_str(address);
        code.extend(std::iter::repeat_n(PADDING_CHARACTER, SEPARATOR_POSITION - address.len()));
        code.push(SEPARATOR);
    }
    code
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool { self.is_same_tile(other) }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let address = String::deserialize(deserializer)?;
        Tile::from_address(&address).map_err(serde::de::Error::custom)
    }
}
