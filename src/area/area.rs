use pluscode::PlusCode;

use crate::error::Result;
use crate::tile::{Tile, TileSize};

pub(crate) mod sealed {
    use crate::tile::Tile;

    /// Insertion hook implemented by each area variant. Callers go through
    /// [`TileArea::add_tile`](super::TileArea::add_tile), which checks
    /// coverage first.
    pub trait Insert {
        /// Add a tile that is known not to be covered yet.
        fn insert_uncovered(&mut self, tile: Tile);
    }
}

/// An area made up of one or more [`Tile`]s.
///
/// Coverage is monotonic: once a tile has been added, `contains` keeps
/// returning `true` for it and for every tile inside it.
pub trait TileArea: sealed::Insert {
    /// Tiles that together cover exactly this area.
    ///
    /// This is not necessarily the list of tiles that were added; merging
    /// variants may report bigger tiles that were never added themselves.
    fn covering_tiles(&self) -> Vec<Tile>;

    /// Returns `true` if the whole of `tile` lies inside this area.
    fn contains(&self, tile: &Tile) -> bool;

    /// Size of the smallest tile ever added to this area.
    fn smallest_tile_size(&self) -> TileSize;

    /// Add the area of `tile`. Returns `false` if it was already covered.
    fn add_tile(&mut self, tile: Tile) -> bool {
        if self.contains(&tile) { return false }
        self.insert_uncovered(tile);
        true
    }

    /// Add every tile covering `other`.
    fn add_tile_area(&mut self, other: &dyn TileArea) {
        for tile in other.covering_tiles() {
            self.add_tile(tile);
        }
    }

    /// Returns `true` if the area of a full plus code lies inside this area.
    fn contains_code(&self, code: &PlusCode) -> Result<bool> {
        Ok(self.contains(&Tile::from_code(code.clone())?))
    }

    /// Returns `true` if a location lies inside this area.
    ///
    /// The location is resolved at the smallest tile size in the area, so a
    /// point is contained exactly when its enclosing tile is.
    fn contains_lat_lng(&self, latitude: f64, longitude: f64) -> bool {
        Tile::from_lat_lng(latitude, longitude, self.smallest_tile_size())
            .is_ok_and(|tile| self.contains(&tile))
    }
}
