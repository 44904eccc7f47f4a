use crate::area::area::sealed::Insert;
use crate::area::TileArea;
use crate::tile::{Tile, TileSize};

/// A tile area that keeps every added tile as-is.
#[derive(Debug, Clone)]
pub struct SimpleTileArea {
    tiles: Vec<Tile>,
    smallest_tile_size: TileSize,
}

impl SimpleTileArea {
    pub fn new() -> Self {
        Self { tiles: Vec::new(), smallest_tile_size: TileSize::Global }
    }

    /// Build an area from `tiles`, skipping tiles that are already covered.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut area = Self::new();
        tiles.into_iter().for_each(|tile| { area.add_tile(tile); });
        area
    }

    #[inline] pub fn len(&self) -> usize { self.tiles.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// The stored tiles, in insertion order.
    #[inline] pub fn tiles(&self) -> &[Tile] { &self.tiles }
}

impl Default for SimpleTileArea {
    fn default() -> Self { Self::new() }
}

impl Insert for SimpleTileArea {
    fn insert_uncovered(&mut self, tile: Tile) {
        if tile.size().is_finer_than(self.smallest_tile_size) {
            self.smallest_tile_size = tile.size();
        }
        self.tiles.push(tile);
    }
}

impl TileArea for SimpleTileArea {
    fn covering_tiles(&self) -> Vec<Tile> { self.tiles.clone() }

    fn contains(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|member| member.contains(tile))
    }

    fn smallest_tile_size(&self) -> TileSize { self.smallest_tile_size }
}
