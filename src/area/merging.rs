use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::area::area::sealed::Insert;
use crate::area::TileArea;
use crate::tile::{Tile, TileSize};

/// Lower bound for `subtiles_per_tile`; 0 or 1 would turn every insertion
/// into a global tile straight away.
pub const MIN_SUBTILES_PER_TILE: usize = 2;

/// Upper bound for `subtiles_per_tile`: a complete 20 x 20 group.
pub const MAX_SUBTILES_PER_TILE: usize = 400;

/// A tile area that replaces groups of sibling tiles by their parent.
///
/// Tiles are indexed by address prefix, i.e. by the address of their parent.
/// Once a group reaches `subtiles_per_tile` members, it is removed and the
/// parent tile is inserted instead, which may complete a group one level up.
/// Global tiles share the empty prefix and never merge.
#[derive(Debug, Clone)]
pub struct MergingTileArea {
    /// Sibling lists keyed by the address of the tile they would merge into.
    tiles: AHashMap<Box<str>, Vec<Tile>>,
    smallest_tile_size: TileSize,
    subtiles_per_tile: usize,
    /// Tiles of this size or bigger are never merged further.
    max_tile_size: TileSize,
}

impl MergingTileArea {
    /// An empty area that merges only complete groups of 400 tiles.
    pub fn new() -> Self {
        Self {
            tiles: AHashMap::new(),
            smallest_tile_size: TileSize::Global,
            subtiles_per_tile: MAX_SUBTILES_PER_TILE,
            max_tile_size: TileSize::Global,
        }
    }

    /// Build an area from `tiles`, merging as they are added.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut area = Self::new();
        tiles.into_iter().for_each(|tile| { area.add_tile(tile); });
        area
    }

    /// Merge a group as soon as it has `subtiles_per_tile` members, clamped
    /// to `[2, 400]`. Values below 400 make the area grow beyond the tiles
    /// actually added.
    pub fn with_subtiles_per_tile(mut self, subtiles_per_tile: usize) -> Self {
        self.subtiles_per_tile = subtiles_per_tile.clamp(MIN_SUBTILES_PER_TILE, MAX_SUBTILES_PER_TILE);
        self
    }

    /// Stop merging once tiles reach `max_tile_size`.
    pub fn with_max_tile_size(mut self, max_tile_size: TileSize) -> Self {
        self.max_tile_size = max_tile_size;
        self
    }

    #[inline] pub fn subtiles_per_tile(&self) -> usize { self.subtiles_per_tile }

    #[inline] pub fn max_tile_size(&self) -> TileSize { self.max_tile_size }

    /// Number of covering tiles.
    pub fn len(&self) -> usize { self.tiles.values().map(Vec::len).sum() }

    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// Covering tiles of exactly `size`.
    pub fn tiles_for_precision(&self, size: TileSize) -> Vec<Tile> {
        self.tiles.values()
            .flatten()
            .filter(|tile| tile.size() == size)
            .cloned()
            .collect()
    }

    /// Iterator over the covering tiles, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.values().flatten()
    }
}

impl Default for MergingTileArea {
    fn default() -> Self { Self::new() }
}

impl Insert for MergingTileArea {
    fn insert_uncovered(&mut self, tile: Tile) {
        let mut tile = tile;
        loop {
            if tile.size().is_finer_than(self.smallest_tile_size) {
                self.smallest_tile_size = tile.size();
            }

            let key: Box<str> = tile.address_prefix().into();
            // Global is the coarsest size, so global tiles are always at the cap.
            let at_cap = tile.size().code_length() <= self.max_tile_size.code_length();

            let mut group = match self.tiles.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(vec![tile]);
                    return;
                }
                Entry::Occupied(group) => group,
            };

            // A tile that completes its group is replaced by the parent. The
            // parent cannot be covered yet, otherwise the tile itself would have been.
            let completes_group = !at_cap && group.get().len() >= self.subtiles_per_tile - 1;
            let parent = if completes_group { tile.parent() } else { None };
            let Some(parent) = parent else {
                group.get_mut().push(tile);
                return;
            };
            let (prefix, _) = group.remove_entry();
            log::trace!("merged {} tiles into {prefix}", self.subtiles_per_tile);
            tile = parent;
        }
    }
}

impl TileArea for MergingTileArea {
    fn covering_tiles(&self) -> Vec<Tile> { self.iter().cloned().collect() }

    /// Walks the ancestors of `tile` from its parent up to the global level and
    /// checks each sibling list found on the way.
    fn contains(&self, tile: &Tile) -> bool {
        let address = tile.address();
        (0..address.len()).step_by(2).rev().any(|end| {
            self.tiles.get(&address[..end])
                .is_some_and(|group| group.iter().any(|member| member.contains(tile)))
        })
    }

    fn smallest_tile_size(&self) -> TileSize { self.smallest_tile_size }
}
