use serde::{Deserialize, Serialize};

use crate::area::MergingTileArea;
use crate::tile::TileSize;

/// Settings for a polygon rasterization run.
///
/// Missing fields fall back to their defaults when deserializing, so `{}` is
/// a valid configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Size of the tiles the polygon is filled with.
    pub precision: TileSize,
    /// Tiles of this size or bigger are not merged any further (`None` = no cap).
    pub max_tile_size: Option<TileSize>,
    /// Group size that triggers a merge (`None` = complete groups of 400).
    pub subtiles_per_tile: Option<usize>,
}

impl RasterOptions {
    /// An empty area configured with these options.
    pub(crate) fn new_area(&self) -> MergingTileArea {
        let mut area = MergingTileArea::new();
        if let Some(max_tile_size) = self.max_tile_size {
            area = area.with_max_tile_size(max_tile_size);
        }
        if let Some(subtiles_per_tile) = self.subtiles_per_tile {
            area = area.with_subtiles_per_tile(subtiles_per_tile);
        }
        area
    }
}
