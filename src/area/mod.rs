mod area;
mod merging;
mod simple;

pub use area::TileArea;
pub use merging::{MergingTileArea, MAX_SUBTILES_PER_TILE, MIN_SUBTILES_PER_TILE};
pub use simple::SimpleTileArea;
