mod distance;
mod size;
mod tile;

pub use size::TileSize;
pub use tile::{Neighbors, Tile};
