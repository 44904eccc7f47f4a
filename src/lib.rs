#![doc = "Hierarchical tiles on top of Open Location Codes"]
//!
//! A [`Tile`] is a plus code truncated to one of five [`TileSize`]s, from
//! 20° x 20° down to 0.000125° x 0.000125°. Tiles can be compared, checked
//! for adjacency, measured against each other, and collected into a
//! [`TileArea`]. [`MergingTileArea`] keeps its tile list compact by replacing
//! complete groups of siblings with their parent, and [`PolygonRasterizer`]
//! fills a polygon with tiles.
mod area;
mod error;
mod raster;
mod tile;

#[doc(inline)]
pub use tile::{Neighbors, Tile, TileSize};

#[doc(inline)]
pub use area::{MergingTileArea, SimpleTileArea, TileArea, MAX_SUBTILES_PER_TILE, MIN_SUBTILES_PER_TILE};

#[doc(inline)]
pub use raster::{PolygonRasterizer, RasterOptions};

pub use error::{Result, TileError};

pub use pluscode;
pub use pluscode::{CodeArea, PlusCode};
