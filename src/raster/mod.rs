mod builder;
mod options;

pub use builder::PolygonRasterizer;
pub use options::RasterOptions;
