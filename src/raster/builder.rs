use geo::{Coord, Polygon, Rect};

use crate::area::{MergingTileArea, TileArea};
use crate::error::Result;
use crate::raster::RasterOptions;
use crate::tile::{Tile, TileSize};

use pluscode::{LATITUDE_MAX, LONGITUDE_MAX};

/// Slack for row and column counts, absorbing float noise in spans that are
/// whole multiples of the increment.
const STEP_EPSILON: f64 = 1e-9;

/// Fills a closed polygon with tiles of a fixed size, using a scanline
/// sweep, and collects them in a [`MergingTileArea`].
///
/// Vertices are lon/lat coordinates (`x` = longitude, `y` = latitude). The
/// polygon is closed implicitly and is not checked for self-intersection.
///
/// ```
/// use geo::coord;
/// use opengeotiling::{PolygonRasterizer, TileArea, TileSize};
///
/// let area = PolygonRasterizer::new()
///     .set_precision(TileSize::District)
///     .set_coordinates_list([
///         coord! { x: 0.0, y: 0.0 },
///         coord! { x: 1.0, y: 0.0 },
///         coord! { x: 1.0, y: 1.0 },
///         coord! { x: 0.0, y: 1.0 },
///     ])
///     .build()
///     .unwrap();
/// assert!(area.contains_lat_lng(0.5, 0.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonRasterizer {
    options: RasterOptions,
    /// Valid vertices, `None` until a vertex list has been set.
    vertices: Option<Vec<Coord<f64>>>,
    /// Bounds of `vertices`.
    bounds: Option<Rect<f64>>,
}

impl PolygonRasterizer {
    pub fn new() -> Self { Self::default() }

    /// Start from a full set of options.
    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    /// Size of the tiles the polygon is filled with.
    pub fn set_precision(mut self, precision: TileSize) -> Self {
        self.options.precision = precision;
        self
    }

    /// Stop merging tiles once they reach `max_tile_size`.
    pub fn set_maximum_tile_size(mut self, max_tile_size: TileSize) -> Self {
        self.options.max_tile_size = Some(max_tile_size);
        self
    }

    /// Set the polygon vertices. Vertices outside `[-90, 90]` latitude or
    /// `[-180, 180]` longitude are dropped.
    pub fn set_coordinates_list(mut self, coordinates: impl IntoIterator<Item = Coord<f64>>) -> Self {
        let vertices: Vec<Coord<f64>> = coordinates.into_iter()
            .filter(|c| (-LATITUDE_MAX..=LATITUDE_MAX).contains(&c.y)
                && (-LONGITUDE_MAX..=LONGITUDE_MAX).contains(&c.x))
            .collect();

        self.bounds = vertices.iter().copied()
            .map(|c| Rect::new(c, c))
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ));
        self.vertices = Some(vertices);
        self
    }

    /// Use the exterior ring of `polygon` as vertex list. Interiors are ignored.
    pub fn set_polygon(self, polygon: &Polygon<f64>) -> Self {
        let ring = &polygon.exterior().0;
        let open = match (ring.first(), ring.last()) {
            (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
            _ => &ring[..],
        };
        self.set_coordinates_list(open.iter().copied())
    }

    #[inline] pub fn options(&self) -> &RasterOptions { &self.options }

    /// Returns `true` if [`build`](Self::build) would produce an area: a
    /// vertex list has been set and at least three of its vertices are valid.
    pub fn is_valid(&self) -> bool {
        self.vertices.as_ref().is_some_and(|vertices| vertices.len() > 2)
    }

    /// Rasterize the polygon. Returns `None` if the builder is not valid.
    pub fn build(&self) -> Option<MergingTileArea> {
        let (Some(vertices), Some(bounds)) = (self.vertices.as_deref(), self.bounds) else {
            log::debug!("no vertex list set, nothing to rasterize");
            return None;
        };
        if vertices.len() < 3 {
            log::debug!("only {} valid vertices, nothing to rasterize", vertices.len());
            return None;
        }

        match self.rasterize(vertices, bounds) {
            Ok(area) => Some(area),
            Err(err) => {
                log::warn!("rasterization failed: {err}");
                None
            }
        }
    }

    fn rasterize(&self, vertices: &[Coord<f64>], bounds: Rect<f64>) -> Result<MergingTileArea> {
        let precision = self.options.precision;
        let increment = precision.coordinate_increment();
        let mut area = self.options.new_area();

        // Scan from one tile below the first tile's center to one tile above
        // the last one, but never inside the polygon's own bounds.
        let first = Tile::from_coord(bounds.min(), precision)?.center();
        let last = Tile::from_coord(bounds.max(), precision)?.center();
        let min = Coord { x: (first.x - increment).min(bounds.min().x), y: (first.y - increment).min(bounds.min().y) };
        let max = Coord { x: (last.x + increment).max(bounds.max().x), y: (last.y + increment).max(bounds.max().y) };

        let rows = steps(min.y, max.y, increment);
        log::debug!(
            "rasterizing {} vertices at {precision}: lat {}..{}, lng {}..{}, {rows} scanlines",
            vertices.len(), min.y, max.y, min.x, max.x,
        );

        let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
        for row in 0..rows {
            let latitude = min.y + row as f64 * increment;
            scanline_crossings(vertices, latitude, &mut crossings);

            for span in crossings.chunks_exact(2) {
                let (start, end) = (span[0], span[1]);
                if start >= max.x { break }
                if end <= min.x { continue }

                let (start, end) = (start.max(min.x), end.min(max.x));
                for column in 0..steps(start, end, increment) {
                    let longitude = start + column as f64 * increment;
                    area.add_tile(Tile::from_lat_lng(latitude, longitude, precision)?);
                }
            }
        }

        log::debug!("rasterized into {} covering tiles", area.len());
        Ok(area)
    }
}

/// Sorted longitudes where the edges of the polygon cross `latitude`.
///
/// Only edges with one vertex strictly above and the other strictly below the
/// scanline count, so vertices lying on it are skipped.
fn scanline_crossings(vertices: &[Coord<f64>], latitude: f64, crossings: &mut Vec<f64>) {
    crossings.clear();

    let mut j = vertices.len() - 1;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[j];
        if (a.y < latitude && b.y > latitude) || (a.y > latitude && b.y < latitude) {
            crossings.push(a.x + (latitude - a.y) / (b.y - a.y) * (b.x - a.x));
        }
        j = i;
    }

    crossings.sort_by(f64::total_cmp);
}

/// Number of increments needed to walk from `start` up to (excluding) `end`.
#[inline]
fn steps(start: f64, end: f64, increment: f64) -> usize {
    if end <= start { return 0 }
    ((end - start) / increment - STEP_EPSILON).ceil().max(1.0) as usize
}
