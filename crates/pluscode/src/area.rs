use geo::{Coord, Rect};

use crate::{LATITUDE_MAX, LONGITUDE_MAX};

/// The rectangle covered by a decoded plus code, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeArea {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    /// Number of significant digits in the decoded code.
    pub code_length: usize,
}

impl CodeArea {
    /// Latitude of the area's center, never above the north pole.
    #[inline]
    pub fn center_latitude(&self) -> f64 {
        (self.south + (self.north - self.south) / 2.0).min(LATITUDE_MAX)
    }

    /// Longitude of the area's center, never beyond the antimeridian.
    #[inline]
    pub fn center_longitude(&self) -> f64 {
        (self.west + (self.east - self.west) / 2.0).min(LONGITUDE_MAX)
    }

    /// Center as a lon/lat coordinate (`x` = longitude, `y` = latitude).
    #[inline]
    pub fn center(&self) -> Coord<f64> {
        Coord { x: self.center_longitude(), y: self.center_latitude() }
    }

    /// Bounds as a lon/lat rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.west, y: self.south },
            Coord { x: self.east, y: self.north },
        )
    }
}
