use pluscode::{digit_index, ENCODING_BASE};

use crate::error::Result;

/// Number of alphabet symbols used by the first longitude digit (360° / 20°).
const LONGITUDE_BANDS: i64 = 18;

/// Axis of a tile address: even characters encode latitude, odd ones longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    #[inline]
    fn offset(self) -> usize {
        match self {
            Axis::Latitude  => 0,
            Axis::Longitude => 1,
        }
    }
}

/// Signed distance, in tiles, between two addresses of equal length along one
/// axis. Positive when `a` lies north (or east) of `b`.
///
/// Digit pairs are accumulated most significant first. The first longitude
/// digit takes the shorter way around the antimeridian.
pub(crate) fn digit_distance(a: &str, b: &str, axis: Axis) -> Result<i64> {
    debug_assert_eq!(a.len(), b.len(), "addresses must have equal length");

    let digits_a = a.chars().skip(axis.offset()).step_by(2);
    let digits_b = b.chars().skip(axis.offset()).step_by(2);

    let mut total = 0i64;
    for (i, (ca, cb)) in digits_a.zip(digits_b).enumerate() {
        let mut diff = digit_index(ca)? as i64 - digit_index(cb)? as i64;
        if i == 0 && axis == Axis::Longitude && diff.abs() > LONGITUDE_BANDS / 2 {
            diff -= LONGITUDE_BANDS * diff.signum();
        }
        total = total * ENCODING_BASE + diff;
    }
    Ok(total)
}
