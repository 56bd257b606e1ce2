//! Coordinate jitter and rounding.

use rand::Rng;

/// Default jitter span in degrees; each axis moves by at most half of it.
pub const DEFAULT_VARIANCE: f64 = 0.02;

/// Decimal places kept for serialized coordinates.
pub const COORDINATE_PLACES: i32 = 6;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Offsets each axis of `base` by an independent uniform draw over
/// `[-variance / 2, variance / 2)`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use traffic_data::{Coordinate, jitter};
///
/// let base = Coordinate { latitude: 8.3667, longitude: 124.8667 };
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let moved = jitter(base, 0.02, &mut rng);
///
/// assert!((moved.latitude - base.latitude).abs() <= 0.010_000_1);
/// assert!((moved.longitude - base.longitude).abs() <= 0.010_000_1);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "jitter is defined in floating-point degrees"
)]
pub fn jitter<R>(base: Coordinate, variance: f64, rng: &mut R) -> Coordinate
where
    R: Rng + ?Sized,
{
    let lat_offset = (rng.random::<f64>() - 0.5) * variance;
    let lng_offset = (rng.random::<f64>() - 0.5) * variance;
    Coordinate {
        latitude: base.latitude + lat_offset,
        longitude: base.longitude + lng_offset,
    }
}

/// Rounds `value` half away from zero to `places` decimal places.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

impl Coordinate {
    /// Returns the coordinate rounded to [`COORDINATE_PLACES`].
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            latitude: round_to_places(self.latitude, COORDINATE_PLACES),
            longitude: round_to_places(self.longitude, COORDINATE_PLACES),
        }
    }
}
