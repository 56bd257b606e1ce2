//! Static reference tables for generated traffic.
//!
//! Locations are the barangays of Manolo Fortich, Bukidnon, each anchored at
//! an approximate base coordinate. Providers are Philippine ISP names. Both
//! tables are fixed for the life of the process and never mutated.

use crate::coordinate::Coordinate;

/// Region and country appended to every generated address.
pub const ADDRESS_SUFFIX: &str = "Manolo Fortich, Bukidnon, Philippines";

/// A named reference point used as the anchor for jittered coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Barangay name, unique within [`LOCATIONS`].
    pub name: &'static str,
    /// Base coordinate before jitter.
    pub coordinate: Coordinate,
}

impl Location {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            coordinate: Coordinate {
                latitude,
                longitude,
            },
        }
    }
}

/// Barangays with approximate coordinates.
pub static LOCATIONS: [Location; 10] = [
    Location::new("Poblacion", 8.3667, 124.8667),
    Location::new("Dalirig", 8.3750, 124.8750),
    Location::new("San Miguel", 8.3500, 124.8500),
    Location::new("Dahilayan", 8.3900, 124.9000),
    Location::new("Lindaban", 8.3550, 124.8600),
    Location::new("Tankulan", 8.3800, 124.8800),
    Location::new("Maluko", 8.3600, 124.8700),
    Location::new("Mambatangan", 8.3700, 124.8900),
    Location::new("Kalugmanan", 8.3450, 124.8550),
    Location::new("Sankanan", 8.3850, 124.8650),
];

/// Philippine ISP names.
pub static PROVIDERS: [&str; 13] = [
    "PLDT",
    "Globe Telecom",
    "Converge ICT",
    "Sky Broadband",
    "DITO Telecommunity",
    "Starlink",
    "Eastern Communications",
    "RISE",
    "Asian Vision",
    "Infinivan",
    "Air Cable",
    "Cablelink",
    "Bayan Telecommunications",
];

/// Looks up a location by exact name.
///
/// # Example
///
/// ```
/// use traffic_data::find_location;
///
/// let location = find_location("Dahilayan").expect("known barangay");
/// assert_eq!(location.coordinate.longitude, 124.9);
/// assert!(find_location("Atlantis").is_none());
/// ```
#[must_use]
pub fn find_location(name: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|location| location.name == name)
}

/// Returns `true` if `name` is one of the [`PROVIDERS`].
#[must_use]
pub fn is_known_provider(name: &str) -> bool {
    PROVIDERS.contains(&name)
}

/// Formats the human-readable address for a location name.
///
/// # Example
///
/// ```
/// use traffic_data::format_address;
///
/// assert_eq!(
///     format_address("Poblacion"),
///     "Poblacion, Manolo Fortich, Bukidnon, Philippines"
/// );
/// ```
#[must_use]
pub fn format_address(location_name: &str) -> String {
    format!("{location_name}, {ADDRESS_SUFFIX}")
}
