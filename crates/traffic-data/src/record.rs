//! Generated traffic record type.
//!
//! Field order in [`TrafficRecord`] is the order fields appear in the JSON
//! output consumed by the dashboard.

use std::net::Ipv4Addr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single synthetic portal visit.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use traffic_data::TrafficRecord;
///
/// let record = TrafficRecord {
///     ip_address: "192.168.4.20".parse().expect("ip"),
///     isp_provider: "PLDT".to_owned(),
///     barangay: "Poblacion".to_owned(),
///     latitude: 8.366_7,
///     longitude: 124.866_7,
///     address: "Poblacion, Manolo Fortich, Bukidnon, Philippines".to_owned(),
///     timestamp: NaiveDate::from_ymd_opt(2026, 3, 1)
///         .and_then(|date| date.and_hms_micro_opt(9, 5, 0, 120))
///         .expect("timestamp"),
/// };
///
/// let json = serde_json::to_string(&record).expect("serialize");
/// assert!(json.contains(r#""timestamp":"2026-03-01T09:05:00.000120""#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    /// Synthetic private-network address of the visitor.
    pub ip_address: Ipv4Addr,
    /// ISP the visit is attributed to.
    pub isp_provider: String,
    /// Barangay the visit is attributed to.
    pub barangay: String,
    /// Jittered latitude, rounded to six places.
    pub latitude: f64,
    /// Jittered longitude, rounded to six places.
    pub longitude: f64,
    /// Human-readable address for the barangay.
    pub address: String,
    /// Local wall-clock time of the visit, without an offset.
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Fixed-width ISO-8601 timestamps so string order equals time order.
pub(crate) mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Format used for every serialized timestamp.
    pub(crate) const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    /// Accepts any fractional precision, including none.
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub(crate) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT).map_err(D::Error::custom)
    }
}
