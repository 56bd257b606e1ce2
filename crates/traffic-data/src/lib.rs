//! Synthetic geolocation and ISP traffic records for the portal dashboard.
//!
//! This crate fabricates believable visit records anchored on the barangays
//! of Manolo Fortich, Bukidnon, attributes each to a Philippine ISP, and
//! writes them as a JSON array for the dashboard to plot.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Static location and provider tables
//! - Coordinate jitter and synthetic private-network addresses
//! - Seeded, clock-injected batch generation sorted by timestamp
//! - Atomic JSON output and read-back
//! - Per-barangay and per-provider distribution summaries
//! - Configuration through flags, environment, or files via OrthoConfig
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use traffic_data::{GenerationParams, TrafficSummary, generate_traffic};
//!
//! let now = NaiveDate::from_ymd_opt(2026, 10, 19)
//!     .and_then(|date| date.and_hms_opt(9, 0, 0))
//!     .expect("valid timestamp");
//! let mut rng = ChaCha8Rng::seed_from_u64(2026);
//!
//! let records = generate_traffic(&mut rng, now, &GenerationParams::default())
//!     .expect("generation succeeds");
//! let summary = TrafficSummary::from_records(&records);
//!
//! assert_eq!(records.len(), 150);
//! assert_eq!(summary.total, 150);
//! ```

mod atomic_io;
mod catalogue;
mod config;
mod coordinate;
mod error;
mod generator;
mod logging;
mod network;
mod output;
mod record;
mod run;
mod summary;
#[cfg(test)]
mod test_support;

pub use catalogue::{
    ADDRESS_SUFFIX, LOCATIONS, Location, PROVIDERS, find_location, format_address,
    is_known_provider,
};
pub use config::TrafficSettings;
pub use coordinate::{COORDINATE_PLACES, Coordinate, DEFAULT_VARIANCE, jitter, round_to_places};
pub use error::{GenerationError, OutputError};
pub use generator::{
    DEFAULT_DAYS_BACK, DEFAULT_RECORD_COUNT, GenerationParams, generate_seeded, generate_traffic,
};
pub use logging::{DEFAULT_LOG_FILTER, init_tracing, log_filter};
pub use network::synthetic_ip;
pub use output::{DEFAULT_OUTPUT_PATH, read_traffic_file, write_traffic_file};
pub use record::TrafficRecord;
pub use run::{CliError, RunError, RunReport, run, run_from_args};
pub use summary::{Tally, TrafficSummary};
