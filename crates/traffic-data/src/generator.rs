//! Traffic record generation.
//!
//! This module provides the core generation function that turns the static
//! location and provider tables into a batch of randomized visits. The random
//! source and the current instant are both injected, so the same seed and
//! clock always produce identical output.

use chrono::{NaiveDateTime, SubsecRound, TimeDelta};
use mockable::Clock;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalogue::{LOCATIONS, Location, PROVIDERS, format_address};
use crate::coordinate::{DEFAULT_VARIANCE, jitter};
use crate::error::GenerationError;
use crate::network::synthetic_ip;
use crate::record::TrafficRecord;

/// Default number of records per run.
pub const DEFAULT_RECORD_COUNT: usize = 150;

/// Default lookback window in days.
pub const DEFAULT_DAYS_BACK: f64 = 7.0;

const HOURS_PER_DAY: f64 = 24.0;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Sub-second digits kept on generated timestamps.
const TIMESTAMP_SUBSEC_DIGITS: u16 = 6;

/// Inputs controlling a generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Number of records to produce; zero yields an empty batch.
    pub count: usize,
    /// Width of the timestamp window, in days before `now`.
    pub days_back: f64,
    /// Jitter span in degrees applied around each location.
    pub variance: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            days_back: DEFAULT_DAYS_BACK,
            variance: DEFAULT_VARIANCE,
        }
    }
}

impl GenerationParams {
    fn validate(&self) -> Result<(), GenerationError> {
        if !self.days_back.is_finite() || self.days_back < 0.0 {
            return Err(GenerationError::InvalidLookback {
                days_back: self.days_back,
            });
        }
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(GenerationError::InvalidVariance {
                variance: self.variance,
            });
        }
        Ok(())
    }
}

/// Generates traffic records and sorts them by timestamp.
///
/// Each record independently picks a location and a provider uniformly,
/// jitters the location's coordinate, and subtracts a uniform offset in
/// `[0, days_back * 24)` hours from `now`. `now` is truncated to whole
/// microseconds first, so every serialized timestamp lies within
/// `[now - days_back, now]`.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - `days_back` or `variance` is negative or not finite
/// - the lookback moves a timestamp outside the representable range
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use traffic_data::{GenerationParams, generate_traffic};
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .and_then(|date| date.and_hms_opt(12, 0, 0))
///     .expect("valid timestamp");
/// let params = GenerationParams { count: 20, ..GenerationParams::default() };
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let records = generate_traffic(&mut rng, now, &params).expect("generated");
///
/// assert_eq!(records.len(), 20);
/// assert!(records.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
/// ```
pub fn generate_traffic<R>(
    rng: &mut R,
    now: NaiveDateTime,
    params: &GenerationParams,
) -> Result<Vec<TrafficRecord>, GenerationError>
where
    R: Rng + ?Sized,
{
    params.validate()?;

    let now = now.trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS);
    let mut records = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        records.push(generate_single_record(rng, now, params)?);
    }

    records.sort_by(|left, right| left.timestamp.cmp(&right.timestamp));
    debug!(count = records.len(), %now, "generated traffic records");
    Ok(records)
}

/// Generates records from a `u64` seed and the clock's local time.
///
/// # Errors
///
/// Returns [`GenerationError`] under the same conditions as
/// [`generate_traffic`].
///
/// # Example
///
/// ```
/// use mockable::DefaultClock;
/// use traffic_data::{GenerationParams, generate_seeded};
///
/// let params = GenerationParams { count: 5, ..GenerationParams::default() };
/// let records = generate_seeded(2026, &DefaultClock, &params).expect("generated");
///
/// assert_eq!(records.len(), 5);
/// ```
pub fn generate_seeded(
    seed: u64,
    clock: &dyn Clock,
    params: &GenerationParams,
) -> Result<Vec<TrafficRecord>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_traffic(&mut rng, clock.local().naive_local(), params)
}

fn generate_single_record<R>(
    rng: &mut R,
    now: NaiveDateTime,
    params: &GenerationParams,
) -> Result<TrafficRecord, GenerationError>
where
    R: Rng + ?Sized,
{
    let location = choose_location(rng);
    let coordinate = jitter(location.coordinate, params.variance, rng).rounded();
    let isp_provider = choose_provider(rng);
    let timestamp = random_timestamp(rng, now, params.days_back)?;

    Ok(TrafficRecord {
        ip_address: synthetic_ip(rng),
        isp_provider: isp_provider.to_owned(),
        barangay: location.name.to_owned(),
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        address: format_address(location.name),
        timestamp,
    })
}

fn choose_location<R>(rng: &mut R) -> &'static Location
where
    R: Rng + ?Sized,
{
    let [first, ..] = &LOCATIONS;
    LOCATIONS.choose(rng).unwrap_or(first)
}

fn choose_provider<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    let [first, ..] = PROVIDERS;
    PROVIDERS.choose(rng).copied().unwrap_or(first)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the window is drawn in fractional hours and applied in whole microseconds"
)]
fn random_timestamp<R>(
    rng: &mut R,
    now: NaiveDateTime,
    days_back: f64,
) -> Result<NaiveDateTime, GenerationError>
where
    R: Rng + ?Sized,
{
    let hours_back = rng.random::<f64>() * days_back * HOURS_PER_DAY;
    let micros_back = (hours_back * MICROS_PER_HOUR).floor();
    let out_of_range = || GenerationError::TimestampOutOfRange { hours_back };
    if micros_back >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    now.checked_sub_signed(TimeDelta::microseconds(micros_back as i64))
        .ok_or_else(out_of_range)
}
