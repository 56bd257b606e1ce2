//! Generator configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use rand::Rng;
use serde::Deserialize;

use crate::coordinate::DEFAULT_VARIANCE;
use crate::generator::{DEFAULT_DAYS_BACK, DEFAULT_RECORD_COUNT, GenerationParams};
use crate::output::DEFAULT_OUTPUT_PATH;

/// Configuration values controlling a generation run.
///
/// Every value may come from command-line flags, `TRAFFIC_DATA_*`
/// environment variables, or a configuration file. Unset values take the
/// portal defaults from the defaults layer, so a bare invocation loads.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAFFIC_DATA")]
pub struct TrafficSettings {
    /// Number of records to generate.
    #[ortho_config(default = DEFAULT_RECORD_COUNT)]
    pub count: usize,
    /// Lookback window in days.
    #[ortho_config(default = DEFAULT_DAYS_BACK)]
    pub days_back: f64,
    /// Coordinate jitter span in degrees.
    #[ortho_config(default = DEFAULT_VARIANCE)]
    pub variance: f64,
    /// Output file path.
    #[ortho_config(default = PathBuf::from(DEFAULT_OUTPUT_PATH))]
    pub output_path: PathBuf,
    /// RNG seed; a fresh seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for TrafficSettings {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            count: params.count,
            days_back: params.days_back,
            variance: params.variance,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}

impl TrafficSettings {
    /// Return the generation parameters.
    #[must_use]
    pub const fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            count: self.count,
            days_back: self.days_back,
            variance: self.variance,
        }
    }

    /// Return the configured output path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone()
    }

    /// Return the configured seed, or draw a fresh one.
    #[must_use]
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}
