//! Tracing subscriber setup for the generator binary.

use std::error::Error;
use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset or cannot be parsed.
///
/// Run parameters and the seed are logged at `info`, so a default run shows
/// what is needed to reproduce it.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the event filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global fmt subscriber, writing events to stderr.
///
/// Stdout stays reserved for the human-readable report.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .try_init()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};
    use env_lock::lock_env;
    use rstest::rstest;
    use tracing::level_filters::LevelFilter;

    use super::*;
    use crate::config::TrafficSettings;
    use crate::run::run;
    use crate::test_support::FixtureClock;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log buffer lock").clone();
            String::from_utf8(bytes).expect("utf-8 logs")
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn unset_rust_log_falls_back_to_info() {
        let _guard = lock_env([("RUST_LOG", None::<String>)]);

        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[rstest]
    fn rust_log_overrides_the_fallback() {
        let _guard = lock_env([("RUST_LOG", Some("debug".to_owned()))]);

        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[rstest]
    fn default_filter_reports_the_seed() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let clock = FixtureClock {
            utc_now: Utc
                .with_ymd_and_hms(2026, 10, 19, 6, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        };
        let settings = TrafficSettings {
            count: 3,
            output_path: Path::new("target")
                .join("traffic-data-tests")
                .join(format!("logging-{}", std::process::id()))
                .join("simulated_traffic.json"),
            seed: Some(8_675_309),
            ..TrafficSettings::default()
        };

        tracing::subscriber::with_default(subscriber, || {
            run(&settings, &clock, &mut io::sink()).expect("run succeeds");
        });

        assert!(
            logs.contents().contains("seed=8675309"),
            "seed missing from logs: {}",
            logs.contents()
        );
    }
}
