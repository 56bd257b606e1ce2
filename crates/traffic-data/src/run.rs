//! End-to-end generation run.
//!
//! The binary delegates to [`run`] so the whole flow (generate, write,
//! report) can be exercised in tests without spawning a subprocess.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use mockable::Clock;
use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use tracing::info;

use crate::config::TrafficSettings;
use crate::error::{GenerationError, OutputError};
use crate::generator::generate_seeded;
use crate::output::write_traffic_file;
use crate::summary::TrafficSummary;

/// Errors surfaced by a generation run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Records could not be generated from the configured parameters.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    /// The output file could not be written.
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    /// The progress report could not be written.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Errors surfaced by the command-line entry point.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment, or files.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Arc<OrthoError>),
    /// The run itself failed.
    #[error(transparent)]
    Run(#[from] RunError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Seed the records were generated from.
    pub seed: u64,
    /// File the records were written to.
    pub output_path: PathBuf,
    /// Statistics over the written records.
    pub summary: TrafficSummary,
}

/// Generates, writes, and reports one batch of traffic records.
///
/// Progress lines and the distribution report are written to `out`.
///
/// # Errors
///
/// Returns [`RunError`] if generation parameters are invalid, the output
/// file cannot be written, or `out` rejects the report.
pub fn run(
    settings: &TrafficSettings,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<RunReport, RunError> {
    let params = settings.generation_params();
    let seed = settings.seed_or_random();
    let output_path = settings.output_path();

    writeln!(out, "Generating simulated portal traffic data...")?;
    info!(
        count = params.count,
        days_back = params.days_back,
        variance = params.variance,
        seed,
        "generating traffic records"
    );

    let records = generate_seeded(seed, clock, &params)?;
    write_traffic_file(&output_path, &records)?;
    info!(path = %output_path.display(), records = records.len(), "traffic records saved");

    writeln!(out, "Generated {} traffic records", records.len())?;
    writeln!(out, "Saved to: {}", output_path.display())?;

    let summary = TrafficSummary::from_records(&records);
    for line in summary.lines() {
        writeln!(out, "{line}")?;
    }

    Ok(RunReport {
        seed,
        output_path,
        summary,
    })
}

/// Loads [`TrafficSettings`] from `args` and the environment, then runs.
///
/// `args` includes the program name, as with [`std::env::args_os`].
///
/// # Errors
///
/// Returns [`CliError::Settings`] when the settings cannot be loaded and
/// [`CliError::Run`] when the run fails.
pub fn run_from_args<I, T>(
    args: I,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<RunReport, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let settings = TrafficSettings::load_from_iter(args)?;
    Ok(run(&settings, clock, out)?)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::{TimeZone, Utc};
    use env_lock::lock_env;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::output::read_traffic_file;
    use crate::test_support::FixtureClock;

    #[fixture]
    fn clock() -> FixtureClock {
        FixtureClock {
            utc_now: Utc
                .with_ymd_and_hms(2026, 10, 19, 6, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        }
    }

    fn settings(name: &str, seed: u64) -> TrafficSettings {
        TrafficSettings {
            output_path: Path::new("target")
                .join("traffic-data-tests")
                .join(format!("run-{name}-{}", std::process::id()))
                .join("simulated_traffic.json"),
            seed: Some(seed),
            ..TrafficSettings::default()
        }
    }

    fn run_to_string(
        settings: &TrafficSettings,
        clock: &FixtureClock,
    ) -> (Result<RunReport, RunError>, String) {
        let mut out = Vec::new();
        let result = run(settings, clock, &mut out);
        (result, String::from_utf8(out).expect("utf-8 report"))
    }

    #[rstest]
    fn writes_default_batch_and_reports_progress(clock: FixtureClock) {
        let settings = settings("default", 42);

        let (result, stdout) = run_to_string(&settings, &clock);
        let report = result.expect("run succeeds");

        assert_eq!(report.seed, 42);
        assert_eq!(report.summary.total, 150);
        assert!(stdout.starts_with("Generating simulated portal traffic data...\n"));
        assert!(stdout.contains("Generated 150 traffic records\n"));
        assert!(stdout.contains(&format!("Saved to: {}\n", report.output_path.display())));
        assert!(stdout.contains("Traffic distribution by barangay:\n"));

        let written = read_traffic_file(&report.output_path).expect("read back");
        assert_eq!(written.len(), 150);
    }

    #[rstest]
    fn report_counts_match_the_written_file(clock: FixtureClock) {
        let settings = settings("tally", 7);

        let (result, stdout) = run_to_string(&settings, &clock);
        let report = result.expect("run succeeds");

        let listed: usize = report
            .summary
            .locations
            .iter()
            .inspect(|tally| {
                let line = format!("   {}: {} visits\n", tally.name, tally.count);
                assert!(stdout.contains(&line), "missing line {line:?}");
            })
            .map(|tally| tally.count)
            .sum();
        assert_eq!(listed, 150);
    }

    #[rstest]
    fn same_seed_reproduces_the_file(clock: FixtureClock) {
        let first = settings("repeat-a", 99);
        let second = settings("repeat-b", 99);

        let (a, _) = run_to_string(&first, &clock);
        let (b, _) = run_to_string(&second, &clock);
        let a = read_traffic_file(&a.expect("first run").output_path).expect("read first");
        let b = read_traffic_file(&b.expect("second run").output_path).expect("read second");

        assert_eq!(a, b);
    }

    #[rstest]
    fn invalid_parameters_abort_before_writing(clock: FixtureClock) {
        let mut settings = settings("invalid", 1);
        settings.days_back = -3.0;

        let (result, _) = run_to_string(&settings, &clock);

        assert!(matches!(result, Err(RunError::Generation(_))));
        assert!(!settings.output_path().exists());
    }

    #[rstest]
    fn unwritable_output_is_reported(clock: FixtureClock) {
        let mut settings = settings("blocked", 1);
        let blocker = settings.output_path();
        write_traffic_file(&blocker, &[]).expect("create blocking file");
        settings.output_path = blocker.join("simulated_traffic.json");

        let (result, stdout) = run_to_string(&settings, &clock);

        assert!(matches!(
            result,
            Err(RunError::Output(OutputError::CreateDirectory { .. }))
        ));
        assert!(!stdout.contains("Generated"));
    }

    const ENV_KEYS: [&str; 5] = [
        "TRAFFIC_DATA_COUNT",
        "TRAFFIC_DATA_DAYS_BACK",
        "TRAFFIC_DATA_VARIANCE",
        "TRAFFIC_DATA_OUTPUT_PATH",
        "TRAFFIC_DATA_SEED",
    ];

    fn argv(args: &[&str]) -> Vec<OsString> {
        std::iter::once("traffic-data-generate")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[rstest]
    fn flags_drive_a_full_run(clock: FixtureClock) {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));
        let output = settings("flags", 0).output_path;
        let output_arg = output.to_string_lossy().into_owned();

        let report = run_from_args(
            argv(&["--count", "3", "--seed", "11", "--output-path", &output_arg]),
            &clock,
            &mut io::sink(),
        )
        .expect("run succeeds");

        assert_eq!(report.seed, 11);
        assert_eq!(report.summary.total, 3);
        assert_eq!(read_traffic_file(&output).expect("read back").len(), 3);
    }

    #[rstest]
    fn unknown_flags_are_settings_errors(clock: FixtureClock) {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));

        let result = run_from_args(argv(&["--no-such-flag"]), &clock, &mut io::sink());

        let err = result.expect_err("unknown flag rejected");
        assert!(matches!(err, CliError::Settings(_)));
        assert!(err.to_string().starts_with("failed to load settings: "));
    }

    #[rstest]
    fn run_failures_keep_their_type(clock: FixtureClock) {
        let _guard = lock_env(ENV_KEYS.map(|key| (key, None::<String>)));
        let output = settings("cli-invalid", 0).output_path;
        let output_arg = output.to_string_lossy().into_owned();

        let result = run_from_args(
            argv(&["--days-back=-1", "--output-path", &output_arg]),
            &clock,
            &mut io::sink(),
        );

        assert!(matches!(
            result,
            Err(CliError::Run(RunError::Generation(
                GenerationError::InvalidLookback { .. }
            )))
        ));
        assert!(!output.exists());
    }
}
