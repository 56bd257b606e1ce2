//! Distribution statistics printed after a run.

use std::collections::HashMap;

use crate::record::TrafficRecord;

/// Visit count for one category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Category value, such as a barangay or provider name.
    pub name: String,
    /// Number of records carrying the value.
    pub count: usize,
}

/// Aggregate view of a batch of traffic records.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use traffic_data::{GenerationParams, TrafficSummary, generate_traffic};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .and_then(|date| date.and_hms_opt(8, 0, 0))
///     .expect("valid timestamp");
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let records = generate_traffic(&mut rng, now, &GenerationParams::default()).expect("generated");
///
/// let summary = TrafficSummary::from_records(&records);
/// let counted: usize = summary.locations.iter().map(|tally| tally.count).sum();
/// assert_eq!(counted, summary.total);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSummary {
    /// Number of records summarised.
    pub total: usize,
    /// Visits per barangay, busiest first.
    pub locations: Vec<Tally>,
    /// Visits per provider, busiest first.
    pub providers: Vec<Tally>,
    /// Most recent record, if any.
    pub latest: Option<TrafficRecord>,
}

impl TrafficSummary {
    /// Summarises `records`.
    ///
    /// Tallies are ordered by descending count, with ties broken by name so
    /// the report is stable for a given batch.
    #[must_use]
    pub fn from_records(records: &[TrafficRecord]) -> Self {
        Self {
            total: records.len(),
            locations: tally_by(records, |record| &record.barangay),
            providers: tally_by(records, |record| &record.isp_provider),
            latest: records.iter().max_by_key(|record| record.timestamp).cloned(),
        }
    }

    /// Number of distinct barangays seen.
    #[must_use]
    pub fn unique_locations(&self) -> usize {
        self.locations.len()
    }

    /// Busiest barangay, if any records were summarised.
    #[must_use]
    pub fn top_location(&self) -> Option<&Tally> {
        self.locations.first()
    }

    /// Renders the human-readable report, one line per entry.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![String::new(), "Traffic distribution by barangay:".to_owned()];
        lines.extend(self.locations.iter().map(visit_line));

        lines.push(String::new());
        lines.push("Traffic distribution by provider:".to_owned());
        lines.extend(self.providers.iter().map(visit_line));

        lines.push(String::new());
        lines.push(format!("Unique barangays: {}", self.unique_locations()));
        if let Some(top) = self.top_location() {
            lines.push(format!("Top barangay: {} ({} visits)", top.name, top.count));
        }
        if let Some(latest) = &self.latest {
            lines.push(format!(
                "Latest visit: {} at {}",
                latest.barangay,
                latest.timestamp.format("%Y-%m-%d %H:%M:%S")
            ));
        }
        lines
    }
}

fn visit_line(tally: &Tally) -> String {
    format!("   {}: {} visits", tally.name, tally.count)
}

fn tally_by<F>(records: &[TrafficRecord], key: F) -> Vec<Tally>
where
    F: Fn(&TrafficRecord) -> &String,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(key(record).as_str()).or_default() += 1;
    }

    let mut tallies: Vec<Tally> = counts
        .into_iter()
        .map(|(name, count)| Tally {
            name: name.to_owned(),
            count,
        })
        .collect();
    tallies.sort_by(|left, right| {
        right
            .count
            .cmp(&left.count)
            .then_with(|| left.name.cmp(&right.name))
    });
    tallies
}
