//! Statistical outlier detection over opportunity scores.

use tracing::debug;

use ideate_models::{AnomalyRecord, AnomalyType, Opportunity};

use crate::stats::ScoreStats;

/// Deviation threshold, in standard deviations, beyond which a score is an
/// anomaly. The comparison is strict: a score exactly at the threshold is
/// not anomalous.
pub const ANOMALY_THRESHOLD_SIGMA: f64 = 2.0;

/// Classifies opportunities whose score deviates from the population mean by
/// more than [`ANOMALY_THRESHOLD_SIGMA`] standard deviations.
///
/// Absent scores count as `0.0`. The result preserves the input's relative
/// order and is recomputed from scratch on every call. An empty input yields
/// an empty result without computing any statistics, and identical scores
/// (zero variance) yield an empty result.
pub fn detect_anomalies(opportunities: &[Opportunity]) -> Vec<AnomalyRecord> {
    if opportunities.is_empty() {
        return Vec::new();
    }

    let scores: Vec<f64> = opportunities.iter().map(Opportunity::score_or_zero).collect();
    let stats = ScoreStats::compute(&scores);
    let threshold = ANOMALY_THRESHOLD_SIGMA * stats.std_dev;

    debug!(
        count = stats.count,
        mean = stats.mean,
        std_dev = stats.std_dev,
        "scanning opportunities for score anomalies"
    );

    opportunities
        .iter()
        .zip(scores)
        .filter(|(_, score)| (score - stats.mean).abs() > threshold)
        .map(|(opportunity, score)| AnomalyRecord {
            id: opportunity.id.clone(),
            anomaly_type: if score > stats.mean {
                AnomalyType::HighPerformer
            } else {
                AnomalyType::NeedsAttention
            },
        })
        .collect()
}
