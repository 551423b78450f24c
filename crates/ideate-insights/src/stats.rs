//! Population statistics over CSIO scores.

/// Mean and population standard deviation of a score sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (denominator N, not N-1).
    pub std_dev: f64,
    /// Number of scores.
    pub count: usize,
}

impl ScoreStats {
    /// Computes statistics over the given scores.
    ///
    /// An empty slice yields all-zero statistics; callers that must
    /// distinguish "no data" should check before calling.
    pub fn compute(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                count: 0,
            };
        }

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
            count: scores.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stats = ScoreStats::compute(&[0.1, 0.5, 0.5, 0.5, 0.9]);

        assert_eq!(stats.count, 5);
        assert!((stats.mean - 0.5).abs() < 1e-12);
        // Population std dev: sqrt((0.16 + 0 + 0 + 0 + 0.16) / 5)
        assert!((stats.std_dev - (0.32f64 / 5.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compute_uses_population_denominator() {
        let stats = ScoreStats::compute(&[0.0, 1.0]);

        assert_eq!(stats.mean, 0.5);
        // N in the denominator gives 0.5; the sample estimate would give ~0.707
        assert!((stats.std_dev - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_compute_identical_scores() {
        let stats = ScoreStats::compute(&[0.4, 0.4, 0.4]);

        assert_eq!(stats.mean, 0.4);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_compute_empty_is_zero_not_nan() {
        let stats = ScoreStats::compute(&[]);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
