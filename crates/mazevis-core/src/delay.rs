//! Per-step animation delays derived from sequence lengths, so that large
//! mazes finish within a fixed wall-clock budget and small ones do not crawl.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::loader::AlgorithmRun;

/// Animation timing knobs, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Target duration of the visiting phase.
    pub visit_budget_ms: f64,
    /// Target duration of the path-tracing phase.
    pub path_budget_ms: f64,
    /// Lower clamp for a single reveal step.
    pub min_step_ms: f64,
    /// Upper clamp for a single reveal step.
    pub max_step_ms: f64,
    /// Pause after a run completes before moving on.
    pub hold_ms: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            visit_budget_ms: 6000.0,
            path_budget_ms: 2500.0,
            min_step_ms: 4.0,
            max_step_ms: 220.0,
            hold_ms: 1400.0,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("visit_budget_ms", self.visit_budget_ms),
            ("path_budget_ms", self.path_budget_ms),
            ("min_step_ms", self.min_step_ms),
            ("max_step_ms", self.max_step_ms),
            ("hold_ms", self.hold_ms),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidTiming(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.min_step_ms > self.max_step_ms {
            return Err(Error::InvalidTiming(format!(
                "min_step_ms ({}) exceeds max_step_ms ({})",
                self.min_step_ms, self.max_step_ms
            )));
        }
        Ok(())
    }
}

/// Delay per revealed element for each animation phase of one maze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDelays {
    pub visit_ms: f64,
    pub path_ms: f64,
}

impl StepDelays {
    /// Delays shared by every algorithm run on a maze, sized by the longest
    /// sequences so all runs of one maze animate at the same pace.
    pub fn for_runs(runs: &[AlgorithmRun], timing: &TimingConfig) -> Self {
        let visited: Vec<usize> = runs.iter().map(|r| r.visited.len()).collect();
        let paths: Vec<usize> = runs.iter().map(|r| r.path.len()).collect();
        Self::from_lengths(&visited, &paths, timing)
    }

    pub fn from_lengths(visited: &[usize], paths: &[usize], timing: &TimingConfig) -> Self {
        Self {
            visit_ms: step_delay(
                timing.visit_budget_ms,
                visited,
                timing.min_step_ms,
                timing.max_step_ms,
            ),
            path_ms: step_delay(
                timing.path_budget_ms,
                paths,
                timing.min_step_ms,
                timing.max_step_ms,
            ),
        }
    }
}

/// `clamp(target / max(1, max(counts)), min, max)`.
pub fn step_delay(target_ms: f64, counts: &[usize], min_ms: f64, max_ms: f64) -> f64 {
    let longest = counts.iter().copied().max().unwrap_or(0).max(1);
    (target_ms / longest as f64).clamp(min_ms, max_ms)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn divides_budget_by_longest_sequence() {
        assert_eq!(step_delay(1000.0, &[10, 40, 20], 1.0, 500.0), 25.0);
    }

    #[test]
    fn empty_or_zero_counts_use_one() {
        assert_eq!(step_delay(100.0, &[], 1.0, 500.0), 100.0);
        assert_eq!(step_delay(100.0, &[0, 0], 1.0, 500.0), 100.0);
    }

    #[test]
    fn clamps_small_and_large_mazes() {
        assert_eq!(step_delay(6000.0, &[3], 4.0, 220.0), 220.0);
        assert_eq!(step_delay(6000.0, &[100_000], 4.0, 220.0), 4.0);
    }

    #[test]
    fn delays_from_lengths() {
        let timing = TimingConfig {
            visit_budget_ms: 500.0,
            path_budget_ms: 200.0,
            min_step_ms: 1.0,
            max_step_ms: 1000.0,
            hold_ms: 900.0,
        };
        let delays = StepDelays::from_lengths(&[5, 4], &[2, 2], &timing);
        assert_eq!(
            delays,
            StepDelays {
                visit_ms: 100.0,
                path_ms: 100.0
            }
        );
    }

    #[test]
    fn default_timing_is_valid() {
        assert!(TimingConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_timing_rejected() {
        let swapped = TimingConfig {
            min_step_ms: 300.0,
            max_step_ms: 200.0,
            ..TimingConfig::default()
        };
        assert!(matches!(swapped.validate(), Err(Error::InvalidTiming(_))));

        let negative = TimingConfig {
            hold_ms: -1.0,
            ..TimingConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = TimingConfig {
            visit_budget_ms: f64::NAN,
            ..TimingConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    proptest! {
        #[test]
        fn delay_within_clamp(
            counts in prop::collection::vec(1usize..100_000, 1..4),
            target in 0.0f64..60_000.0,
            min in 0.0f64..50.0,
            span in 0.0f64..500.0,
        ) {
            let max = min + span;
            let d = step_delay(target, &counts, min, max);
            prop_assert!(d >= min && d <= max);
        }

        #[test]
        fn doubling_lengths_never_increases_delay(
            counts in prop::collection::vec(1usize..100_000, 1..4),
            target in 0.0f64..60_000.0,
            min in 0.0f64..50.0,
            span in 0.0f64..500.0,
        ) {
            let max = min + span;
            let doubled: Vec<usize> = counts.iter().map(|c| c * 2).collect();
            prop_assert!(step_delay(target, &doubled, min, max) <= step_delay(target, &counts, min, max));
        }
    }
}
