//! Interpolated order statistics
//!
//! Low quantiles are estimated from the smallest few ranked samples with the
//! usual `(n + 1) * q - 1` position and linear interpolation between the two
//! neighbouring ranks.

use super::Sample;
use crate::math;

/// Where a quantile falls in the ranked order of `samples` values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankPosition {
    /// Lower neighbouring rank
    pub low: usize,
    /// Upper neighbouring rank (equal to `low` at the top of the window)
    pub high: usize,
    /// Interpolation weight towards `high`, in `[0, 1)`
    pub fraction: f64,
}

impl RankPosition {
    /// Locate `quantile` among `samples` ranked values
    ///
    /// Positions before the first rank clamp to it, so with too few samples
    /// the estimate degrades to the minimum.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is zero.
    pub fn new(samples: usize, quantile: f64) -> Self {
        assert!(samples > 0, "quantile of an empty window");

        let position = (samples as f64 + 1.0) * quantile - 1.0;
        let low = if position > 0.0 {
            (math::floor(position) as usize).min(samples - 1)
        } else {
            0
        };
        let high = if low + 1 < samples { low + 1 } else { low };
        let fraction = (position - low as f64).max(0.0);

        Self {
            low,
            high,
            fraction,
        }
    }

    /// Interpolate between the two neighbouring ranks of `ranked`
    ///
    /// # Panics
    ///
    /// Panics if `ranked` does not reach `self.high`.
    pub fn interpolate(&self, ranked: &[Sample]) -> f64 {
        math::lerp(
            f64::from(ranked[self.low]),
            f64::from(ranked[self.high]),
            self.fraction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_full_default_window() {
        // 1024 samples: 1% low sits between ranks 9 and 10
        let one = RankPosition::new(1024, 0.01);
        assert_eq!(one.low, 9);
        assert_eq!(one.high, 10);
        assert!((one.fraction - 0.25).abs() < 1e-9);

        let tenth = RankPosition::new(1024, 0.001);
        assert_eq!(tenth.low, 0);
        assert_eq!(tenth.high, 1);
        assert!((tenth.fraction - 0.025).abs() < 1e-9);
    }

    #[test]
    fn test_position_clamps_to_minimum() {
        let position = RankPosition::new(10, 0.01);
        assert_eq!(position.low, 0);
        assert_eq!(position.high, 1);
        assert_eq!(position.fraction, 0.0);

        let ranked = [3, 8];
        assert_eq!(position.interpolate(&ranked), 3.0);
    }

    #[test]
    fn test_single_sample() {
        let position = RankPosition::new(1, 0.001);
        assert_eq!(position.low, 0);
        assert_eq!(position.high, 0);
        assert_eq!(position.interpolate(&[42]), 42.0);
    }

    #[test]
    fn test_interpolate() {
        let position = RankPosition {
            low: 1,
            high: 2,
            fraction: 0.5,
        };
        assert_eq!(position.interpolate(&[10, 20, 40]), 30.0);
    }

    #[test]
    #[should_panic(expected = "quantile of an empty window")]
    fn test_empty() {
        let _ = RankPosition::new(0, 0.01);
    }
}
