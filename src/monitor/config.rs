//! Monitor configuration

use super::Sample;
use crate::traits::ConfigError;

/// Default number of samples in the sliding window
pub const DEFAULT_WINDOW_CAPACITY: usize = 1024;

/// Default upper clamp bound for the histogram
///
/// Frame rates above this are counted as this value. The cap only costs
/// memory when the histogram holds many distinct values, so it sits well
/// above any plausible refresh rate.
pub const DEFAULT_HISTOGRAM_MAXIMUM: Sample = 999;

/// Window and histogram settings for a [`FrameMonitor`](super::FrameMonitor)
///
/// # Example
///
/// ```
/// use framestats::monitor::MonitorConfig;
///
/// let config = MonitorConfig::default()
///     .with_window_capacity(512)
///     .with_histogram_range(0, 500);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.low_percentile_sample_count(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Number of most recent samples the statistics cover
    pub window_capacity: usize,
    /// Lower clamp bound for histogram counting
    pub histogram_minimum: Sample,
    /// Upper clamp bound for histogram counting
    pub histogram_maximum: Sample,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            histogram_minimum: 0,
            histogram_maximum: DEFAULT_HISTOGRAM_MAXIMUM,
        }
    }
}

impl MonitorConfig {
    /// Set the sliding window size
    pub fn with_window_capacity(mut self, window_capacity: usize) -> Self {
        self.window_capacity = window_capacity;
        self
    }

    /// Set the histogram clamp range
    pub fn with_histogram_range(mut self, minimum: Sample, maximum: Sample) -> Self {
        self.histogram_minimum = minimum;
        self.histogram_maximum = maximum;
        self
    }

    /// Number of ranked samples needed for the 1% low (`window_capacity / 100`)
    pub fn low_percentile_sample_count(&self) -> usize {
        self.window_capacity / 100
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.histogram_minimum >= self.histogram_maximum {
            return Err(ConfigError::InvalidRange {
                minimum: self.histogram_minimum.into(),
                maximum: self.histogram_maximum.into(),
            });
        }
        Ok(())
    }
}
