//! Per-tick frame statistics
//!
//! [`FrameMonitor`] keeps the window, histogram and running sum in lockstep:
//! every sample pushed into the window is added to the histogram and the sum,
//! and every sample evicted from the window is removed from both.

use super::config::MonitorConfig;
use super::quantile::RankPosition;
use super::Sample;
use crate::histogram::FrequencyHistogram;
use crate::math;
use crate::traits::{ConfigError, Sketch};
use crate::window::SlidingWindow;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Quantile reported as the "0.1% low"
pub const ZERO_POINT_ONE_PERCENT: f64 = 0.001;

/// Quantile reported as the "1% low"
pub const ONE_PERCENT: f64 = 0.01;

/// The four metrics published after a tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameStats {
    /// Sample derived from the last tick
    pub current: Sample,
    /// Mean over the window, truncated toward zero
    pub average: Sample,
    /// 1% low quantile of the window
    pub one_percent_low: Sample,
    /// 0.1% low quantile of the window
    pub zero_point_one_percent_low: Sample,
    /// Live samples in the window
    pub samples: usize,
}

/// Windowed average and low-percentile monitor
///
/// Call [`tick`](Self::tick) once per frame with the elapsed time, or
/// [`push_sample`](Self::push_sample) with an already computed sample, then
/// read the metrics. Per-tick cost is O(log d) for the window update plus
/// O(k) for the ranked prefix, where d is the number of distinct samples and
/// k is about 1% of the window.
///
/// Not synchronized: ticks must come from one caller at a time.
///
/// # Example
///
/// ```
/// use framestats::monitor::FrameMonitor;
///
/// let mut monitor = FrameMonitor::new();
///
/// for _ in 0..100 {
///     monitor.tick(1.0 / 60.0);
/// }
/// monitor.tick(1.0 / 20.0); // one slow frame
///
/// assert_eq!(monitor.current(), 20);
/// assert_eq!(monitor.zero_point_one_percent_low(), 20);
/// assert_eq!(monitor.average(), 59);
/// ```
#[derive(Clone, Debug)]
pub struct FrameMonitor {
    config: MonitorConfig,
    window: SlidingWindow<Sample>,
    histogram: FrequencyHistogram<Sample>,
    /// Ranked prefix scratch space, grow-only
    ranked: Vec<Sample>,
    /// Sum of the live window
    window_sum: i64,
    /// Cached `config.low_percentile_sample_count()`
    low_percentile_samples: usize,
    current: Sample,
    average: Sample,
    one_percent_low: Sample,
    zero_point_one_percent_low: Sample,
    ticked: bool,
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameMonitor {
    /// Create a monitor with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(MonitorConfig::default())
    }

    /// Create a monitor with the given configuration
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`MonitorConfig::validate`].
    pub fn with_config(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MonitorConfig) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            window_capacity = config.window_capacity,
            histogram_minimum = config.histogram_minimum,
            histogram_maximum = config.histogram_maximum,
            "creating frame monitor"
        );

        let mut monitor = Self {
            config,
            window: SlidingWindow::new(config.window_capacity),
            histogram: FrequencyHistogram::from_valid_range(
                config.histogram_minimum,
                config.histogram_maximum,
            ),
            ranked: Vec::new(),
            window_sum: 0,
            low_percentile_samples: 0,
            current: 0,
            average: 0,
            one_percent_low: 0,
            zero_point_one_percent_low: 0,
            ticked: false,
        };
        monitor.update_parameters();
        monitor
    }

    /// Record one frame given the seconds elapsed since the previous one
    ///
    /// The sample is `round(1 / elapsed_seconds)` with ties to even, saturated
    /// into [`Sample`].
    /// A zero interval therefore records `Sample::MAX` and a NaN records 0;
    /// keeping the interval positive is up to the caller.
    pub fn tick(&mut self, elapsed_seconds: f64) {
        #[cfg(feature = "tracing")]
        warn_on_bad_interval(elapsed_seconds);

        self.push_sample(sample_from_elapsed(elapsed_seconds));
    }

    /// Record one precomputed sample and refresh every metric
    pub fn push_sample(&mut self, sample: Sample) {
        self.current = sample;

        if self.window.is_full() {
            self.evict_oldest();
        }
        self.window.push_back(sample);
        self.window_sum += i64::from(sample);
        self.histogram.add_sample(sample);
        self.ticked = true;

        let samples = self.window.len();
        self.average = (self.window_sum / samples as i64) as Sample;

        let zero_point_one = RankPosition::new(samples, ZERO_POINT_ONE_PERCENT);
        let one = RankPosition::new(samples, ONE_PERCENT);

        // Interpolation may look one rank past the low-percentile count on
        // small windows, so the prefix covers whichever reaches further.
        let rank = self
            .low_percentile_samples
            .min(samples - 1)
            .max(one.high)
            .max(zero_point_one.high);
        self.grow_ranked(rank + 1);
        self.histogram.write_ranked_prefix(&mut self.ranked, rank + 1);

        self.zero_point_one_percent_low = to_sample(zero_point_one.interpolate(&self.ranked));
        self.one_percent_low = to_sample(one.interpolate(&self.ranked));
    }

    /// Apply a new configuration, keeping the newest samples that still fit
    ///
    /// Shrinking the window evicts the oldest samples. A new clamp range
    /// recounts the live samples. Published metrics are left unchanged until
    /// the next tick.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`MonitorConfig::validate`]; the
    /// monitor is untouched in that case.
    pub fn reconfigure(&mut self, config: MonitorConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if config.window_capacity != self.window.capacity() {
            while self.window.len() > config.window_capacity {
                self.evict_oldest();
            }
            let mut resized = SlidingWindow::new(config.window_capacity);
            while !self.window.is_empty() {
                resized.push_back(self.window.pop_front());
            }
            self.window = resized;
        }

        if config.histogram_minimum != self.histogram.minimum()
            || config.histogram_maximum != self.histogram.maximum()
        {
            let mut histogram = FrequencyHistogram::from_valid_range(
                config.histogram_minimum,
                config.histogram_maximum,
            );
            for sample in self.window.iter() {
                histogram.add_sample(sample);
            }
            self.histogram = histogram;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            window_capacity = config.window_capacity,
            histogram_minimum = config.histogram_minimum,
            histogram_maximum = config.histogram_maximum,
            live_samples = self.window.len(),
            "reconfigured frame monitor"
        );

        self.config = config;
        self.update_parameters();
        Ok(())
    }

    /// Forget every sample and metric, keeping configuration and allocations
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(live_samples = self.window.len(), "resetting frame monitor");

        self.window.clear();
        self.histogram.clear();
        self.window_sum = 0;
        self.current = 0;
        self.average = 0;
        self.one_percent_low = 0;
        self.zero_point_one_percent_low = 0;
        self.ticked = false;
    }

    /// Sample from the last tick
    pub fn current(&self) -> Sample {
        self.current
    }

    /// Mean of the window
    pub fn average(&self) -> Sample {
        self.average
    }

    /// Value below which 1% of the window falls
    pub fn one_percent_low(&self) -> Sample {
        self.one_percent_low
    }

    /// Value below which 0.1% of the window falls
    pub fn zero_point_one_percent_low(&self) -> Sample {
        self.zero_point_one_percent_low
    }

    /// All published metrics at once
    pub fn snapshot(&self) -> FrameStats {
        FrameStats {
            current: self.current,
            average: self.average,
            one_percent_low: self.one_percent_low,
            zero_point_one_percent_low: self.zero_point_one_percent_low,
            samples: self.window.len(),
        }
    }

    /// True once at least one sample has been recorded since construction
    /// or the last reset
    pub fn has_ticked(&self) -> bool {
        self.ticked
    }

    /// Live samples in the window
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    /// Maximum number of samples the window holds
    pub fn window_capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Ranked samples needed for the 1% low (`window_capacity / 100`)
    pub fn low_percentile_sample_count(&self) -> usize {
        self.low_percentile_samples
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Read-only view of the sample window
    pub fn window(&self) -> &SlidingWindow<Sample> {
        &self.window
    }

    /// Read-only view of the histogram
    pub fn histogram(&self) -> &FrequencyHistogram<Sample> {
        &self.histogram
    }

    /// Current length of the ranked prefix scratch buffer
    pub fn ranked_buffer_len(&self) -> usize {
        self.ranked.len()
    }

    fn evict_oldest(&mut self) {
        let evicted = self.window.pop_front();
        self.window_sum -= i64::from(evicted);
        self.histogram.remove_sample(evicted);
    }

    fn update_parameters(&mut self) {
        self.low_percentile_samples = self.config.low_percentile_sample_count();
        self.grow_ranked(self.low_percentile_samples + 1);
    }

    /// Never shrinks
    fn grow_ranked(&mut self, len: usize) {
        if len > self.ranked.len() {
            self.ranked.resize(len, 0);
        }
    }
}

/// Convert a frame interval in seconds to a frames-per-second sample
///
/// Out-of-range results saturate: `+inf` to `Sample::MAX`, `-inf` to
/// `Sample::MIN`, NaN to 0.
pub fn sample_from_elapsed(elapsed_seconds: f64) -> Sample {
    math::round(1.0 / elapsed_seconds) as Sample
}

#[inline]
fn to_sample(value: f64) -> Sample {
    math::round(value) as Sample
}

#[cfg(feature = "tracing")]
fn warn_on_bad_interval(elapsed_seconds: f64) {
    if !(elapsed_seconds > 0.0 && elapsed_seconds.is_finite()) {
        tracing::warn!(elapsed_seconds, "tick interval is not a positive finite duration");
    }
}

impl Sketch for FrameMonitor {
    /// Elapsed seconds since the previous tick
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.tick(*item);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        let sample = core::mem::size_of::<Sample>();
        // Approximate: BTreeMap node overhead is not counted
        let entry = sample + core::mem::size_of::<u32>();

        core::mem::size_of::<Self>()
            + self.window.capacity() * sample
            + self.histogram.distinct() * entry
            + self.ranked.capacity() * sample
    }

    fn count(&self) -> u64 {
        self.window.len() as u64
    }
}

// ============================================================================
// Tests
// ============================================================================
