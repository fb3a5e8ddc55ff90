//! Per-tick frame rate monitoring
//!
//! This module ties the [`SlidingWindow`](crate::window::SlidingWindow) and
//! [`FrequencyHistogram`](crate::histogram::FrequencyHistogram) together into
//! a monitor that reports, after every tick:
//!
//! - the current sample
//! - the average over the window
//! - the 1% low and 0.1% low quantiles of the window
//!
//! # Example
//!
//! ```
//! use framestats::monitor::{FrameMonitor, MonitorConfig};
//!
//! let config = MonitorConfig::default().with_window_capacity(5);
//! let mut monitor = FrameMonitor::with_config(config).unwrap();
//!
//! for fps in [10, 20, 30, 40, 50] {
//!     monitor.push_sample(fps);
//! }
//! assert_eq!(monitor.average(), 30);
//!
//! // The oldest sample (10) is evicted first
//! monitor.push_sample(60);
//! assert_eq!(monitor.average(), 40);
//! assert_eq!(monitor.one_percent_low(), 20);
//! ```

mod config;
mod fps;
mod quantile;

/// One tick's measurement, e.g. a rounded frames-per-second value
pub type Sample = i32;

pub use config::{MonitorConfig, DEFAULT_HISTOGRAM_MAXIMUM, DEFAULT_WINDOW_CAPACITY};
pub use fps::{sample_from_elapsed, FrameMonitor, FrameStats, ONE_PERCENT, ZERO_POINT_ONE_PERCENT};
pub use quantile::RankPosition;
