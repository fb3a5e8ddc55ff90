//! # Framestats
//!
//! Real-time frame statistics over a sliding window, for live performance
//! overlays.
//!
//! Each render tick supplies one sample (usually frames per second derived
//! from the tick interval). After every tick the monitor reports the current
//! sample, the windowed average, and the "1% low" and "0.1% low" quantiles,
//! with bounded memory and no per-tick sorting.
//!
//! ## Building Blocks
//!
//! - **Sliding Window**: fixed-capacity circular FIFO of recent samples
//! - **Frequency Histogram**: clamped value -> count table answering
//!   "k smallest values" queries in O(k)
//! - **Frame Monitor**: pairs the two with a running sum and interpolated
//!   low quantiles
//!
//! ## Quick Start
//!
//! ```rust
//! use framestats::prelude::*;
//!
//! let mut monitor = FrameMonitor::new();
//!
//! // Host render loop
//! for elapsed in [0.016, 0.017, 0.016, 0.050] {
//!     monitor.tick(elapsed);
//! }
//!
//! let stats = monitor.snapshot();
//! println!(
//!     "{} fps (avg {}, 1% low {}, 0.1% low {})",
//!     stats.current, stats.average, stats.one_percent_low, stats.zero_point_one_percent_low
//! );
//! assert_eq!(stats.zero_point_one_percent_low, 20);
//! ```
//!
//! ## Contracts
//!
//! Misuse of the building blocks (pushing onto a full window, popping an
//! empty one, removing a sample that was never added, asking for more ranked
//! values than are live) panics immediately. The monitor never triggers
//! these itself.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of configuration and snapshots
//! - `tracing`: Emit `tracing` events on configuration changes and bad tick
//!   intervals

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod histogram;
pub mod monitor;
pub mod window;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::histogram::FrequencyHistogram;
    pub use crate::monitor::{FrameMonitor, FrameStats, MonitorConfig, Sample};
    pub use crate::window::SlidingWindow;
}

pub use histogram::FrequencyHistogram;
pub use monitor::{FrameMonitor, FrameStats, MonitorConfig};
pub use window::SlidingWindow;
