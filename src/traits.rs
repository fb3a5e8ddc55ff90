//! Core traits for windowed statistics
//!
//! Every structure in this crate implements the base [`Sketch`] trait. Structures
//! that can answer ranked queries also implement [`RankedSketch`].

use core::fmt::Debug;

/// Error in a structure or monitor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Window capacity must be at least one sample
    ZeroCapacity,
    /// Clamp range is empty or inverted
    InvalidRange { minimum: i64, maximum: i64 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "window capacity must be positive"),
            ConfigError::InvalidRange { minimum, maximum } => {
                write!(
                    f,
                    "minimum must be less than maximum: minimum {}, maximum {}",
                    minimum, maximum
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Core trait for all per-tick structures
pub trait Sketch: Clone + Debug {
    /// The type of item this structure processes
    type Item: ?Sized;

    /// Feed one item
    fn update(&mut self, item: &Self::Item);

    /// Reset to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of live items
    fn count(&self) -> u64;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Structures that can list their smallest live values in order
pub trait RankedSketch: Sketch {
    /// The value type being ranked
    type Value: Ord + Copy;

    /// Write the `count` smallest live values, ascending and with duplicates,
    /// into `output[..count]`
    ///
    /// # Panics
    ///
    /// Panics if `output` is shorter than `count` or fewer than `count`
    /// values are live.
    fn write_ranked_prefix(&self, output: &mut [Self::Value], count: usize);

    /// Smallest live value
    fn min(&self) -> Option<Self::Value>;

    /// Largest live value
    fn max(&self) -> Option<Self::Value>;
}
