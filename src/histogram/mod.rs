//! Ranked queries over the live window
//!
//! # Algorithms
//!
//! - [`FrequencyHistogram`]: clamped value -> count table with ordered
//!   prefix extraction
//!
//! # Example
//!
//! ```
//! use framestats::histogram::FrequencyHistogram;
//!
//! let mut histogram = FrequencyHistogram::new(0, 10).unwrap();
//! histogram.add_sample(15); // counted as 10
//! histogram.add_sample(4);
//!
//! let mut lowest = [0; 2];
//! histogram.write_ranked_prefix(&mut lowest, 2);
//! assert_eq!(lowest, [4, 10]);
//!
//! histogram.remove_sample(15);
//! assert_eq!(histogram.total(), 1);
//! ```

mod frequency;

pub use frequency::FrequencyHistogram;
