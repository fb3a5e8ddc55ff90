//! Clamped frequency histogram
//!
//! Counts occurrences of each distinct value in an ordered map so the
//! smallest live values can be listed without sorting the whole window.

use crate::traits::{ConfigError, RankedSketch, Sketch};

#[cfg(feature = "std")]
use std::collections::BTreeMap;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;

const ERROR_SAMPLE_NOT_FOUND: &str = "sample not found";
const ERROR_OUTPUT_TOO_SMALL: &str = "output array too small";
const ERROR_NOT_ENOUGH_DATA: &str = "not enough data in histogram";

/// Frequency table over a clamped value range
///
/// Values outside `[minimum, maximum]` are saturated to the nearest bound
/// before they are counted, so the number of distinct entries never exceeds
/// the size of the range.
///
/// - `add_sample` / `remove_sample`: O(log d), d = distinct live values
/// - `write_ranked_prefix`: O(k) for the k smallest values
///
/// # Example
///
/// ```
/// use framestats::histogram::FrequencyHistogram;
///
/// let mut histogram = FrequencyHistogram::new(0, 999).unwrap();
/// for fps in [60, 30, 60, 1200] {
///     histogram.add_sample(fps);
/// }
///
/// let mut lowest = [0; 3];
/// histogram.write_ranked_prefix(&mut lowest, 3);
/// assert_eq!(lowest, [30, 60, 60]);
///
/// // 1200 was counted as the upper bound
/// assert_eq!(histogram.count_of(999), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyHistogram<T: Ord + Copy> {
    /// Clamped value -> occurrences, only entries with a positive count
    entries: BTreeMap<T, u32>,
    /// Total occurrences across all entries
    total: u64,
    /// Lower clamp bound
    minimum: T,
    /// Upper clamp bound
    maximum: T,
}

impl<T: Ord + Copy + Into<i64>> FrequencyHistogram<T> {
    /// Create an empty histogram clamping to `[minimum, maximum]`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] unless `minimum < maximum`.
    pub fn new(minimum: T, maximum: T) -> Result<Self, ConfigError> {
        if minimum >= maximum {
            return Err(ConfigError::InvalidRange {
                minimum: minimum.into(),
                maximum: maximum.into(),
            });
        }

        Ok(Self::from_valid_range(minimum, maximum))
    }
}

impl<T: Ord + Copy> FrequencyHistogram<T> {
    /// Caller guarantees `minimum < maximum`
    pub(crate) fn from_valid_range(minimum: T, maximum: T) -> Self {
        debug_assert!(minimum < maximum);
        Self {
            entries: BTreeMap::new(),
            total: 0,
            minimum,
            maximum,
        }
    }

    /// Lower clamp bound
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// Upper clamp bound
    pub fn maximum(&self) -> T {
        self.maximum
    }

    /// Total number of live samples
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct (clamped) live values
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// The value a sample is counted under
    #[inline]
    pub fn clamp(&self, sample: T) -> T {
        sample.clamp(self.minimum, self.maximum)
    }

    /// Occurrences of `value` after clamping
    pub fn count_of(&self, value: T) -> u32 {
        self.entries
            .get(&self.clamp(value))
            .copied()
            .unwrap_or(0)
    }

    /// Count one occurrence of `sample`, O(log d)
    pub fn add_sample(&mut self, sample: T) {
        let sample = self.clamp(sample);
        *self.entries.entry(sample).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one occurrence of `sample`, O(log d)
    ///
    /// The entry is dropped once its count reaches zero.
    ///
    /// # Panics
    ///
    /// Panics if no occurrence of the clamped value is live.
    pub fn remove_sample(&mut self, sample: T) {
        let sample = self.clamp(sample);
        let remaining = match self.entries.get_mut(&sample) {
            Some(count) => {
                *count -= 1;
                *count
            }
            None => panic!("{}", ERROR_SAMPLE_NOT_FOUND),
        };
        if remaining == 0 {
            self.entries.remove(&sample);
        }
        self.total -= 1;
    }

    /// Write the `count` smallest live values into `output[..count]`,
    /// ascending and with duplicates, O(count)
    ///
    /// # Panics
    ///
    /// Panics if `output.len() < count` or `count > total()`.
    pub fn write_ranked_prefix(&self, output: &mut [T], count: usize) {
        assert!(count <= output.len(), "{}", ERROR_OUTPUT_TOO_SMALL);
        assert!(count as u64 <= self.total, "{}", ERROR_NOT_ENOUGH_DATA);

        let mut index = 0;
        for (&value, &occurrences) in &self.entries {
            if index == count {
                break;
            }
            let take = (occurrences as usize).min(count - index);
            output[index..index + take].fill(value);
            index += take;
        }
    }

    /// Drop every entry, O(d)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }

    /// Iterate `(value, occurrences)` in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        self.entries.iter().map(|(&value, &count)| (value, count))
    }
}

impl<T: Ord + Copy + core::fmt::Debug> Sketch for FrequencyHistogram<T> {
    type Item = T;

    fn update(&mut self, item: &Self::Item) {
        self.add_sample(*item);
    }

    fn clear(&mut self) {
        FrequencyHistogram::clear(self);
    }

    fn size_bytes(&self) -> usize {
        // Approximate: BTreeMap node overhead is not counted
        core::mem::size_of::<Self>()
            + self.entries.len() * (core::mem::size_of::<T>() + core::mem::size_of::<u32>())
    }

    fn count(&self) -> u64 {
        self.total
    }
}

impl<T: Ord + Copy + core::fmt::Debug> RankedSketch for FrequencyHistogram<T> {
    type Value = T;

    fn write_ranked_prefix(&self, output: &mut [T], count: usize) {
        FrequencyHistogram::write_ranked_prefix(self, output, count);
    }

    fn min(&self) -> Option<T> {
        self.entries.keys().next().copied()
    }

    fn max(&self) -> Option<T> {
        self.entries.keys().next_back().copied()
    }
}

#[cfg(feature = "serde")]
impl<T: Ord + Copy + serde::Serialize> serde::Serialize for FrequencyHistogram<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("FrequencyHistogram", 4)?;
        state.serialize_field("minimum", &self.minimum)?;
        state.serialize_field("maximum", &self.maximum)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("entries", &self.entries)?;
        state.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
