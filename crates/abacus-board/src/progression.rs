//! Directed inclusive index ranges.

use std::ops::RangeInclusive;

/// An inclusive range of indices walked from `first` to `last`.
///
/// The direction follows the bounds: `Progression::new(2, 5)` covers
/// 2, 3, 4, 5 and `Progression::new(5, 2)` covers 5, 4, 3, 2. Converting
/// from `5..=2` therefore gives the descending walk, not an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    first: usize,
    last: usize,
}

impl Progression {
    /// A progression from `first` to `last`, in whichever direction they imply.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// A descending progression from `first` down to `last`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `first < last`.
    #[must_use]
    pub fn down_to(first: usize, last: usize) -> Self {
        debug_assert!(first >= last, "down_to({first}, {last}) would ascend");
        Self::new(first, last)
    }

    /// The starting index.
    #[must_use]
    pub const fn first(&self) -> usize {
        self.first
    }

    /// The final index.
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }

    /// True when walking upwards, including the single-index case.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.first <= self.last
    }

    /// True if `index` lies between the two bounds, inclusive.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (low, high) = if self.is_ascending() {
            (self.first, self.last)
        } else {
            (self.last, self.first)
        };
        (low..=high).contains(&index)
    }
}

impl From<RangeInclusive<usize>> for Progression {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (first, last) = range.into_inner();
        Self::new(first, last)
    }
}
