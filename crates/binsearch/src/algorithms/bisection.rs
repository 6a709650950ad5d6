//! Bisection over sorted numeric sequences.
//!
//! ## Purpose
//!
//! This module implements the search itself: given a sequence sorted in
//! non-decreasing order and a target of the same type, find an index holding
//! the target, or the position at which it would be inserted.
//!
//! ## Design notes
//!
//! * **Half-open window**: The search tracks `[low, high)`, starting at `[0, n)`.
//! * **Signed encoding**: "Not found" is returned as `-1 - insertion_point`,
//!   so every miss is negative and every hit is a valid index.
//! * **Generics**: One implementation serves every numeric element type.
//! * **Allocation-free**: Two `usize` loop variables, nothing else.
//!
//! ## Key concepts
//!
//! ### Loop invariant
//! Every element before `low` is strictly less than the target and every
//! element at or after `high` is strictly greater. When the window closes,
//! `low` is therefore the count of elements strictly less than the target.
//!
//! ### Ties
//! With duplicates, the returned index is whichever equal element the
//! bisection probes first. It is neither guaranteed leftmost nor rightmost.
//!
//! ### Unordered values
//! If `partial_cmp` reports no ordering (a NaN target or element), the search
//! stops and reports "not found" at the current `low`.
//!
//! ## Invariants
//!
//! * Terminates in at most `floor(log2(n)) + 1` probes.
//! * Never indexes outside `0..n`, even for unsorted or empty input.
//!
//! ## Non-goals
//!
//! * This module does not sort or validate its input.
//! * This module does not locate leftmost/rightmost bounds among duplicates.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use num_traits::Num;

// ============================================================================
// Search Outcome
// ============================================================================

/// Typed form of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// An element equal to the target sits at this index.
    Found(usize),

    /// No element equals the target.
    NotFound {
        /// Number of elements strictly less than the target.
        insertion_point: usize,
    },
}

impl SearchOutcome {
    /// Decode the signed representation returned by [`search`].
    #[inline]
    pub fn from_encoded(encoded: isize) -> Self {
        if encoded >= 0 {
            Self::Found(encoded as usize)
        } else {
            Self::NotFound {
                insertion_point: (-1 - encoded) as usize,
            }
        }
    }

    /// Encode as a signed integer: `i` for a hit, `-1 - p` for a miss.
    ///
    /// Returns `None` if the index or insertion point exceeds `isize::MAX`,
    /// which no slice search can produce.
    #[inline]
    pub fn encode(&self) -> Option<isize> {
        match *self {
            Self::Found(index) => isize::try_from(index).ok(),
            Self::NotFound { insertion_point } => isize::try_from(insertion_point)
                .ok()
                .map(|p| -1 - p),
        }
    }

    /// Index of the matching element, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Found(index) => Some(index),
            Self::NotFound { .. } => None,
        }
    }

    /// Index at which the target sits or would be inserted.
    pub fn position(&self) -> usize {
        match *self {
            Self::Found(index) => index,
            Self::NotFound { insertion_point } => insertion_point,
        }
    }

    /// Whether an equal element was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Found(index) => write!(f, "found at index {index}"),
            Self::NotFound { insertion_point } => {
                write!(f, "not found (insertion point {insertion_point})")
            }
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Binary search for `target` in `sequence`, which must be sorted ascending.
///
/// Returns the index of an element equal to `target`, or `-1 - p` where `p`
/// is the insertion point. See the module documentation for tie and NaN
/// behavior.
///
/// ```text
/// search([1, 3, 5, 7, 9], 7) ==  3
/// search([1, 3, 5, 7, 9], 4) == -3   // insertion point 2
/// ```
#[inline]
pub fn search<T>(sequence: &[T], target: T) -> isize
where
    T: Num + PartialOrd + Copy,
{
    let mut low = 0usize;
    let mut high = sequence.len();

    while low < high {
        // floor((low + high) / 2) without overflow
        let mid = low + (high - low) / 2;

        match sequence[mid].partial_cmp(&target) {
            Some(Ordering::Less) => low = mid + 1,
            Some(Ordering::Greater) => high = mid,
            Some(Ordering::Equal) => return mid as isize,
            None => break,
        }
    }

    -1 - low as isize
}

/// Like [`search`], returning a [`SearchOutcome`].
#[inline]
pub fn locate<T>(sequence: &[T], target: T) -> SearchOutcome
where
    T: Num + PartialOrd + Copy,
{
    SearchOutcome::from_encoded(search(sequence, target))
}
