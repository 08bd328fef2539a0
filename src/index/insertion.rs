//! Binary-search insertion into a frequency-sorted occurrence list.
//!
//! Occurrence lists are kept in descending frequency order. A new
//! occurrence is appended to its list and then moved into place with
//! [`insert_last_occurrence`]. Finding the slot is split out as the pure
//! [`find_insertion_point`], which also reports the midpoints it probed.
//!
//! The slot among equal frequencies is decided by the comparison at the
//! last probed midpoint alone, so a new occurrence does not always land
//! after every existing occurrence of the same frequency:
//!
//! ```
//! use quiver::index::insertion::insert_last_occurrence;
//! use quiver::index::Occurrence;
//!
//! let mut list = vec![
//!     Occurrence::new("a", 5),
//!     Occurrence::new("b", 3),
//!     Occurrence::new("c", 3),
//!     Occurrence::new("d", 1),
//!     Occurrence::new("new", 3),
//! ];
//!
//! // Probes index 1, finds frequency 3 and inserts right after it.
//! assert_eq!(insert_last_occurrence(&mut list), Some(vec![1]));
//! let order: Vec<&str> = list.iter().map(|o| o.document.as_str()).collect();
//! assert_eq!(order, vec!["a", "b", "new", "c", "d"]);
//! ```

use log::trace;

use crate::index::occurrence::Occurrence;

/// Where a new occurrence belongs, and how the search got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    /// Index at which the occurrence is to be inserted.
    pub index: usize,
    /// Midpoints probed by the binary search, in order.
    pub probes: Vec<usize>,
}

/// Find where an occurrence of `frequency` belongs in `sorted`.
///
/// `sorted` must be in descending frequency order. The search narrows
/// `high` when the probed frequency is lower than `frequency` and `low`
/// when it is higher, and stops at the first equal frequency. With `m` the
/// last probed midpoint, the result is `m + 1` when
/// `frequency <= sorted[m].frequency` and `m` otherwise.
///
/// An empty `sorted` yields index 0 and no probes.
pub fn find_insertion_point(sorted: &[Occurrence], frequency: u32) -> InsertionPoint {
    let mut probes = Vec::new();
    let mut low = 0;
    // Exclusive upper bound; the window is `low..high`.
    let mut high = sorted.len();
    let mut middle = 0;

    while low < high {
        middle = (low + high - 1) / 2;
        probes.push(middle);

        let probed = sorted[middle].frequency;
        if probed == frequency {
            break;
        }
        if probed > frequency {
            low = middle + 1;
        } else {
            high = middle;
        }
    }

    let index = match sorted.get(middle) {
        Some(occurrence) if frequency <= occurrence.frequency => middle + 1,
        Some(_) => middle,
        None => 0,
    };

    InsertionPoint { index, probes }
}

/// Move the last occurrence of `occurrences` into its sorted position.
///
/// All but the last element must already be in descending frequency order.
/// Returns the midpoints probed while searching, or `None` when the list
/// holds fewer than two elements and there is nothing to search.
pub fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occurrences.len() < 2 {
        return None;
    }

    let last = occurrences.len() - 1;
    let point = find_insertion_point(&occurrences[..last], occurrences[last].frequency);
    trace!(
        "inserting {} at {} after probing {:?}",
        occurrences[last], point.index, point.probes
    );

    if point.index != last {
        if let Some(occurrence) = occurrences.pop() {
            occurrences.insert(point.index, occurrence);
        }
    }

    Some(point.probes)
}
