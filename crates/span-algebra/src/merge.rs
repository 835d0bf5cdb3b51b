// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Coalescing of sorted spans into a minimal disjoint cover.

use crate::normalize::normalize_and_sort;
use span_algebra_core::{
    algorithm::is_sorted_by_start,
    span::{Corner, Span},
};

/// Joins overlapping or touching spans of an already sorted sequence.
///
/// A span is absorbed into the running one whenever its start does not lie
/// strictly after the running end. Touching endpoints count as overlap, so
/// the output never contains two adjacent spans.
///
/// # Panics
///
/// In debug builds, panics if `sorted` is not sorted by start.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::merge::merge_sorted;
/// # use span_algebra::Span;
/// let merged = merge_sorted(vec![Span::new(0i64, 3), Span::new(3, 7), Span::new(9, 10)]);
/// assert_eq!(merged, vec![Span::new(0, 7), Span::new(9, 10)]);
/// ```
pub fn merge_sorted<C>(sorted: Vec<Span<C>>) -> Vec<Span<C>>
where
    C: Corner,
{
    debug_assert!(
        is_sorted_by_start(&sorted),
        "called `merge_sorted` with spans that are not sorted by start"
    );

    let mut merged = Vec::with_capacity(sorted.len());
    let mut spans = sorted.into_iter();
    let Some(first) = spans.next() else {
        return merged;
    };

    let (mut start, mut end) = first.into_parts();
    for span in spans {
        let (next_start, next_end) = span.into_parts();
        if end.before(&next_start) {
            merged.push(Span::new(start, end));
            start = next_start;
            end = next_end;
        } else if end.before(&next_end) {
            end = next_end;
        }
    }
    merged.push(Span::new(start, end));

    merged
}

/// Normalizes, sorts and joins arbitrary spans.
///
/// The result is the union of all positive input spans, expressed as sorted,
/// pairwise disjoint and non-adjacent spans.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::merge::merge;
/// # use span_algebra::Span;
/// let spans = [Span::new(6i64, 9), Span::new(-1, 2), Span::new(4, 4), Span::new(0, 3)];
/// assert_eq!(merge(&spans), vec![Span::new(-1, 3), Span::new(6, 9)]);
/// ```
pub fn merge<C>(spans: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    merge_sorted(normalize_and_sort(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use span_algebra_core::algorithm::is_merged;

    fn sp(s: i64, e: i64) -> Span<i64> {
        Span::new(s, e)
    }

    #[test]
    fn test_merge_sorted_empty() {
        assert!(merge_sorted::<i64>(vec![]).is_empty());
    }

    #[test]
    fn test_merge_sorted_single() {
        assert_eq!(merge_sorted(vec![sp(1, 2)]), vec![sp(1, 2)]);
    }

    #[test]
    fn test_merge_sorted_touching() {
        assert_eq!(merge_sorted(vec![sp(0, 5), sp(5, 10)]), vec![sp(0, 10)]);
    }

    #[test]
    fn test_merge_sorted_contained_keeps_further_end() {
        assert_eq!(merge_sorted(vec![sp(0, 10), sp(2, 4)]), vec![sp(0, 10)]);
        assert_eq!(merge_sorted(vec![sp(0, 10), sp(2, 10)]), vec![sp(0, 10)]);
    }

    #[test]
    fn test_merge_sorted_gap() {
        assert_eq!(
            merge_sorted(vec![sp(0, 5), sp(6, 10)]),
            vec![sp(0, 5), sp(6, 10)]
        );
    }

    #[test]
    fn test_merge_unsorted_input() {
        let a = sp(-5, -3);
        let b = sp(-1, 2);
        let c = sp(0, 3);
        let d = sp(3, 7);
        let e = sp(6, 9);
        let f = sp(11, 12);

        assert_eq!(merge(&[f, e, d, a, b, c]), vec![a, sp(-1, 9), f]);
        assert_eq!(merge(&[c, c, e, d, b, c, b]), vec![sp(-1, 9)]);
    }

    #[test]
    fn test_merge_drops_degenerate() {
        assert!(merge(&[sp(2, 2), sp(5, 1)]).is_empty());
        assert_eq!(merge(&[sp(2, 2), sp(1, 3)]), vec![sp(1, 3)]);
    }

    #[test]
    fn test_merge_output_is_merged_and_idempotent() {
        let merged = merge(&[sp(10, 12), sp(0, 4), sp(3, 6), sp(8, 10), sp(20, 21)]);
        assert_eq!(merged, vec![sp(0, 6), sp(8, 12), sp(20, 21)]);
        assert!(is_merged(&merged));
        assert_eq!(merge(&merged), merged);
    }
}
