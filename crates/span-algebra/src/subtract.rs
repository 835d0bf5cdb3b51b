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

//! # Ordered Subtraction
//!
//! Removes a merged sequence of subtrahend spans from a merged sequence of
//! super spans with a single coordinated sweep over both.
//!
//! Each subtrahend `T` is located relative to the current super `S` by
//! classifying both of its corners into one of five zones (`Zone`). The pair
//! of zones decides how `T` carves `S` (`Outcome`):
//!
//! | start zone        | end zone          | outcome     |
//! |-------------------|-------------------|-------------|
//! | any               | Left / LeftEdge   | `Precedes`  |
//! | RightEdge / Right | any               | `Follows`   |
//! | Inside            | Inside            | `BothSides` |
//! | Inside            | RightEdge / Right | `LeftOnly`  |
//! | Left / LeftEdge   | Inside            | `RightOnly` |
//! | Left / LeftEdge   | RightEdge / Right | `Covered`   |
//!
//! Remainders reuse the subtrahend's corners as their new edges, so the
//! output stays half-open: `[S.start, T.start)` on the left and
//! `[T.end, S.end)` on the right.

use span_algebra_core::{
    algorithm::{equals, is_merged},
    span::{Corner, Span},
};
use tracing::trace;

/// Position of a single corner relative to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    /// Strictly before the start.
    Left,
    /// Exactly at the start.
    LeftEdge,
    /// Strictly between start and end.
    Inside,
    /// Exactly at the end.
    RightEdge,
    /// Strictly after the end.
    Right,
}

impl Zone {
    #[inline]
    fn of<C>(corner: &C, span: &Span<C>) -> Self
    where
        C: Corner,
    {
        if corner.before(span.start()) {
            Zone::Left
        } else if equals(corner, span.start()) {
            Zone::LeftEdge
        } else if corner.before(span.end()) {
            Zone::Inside
        } else if equals(corner, span.end()) {
            Zone::RightEdge
        } else {
            Zone::Right
        }
    }
}

/// How a subtrahend carves the current super span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Ends at or before the super's start; the super is untouched.
    Precedes,
    /// Starts at or after the super's end; the super is untouched.
    Follows,
    /// Strictly inside; leaves a left and a right remainder.
    BothSides,
    /// Cuts off the super's tail; leaves a left remainder.
    LeftOnly,
    /// Cuts off the super's head; leaves a right remainder.
    RightOnly,
    /// Covers the whole super.
    Covered,
}

impl Outcome {
    #[inline]
    fn classify<C>(current: &Span<C>, subtrahend: &Span<C>) -> Self
    where
        C: Corner,
    {
        let start = Zone::of(subtrahend.start(), current);
        let end = Zone::of(subtrahend.end(), current);

        match (start, end) {
            (_, Zone::Left | Zone::LeftEdge) => Outcome::Precedes,
            (Zone::RightEdge | Zone::Right, _) => Outcome::Follows,
            (Zone::Inside, Zone::Inside) => Outcome::BothSides,
            (Zone::Inside, _) => Outcome::LeftOnly,
            (_, Zone::Inside) => Outcome::RightOnly,
            _ => Outcome::Covered,
        }
    }
}

/// Returns the parts of `supers` not covered by any of `subtrahends`.
///
/// Both inputs must be merged sequences (positive, sorted, pairwise disjoint
/// and non-adjacent), as produced by [`crate::merge::merge`]. The output is
/// again sorted and maximal; it is empty when nothing survives.
///
/// Runs in time linear in the number of supers, subtrahends and produced
/// fragments. A subtrahend is only passed once its end lies at or before the
/// current super's end, so a single subtrahend may carve several supers.
///
/// # Panics
///
/// In debug builds, panics if either input is not merged.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::subtract::subtract_ordered;
/// # use span_algebra::Span;
/// let supers = [Span::new(2i64, 10), Span::new(20, 100)];
/// let subtrahends = [Span::new(0, 1), Span::new(11, 14), Span::new(30, 40), Span::new(50, 60)];
///
/// assert_eq!(
///     subtract_ordered(&supers, &subtrahends),
///     vec![Span::new(2, 10), Span::new(20, 30), Span::new(40, 50), Span::new(60, 100)]
/// );
/// ```
pub fn subtract_ordered<C>(supers: &[Span<C>], subtrahends: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    debug_assert!(
        is_merged(supers),
        "called `subtract_ordered` with super spans that are not merged"
    );
    debug_assert!(
        is_merged(subtrahends),
        "called `subtract_ordered` with subtrahend spans that are not merged"
    );

    let mut result = Vec::with_capacity(supers.len());
    let mut cursor = 0usize;

    for super_span in supers {
        let mut remainder = Some(super_span.clone());

        while let Some(current) = remainder.take() {
            let Some(subtrahend) = subtrahends.get(cursor) else {
                result.push(current);
                break;
            };

            let outcome = Outcome::classify(&current, subtrahend);
            trace!(?outcome, cursor, "classified subtrahend");

            match outcome {
                Outcome::Precedes => {
                    cursor += 1;
                    remainder = Some(current);
                }
                Outcome::Follows => {
                    result.push(current);
                }
                Outcome::BothSides => {
                    let (start, end) = current.into_parts();
                    result.push(Span::new(start, subtrahend.start().clone()));
                    remainder = Some(Span::new(subtrahend.end().clone(), end));
                    cursor += 1;
                }
                Outcome::LeftOnly => {
                    if !current.end().before(subtrahend.end()) {
                        cursor += 1;
                    }
                    let (start, _) = current.into_parts();
                    result.push(Span::new(start, subtrahend.start().clone()));
                }
                Outcome::RightOnly => {
                    let (_, end) = current.into_parts();
                    remainder = Some(Span::new(subtrahend.end().clone(), end));
                    cursor += 1;
                }
                Outcome::Covered => {
                    if !current.end().before(subtrahend.end()) {
                        cursor += 1;
                    }
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(s: i64, e: i64) -> Span<i64> {
        Span::new(s, e)
    }

    fn spans(pairs: &[(i64, i64)]) -> Vec<Span<i64>> {
        pairs.iter().copied().map(Span::from).collect()
    }

    #[test]
    fn test_zone_of() {
        let s = sp(0, 10);
        assert_eq!(Zone::of(&-1, &s), Zone::Left);
        assert_eq!(Zone::of(&0, &s), Zone::LeftEdge);
        assert_eq!(Zone::of(&5, &s), Zone::Inside);
        assert_eq!(Zone::of(&10, &s), Zone::RightEdge);
        assert_eq!(Zone::of(&11, &s), Zone::Right);
    }

    #[test]
    fn test_classify() {
        let s = sp(0, 10);
        assert_eq!(Outcome::classify(&s, &sp(-5, -1)), Outcome::Precedes);
        assert_eq!(Outcome::classify(&s, &sp(-5, 0)), Outcome::Precedes);
        assert_eq!(Outcome::classify(&s, &sp(10, 15)), Outcome::Follows);
        assert_eq!(Outcome::classify(&s, &sp(12, 15)), Outcome::Follows);
        assert_eq!(Outcome::classify(&s, &sp(4, 6)), Outcome::BothSides);
        assert_eq!(Outcome::classify(&s, &sp(4, 10)), Outcome::LeftOnly);
        assert_eq!(Outcome::classify(&s, &sp(4, 12)), Outcome::LeftOnly);
        assert_eq!(Outcome::classify(&s, &sp(0, 6)), Outcome::RightOnly);
        assert_eq!(Outcome::classify(&s, &sp(-3, 6)), Outcome::RightOnly);
        assert_eq!(Outcome::classify(&s, &sp(0, 10)), Outcome::Covered);
        assert_eq!(Outcome::classify(&s, &sp(-3, 12)), Outcome::Covered);
    }

    #[test]
    fn test_no_subtrahends_keeps_supers() {
        let supers = spans(&[(0, 3), (5, 8)]);
        assert_eq!(subtract_ordered(&supers, &[]), supers);
    }

    #[test]
    fn test_no_supers() {
        assert!(subtract_ordered(&[], &spans(&[(0, 3)])).is_empty());
    }

    #[test]
    fn test_partial_overlaps_and_splits() {
        let supers = spans(&[(-4, -3), (0, 20), (21, 25), (26, 30), (31, 35)]);
        let subtrahends = spans(&[(-1, 2), (4, 8), (10, 12), (19, 22)]);

        assert_eq!(
            subtract_ordered(&supers, &subtrahends),
            spans(&[(-4, -3), (2, 4), (8, 10), (12, 19), (22, 25), (26, 30), (31, 35)])
        );
    }

    #[test]
    fn test_subtrahend_in_gap_between_supers() {
        let supers = spans(&[(2, 10), (20, 100)]);
        let subtrahends = spans(&[(0, 1), (11, 14), (30, 40), (50, 60)]);

        assert_eq!(
            subtract_ordered(&supers, &subtrahends),
            spans(&[(2, 10), (20, 30), (40, 50), (60, 100)])
        );
    }

    #[test]
    fn test_one_subtrahend_spans_several_supers() {
        let supers = spans(&[(-4, -3), (0, 3), (5, 8), (10, 15)]);

        assert_eq!(
            subtract_ordered(&supers, &spans(&[(-2, 14)])),
            spans(&[(-4, -3), (14, 15)])
        );
        assert!(subtract_ordered(&supers, &spans(&[(-5, 16)])).is_empty());
    }

    #[test]
    fn test_coincident_edges() {
        // Exact cover
        assert!(subtract_ordered(&spans(&[(0, 10)]), &spans(&[(0, 10)])).is_empty());
        // Shared start
        assert_eq!(
            subtract_ordered(&spans(&[(0, 10)]), &spans(&[(0, 4)])),
            spans(&[(4, 10)])
        );
        // Shared end
        assert_eq!(
            subtract_ordered(&spans(&[(0, 10)]), &spans(&[(6, 10)])),
            spans(&[(0, 6)])
        );
        // Touching from outside leaves the super intact
        assert_eq!(
            subtract_ordered(&spans(&[(0, 10)]), &spans(&[(-5, 0), (10, 15)])),
            spans(&[(0, 10)])
        );
    }

    #[test]
    fn test_subtrahend_ending_at_super_end_is_passed() {
        let supers = spans(&[(0, 10), (12, 20)]);
        let subtrahends = spans(&[(5, 10), (14, 16)]);

        assert_eq!(
            subtract_ordered(&supers, &subtrahends),
            spans(&[(0, 5), (12, 14), (16, 20)])
        );
    }

    #[test]
    fn test_many_holes_in_one_super() {
        let supers = spans(&[(0, 100)]);
        let subtrahends = spans(&[(10, 20), (30, 40), (50, 60), (70, 80), (90, 100)]);

        assert_eq!(
            subtract_ordered(&supers, &subtrahends),
            spans(&[(0, 10), (20, 30), (40, 50), (60, 70), (80, 90)])
        );
    }

    #[test]
    fn test_subtrahends_exhausted_mid_super() {
        let supers = spans(&[(0, 10), (20, 30), (40, 50)]);
        let subtrahends = spans(&[(2, 3)]);

        assert_eq!(
            subtract_ordered(&supers, &subtrahends),
            spans(&[(0, 2), (3, 10), (20, 30), (40, 50)])
        );
    }
}
