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

//! # Span Algebra
//!
//! Measures the region covered by a set of *super* spans after removing a
//! set of *subtrahend* spans, over any ordered domain implementing the
//! `Corner` and `Length` contracts from `span_algebra_core`.
//!
//! ## Pipeline
//!
//! ```text
//! categorized spans
//!     -> split            (supers, subtrahends)
//!     -> normalize + sort  x2  (drop degenerate spans)
//!     -> merge             x2  (minimal disjoint cover)
//!     -> subtract          (ordered sweep)
//!     -> aggregate         (combined length, or caller fallback)
//! ```
//!
//! ## Modules
//!
//! - `normalize`: Filtering of non-positive spans and ordering by start.
//! - `merge`: Joining of overlapping or touching spans.
//! - `split`: Partitioning of categorized input into the two groups.
//! - `subtract`: The ordered two-sequence subtraction sweep.
//! - `aggregate`: Length folding with explicit empty-case handling.
//! - `error`: Error type for checked aggregation.
//!
//! ## Example
//!
//! ```rust
//! use span_algebra::{subtract_from_super_spans, CategorizedSpan};
//!
//! let spans = [
//!     CategorizedSpan::super_span(0i64, 20),
//!     CategorizedSpan::subtrahend(4, 8),
//!     CategorizedSpan::subtrahend(18, 30),
//! ];
//! // [0, 4) and [8, 18) survive
//! assert_eq!(subtract_from_super_spans(&spans, 0), 14);
//! ```

pub mod aggregate;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod split;
pub mod subtract;

pub use error::AggregateError;
pub use span_algebra_core::span::{CategorizedSpan, Corner, Length, Span};

use tracing::debug;

/// Removes `subtrahends` from `supers` and returns the surviving spans.
///
/// Both groups may be unsorted, overlapping and contain degenerate spans;
/// each is normalized and merged before the subtraction sweep.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::{subtract_spans, Span};
/// let supers = [Span::new(5i64, 8), Span::new(0, 3), Span::new(10, 15), Span::new(2, 2)];
/// let subtrahends = [Span::new(-2, 14)];
/// assert_eq!(subtract_spans(&supers, &subtrahends), vec![Span::new(14, 15)]);
/// ```
pub fn subtract_spans<C>(supers: &[Span<C>], subtrahends: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    let supers = merge::merge(supers);
    let subtrahends = merge::merge(subtrahends);
    debug!(
        supers = supers.len(),
        subtrahends = subtrahends.len(),
        "merged span groups"
    );

    let subtracted = subtract::subtract_ordered(&supers, &subtrahends);
    debug!(fragments = subtracted.len(), "subtracted spans");
    subtracted
}

/// Splits `spans` by category and removes the subtrahends from the supers.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::{find_subtracted_spans, CategorizedSpan, Span};
/// let spans = [
///     CategorizedSpan::super_span(2i64, 10),
///     CategorizedSpan::subtrahend(11, 14),
///     CategorizedSpan::super_span(20, 100),
///     CategorizedSpan::subtrahend(30, 40),
/// ];
/// assert_eq!(
///     find_subtracted_spans(&spans),
///     vec![Span::new(2, 10), Span::new(20, 30), Span::new(40, 100)]
/// );
/// ```
pub fn find_subtracted_spans<C>(spans: &[CategorizedSpan<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    let (supers, subtrahends) = split::split_by_category(spans);
    debug!(
        spans = spans.len(),
        supers = supers.len(),
        subtrahends = subtrahends.len(),
        "split spans by category"
    );
    subtract_spans(&supers, &subtrahends)
}

/// Total length of the super spans left after removing the subtrahends.
///
/// Returns `empty_value` when nothing survives, including when there are no
/// positive super spans at all.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::{subtract_from_super_spans, CategorizedSpan};
/// let covered = [
///     CategorizedSpan::super_span(0i64, 3),
///     CategorizedSpan::subtrahend(-5, 16),
/// ];
/// assert_eq!(subtract_from_super_spans(&covered, 0), 0);
/// ```
pub fn subtract_from_super_spans<C>(
    spans: &[CategorizedSpan<C>],
    empty_value: C::Length,
) -> C::Length
where
    C: Corner,
{
    let subtracted = find_subtracted_spans(spans);
    aggregate::total_length(&subtracted, empty_value)
}
