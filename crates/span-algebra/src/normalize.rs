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

//! Filtering of degenerate spans and ordering by start corner.

use span_algebra_core::{
    algorithm::compare,
    span::{Corner, Span},
};

/// Retains exactly the positive spans (`start.before(end)`), in input order.
///
/// Zero-length and inverted spans are dropped silently; they are not errors.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::normalize::filter_positive;
/// # use span_algebra::Span;
/// let spans = [Span::new(1i64, 4), Span::new(2, 1), Span::new(-2, -1), Span::new(5, 5)];
/// assert_eq!(filter_positive(&spans), vec![Span::new(1, 4), Span::new(-2, -1)]);
/// ```
pub fn filter_positive<C>(spans: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    spans.iter().filter(|s| s.is_positive()).cloned().collect()
}

/// Returns a copy of `spans` stable-sorted ascending by start.
///
/// `before` is the only comparator used. Spans with equal starts keep their
/// relative input order.
pub fn sort_by_start<C>(spans: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    let mut sorted = spans.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Drops the non-positive spans and sorts the survivors by start.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::normalize::normalize_and_sort;
/// # use span_algebra::Span;
/// let spans = [Span::new(7i64, 8), Span::new(3, 3), Span::new(1, 4)];
/// assert_eq!(normalize_and_sort(&spans), vec![Span::new(1, 4), Span::new(7, 8)]);
/// ```
pub fn normalize_and_sort<C>(spans: &[Span<C>]) -> Vec<Span<C>>
where
    C: Corner,
{
    let mut positives = filter_positive(spans);
    sort_in_place(&mut positives);
    positives
}

#[inline]
fn sort_in_place<C>(spans: &mut [Span<C>])
where
    C: Corner,
{
    spans.sort_by(|a, b| compare(a.start(), b.start()));
}
