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

//! Partitioning of categorized spans into super and subtrahend groups.

use span_algebra_core::span::{CategorizedSpan, Corner, Span};

/// Splits a mixed sequence into `(supers, subtrahends)`.
///
/// Single pass and order-preserving within each group. Nothing is sorted or
/// filtered here.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::split::split_by_category;
/// # use span_algebra::{CategorizedSpan, Span};
/// let spans = [
///     CategorizedSpan::super_span(0i64, 20),
///     CategorizedSpan::subtrahend(4, 8),
///     CategorizedSpan::super_span(21, 25),
/// ];
/// let (supers, subtrahends) = split_by_category(&spans);
/// assert_eq!(supers, vec![Span::new(0, 20), Span::new(21, 25)]);
/// assert_eq!(subtrahends, vec![Span::new(4, 8)]);
/// ```
pub fn split_by_category<C>(spans: &[CategorizedSpan<C>]) -> (Vec<Span<C>>, Vec<Span<C>>)
where
    C: Corner,
{
    let mut supers = Vec::new();
    let mut subtrahends = Vec::new();

    for span in spans {
        if span.is_super() {
            supers.push(span.span().clone());
        } else {
            subtrahends.push(span.span().clone());
        }
    }

    (supers, subtrahends)
}
