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

//! Reduction of span sequences to a single combined length.

use crate::error::AggregateError;
use num_traits::CheckedAdd;
use span_algebra_core::span::{Corner, Length, Span};

/// Folds the lengths of `spans` with `Length::combine`, left to right.
///
/// Returns `None` for an empty sequence, since `Length` has no identity
/// element.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::aggregate::sum_lengths;
/// # use span_algebra::Span;
/// assert_eq!(sum_lengths(&[Span::new(0i64, 3), Span::new(5, 6)]), Some(4));
/// assert_eq!(sum_lengths::<i64>(&[]), None);
/// ```
pub fn sum_lengths<C>(spans: &[Span<C>]) -> Option<C::Length>
where
    C: Corner,
{
    spans.iter().map(Span::length).reduce(Length::combine)
}

/// Like [`sum_lengths`], but returns `empty_value` when `spans` is empty.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::aggregate::total_length;
/// # use span_algebra::Span;
/// assert_eq!(total_length(&[Span::new(2i64, 4), Span::new(8, 10)], 0), 4);
/// assert_eq!(total_length::<i64>(&[], u64::MAX), u64::MAX);
/// ```
pub fn total_length<C>(spans: &[Span<C>], empty_value: C::Length) -> C::Length
where
    C: Corner,
{
    sum_lengths(spans).unwrap_or(empty_value)
}

/// Sums the lengths of `spans` with overflow detection.
///
/// Uses `CheckedAdd` in place of `Length::combine`, so it is meant for
/// lengths whose `combine` is ordinary addition (the primitive integers).
/// Individual span lengths are computed with `Corner::subtract`; for the
/// primitive corners that cannot overflow, so only the running total is
/// guarded.
///
/// # Errors
///
/// Returns [`AggregateError::Overflow`] naming the first span whose length
/// could not be added to the running total.
///
/// # Examples
///
/// ```rust
/// # use span_algebra::aggregate::checked_total_length;
/// # use span_algebra::{AggregateError, Span};
/// assert_eq!(checked_total_length(&[Span::new(0u8, 200), Span::new(0, 50)], 0), Ok(250));
/// assert_eq!(
///     checked_total_length(&[Span::new(0u8, 200), Span::new(0, 100)], 0),
///     Err(AggregateError::Overflow { index: 1 })
/// );
/// ```
pub fn checked_total_length<C>(
    spans: &[Span<C>],
    empty_value: C::Length,
) -> Result<C::Length, AggregateError>
where
    C: Corner,
    C::Length: CheckedAdd,
{
    let mut lengths = spans.iter().map(Span::length).enumerate();
    let Some((_, first)) = lengths.next() else {
        return Ok(empty_value);
    };

    lengths.try_fold(first, |total, (index, length)| {
        total
            .checked_add(&length)
            .ok_or(AggregateError::Overflow { index })
    })
}
