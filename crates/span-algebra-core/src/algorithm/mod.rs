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

//! # Order Predicates
//!
//! Comparisons derived solely from `Corner::before`. The engine never
//! assumes an equality capability on corners: two corners are equal when
//! neither precedes the other.

use crate::span::{Corner, Span};
use std::cmp::Ordering;

/// Returns `true` if neither corner precedes the other.
#[inline(always)]
pub fn equals<C>(a: &C, b: &C) -> bool
where
    C: Corner,
{
    !a.before(b) && !b.before(a)
}

/// Returns `true` if `a` precedes or equals `b`.
#[inline(always)]
pub fn before_or_equals<C>(a: &C, b: &C) -> bool
where
    C: Corner,
{
    !b.before(a)
}

/// Total ordering of two corners, usable with `sort_by`.
///
/// # Examples
///
/// ```rust
/// # use span_algebra_core::algorithm::compare;
/// # use std::cmp::Ordering;
/// assert_eq!(compare(&1i64, &2), Ordering::Less);
/// assert_eq!(compare(&2i64, &2), Ordering::Equal);
/// assert_eq!(compare(&3i64, &2), Ordering::Greater);
/// ```
#[inline(always)]
pub fn compare<C>(a: &C, b: &C) -> Ordering
where
    C: Corner,
{
    if a.before(b) {
        Ordering::Less
    } else if b.before(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Checks whether the spans are sorted ascending by start.
///
/// Spans with equal starts may appear in any order.
#[inline]
pub fn is_sorted_by_start<C>(spans: &[Span<C>]) -> bool
where
    C: Corner,
{
    spans
        .windows(2)
        .all(|w| before_or_equals(w[0].start(), w[1].start()))
}

/// Checks whether the spans form a merged sequence: every span is positive,
/// the sequence is sorted by start, and consecutive spans are separated by
/// a non-empty gap (neither overlapping nor touching).
#[inline]
pub fn is_merged<C>(spans: &[Span<C>]) -> bool
where
    C: Corner,
{
    spans.iter().all(Span::is_positive)
        && spans.windows(2).all(|w| w[0].end().before(w[1].start()))
}
