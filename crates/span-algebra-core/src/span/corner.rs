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

/// A measure that can be accumulated.
///
/// `combine` must be associative. No identity element is required, which is
/// why aggregating an empty set of spans needs a caller-supplied fallback.
///
/// # Examples
///
/// ```rust
/// # use span_algebra_core::span::Length;
/// assert_eq!(3u32.combine(4), 7);
/// ```
pub trait Length: Sized {
    /// Combines two measures into one.
    fn combine(self, other: Self) -> Self;
}

/// A position on an ordered axis.
///
/// Implementors must make `before` a strict order: irreflexive, asymmetric
/// and transitive. Two corners are considered equal when neither is before
/// the other.
///
/// `subtract` returns the distance from `other` to `self`. Whenever
/// `other.before(self)` holds the result must represent a non-negative
/// measure; the engine only ever calls it as `end.subtract(start)` on
/// positive spans.
///
/// # Examples
///
/// ```rust
/// # use span_algebra_core::span::{Corner, Length};
/// #[derive(Clone, Copy, Debug)]
/// struct Minute(u32);
///
/// #[derive(Debug, PartialEq)]
/// struct Minutes(u32);
///
/// impl Length for Minutes {
///     fn combine(self, other: Self) -> Self {
///         Minutes(self.0 + other.0)
///     }
/// }
///
/// impl Corner for Minute {
///     type Length = Minutes;
///
///     fn before(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
///
///     fn subtract(&self, other: &Self) -> Minutes {
///         Minutes(self.0 - other.0)
///     }
/// }
///
/// assert!(Minute(5).before(&Minute(9)));
/// assert_eq!(Minute(9).subtract(&Minute(5)), Minutes(4));
/// ```
pub trait Corner: Clone {
    /// The measure produced by subtracting two corners of this domain.
    type Length: Length;

    /// Returns `true` if `self` strictly precedes `other`.
    fn before(&self, other: &Self) -> bool;

    /// Returns the distance from `other` to `self`.
    fn subtract(&self, other: &Self) -> Self::Length;
}
