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

use crate::span::corner::Corner;

/// A half-open interval `[start, end)` over an abstract ordered domain.
///
/// A span is *positive* when `start.before(end)` holds. Spans whose end is
/// equal to or before their start are legal values; they are degenerate and
/// the algebra silently drops them.
///
/// Spans are immutable. Operations that derive new intervals (merging,
/// splitting) always construct fresh `Span` values.
///
/// # Examples
///
/// ```rust
/// # use span_algebra_core::span::Span;
/// let span = Span::new(2i64, 10);
/// assert!(span.is_positive());
/// assert_eq!(span.length(), 8);
///
/// let inverted = Span::new(10i64, 2);
/// assert!(!inverted.is_positive());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span<C> {
    start: C,
    end: C,
}

impl<C> Span<C> {
    /// Creates a new `Span`. Never fails; positivity is checked by the algebra.
    #[inline]
    pub const fn new(start: C, end: C) -> Self {
        Self { start, end }
    }

    /// Returns the start corner.
    #[inline]
    pub const fn start(&self) -> &C {
        &self.start
    }

    /// Returns the end corner.
    #[inline]
    pub const fn end(&self) -> &C {
        &self.end
    }

    /// Consumes the span and returns `(start, end)`.
    #[inline]
    pub fn into_parts(self) -> (C, C) {
        (self.start, self.end)
    }
}

impl<C> Span<C>
where
    C: Corner,
{
    /// Returns `true` if `start` strictly precedes `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_algebra_core::span::Span;
    /// assert!(Span::new(1i32, 4).is_positive());
    /// assert!(!Span::new(5i32, 5).is_positive());
    /// assert!(!Span::new(2i32, 1).is_positive());
    /// ```
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.start.before(&self.end)
    }

    /// Returns the length of the span, `end.subtract(start)`.
    ///
    /// Only meaningful for positive spans.
    #[inline]
    pub fn length(&self) -> C::Length {
        self.end.subtract(&self.start)
    }

    /// Returns `true` if `corner` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_algebra_core::span::Span;
    /// let span = Span::new(0i64, 10);
    /// assert!(span.contains(&0));
    /// assert!(span.contains(&9));
    /// assert!(!span.contains(&10));
    /// ```
    #[inline]
    pub fn contains(&self, corner: &C) -> bool {
        !corner.before(&self.start) && corner.before(&self.end)
    }
}

impl<C> From<(C, C)> for Span<C> {
    #[inline]
    fn from((start, end): (C, C)) -> Self {
        Self::new(start, end)
    }
}

impl<C> From<std::ops::Range<C>> for Span<C> {
    #[inline]
    fn from(range: std::ops::Range<C>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<C> From<Span<C>> for std::ops::Range<C> {
    #[inline]
    fn from(span: Span<C>) -> Self {
        span.start..span.end
    }
}

impl<C> std::fmt::Display for Span<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A span tagged as either a *super* span (material to keep) or a
/// *subtrahend* (material to remove).
///
/// This is only the ingestion format: the engine splits a mixed sequence of
/// categorized spans into two plain `Span` groups before any algebra runs.
///
/// # Examples
///
/// ```rust
/// # use span_algebra_core::span::CategorizedSpan;
/// let keep = CategorizedSpan::super_span(0i64, 20);
/// let cut = CategorizedSpan::subtrahend(4i64, 8);
/// assert!(keep.is_super());
/// assert!(!cut.is_super());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CategorizedSpan<C> {
    span: Span<C>,
    is_super: bool,
}

impl<C> CategorizedSpan<C> {
    /// Tags `span` with the given category.
    #[inline]
    pub const fn new(span: Span<C>, is_super: bool) -> Self {
        Self { span, is_super }
    }

    /// Creates a super span `[start, end)`.
    #[inline]
    pub const fn super_span(start: C, end: C) -> Self {
        Self::new(Span::new(start, end), true)
    }

    /// Creates a subtrahend `[start, end)`.
    #[inline]
    pub const fn subtrahend(start: C, end: C) -> Self {
        Self::new(Span::new(start, end), false)
    }

    /// Returns the underlying span.
    #[inline]
    pub const fn span(&self) -> &Span<C> {
        &self.span
    }

    /// Returns `true` for super spans, `false` for subtrahends.
    #[inline]
    pub const fn is_super(&self) -> bool {
        self.is_super
    }

    /// Consumes the tag and returns the underlying span.
    #[inline]
    pub fn into_span(self) -> Span<C> {
        self.span
    }
}

impl<C> AsRef<Span<C>> for CategorizedSpan<C> {
    #[inline]
    fn as_ref(&self) -> &Span<C> {
        &self.span
    }
}

impl<C> std::fmt::Display for CategorizedSpan<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_super { '+' } else { '-' };
        write!(f, "{}{}", sign, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Range;

    #[test]
    fn test_construction() {
        let span = Span::new(10i64, 20);
        assert_eq!(*span.start(), 10);
        assert_eq!(*span.end(), 20);
        assert_eq!(span.length(), 10);
        assert!(span.is_positive());
    }

    #[test]
    fn test_degenerate_spans_are_not_positive() {
        // Zero length
        assert!(!Span::new(5i64, 5).is_positive());
        // Inverted
        assert!(!Span::new(2i64, 1).is_positive());
    }

    #[test]
    fn test_contains() {
        let span = Span::new(-3i32, 3);
        assert!(span.contains(&-3)); // Inclusive start
        assert!(span.contains(&0));
        assert!(!span.contains(&3)); // Exclusive end
        assert!(!span.contains(&-4));
    }

    #[test]
    fn test_into_parts() {
        let (start, end) = Span::new(1u8, 9).into_parts();
        assert_eq!((start, end), (1, 9));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Span::from((0i64, 5)), Span::new(0, 5));
        assert_eq!(Span::from(2i64..7), Span::new(2, 7));

        let range: Range<i64> = Span::new(3, 4).into();
        assert_eq!(range, 3..4);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Span::new(10, 20)), "[10, 20)");
        assert_eq!(format!("{}", CategorizedSpan::super_span(1, 2)), "+[1, 2)");
        assert_eq!(format!("{}", CategorizedSpan::subtrahend(3, 4)), "-[3, 4)");
    }

    #[test]
    fn test_categorized_accessors() {
        let keep = CategorizedSpan::super_span(0i64, 20);
        assert!(keep.is_super());
        assert_eq!(*keep.span(), Span::new(0, 20));
        assert_eq!(keep.as_ref(), keep.span());

        let cut = CategorizedSpan::new(Span::new(4i64, 8), false);
        assert!(!cut.is_super());
        assert_eq!(cut, CategorizedSpan::subtrahend(4, 8));
        assert_eq!(cut.into_span(), Span::new(4, 8));
    }
}
