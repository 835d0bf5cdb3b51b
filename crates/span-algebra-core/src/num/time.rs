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

use crate::span::{Corner, Length};
use std::time::{Duration, Instant, SystemTime};

impl Length for Duration {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

/// A `Duration` used as a corner is an offset from some caller-defined epoch.
impl Corner for Duration {
    type Length = Duration;

    #[inline]
    fn before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Duration {
        self.saturating_sub(*other)
    }
}

impl Corner for Instant {
    type Length = Duration;

    #[inline]
    fn before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Duration {
        self.saturating_duration_since(*other)
    }
}

/// Subtracting a later `SystemTime` from an earlier one yields `Duration::ZERO`.
impl Corner for SystemTime {
    type Length = Duration;

    #[inline]
    fn before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Duration {
        self.duration_since(*other).unwrap_or(Duration::ZERO)
    }
}
