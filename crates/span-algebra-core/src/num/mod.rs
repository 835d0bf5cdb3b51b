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

//! # Domain Implementations
//!
//! Ready-made `Corner` and `Length` implementations for common ordered
//! domains, so callers working with plain numbers or `std::time` values do
//! not have to write the capability impls themselves.
//!
//! ## Submodules
//!
//! - `primitive`: Every primitive integer type is both a `Corner` (ordered by
//!   `<`, measured by `abs_diff`) and a `Length` (combined by `+`). Signed
//!   corners are measured in the unsigned type of the same width.
//! - `time`: `Duration` as a length and as a time-offset corner, plus
//!   `Instant` and `SystemTime` as corners measured in `Duration`.
//!
//! ## Overflow
//!
//! The length of a single positive span always fits its length type, since
//! `i64::MIN..i64::MAX` spans at most `u64::MAX`. Combining lengths uses the
//! plain `+`, so a total exceeding the type panics in debug builds and wraps
//! in release builds. The engine offers a checked aggregation for callers
//! who need to detect
//! overflowing totals.

pub mod primitive;
pub mod time;
