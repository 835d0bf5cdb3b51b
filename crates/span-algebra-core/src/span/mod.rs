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

//! # Spans
//!
//! The minimal capability contract every position and distance type must
//! satisfy, and the interval values built on top of it.
//!
//! ## Submodules
//!
//! - `corner`: The `Corner` (ordered position) and `Length` (combinable
//!   measure) traits. Pure contract, no algorithm logic.
//! - `interval`: `Span<C>`, a `[start, end)` pair of corners, and
//!   `CategorizedSpan<C>`, a span tagged as super or subtrahend.
//!
//! ## Motivation
//!
//! Corners are compared through `before` only. Equality is never assumed as
//! a separate capability, which keeps the contract small enough for domains
//! whose values do not implement `PartialEq` in a useful way.

pub mod corner;
pub mod interval;

pub use corner::{Corner, Length};
pub use interval::{CategorizedSpan, Span};
