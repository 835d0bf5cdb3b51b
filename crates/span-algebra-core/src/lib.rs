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

//! # Span Algebra Core
//!
//! Capability contracts and value types shared by the span algebra engine.
//! The engine never looks at concrete positions or distances; it only talks
//! to the traits defined here, so any ordered domain (integers, timestamps,
//! time offsets, fixed-point amounts) can plug in by implementing them.
//!
//! ## Modules
//!
//! - `span`: The `Corner` and `Length` capability traits together with the
//!   `Span<C>` and `CategorizedSpan<C>` value types.
//! - `num`: Ready-made `Corner`/`Length` implementations for the primitive
//!   integers and for `std::time` types.
//! - `algorithm`: Order predicates derived solely from `Corner::before`
//!   (equality, comparison, sortedness and merged-ness checks).
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod num;
pub mod span;
