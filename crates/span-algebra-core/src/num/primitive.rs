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

macro_rules! impl_length {
    ($($t:ty),* $(,)?) => {
        $(
            impl Length for $t {
                #[inline(always)]
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

/// Signed corners are measured in their unsigned counterpart, so the
/// distance between any two values of the type is representable.
macro_rules! impl_corner {
    ($($t:ty => $len:ty),* $(,)?) => {
        $(
            impl Corner for $t {
                type Length = $len;

                #[inline(always)]
                fn before(&self, other: &Self) -> bool {
                    *self < *other
                }

                #[inline(always)]
                fn subtract(&self, other: &Self) -> $len {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

impl_length!(u8, u16, u32, u64, u128, usize);
impl_length!(i8, i16, i32, i64, i128, isize);

impl_corner!(u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize);
impl_corner!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
