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

//! # Checked Numeric Results
//!
//! Value types describing the outcome of a checked arithmetic operation.
//!
//! ## Submodules
//!
//! - `failure`: The closed `FailureKind` taxonomy and the `Failure` payload
//!   (category plus `'static` diagnostic message), which doubles as the
//!   crate's error type.
//! - `checked_result`: `CheckedResult<R>`, holding either a value or a
//!   `Failure`, with accessors, conversions and text I/O.
//! - `ops`: Combinators over `CheckedResult<R>` that never need a side
//!   channel to report failure.
//! - `bounds`: Minimum and maximum representable values wrapped as
//!   successful results, through `num_traits::Bounded`.

pub mod bounds;
pub mod checked_result;
pub mod failure;
pub mod ops;
