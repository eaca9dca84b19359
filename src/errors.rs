// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the error type that is shared by the whole crate.

use std::num::ParseIntError;

/// This enumeration groups the kind of errors that might occur when building
/// an instance (invalid capacity, items which do not fit in a bin), when
/// loading it from file (io errors, garbage in place of an integer, missing
/// fields) or when an external integer program returns a usage vector that is
/// not a valid cover of the instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The bin capacity must be a positive integer
    #[error("the bin capacity must be positive")]
    InvalidCapacity,
    /// An item type has a size of zero
    #[error("item type {index} has a null size")]
    InvalidSize { index: usize },
    /// An item type can never be placed because it is larger than a bin
    #[error("item type {index} (size {size}) does not fit in a bin of capacity {capacity}")]
    Oversized { index: usize, size: usize, capacity: usize },
    /// The total size of the items cannot be represented
    #[error("the total size of the items exceeds {}", usize::MAX)]
    TooLarge,
    /// The parser expected to find a field which is missing from the input
    #[error("format error: {0}")]
    Format(String),
    /// The usage vector of a covering program solution is not acceptable
    #[error("invalid usage vector: {0}")]
    BadUsage(String),
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// A field holds something that is not a non-negative integer
    #[error("{field} is not a valid non-negative integer: {value} ({cause})")]
    InvalidField { field: String, value: String, cause: ParseIntError },
}
