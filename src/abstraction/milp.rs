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

//! This module defines the seam through which an external mixed integer
//! programming solver can be used to solve the covering program built from
//! the pattern catalogue.

use crate::{CoveringProgram, Error};

/// The outcome of the resolution of a covering program by an external solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilpOutcome {
    /// The optimal objective value (number of bins) reported by the solver
    pub objective: usize,
    /// The value of each column (the number of bins using each pattern)
    pub usage: Vec<usize>,
}

/// This trait is implemented by the bindings to an integer programming
/// solver. The resolution is delegated as a whole: columns are the patterns
/// (in catalogue order), rows are the item types.
pub trait MilpSolver {
    fn solve(&self, program: &CoveringProgram) -> Result<MilpOutcome, Error>;
}
