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

//! # BINPACK
//! BINPACK solves the one dimensional bin packing (cutting stock) problem:
//! given a bin capacity and a collection of item types (a size and a number
//! of items of that size), it finds the smallest number of bins that can hold
//! all the items without exceeding the capacity of any bin.
//!
//! The resolution is based on *patterns*. A pattern is a combination of items
//! which fits in one single bin and which is maximal (there is no room left
//! for one more unit of the smallest item type). The library:
//!
//! 1. enumerates all the maximal patterns of the instance (`PatternCatalogue`),
//! 2. computes a first fit packing which serves as initial upper bound
//!    (`first_fit`),
//! 3. searches the non-decreasing sequences of patterns covering the whole
//!    demand with a depth first branch-and-bound (`BranchAndBound`), pruning
//!    every node whose fractional bound `ceil(remaining size / capacity)`
//!    shows it cannot improve the best known packing.
//!
//! The same patterns can also be handed over to an external integer
//! programming solver in the form of a `CoveringProgram`.
//!
//! ## Quick Example
//! ```
//! # use binpack::*;
//! // 1. Create a validated instance (the item types are sorted by decreasing size)
//! let instance = Instance::new(18, vec![
//!     ItemType { size: 7, demand: 1 },
//!     ItemType { size: 5, demand: 4 },
//!     ItemType { size: 3, demand: 3 },
//! ]).unwrap();
//! // 2. Enumerate the patterns
//! let catalogue = PatternCatalogue::enumerate(&instance);
//! // 3. Pick your heuristics and create a solver
//! let cutoff = NoCutoff;
//! let filter = UselessPattern;
//! let mut solver = BranchAndBound::new(&instance, &catalogue, &cutoff, &filter);
//! // 4. Minimize the number of bins. First fit needs 3 bins, two are enough.
//! let outcome = solver.minimize();
//! assert_eq!(Some(2), outcome.best_value);
//! assert!(outcome.is_exact);
//! assert!(outcome.from_search);
//!
//! // 5. Do whatever you like with the optimal solution.
//! let solution = solver.best_solution().unwrap();
//! for bin in catalogue.unfold(&instance, &solution).bins {
//!     println!("{:?} (load {})", bin.counts, bin.load);
//! }
//! ```

mod errors;
mod common;
mod abstraction;
mod implementation;
mod io_utils;

pub use errors::*;
pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use io_utils::*;
