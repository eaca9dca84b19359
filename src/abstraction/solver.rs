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

//! This module defines the `Solver` trait.

use crate::{Completion, Solution};

/// This is the solver abstraction. It is implemented by a structure that
/// searches for the packing using the fewest bins.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted minimization. Such a `Completion` may either be marked
    /// **exact** if the minimization has been carried out until optimality was
    /// proved. Or it can be inexact, in which case it means that the
    /// minimization process was stopped because of the satisfaction of some
    /// cutoff criterion (or that a heuristic pruning was used which might have
    /// discarded the optimum).
    ///
    /// Along with the `is_exact` exact flag, the completion provides an
    /// optional `best_value` of the minimization problem:
    ///
    /// * When the `is_exact` flag is true, and a `best_value` is present: the
    ///   `best_value` is the minimum number of bins.
    /// * When the `is_exact` flag is false and a `best_value` is present, it
    ///   is the number of bins of the best packing known at the time the
    ///   search stopped.
    /// * When no `best_value` is present: the patterns cannot cover the
    ///   instance (some item can be put in none of the patterns).
    ///
    fn minimize(&mut self) -> Completion;
    /// This method returns the number of bins of the best solution that has
    /// been found. It returns `None` when no solution exists to the problem.
    fn best_value(&self) -> Option<usize>;
    /// This method returns the best solution to the optimization problem.
    /// It returns `None` when the problem admits no feasible solution.
    fn best_solution(&self) -> Option<Solution>;

    /// Returns the best lower bound that has been identified so far.
    fn best_lower_bound(&self) -> usize;
    /// Returns the tightest upper bound that can be guaranteed so far.
    /// In case where no solution is known, it should return `usize::MAX`.
    fn best_upper_bound(&self) -> usize;

    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, value: usize, solution: Solution);

    /// Computes the optimality gap
    fn gap(&self) -> f32 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        if ub == usize::MAX {
            1.0
        } else if ub == 0 {
            0.0
        } else {
            (ub - lb.min(ub)) as f32 / ub as f32
        }
    }
}
