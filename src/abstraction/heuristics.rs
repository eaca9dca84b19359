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

//! This module defines the traits used to encapsulate solver heuristics.
//!
//! Namely, it defines :
//!
//!  - the `Cutoff` which is used to impose a stopping criterion on the search.
//!  - the `Obsolescence` which is used to abandon the branches of the search
//!    tree that are deemed not worth exploring.

use crate::{Instance, Pattern};

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop searching for a better solution. Typically, this is done to grant
/// a given time budget to the search.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the search must stop.
    fn must_stop(&self) -> bool;
}

/// This trait encapsulates the policy deciding whether a branch of the search
/// becomes obsolete, regardless of the bounds. It is consulted for each
/// candidate pattern before the corresponding child node is opened.
pub trait Obsolescence {
    /// Returns true iff the branch extending the current node with the
    /// `candidate` pattern needs not be explored.
    ///
    /// `remaining[j]` is the number of items of type `j` which are not yet
    /// covered by the patterns on the stack and `depth` is the number of
    /// patterns on the stack.
    fn is_obsolete(&self, instance: &Instance, remaining: &[usize], depth: usize, candidate: &Pattern) -> bool;
    /// Returns true iff the branches pruned by this policy never hold a
    /// solution strictly better than what remains reachable. A search using
    /// an unsound policy only proves optimality when it meets the root bound.
    fn is_sound(&self) -> bool {
        true
    }
}
