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

//! This module provides the implementation of the pattern based
//! branch-and-bound solver. It is a sequential solver: the whole search is
//! carried out by recursive calls on one single thread of execution.
//!
//! The search explores the sequences of pattern indices in non-decreasing
//! order (each pattern standing for one bin, and each pattern can be used for
//! several bins). Each node of the search tree is characterized by the
//! patterns on the stack, the total size `R` of the items which are not yet
//! covered and its depth (the number of bins committed so far). A node is only
//! expanded when `ceil(R / capacity) + depth` is strictly less than the number
//! of bins of the incumbent, and its children are only visited if their own
//! bound passes the same test.

use log::{debug, info, warn};

use crate::{Instance, PatternCatalogue, Cutoff, Obsolescence, BoundedStack, Unit, Solution, Completion, Reason, Solver, first_fit, ceil_div};

pub struct BranchAndBound<'a> {
    /// A reference to the instance being solved
    instance: &'a Instance,
    /// The patterns which can be used to fill a bin
    catalogue: &'a PatternCatalogue,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The policy deciding which branches are not worth exploring
    obsolescence: &'a dyn Obsolescence,

    /// The indices of the patterns chosen along the current branch
    stack: BoundedStack<Unit>,
    /// The number of units of each type held by the patterns on the stack
    consumed: Vec<usize>,
    /// The number of items of each type not yet covered by the stack
    remaining: Vec<usize>,

    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored.
    explored: usize,
    /// This is the value of the best known lower bound.
    best_lb: usize,
    /// This is the value of the best known upper bound (the number of bins
    /// of the incumbent).
    best_ub: usize,
    /// If set, this keeps the info about the best solution so far.
    best_sol: Option<Solution>,
    /// Whether the incumbent was found by the search
    from_search: bool,
    /// The number of bins of the successive incumbents
    incumbents: Vec<usize>,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl <'a> BranchAndBound<'a> {
    pub fn new(
        instance: &'a Instance,
        catalogue: &'a PatternCatalogue,
        cutoff: &'a dyn Cutoff,
        obsolescence: &'a dyn Obsolescence,
    ) -> Self {
        let nb_types = instance.nb_types();
        BranchAndBound {
            instance,
            catalogue,
            cutoff,
            obsolescence,
            //
            stack: BoundedStack::new(Unit),
            consumed: vec![0; nb_types],
            remaining: instance.demands(),
            //
            explored: 0,
            best_lb: 0,
            best_ub: usize::MAX,
            best_sol: None,
            from_search: false,
            incumbents: vec![],
            abort_proof: None,
        }
    }

    /// The number of nodes of the search tree that have been visited
    pub fn explored(&self) -> usize {
        self.explored
    }
    /// The number of bins of each incumbent, in the order they were found.
    /// The first entry is the seed.
    pub fn incumbents(&self) -> &[usize] {
        &self.incumbents
    }

    /// Resets the search state and seeds the incumbent with the first fit
    /// packing (unless a better primal was set beforehand).
    fn initialize(&mut self) {
        self.explored = 0;
        self.abort_proof = None;
        self.consumed.iter_mut().for_each(|c| *c = 0);
        self.remaining = self.instance.demands();
        self.best_lb = self.instance.lower_bound();

        let greedy = first_fit(self.instance);
        if greedy.nb_bins() < self.best_ub {
            match self.catalogue.express(&greedy) {
                Some(solution) => {
                    self.best_ub = greedy.nb_bins();
                    self.best_sol = Some(solution);
                    self.from_search = false;
                    self.incumbents.push(self.best_ub);
                },
                None => warn!("the first fit packing cannot be expressed with the patterns"),
            }
        }
        debug!("seed: {} bins, root bound: {} bins", self.best_ub, self.best_lb);
    }

    /// Explores the subtree rooted in the current node: the patterns on the
    /// stack are the bins committed so far (`level` of them), `size` is the
    /// total size of the items which are still to be covered and `from` is
    /// the index of the first pattern that may be used to extend the branch.
    fn explore(&mut self, from: usize, size: usize, level: usize) -> Result<(), Reason> {
        if self.cutoff.must_stop() {
            return Err(Reason::CutoffOccurred);
        }
        self.explored += 1;

        let instance  = self.instance;
        let catalogue = self.catalogue;
        let capacity  = instance.capacity();

        if ceil_div(size, capacity) + level < self.best_ub {
            for i in from..catalogue.len() {
                let pattern = &catalogue[i];
                let contribution = pattern.effective_size(instance, &self.remaining);
                if contribution == 0 {
                    continue;
                }
                if self.obsolescence.is_obsolete(instance, &self.remaining, self.stack.depth(), pattern) {
                    continue;
                }

                let next = size - contribution;
                if ceil_div(next, capacity) + level + 1 < self.best_ub {
                    self.push(i);
                    let outcome = self.explore(i, next, level + 1);
                    self.pop();
                    outcome?;
                }
            }
        }

        if size == 0 && level < self.best_ub {
            self.record();
        }
        Ok(())
    }

    fn push(&mut self, p: usize) {
        self.stack.push(p);
        self.update(p, |consumed, count| consumed + count);
    }
    fn pop(&mut self) {
        let p = self.stack.pop();
        self.update(p, |consumed, count| consumed - count);
    }
    fn update(&mut self, p: usize, op: fn(usize, usize) -> usize) {
        let catalogue = self.catalogue;
        let pattern = &catalogue[p];
        for (j, &count) in pattern.counts().iter().enumerate() {
            if count > 0 {
                self.consumed[j]  = op(self.consumed[j], count);
                self.remaining[j] = self.instance.demand(j).saturating_sub(self.consumed[j]);
            }
        }
    }

    /// The stack holds a complete cover which improves the incumbent
    fn record(&mut self) {
        self.best_ub = self.stack.total();
        self.best_sol = Some(Solution::from_choices(self.catalogue.len(), self.stack.iter()));
        self.from_search = true;
        self.incumbents.push(self.best_ub);
        debug!("improved: {} bins after {} nodes", self.best_ub, self.explored);
    }
}

impl <'a> Solver for BranchAndBound<'a> {
    fn minimize(&mut self) -> Completion {
        self.initialize();

        if let Some(j) = self.catalogue.uncovered(self.instance) {
            warn!("item type {} (size {}) fits in none of the patterns", j, self.instance.size(j));
            self.best_ub = usize::MAX;
            self.best_sol = None;
            self.from_search = false;
            return Completion { is_exact: true, best_value: None, from_search: false };
        }

        if let Err(reason) = self.explore(0, self.instance.total_size(), 0) {
            self.abort_proof = Some(reason);
        }

        // an incumbent meeting the root bound is optimal whatever was pruned
        let proven = self.obsolescence.is_sound() || self.best_ub == self.instance.lower_bound();
        let is_exact = self.abort_proof.is_none() && proven;
        if is_exact {
            self.best_lb = self.best_ub;
        }
        info!("explored {} nodes, best: {:?}, exact: {}", self.explored, self.best_value(), is_exact);

        Completion { is_exact, best_value: self.best_value(), from_search: self.from_search }
    }

    fn best_value(&self) -> Option<usize> {
        self.best_sol.as_ref().map(|_| self.best_ub)
    }
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
    fn best_lower_bound(&self) -> usize {
        self.best_lb.min(self.best_ub)
    }
    fn best_upper_bound(&self) -> usize {
        self.best_ub
    }
    fn set_primal(&mut self, value: usize, solution: Solution) {
        if value < self.best_ub {
            self.best_sol = Some(solution);
            self.best_ub = value;
            self.from_search = false;
            self.incumbents.push(value);
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
