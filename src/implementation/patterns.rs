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

//! This module provides the catalogue of patterns and the depth first
//! enumeration which populates it. A pattern is identified by its position in
//! the catalogue; that index is the identity used by the branch-and-bound and
//! by the columns of the covering program.

use std::ops::Index;

use crate::{Instance, Pattern, BoundedStack, BySize, Packing, Bin, Solution};

/// The ordered collection of all maximal patterns of an instance. It is
/// populated once by `enumerate` and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCatalogue {
    patterns: Vec<Pattern>,
}

impl PatternCatalogue {
    /// Enumerates every maximal pattern of the given instance exactly once.
    ///
    /// The enumeration is a depth first search over the (sorted) item types
    /// which only extends the current combination with types whose index is
    /// greater or equal to that of the last type added. Hence, each multiset
    /// of items is only visited in one order. The demands are not taken into
    /// account: a pattern may hold more units of a type than there are items
    /// of that type.
    ///
    /// # Example
    /// ```
    /// # use binpack::*;
    /// let instance = Instance::new(10, vec![
    ///     ItemType { size: 6, demand: 1 },
    ///     ItemType { size: 5, demand: 2 },
    ///     ItemType { size: 4, demand: 1 },
    /// ]).unwrap();
    /// let catalogue = PatternCatalogue::enumerate(&instance);
    /// // {6,4} {5,5} {5,4} {4,4}
    /// assert_eq!(4, catalogue.len());
    /// assert_eq!(&[1, 0, 1], catalogue[0].counts());
    /// ```
    pub fn enumerate(instance: &Instance) -> Self {
        let mut catalogue = PatternCatalogue::default();
        let mut stack = BoundedStack::new(BySize(instance));
        catalogue.explore(instance, &mut stack, 0);
        catalogue
    }

    fn explore(&mut self, instance: &Instance, stack: &mut BoundedStack<BySize<'_>>, start: usize) {
        let capacity = instance.capacity();
        for i in start..instance.nb_types() {
            if instance.size(i) <= capacity - stack.total() {
                stack.push(i);
                self.explore(instance, stack, i);
                stack.pop();
            }
        }

        let maximal = instance.smallest_size()
            .map_or(false, |smallest| smallest > capacity - stack.total());
        if maximal && !stack.is_empty() {
            self.record(instance, stack);
        }
    }

    fn record(&mut self, instance: &Instance, stack: &BoundedStack<BySize<'_>>) {
        let mut counts = vec![0; instance.nb_types()];
        for j in stack.iter() {
            counts[j] += 1;
        }
        self.patterns.push(Pattern::new(instance, counts));
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
    pub fn get(&self, p: usize) -> Option<&Pattern> {
        self.patterns.get(p)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Returns the index of the first pattern which holds at least `counts[j]`
    /// units of each item type `j`.
    pub fn dominating(&self, counts: &[usize]) -> Option<usize> {
        self.patterns.iter().position(|p| p.dominates(counts))
    }

    /// Returns the first item type with a positive demand which does not
    /// appear in any of the patterns (these items can never be packed).
    pub fn uncovered(&self, instance: &Instance) -> Option<usize> {
        (0..instance.nb_types())
            .filter(|&j| instance.demand(j) > 0)
            .find(|&j| self.patterns.iter().all(|p| p.count(j) == 0))
    }

    /// Expresses a packing in terms of the catalogue by mapping each bin onto
    /// a pattern dominating it. Returns `None` when some bin is dominated by
    /// none of the patterns.
    pub fn express(&self, packing: &Packing) -> Option<Solution> {
        let mut usage = vec![0; self.len()];
        for bin in packing.bins.iter() {
            usage[self.dominating(&bin.counts)?] += 1;
        }
        Some(Solution::new(usage))
    }

    /// The number of units of each item type the solution has room for. This
    /// is at least the demand of each type when the solution covers the
    /// instance.
    pub fn totals(&self, instance: &Instance, solution: &Solution) -> Vec<usize> {
        let mut totals = vec![0; instance.nb_types()];
        for (pattern, &used) in self.patterns.iter().zip(solution.usage().iter()) {
            for (t, c) in totals.iter_mut().zip(pattern.counts().iter()) {
                *t += c * used;
            }
        }
        totals
    }

    /// True iff the solution has room for all the items of the instance
    pub fn covers(&self, instance: &Instance, solution: &Solution) -> bool {
        self.totals(instance, solution).iter()
            .zip(instance.items().iter())
            .all(|(&t, item)| t >= item.demand)
    }

    /// Turns the solution into an explicit packing. Bins are filled in the
    /// order of their pattern index; each one only receives the units which
    /// are still waiting for a bin. Hence the per type totals of a packing
    /// unfolded from a covering solution are exactly the demands.
    pub fn unfold(&self, instance: &Instance, solution: &Solution) -> Packing {
        let mut remaining = instance.demands();
        let mut bins = vec![];
        for p in solution.choices() {
            let mut bin = Bin::empty(instance.nb_types());
            for (j, (r, c)) in remaining.iter_mut().zip(self.patterns[p].counts().iter()).enumerate() {
                let taken = (*r).min(*c);
                *r -= taken;
                bin.counts[j] = taken;
                bin.load += taken * instance.size(j);
            }
            bins.push(bin);
        }
        Packing { bins }
    }
}

impl Index<usize> for PatternCatalogue {
    type Output = Pattern;

    fn index(&self, p: usize) -> &Pattern {
        &self.patterns[p]
    }
}

#[cfg(test)]
mod test_patterns {
    use std::collections::HashSet;
    use crate::*;

    fn instance(capacity: usize, items: &[(usize, usize)]) -> Instance {
        Instance::new(capacity, items.iter().map(|&(size, demand)| ItemType{size, demand}).collect()).unwrap()
    }
    fn counts(catalogue: &PatternCatalogue) -> Vec<Vec<usize>> {
        catalogue.iter().map(|p| p.counts().to_vec()).collect()
    }

    /// Independent brute force: all feasible non-empty maximal count vectors
    fn brute_force(inst: &Instance) -> HashSet<Vec<usize>> {
        fn rec(inst: &Instance, j: usize, load: usize, cur: &mut Vec<usize>, out: &mut HashSet<Vec<usize>>) {
            if j == inst.nb_types() {
                let smallest = inst.smallest_size().unwrap();
                if load > 0 && load + smallest > inst.capacity() {
                    out.insert(cur.clone());
                }
                return;
            }
            let max = (inst.capacity() - load) / inst.size(j);
            for k in 0..=max {
                cur.push(k);
                rec(inst, j + 1, load + k * inst.size(j), cur, out);
                cur.pop();
            }
        }
        let mut out = HashSet::new();
        rec(inst, 0, 0, &mut vec![], &mut out);
        out
    }

    #[test]
    fn an_empty_instance_has_no_pattern() {
        let inst = instance(10, &[]);
        assert!(PatternCatalogue::enumerate(&inst).is_empty());
    }
    #[test]
    fn one_item_filling_the_bin_yields_one_pattern() {
        let inst = instance(10, &[(10, 1)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(counts(&cat), vec![vec![1]]);
        assert_eq!(cat[0].weight(), 10);
    }
    #[test]
    fn identical_items_yield_one_pattern() {
        let inst = instance(10, &[(5, 4)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(counts(&cat), vec![vec![2]]);
    }
    #[test]
    fn patterns_are_listed_in_discovery_order() {
        let inst = instance(10, &[(4, 1), (6, 1), (5, 2)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(counts(&cat), vec![
            vec![1, 0, 1],
            vec![0, 2, 0],
            vec![0, 1, 1],
            vec![0, 0, 2],
        ]);
    }
    #[test]
    fn demands_do_not_limit_the_enumeration() {
        let inst = instance(18, &[(7, 1), (5, 4), (3, 3)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(counts(&cat), vec![
            vec![2, 0, 1],
            vec![1, 2, 0],
            vec![1, 1, 2],
            vec![1, 0, 3],
            vec![0, 3, 1],
            vec![0, 2, 2],
            vec![0, 1, 4],
            vec![0, 0, 6],
        ]);
    }
    #[test]
    fn all_patterns_are_feasible_and_maximal() {
        let inst = instance(23, &[(11, 2), (8, 3), (7, 1), (5, 4), (2, 6)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert!(!cat.is_empty());
        for p in cat.iter() {
            assert!(p.is_feasible(&inst));
            assert!(p.is_maximal(&inst));
            assert!(p.weight() > 0);
        }
    }
    #[test]
    fn each_maximal_pattern_is_enumerated_exactly_once() {
        for (capacity, items) in [
            (10, vec![(6, 1), (5, 2), (4, 1)]),
            (15, vec![(15, 0), (7, 2), (6, 4), (2, 3)]),
            (23, vec![(11, 2), (8, 3), (7, 1), (5, 4), (2, 6)]),
            (17, vec![(9, 1), (4, 1), (3, 1)]),
        ] {
            let inst = instance(capacity, &items);
            let cat = PatternCatalogue::enumerate(&inst);
            let found: HashSet<Vec<usize>> = counts(&cat).into_iter().collect();
            assert_eq!(found.len(), cat.len());
            assert_eq!(found, brute_force(&inst));
        }
    }
    #[test]
    fn every_demanded_type_is_covered() {
        let inst = instance(23, &[(11, 2), (8, 3), (7, 1), (5, 4), (2, 6)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(cat.uncovered(&inst), None);
    }
    #[test]
    fn a_type_missing_from_the_catalogue_is_reported() {
        let inst = instance(10, &[(6, 1), (4, 1)]);
        let cat = PatternCatalogue::default();
        assert_eq!(cat.uncovered(&inst), Some(0));
    }
    #[test]
    fn the_greedy_packing_can_be_expressed_with_the_catalogue() {
        let inst = instance(18, &[(7, 1), (5, 4), (3, 3)]);
        let cat = PatternCatalogue::enumerate(&inst);
        let packing = first_fit(&inst);
        let sol = cat.express(&packing).unwrap();
        assert_eq!(sol.nb_bins(), packing.nb_bins());
        assert!(cat.covers(&inst, &sol));
    }
    #[test]
    fn unfolding_a_cover_yields_the_exact_demand() {
        let inst = instance(10, &[(5, 3)]);
        let cat = PatternCatalogue::enumerate(&inst);
        let sol = Solution::new(vec![2]);
        assert_eq!(cat.totals(&inst, &sol), vec![4]);
        assert!(cat.covers(&inst, &sol));
        let packing = cat.unfold(&inst, &sol);
        assert_eq!(packing.nb_bins(), 2);
        assert_eq!(packing.totals(1), vec![3]);
        assert_eq!(packing.bins[1].load, 5);
    }
    #[test]
    fn a_solution_lacking_room_does_not_cover() {
        let inst = instance(10, &[(5, 5)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert!(!cat.covers(&inst, &Solution::new(vec![2])));
    }
    #[test]
    fn enumeration_near_the_largest_capacity() {
        let inst = instance(usize::MAX, &[(1 << 63, 1), (1 << 62, 1)]);
        let cat = PatternCatalogue::enumerate(&inst);
        assert_eq!(counts(&cat), vec![vec![1, 1], vec![0, 3]]);
        assert!(cat.iter().all(|p| p.is_maximal(&inst) && p.is_feasible(&inst)));
    }
}
