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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use crate::{Error, sort_descending};

// ----------------------------------------------------------------------------
// --- ITEM TYPE --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item type groups all the items of the same size that must be packed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemType {
    /// The size of each item of this type
    pub size: usize,
    /// The number of items of this type that must be packed
    pub demand: usize,
}

// ----------------------------------------------------------------------------
// --- INSTANCE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A validated bin packing instance: a bin capacity and the catalogue of item
/// types sorted by decreasing size.
///
/// # Note:
/// All indices `j` used to designate an item type (in patterns, bins,
/// remaining demands, ...) refer to the position of that type in the sorted
/// catalogue, not in the sequence that was given to `Instance::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    capacity: usize,
    items: Vec<ItemType>,
}
impl Instance {
    /// Validates the data and sorts the item types once and for all.
    ///
    /// # Examples:
    /// ```
    /// # use binpack::*;
    /// let instance = Instance::new(10, vec![
    ///     ItemType { size: 4, demand: 1 },
    ///     ItemType { size: 6, demand: 1 },
    /// ]).unwrap();
    /// assert_eq!(6, instance.size(0));
    /// assert_eq!(4, instance.smallest_size().unwrap());
    ///
    /// assert!(Instance::new(10, vec![ItemType { size: 11, demand: 1 }]).is_err());
    /// ```
    pub fn new(capacity: usize, mut items: Vec<ItemType>) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        for (index, item) in items.iter().enumerate() {
            if item.size == 0 {
                return Err(Error::InvalidSize { index });
            }
            if item.size > capacity {
                return Err(Error::Oversized { index, size: item.size, capacity });
            }
        }
        let total = items.iter().try_fold(0_usize, |total, item| {
            item.size.checked_mul(item.demand).and_then(|s| total.checked_add(s))
        });
        if total.is_none() {
            return Err(Error::TooLarge);
        }
        sort_descending(&mut items);
        Ok(Instance { capacity, items })
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn items(&self) -> &[ItemType] {
        &self.items
    }
    pub fn nb_types(&self) -> usize {
        self.items.len()
    }
    pub fn size(&self, j: usize) -> usize {
        self.items[j].size
    }
    pub fn demand(&self, j: usize) -> usize {
        self.items[j].demand
    }
    /// The size of the smallest item type (which is the last one)
    pub fn smallest_size(&self) -> Option<usize> {
        self.items.last().map(|i| i.size)
    }
    /// The sum of the sizes of all the items that must be packed. It is
    /// known to fit in a `usize` since `new` checked it.
    pub fn total_size(&self) -> usize {
        self.items.iter().map(|i| i.size * i.demand).sum()
    }
    /// The number of items that must be packed
    pub fn nb_items(&self) -> usize {
        self.items.iter().map(|i| i.demand).sum()
    }
    /// The per type demand vector
    pub fn demands(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.demand).collect()
    }
    /// The fractional lower bound on the number of bins: `ceil(total / capacity)`
    pub fn lower_bound(&self) -> usize {
        ceil_div(self.total_size(), self.capacity)
    }
}

/// Rounds `a / b` up.
#[inline]
pub fn ceil_div(a: usize, b: usize) -> usize {
    a.div_ceil(b)
}

// ----------------------------------------------------------------------------
// --- PATTERN ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A pattern is a combination of items that fits in one single bin. It tells
/// how many units of each item type are put in the bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    counts: Vec<usize>,
    weight: usize,
}
impl Pattern {
    /// Creates a pattern from per type counts. The weight is derived from the
    /// sizes of the instance.
    pub fn new(instance: &Instance, counts: Vec<usize>) -> Self {
        let weight = counts.iter().enumerate()
            .map(|(j, c)| instance.size(j) * c)
            .sum();
        Pattern { counts, weight }
    }
    /// The number of units of item type `j` held in this pattern
    pub fn count(&self, j: usize) -> usize {
        self.counts[j]
    }
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    /// The total size of the items held in this pattern
    pub fn weight(&self) -> usize {
        self.weight
    }
    /// The unused room left in a bin filled with this pattern
    pub fn waste(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.weight)
    }
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        self.weight <= instance.capacity()
    }
    /// True iff one more unit of the smallest item type would overflow the bin
    pub fn is_maximal(&self, instance: &Instance) -> bool {
        match instance.smallest_size() {
            Some(smallest) => smallest > instance.capacity().saturating_sub(self.weight),
            None => true,
        }
    }
    /// True iff this pattern holds at least as many units of each type as
    /// the given `counts`.
    pub fn dominates(&self, counts: &[usize]) -> bool {
        self.counts.iter().zip(counts.iter()).all(|(mine, theirs)| mine >= theirs)
    }
    /// The total size this pattern really packs when only `remaining[j]` units
    /// of each type `j` are still waiting for a bin.
    pub fn effective_size(&self, instance: &Instance, remaining: &[usize]) -> usize {
        self.counts.iter().zip(remaining.iter()).enumerate()
            .map(|(j, (&c, &r))| instance.size(j) * c.min(r))
            .sum()
    }
}

// ----------------------------------------------------------------------------
// --- PACKING ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One bin of a packing: the number of units of each type it holds and the
/// total size of these items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    pub counts: Vec<usize>,
    pub load: usize,
}
impl Bin {
    pub fn empty(nb_types: usize) -> Self {
        Bin { counts: vec![0; nb_types], load: 0 }
    }
}

/// An explicit assignment of the items to bins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    pub bins: Vec<Bin>,
}
impl Packing {
    pub fn nb_bins(&self) -> usize {
        self.bins.len()
    }
    /// The number of units of each type placed across all the bins
    pub fn totals(&self, nb_types: usize) -> Vec<usize> {
        let mut totals = vec![0; nb_types];
        for bin in self.bins.iter() {
            for (t, c) in totals.iter_mut().zip(bin.counts.iter()) {
                *t += c;
            }
        }
        totals
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution tells how many bins are filled using each of the patterns from
/// the catalogue. `usage[p]` is the number of bins filled with pattern `p`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    usage: Vec<usize>,
}
impl Solution {
    pub fn new(usage: Vec<usize>) -> Self {
        Solution { usage }
    }
    /// Counts how many times each pattern index occurs in the `chosen` sequence
    pub fn from_choices<I: IntoIterator<Item = usize>>(nb_patterns: usize, chosen: I) -> Self {
        let mut usage = vec![0; nb_patterns];
        for p in chosen {
            usage[p] += 1;
        }
        Solution { usage }
    }
    pub fn usage(&self) -> &[usize] {
        &self.usage
    }
    /// The number of bins used by this solution (its objective value)
    pub fn nb_bins(&self) -> usize {
        self.usage.iter().sum()
    }
    /// The pattern index of each bin, in increasing index order
    pub fn choices(&self) -> impl Iterator<Item = usize> + '_ {
        self.usage.iter().enumerate()
            .flat_map(|(p, &n)| std::iter::repeat(p).take(n))
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before completion
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a minimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal)? or is it an approximation ?
    pub is_exact: bool,
    /// if present the number of bins of the best solution that was found
    pub best_value: Option<usize>,
    /// true iff the best solution was found by the search itself rather
    /// than being the greedy seed (or a primal set by the client)
    pub from_search: bool,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
