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

//! This module provides the greedy packing used to seed the branch-and-bound
//! with an initial upper bound (and to serve as a fallback answer).

use crate::{Instance, Packing, Bin};

/// Packs the items with the first fit policy: the items are taken type by
/// type in the catalogue order (largest first) and each one of them is put in
/// the first open bin (in creation order) which still has room for it. A new
/// bin is opened when none of the open bins can receive the item.
///
/// This always yields a feasible packing of validated instances, but gives no
/// guarantee of optimality.
///
/// # Example
/// ```
/// # use binpack::*;
/// let instance = Instance::new(10, vec![
///     ItemType { size: 6, demand: 1 },
///     ItemType { size: 5, demand: 2 },
///     ItemType { size: 4, demand: 1 },
/// ]).unwrap();
/// let packing = first_fit(&instance);
/// assert_eq!(2, packing.nb_bins());
/// assert_eq!(vec![1, 0, 1], packing.bins[0].counts);
/// ```
pub fn first_fit(instance: &Instance) -> Packing {
    let capacity = instance.capacity();
    let nb_types = instance.nb_types();
    let mut bins: Vec<Bin> = vec![];

    for (j, item) in instance.items().iter().enumerate() {
        for _ in 0..item.demand {
            match bins.iter_mut().find(|b| item.size <= capacity - b.load) {
                Some(bin) => {
                    bin.counts[j] += 1;
                    bin.load += item.size;
                },
                None => {
                    let mut bin = Bin::empty(nb_types);
                    bin.counts[j] = 1;
                    bin.load = item.size;
                    bins.push(bin);
                }
            }
        }
    }
    Packing { bins }
}
