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

//! This module provides the stable merge sort used to order the item types of
//! an instance by decreasing size. The order it yields is the order used by
//! every downstream component (patterns enumeration, greedy packing, search).

use crate::ItemType;

/// Sorts the given item types by decreasing size. Item types having the same
/// size keep their relative order.
pub fn sort_descending(items: &mut [ItemType]) {
    if items.len() < 2 {
        return;
    }
    let mut buffer = items.to_vec();
    merge_sort(items, &mut buffer);
}

/// `buffer` is a scratch area with the same length as `items`
fn merge_sort(items: &mut [ItemType], buffer: &mut [ItemType]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    merge_sort(&mut items[..mid], &mut buffer[..mid]);
    merge_sort(&mut items[mid..], &mut buffer[mid..]);

    buffer.copy_from_slice(items);
    let (left, right) = buffer.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        if j == right.len() || (i < left.len() && left[i].size >= right[j].size) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
