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

//! This module provides the bounded stack which is used both by the patterns
//! enumeration (where it holds item type indices and tracks the load of the
//! bin being filled) and by the branch-and-bound (where it holds pattern
//! indices and tracks the number of bins committed so far).

use crate::Instance;

/// This trait tells how much a value pushed on a `BoundedStack` adds to its
/// cumulative counter.
pub trait Weigh {
    fn weigh(&self, value: usize) -> usize;
}

/// Every value weighs one: the counter is the depth of the stack
#[derive(Debug, Default, Copy, Clone)]
pub struct Unit;
impl Weigh for Unit {
    #[inline]
    fn weigh(&self, _value: usize) -> usize {
        1
    }
}

/// Values are item type indices and weigh the size of their type: the counter
/// is the load of a bin holding the items on the stack.
#[derive(Debug, Copy, Clone)]
pub struct BySize<'a>(pub &'a Instance);
impl Weigh for BySize<'_> {
    #[inline]
    fn weigh(&self, value: usize) -> usize {
        self.0.size(value)
    }
}

/// A LIFO sequence of integers along with the running sum of their weights.
#[derive(Debug, Clone)]
pub struct BoundedStack<W: Weigh> {
    values: Vec<usize>,
    total: usize,
    weigh: W,
}
impl <W: Weigh> BoundedStack<W> {
    pub fn new(weigh: W) -> Self {
        BoundedStack { values: vec![], total: 0, weigh }
    }
    pub fn push(&mut self, value: usize) {
        self.total += self.weigh.weigh(value);
        self.values.push(value);
    }
    /// Removes the top value and returns it.
    ///
    /// # Panics
    /// When the stack is empty: every pop must match an earlier push.
    pub fn pop(&mut self) -> usize {
        match self.values.pop() {
            Some(value) => {
                self.total -= self.weigh.weigh(value);
                value
            },
            None => panic!("pop on an empty stack")
        }
    }
    pub fn peek(&self) -> Option<usize> {
        self.values.last().copied()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn depth(&self) -> usize {
        self.values.len()
    }
    /// The sum of the weights of the values on the stack
    pub fn total(&self) -> usize {
        self.total
    }
    /// Iterates over the values from the bottom to the top of the stack
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }
}
