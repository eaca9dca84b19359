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

//! This module provides the obsolescence policies which decide whether the
//! branches of the search tree are worth exploring.

use crate::{Instance, Obsolescence, Pattern};

/// _This is the default obsolescence policy._ A branch is obsolete when the
/// candidate pattern holds none of the items that still wait for a bin: such
/// a pattern would open a bin without packing anything.
///
/// # Note
/// Since every size is positive, this is exactly the patterns whose
/// `effective_size` is zero, which the branch-and-bound skips anyway. With
/// this policy the search is only pruned by its bounds.
#[derive(Debug, Default, Copy, Clone)]
pub struct UselessPattern;
impl Obsolescence for UselessPattern {
    fn is_obsolete(&self, _: &Instance, remaining: &[usize], _: usize, candidate: &Pattern) -> bool {
        candidate.counts().iter().zip(remaining.iter())
            .all(|(&c, &r)| c == 0 || r == 0)
    }
}

/// A more aggressive policy: as soon as one pattern has been chosen, the
/// branch is obsolete whenever the demand of any item type is fully met by
/// the patterns on the stack. This is independent of the candidate pattern.
///
/// # Warning
/// This policy is a heuristic. It drastically shrinks the search tree but it
/// may discard the optimal packing. Completions obtained with it are only
/// marked exact when the packing found meets the root lower bound.
#[derive(Debug, Default, Copy, Clone)]
pub struct SaturatedType;
impl Obsolescence for SaturatedType {
    fn is_obsolete(&self, _: &Instance, remaining: &[usize], depth: usize, _: &Pattern) -> bool {
        depth > 0 && remaining.iter().any(|&r| r == 0)
    }
    fn is_sound(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod test_obsolescence {
    use crate::*;

    fn instance() -> Instance {
        Instance::new(10, vec![
            ItemType{size: 6, demand: 1},
            ItemType{size: 5, demand: 2},
            ItemType{size: 4, demand: 1}]).unwrap()
    }

    #[test]
    fn useless_pattern_keeps_a_pattern_packing_something() {
        let inst = instance();
        let p = Pattern::new(&inst, vec![0, 1, 1]);
        assert!(!UselessPattern.is_obsolete(&inst, &[1, 2, 1], 0, &p));
        assert!(!UselessPattern.is_obsolete(&inst, &[1, 0, 1], 1, &p));
    }
    #[test]
    fn useless_pattern_discards_a_pattern_packing_nothing() {
        let inst = instance();
        let p = Pattern::new(&inst, vec![0, 2, 0]);
        assert!(UselessPattern.is_obsolete(&inst, &[1, 0, 1], 1, &p));
    }
    #[test]
    fn useless_pattern_matches_a_null_effective_size() {
        let inst = instance();
        let catalogue = PatternCatalogue::enumerate(&inst);
        for a in 0..=1 {
            for b in 0..=2 {
                for c in 0..=1 {
                    let remaining = [a, b, c];
                    for p in catalogue.iter() {
                        let useless = p.effective_size(&inst, &remaining) == 0;
                        assert_eq!(useless, UselessPattern.is_obsolete(&inst, &remaining, 1, p));
                    }
                }
            }
        }
    }
    #[test]
    fn useless_pattern_is_sound() {
        assert!(UselessPattern.is_sound());
    }
    #[test]
    fn saturated_type_never_prunes_the_root() {
        let inst = instance();
        let p = Pattern::new(&inst, vec![0, 2, 0]);
        assert!(!SaturatedType.is_obsolete(&inst, &[0, 2, 1], 0, &p));
    }
    #[test]
    fn saturated_type_prunes_as_soon_as_one_type_is_met() {
        let inst = instance();
        let p = Pattern::new(&inst, vec![0, 1, 1]);
        assert!(SaturatedType.is_obsolete(&inst, &[0, 2, 1], 1, &p));
        assert!(!SaturatedType.is_obsolete(&inst, &[1, 1, 1], 1, &p));
    }
    #[test]
    fn saturated_type_is_not_sound() {
        assert!(!SaturatedType.is_sound());
    }
}
