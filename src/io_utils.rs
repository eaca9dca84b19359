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

//! This module contains everything that is necessary to parse a bin packing
//! instance and turn it into a structs usable in Rust.
//!
//! The expected format is a sequence of whitespace separated non-negative
//! integers: the bin capacity, the number `n` of item types and then `n` pairs
//! `size count` (one per item type).
//!
//! ```plain
//! 10 3
//! 6 1
//! 5 2
//! 4 1
//! ```

use std::{fs::File, io::{BufReader, Read}, path::Path};

use crate::{Error, Instance, ItemType};

/// This function is used to read an instance from file. It returns either an
/// instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    let f = File::open(fname)?;
    let mut f = BufReader::new(f);
    let mut text = String::new();
    f.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Parses the text of an instance
pub fn parse_instance(text: &str) -> Result<Instance, Error> {
    let mut tokens = text.split_whitespace();

    let capacity = next_field(&mut tokens, "the bin capacity")?;
    let nb_types = next_field(&mut tokens, "the number of item types")?;

    let mut items = vec![];
    for i in 0..nb_types {
        let size   = next_field(&mut tokens, &format!("the size of item type {}", i))?;
        let demand = next_field(&mut tokens, &format!("the count of item type {}", i))?;
        items.push(ItemType { size, demand });
    }
    Instance::new(capacity, items)
}

fn next_field<'a, I: Iterator<Item = &'a str>>(tokens: &mut I, field: &str) -> Result<usize, Error> {
    let value = tokens.next()
        .ok_or_else(|| Error::Format(format!("{} is missing", field)))?;
    value.parse::<usize>()
        .map_err(|cause| Error::InvalidField { field: field.to_string(), value: value.to_string(), cause })
}

#[cfg(test)]
mod test_io_utils {
    use crate::*;

    #[test]
    fn a_well_formed_instance_is_parsed_and_sorted() {
        let inst = parse_instance("10 3\n4 1\n6 1\n5 2\n").unwrap();
        assert_eq!(inst.capacity(), 10);
        assert_eq!(inst.items(), &[
            ItemType{size: 6, demand: 1},
            ItemType{size: 5, demand: 2},
            ItemType{size: 4, demand: 1}]);
    }
    #[test]
    fn layout_does_not_matter() {
        let inst = parse_instance("  10\t1 10\n\n 1").unwrap();
        assert_eq!(inst.items(), &[ItemType{size: 10, demand: 1}]);
    }
    #[test]
    fn a_missing_pair_is_reported() {
        let res = parse_instance("10 2\n6 1\n");
        match res {
            Err(Error::Format(msg)) => assert!(msg.contains("item type 1")),
            other => panic!("unexpected {:?}", other),
        }
    }
    #[test]
    fn a_negative_count_is_reported_with_its_field() {
        let res = parse_instance("10 1\n6 -1\n");
        match res {
            Err(Error::InvalidField{field, value, ..}) => {
                assert_eq!(field, "the count of item type 0");
                assert_eq!(value, "-1");
            },
            other => panic!("unexpected {:?}", other),
        }
    }
    #[test]
    fn garbage_is_reported() {
        assert!(matches!(parse_instance("ten 1 6 1"), Err(Error::InvalidField{..})));
    }
    #[test]
    fn validation_errors_are_forwarded() {
        assert!(matches!(parse_instance("0 0"), Err(Error::InvalidCapacity)));
        assert!(matches!(parse_instance("10 1 12 1"), Err(Error::Oversized{index: 0, ..})));
    }
    #[test]
    fn huge_values_are_handled_without_overflow() {
        let inst = parse_instance("18446744073709551615 1\n1 1\n").unwrap();
        assert_eq!(inst.lower_bound(), 1);

        let inst = parse_instance("18446744073709551615 1\n9223372036854775808 1").unwrap();
        assert_eq!(PatternCatalogue::enumerate(&inst).len(), 1);

        let res = parse_instance("18446744073709551615 1\n9223372036854775808 2");
        assert!(matches!(res, Err(Error::TooLarge)));
        let res = parse_instance("10 1\n5 4611686018427387904");
        assert!(matches!(res, Err(Error::TooLarge)));
    }
    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        assert!(matches!(read_instance("/this/file/does/not/exist"), Err(Error::Io(_))));
    }
}
