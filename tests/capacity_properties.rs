// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests for the capacity contract.
//!
//! Whatever sequence of adds, inserts and removals is applied, a list never
//! holds more than its capacity, rejected calls leave it untouched, and it
//! stays element-for-element equal to a plain `Vec` model that applies the
//! same capacity rule.

use std::collections::VecDeque;

use proptest::prelude::*;

use bounded_list::{Bounded, BoundedList, Error, OverflowPolicy, SequenceStore};

#[derive(Clone, Debug)]
enum Op {
    Add(u8),
    Insert(usize, u8),
    Remove(usize),
    Pop,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Add),
        3 => (0usize..12, any::<u8>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => (0usize..12).prop_map(Op::Remove),
        1 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

fn apply<S: SequenceStore<u8>>(list: &mut BoundedList<u8, S>, model: &mut Vec<u8>, op: &Op) {
    let capacity = list.capacity();
    match *op {
        Op::Add(x) => {
            let res = list.add(x);
            if model.len() == capacity {
                assert_eq!(res, Err(Error::Full { capacity }));
            } else {
                assert_eq!(res, Ok(()));
                model.push(x);
            }
        }
        Op::Insert(i, x) => {
            let res = list.insert(i, x);
            if model.len() == capacity {
                assert_eq!(res, Err(Error::Full { capacity }));
            } else if i > model.len() {
                assert_eq!(res, Err(Error::OutOfBounds { index: i, len: model.len() }));
            } else {
                assert_eq!(res, Ok(()));
                model.insert(i, x);
            }
        }
        Op::Remove(i) => {
            let expected = (i < model.len()).then(|| model.remove(i));
            assert_eq!(list.remove(i), expected);
        }
        Op::Pop => assert_eq!(list.pop(), model.pop()),
        Op::Clear => {
            list.clear();
            model.clear();
        }
    }
}

fn check<S: SequenceStore<u8>>(capacity: usize, ops: &[Op]) {
    let mut list: BoundedList<u8, S> = BoundedList::with_capacity(capacity);
    let mut model = Vec::new();
    for op in ops {
        apply(&mut list, &mut model, op);
        assert!(list.len() <= list.capacity());
        assert_eq!(list.capacity(), capacity);
        assert_eq!(list.is_full(), list.len() == capacity);
        assert_eq!(list.overflow_policy(), OverflowPolicy::Fail);
        assert!(list.iter().eq(model.iter()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn len_never_exceeds_capacity_vec(capacity in 0usize..8, ops in prop::collection::vec(op(), 0..64)) {
        check::<Vec<u8>>(capacity, &ops);
    }

    #[test]
    fn len_never_exceeds_capacity_deque(capacity in 0usize..8, ops in prop::collection::vec(op(), 0..64)) {
        check::<VecDeque<u8>>(capacity, &ops);
    }

    #[test]
    fn construction_keeps_exactly_the_prefix_that_fits(
        capacity in 0isize..10,
        items in prop::collection::vec(any::<i16>(), 0..20),
    ) {
        let cap = capacity as usize;
        match BoundedList::<i16>::try_from_iter(capacity, items.clone()) {
            Ok(list) => {
                prop_assert!(items.len() <= cap);
                prop_assert_eq!(list.as_slice(), &items[..]);
            }
            Err(err) => {
                prop_assert!(items.len() > cap);
                prop_assert_eq!(err.error(), Error::Full { capacity: cap });
                prop_assert_eq!(err.partial().as_slice(), &items[..cap]);
            }
        }
    }

    #[test]
    fn negative_capacity_is_always_rejected(capacity in isize::MIN..0) {
        prop_assert_eq!(BoundedList::<u8>::new(capacity).unwrap_err(), Error::InvalidCapacity);
        let err = BoundedList::<u8>::try_from_iter(capacity, [1, 2, 3]).unwrap_err();
        prop_assert_eq!(err.error(), Error::InvalidCapacity);
        prop_assert!(err.partial().is_empty());
    }

    #[test]
    fn rejected_add_leaves_full_list_unchanged(items in prop::collection::vec(any::<u32>(), 0..16), extra in any::<u32>()) {
        let mut list: BoundedList<u32> =
            BoundedList::try_from_iter_with_capacity(items.len(), items.clone()).unwrap();
        prop_assert!(list.is_full());
        prop_assert_eq!(list.try_add(extra), Err(Error::Full { capacity: items.len() }));
        prop_assert_eq!(list.try_insert(0, extra), Err(Error::Full { capacity: items.len() }));
        prop_assert_eq!(list.as_slice(), &items[..]);
    }
}
