use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use splay_tree::{Bst, FindWithCost, SplayTree};

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Delete(i16),
    Search(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0i16..64).prop_map(Op::Insert),
        2 => (0i16..64).prop_map(Op::Delete),
        1 => (0i16..64).prop_map(Op::Search),
    ]
}

proptest! {
    #[test]
    fn trees_track_a_sorted_set(ops in prop::collection::vec(op(), 0..200)) {
        let mut model = BTreeSet::new();
        let mut bst = Bst::new();
        let mut splay = SplayTree::new();

        for op in ops {
            match op {
                Op::Insert(e) => {
                    let fresh = model.insert(e);
                    let len = bst.len();
                    let node = bst.insert(e);
                    prop_assert_eq!(bst.len(), if fresh { len + 1 } else { len });
                    prop_assert_eq!(bst.find(&e), Some(node));
                    let node = splay.insert(e);
                    prop_assert_eq!(splay.root(), Some(node));
                }
                Op::Delete(e) => {
                    let present = model.remove(&e);
                    prop_assert_eq!(bst.delete(&e).is_some(), present);
                    prop_assert_eq!(splay.delete(&e).is_some(), present);
                    prop_assert_eq!(bst.find(&e), None);
                    prop_assert_eq!(splay.find(&e), None);
                }
                Op::Search(e) => {
                    let found = splay.search(&e);
                    prop_assert_eq!(found.is_some(), model.contains(&e));
                    if found.is_some() {
                        prop_assert_eq!(splay.root(), found);
                    }
                }
            }
            bst.assert_valid().map_err(TestCaseError::fail)?;
            splay.assert_valid().map_err(TestCaseError::fail)?;
            let expected: Vec<i16> = model.iter().copied().collect();
            prop_assert_eq!(bst.iter().copied().collect::<Vec<_>>(), expected.clone());
            prop_assert_eq!(splay.iter().copied().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn successor_is_next_larger(elements in prop::collection::btree_set(0i32..1000, 1..60)) {
        let mut bst = Bst::new();
        for &e in &elements {
            bst.insert(e);
        }
        let max = *elements.iter().next_back().unwrap();
        for &e in &elements {
            let node = bst.find(&e).unwrap();
            let succ = bst.successor(node).unwrap();
            let expected = elements.range(e + 1..).next().copied();
            prop_assert_eq!(succ.map(|s| *bst.element(s).unwrap()), expected);
            prop_assert_eq!(succ.is_none(), e == max);
        }
    }

    #[test]
    fn cost_is_a_side_channel(
        elements in prop::collection::vec(0i32..200, 0..80),
        accesses in prop::collection::vec(0i32..200, 0..80),
    ) {
        let mut counted = SplayTree::new();
        let mut plain = SplayTree::new();
        let mut bst = Bst::new();
        for &e in &elements {
            counted.insert(e);
            plain.insert(e);
            bst.insert(e);
        }
        for e in accesses {
            let (node, _) = counted.find_with_cost(&e);
            prop_assert_eq!(node, plain.search(&e));
            prop_assert_eq!(counted.to_string(""), plain.to_string(""));

            let before = bst.to_string("");
            let (node, cost) = bst.find_with_cost(&e);
            prop_assert_eq!(node, bst.find(&e));
            prop_assert!(cost <= bst.height());
            prop_assert_eq!(bst.to_string(""), before);
        }
    }
}

#[test]
fn randomized_deletes_keep_order() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut elements: Vec<u32> = (0..300).collect();
        elements.shuffle(&mut rng);
        let mut bst = Bst::new();
        let mut splay = SplayTree::new();
        for &e in &elements {
            bst.insert(e);
            splay.insert(e);
        }

        let mut remaining: BTreeSet<u32> = elements.iter().copied().collect();
        elements.shuffle(&mut rng);
        for e in elements {
            assert!(bst.delete(&e).is_some());
            assert!(splay.delete(&e).is_some());
            remaining.remove(&e);
            bst.assert_valid().unwrap();
            splay.assert_valid().unwrap();
            assert!(bst.iter().copied().eq(remaining.iter().copied()));
            assert!(splay.iter().copied().eq(remaining.iter().copied()));
        }
        assert!(bst.is_empty());
        assert!(splay.is_empty());
    }
}
