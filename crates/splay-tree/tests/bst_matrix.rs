use splay_tree::{Bst, TreeError};

fn build(elements: &[i32]) -> Bst<i32> {
    let mut bst = Bst::new();
    for &e in elements {
        bst.insert(e);
    }
    bst
}

fn elements(bst: &Bst<i32>) -> Vec<i32> {
    bst.iter().copied().collect()
}

#[test]
fn bst_insert_in_order_matrix() {
    let bst = build(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(elements(&bst), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(bst.len(), 7);
    assert_eq!(bst.height(), 3);
    bst.assert_valid().unwrap();

    let root = bst.root().unwrap();
    let root_node = bst.node(root).unwrap();
    assert_eq!(*root_node.element(), 5);
    assert_eq!(root_node.parent(), None);
    let left = bst.node(root_node.left().unwrap()).unwrap();
    let right = bst.node(root_node.right().unwrap()).unwrap();
    assert_eq!(*left.element(), 3);
    assert_eq!(*right.element(), 8);
    assert_eq!(left.parent(), Some(root));
    assert!(!root_node.is_leaf());
    assert!(bst.node(bst.find(&1).unwrap()).unwrap().is_leaf());
}

#[test]
fn bst_duplicate_insert_returns_existing_node() {
    let mut bst = build(&[5, 3, 8]);
    let three = bst.find(&3).unwrap();
    assert_eq!(bst.insert(3), three);
    assert_eq!(bst.insert(3), three);
    assert_eq!(bst.len(), 3);
    assert_eq!(elements(&bst), vec![3, 5, 8]);
}

#[test]
fn bst_membership_round_trip() {
    let mut bst = build(&[5, 3, 8]);
    let node = bst.insert(6);
    assert_eq!(bst.find(&6), Some(node));
    assert_eq!(*bst.node(node).unwrap().element(), 6);
    assert!(bst.contains(&6));

    bst.delete(&6);
    assert_eq!(bst.find(&6), None);
    assert!(!bst.contains(&6));
    bst.assert_valid().unwrap();
}

#[test]
fn bst_delete_two_children_promotes_successor() {
    let mut bst = build(&[5, 3, 8, 1, 4, 7, 9]);
    let five = bst.find(&5).unwrap();
    let seven = bst.find(&7).unwrap();

    assert_eq!(bst.delete(&5), Some(five));
    assert_eq!(elements(&bst), vec![1, 3, 4, 7, 8, 9]);
    bst.assert_valid().unwrap();

    // The located node survives and now holds the successor's value; the
    // successor's own node is the one unlinked.
    assert_eq!(bst.root(), Some(five));
    assert_eq!(*bst.node(five).unwrap().element(), 7);
    assert_eq!(bst.node(seven).unwrap_err(), TreeError::StaleNode(seven));
    assert_eq!(bst.element(seven), Some(&5));
    let eight = bst.find(&8).unwrap();
    assert_eq!(bst.node(eight).unwrap().left(), None);
}

#[test]
fn bst_delete_successor_with_right_child() {
    // 10's successor 12 has a right child 13 that must be spliced up.
    let mut bst = build(&[10, 5, 15, 12, 20, 13]);
    bst.delete(&10);
    assert_eq!(elements(&bst), vec![5, 12, 13, 15, 20]);
    let fifteen = bst.find(&15).unwrap();
    let thirteen = bst.find(&13).unwrap();
    assert_eq!(bst.node(fifteen).unwrap().left(), Some(thirteen));
    assert_eq!(bst.node(thirteen).unwrap().parent(), Some(fifteen));
    bst.assert_valid().unwrap();
}

#[test]
fn bst_delete_leaf_and_single_child_matrix() {
    let mut bst = build(&[5, 3, 8, 1, 9]);

    // Leaf.
    let one = bst.find(&1).unwrap();
    assert_eq!(bst.delete(&1), Some(one));
    assert_eq!(bst.node(one).unwrap_err(), TreeError::StaleNode(one));
    assert_eq!(bst.element(one), Some(&1));
    assert_eq!(elements(&bst), vec![3, 5, 8, 9]);

    // Only a right child: 9 moves up under 5.
    let five = bst.find(&5).unwrap();
    bst.delete(&8);
    let nine = bst.find(&9).unwrap();
    assert_eq!(bst.node(five).unwrap().right(), Some(nine));
    assert_eq!(bst.node(nine).unwrap().parent(), Some(five));
    bst.assert_valid().unwrap();

    // Only a left child at the root: 3 becomes root.
    bst.delete(&9);
    bst.delete(&5);
    let three = bst.find(&3).unwrap();
    assert_eq!(bst.root(), Some(three));
    assert_eq!(bst.node(three).unwrap().parent(), None);
    bst.assert_valid().unwrap();

    // Last node.
    bst.delete(&3);
    assert!(bst.is_empty());
    assert_eq!(bst.len(), 0);
    assert_eq!(bst.root(), None);
    bst.assert_valid().unwrap();
}

#[test]
fn bst_delete_missing_is_noop() {
    let mut bst = build(&[5, 3, 8, 1, 4, 7, 9]);
    let before = bst.to_string("");
    assert_eq!(bst.delete(&99), None);
    assert_eq!(elements(&bst), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(bst.to_string(""), before);

    let mut empty = Bst::<i32>::new();
    assert_eq!(empty.delete(&1), None);
}

#[test]
fn bst_min_max_and_empty_errors() {
    let mut bst = Bst::<i32>::new();
    assert_eq!(bst.find_min(), Err(TreeError::EmptyTree));
    assert_eq!(bst.find_max(), Err(TreeError::EmptyTree));
    assert_eq!(bst.delete_min(), Err(TreeError::EmptyTree));

    for e in [5, 3, 8, 1, 4] {
        bst.insert(e);
    }
    assert_eq!(bst.element(bst.find_min().unwrap()), Some(&1));
    assert_eq!(bst.element(bst.find_max().unwrap()), Some(&8));

    bst.delete_min().unwrap();
    bst.delete_min().unwrap();
    assert_eq!(elements(&bst), vec![4, 5, 8]);
    bst.assert_valid().unwrap();
}

#[test]
fn bst_successor_and_predecessor_matrix() {
    let bst = build(&[5, 3, 8, 1, 4, 7, 9]);
    let sorted = [1, 3, 4, 5, 7, 8, 9];
    for (i, e) in sorted.iter().enumerate() {
        let node = bst.find(e).unwrap();
        let succ = bst.successor(node).unwrap().map(|s| *bst.element(s).unwrap());
        let pred = bst.predecessor(node).unwrap().map(|p| *bst.element(p).unwrap());
        assert_eq!(succ, sorted.get(i + 1).copied(), "successor of {e}");
        assert_eq!(pred, i.checked_sub(1).map(|j| sorted[j]), "predecessor of {e}");
    }
}

#[test]
fn bst_successor_of_stale_node_fails() {
    let mut bst = build(&[2, 1, 3]);
    let one = bst.find(&1).unwrap();
    bst.delete(&1);
    assert_eq!(bst.successor(one), Err(TreeError::StaleNode(one)));
    assert_eq!(bst.successor(1000), Err(TreeError::StaleNode(1000)));
}

#[test]
fn bst_clear_and_to_string() {
    let mut bst = build(&[2, 1, 3]);
    assert_eq!(bst.to_string(""), "Bst\n└─ 2\n  ← 1\n  → 3");
    bst.clear();
    assert!(bst.is_empty());
    assert_eq!(bst.to_string(""), "Bst ∅");
    assert_eq!(bst.iter().next(), None);
}

#[test]
fn bst_to_string_nested_and_deep() {
    let bst = build(&[5, 3, 8, 4]);
    assert_eq!(bst.to_string(""), "Bst\n└─ 5\n  ← 3\n    → 4\n  → 8");
    assert_eq!(bst.to_string("> "), "Bst\n> └─ 5\n>   ← 3\n>     → 4\n>   → 8");

    // A sorted chain is as deep as it is long.
    let chain = build(&(1..=2000).collect::<Vec<_>>());
    let dump = std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(move || chain.to_string(""))
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(dump.lines().count(), 2001);
    assert!(dump.ends_with(&format!("\n{}→ 2000", "  ".repeat(1999))));
}

#[test]
fn bst_iterator_size_hint() {
    let bst = build(&[4, 2, 6]);
    let it = bst.iter();
    assert_eq!(it.size_hint(), (3, Some(3)));
    let collected: Vec<i32> = (&bst).into_iter().copied().collect();
    assert_eq!(collected, vec![2, 4, 6]);
}
