//! Tests for BalancedTree ordering, balance and neighbor queries

use std::rc::Rc;

use rstest::{fixture, rstest};

use noeau::domain::{BalancedTree, DomainError, Entry};
use noeau::util::testing;

fn entry(key: &str) -> Rc<Entry> {
    Rc::new(Entry::new(key, format!("translation of {key}")))
}

/// Zero-padded so lexicographic order matches numeric order.
fn key(i: usize) -> String {
    format!("key{:06}", i)
}

fn build(keys: &[String]) -> BalancedTree {
    let mut tree = BalancedTree::new();
    for k in keys {
        tree.insert(entry(k));
    }
    tree
}

fn ascending(n: usize) -> Vec<String> {
    (0..n).map(key).collect()
}

fn descending(n: usize) -> Vec<String> {
    (0..n).rev().map(key).collect()
}

/// Deterministic scramble: 7919 is prime and coprime to n.
fn scrambled(n: usize) -> Vec<String> {
    (0..n).map(|i| key((i * 7919) % n)).collect()
}

fn zigzag(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| if i % 2 == 0 { key(i / 2) } else { key(n - 1 - i / 2) })
        .collect()
}

#[fixture]
fn k1_k2_k3() -> BalancedTree {
    testing::init_test_setup();
    build(&["kahi".to_string(), "lua".to_string(), "kolu".to_string()])
}

// ============================================================
// Invariants
// ============================================================

#[rstest]
#[case::ascending(ascending(1000))]
#[case::descending(descending(1000))]
#[case::scrambled(scrambled(1000))]
#[case::zigzag(zigzag(1000))]
#[case::single(ascending(1))]
#[case::pair(descending(2))]
fn given_insert_order_when_building_then_invariants_hold(#[case] keys: Vec<String>) {
    testing::init_test_setup();
    let tree = build(&keys);

    let black_height = tree.check_invariants().expect("valid red-black tree");
    assert_eq!(black_height, tree.black_height());
    assert_eq!(tree.len(), keys.len());
    assert!(tree.root().is_some());
}

#[rstest]
#[case::ascending(ascending(777))]
#[case::scrambled(scrambled(777))]
fn given_any_insert_order_when_iterating_then_keys_strictly_increase(#[case] keys: Vec<String>) {
    let tree = build(&keys);

    let collected: Vec<&str> = tree.iter().map(|e| e.key()).collect();
    assert_eq!(collected.len(), keys.len());
    assert!(collected.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(10)]
#[case(255)]
#[case(256)]
#[case(4096)]
fn given_n_keys_when_building_then_height_within_red_black_bound(#[case] n: usize) {
    for keys in [ascending(n), descending(n), scrambled(n)] {
        let tree = build(&keys);
        let bound = 2.0 * ((n + 1) as f64).log2();
        assert!(
            tree.height() as f64 <= bound,
            "height {} exceeds bound {:.2} for n={}",
            tree.height(),
            bound,
            n
        );
    }
}

#[test]
fn given_many_sorted_inserts_when_building_then_recursion_depth_stays_logarithmic() {
    let n = 100_000;
    let tree = build(&ascending(n));
    assert_eq!(tree.len(), n);
    assert!(tree.height() <= 34, "height {}", tree.height());
    assert!(tree.check_invariants().is_ok());
}

// ============================================================
// Insert and search
// ============================================================

#[test]
fn given_inserted_entry_when_searching_then_returns_equal_entry() {
    let mut tree = BalancedTree::new();
    let stored = entry("Ola i ka wai");
    assert!(tree.insert(Rc::clone(&stored)));

    let found = tree.search("Ola i ka wai").expect("entry present");
    assert_eq!(**found, *stored);
    assert_eq!(found.translation(), "translation of Ola i ka wai");
    assert!(tree.member("Ola i ka wai"));
}

#[test]
fn given_duplicate_key_when_inserting_then_first_entry_kept() {
    let mut tree = BalancedTree::new();
    assert!(tree.insert(Rc::new(Entry::new("Ola i ka wai", "Water is life"))));
    assert!(!tree.insert(Rc::new(Entry::new("Ola i ka wai", "Life from water"))));

    assert_eq!(tree.len(), 1);
    assert_eq!(
        tree.search("Ola i ka wai").unwrap().translation(),
        "Water is life"
    );
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn given_duplicates_in_large_tree_when_reinserting_then_structure_unchanged() {
    let keys = scrambled(300);
    let mut tree = build(&keys);
    let before: Vec<String> = tree.iter().map(|e| e.key().to_string()).collect();
    let height = tree.height();

    for k in &keys {
        assert!(!tree.insert(entry(k)));
    }

    let after: Vec<String> = tree.iter().map(|e| e.key().to_string()).collect();
    assert_eq!(before, after);
    assert_eq!(tree.height(), height);
    assert_eq!(tree.len(), 300);
}

#[test]
fn given_missing_key_when_searching_then_none() {
    let tree = build(&ascending(50));
    assert!(tree.search("nonexistent").is_none());
    assert!(!tree.member("nonexistent"));
    assert!(BalancedTree::new().search("anything").is_none());
}

// ============================================================
// First / last
// ============================================================

#[test]
fn given_empty_tree_when_first_or_last_then_empty_tree_error() {
    let tree = BalancedTree::new();
    assert_eq!(tree.first().unwrap_err(), DomainError::EmptyTree);
    assert_eq!(tree.last().unwrap_err(), DomainError::EmptyTree);
}

#[rstest]
#[case::ascending(ascending(200))]
#[case::scrambled(scrambled(200))]
fn given_keys_when_first_and_last_then_min_and_max(#[case] keys: Vec<String>) {
    let tree = build(&keys);
    assert_eq!(tree.first().unwrap().key(), key(0));
    assert_eq!(tree.last().unwrap().key(), key(199));
}

// ============================================================
// Predecessor / successor
// ============================================================

#[rstest]
fn given_three_keys_when_querying_neighbors_then_adjacent_entries(k1_k2_k3: BalancedTree) {
    // kahi < kolu < lua
    let tree = k1_k2_k3;
    assert_eq!(tree.predecessor("lua").unwrap().key(), "kolu");
    assert_eq!(tree.successor("kahi").unwrap().key(), "kolu");
    assert!(tree.predecessor("kahi").is_none());
    assert!(tree.successor("lua").is_none());
}

#[rstest]
fn given_absent_query_key_when_querying_neighbors_then_nearest_stored(k1_k2_k3: BalancedTree) {
    let tree = k1_k2_k3;
    // "kaua" sits between "kahi" and "kolu"
    assert_eq!(tree.predecessor("kaua").unwrap().key(), "kahi");
    assert_eq!(tree.successor("kaua").unwrap().key(), "kolu");
    assert_eq!(tree.successor("a").unwrap().key(), "kahi");
    assert_eq!(tree.predecessor("z").unwrap().key(), "lua");
    assert!(tree.predecessor("a").is_none());
    assert!(tree.successor("z").is_none());
}

#[rstest]
fn given_entry_as_reference_point_when_querying_then_same_as_key(k1_k2_k3: BalancedTree) {
    let tree = k1_k2_k3;
    let kolu = Rc::clone(tree.search("kolu").unwrap());
    let detached = Entry::new("kolu", "three");

    assert_eq!(tree.predecessor(&kolu), tree.predecessor("kolu"));
    assert_eq!(tree.successor(&detached), tree.successor("kolu"));
    assert_eq!(tree.successor(&String::from("kolu")).unwrap().key(), "lua");
}

#[test]
fn given_every_stored_key_when_walking_neighbors_then_matches_in_order() {
    let keys = scrambled(500);
    let tree = build(&keys);
    let ordered: Vec<&str> = tree.iter().map(|e| e.key()).collect();

    for (i, k) in ordered.iter().enumerate() {
        let pred = tree.predecessor(*k).map(|e| e.key());
        let succ = tree.successor(*k).map(|e| e.key());
        assert_eq!(pred, i.checked_sub(1).map(|j| ordered[j]));
        assert_eq!(succ, ordered.get(i + 1).copied());
    }
}
