//! B-tree scenario tests.
//!
//! The canonical insert/delete sequence for `t = 2`, checked against the
//! exact tree shape it must produce, plus the whole-tree lifecycle
//! properties (search misses, full teardown).

use pagetree::{BTree, Error};

const SCENARIO_KEYS: [i32; 23] = [
    1, 3, 7, 10, 11, 13, 14, 15, 18, 16, 19, 24, 25, 26, 21, 4, 5, 20, 22, 2, 17, 12, 6,
];

const SCENARIO_DELETES: [i32; 7] = [6, 13, 7, 4, 2, 16, 1];

fn scenario_tree() -> BTree<i32> {
    let mut tree = BTree::new(2).unwrap();
    for k in SCENARIO_KEYS {
        tree.insert(k);
        tree.validate().unwrap();
    }
    tree
}

fn level_keys(tree: &BTree<i32>) -> Vec<Vec<Vec<i32>>> {
    tree.levels()
        .into_iter()
        .map(|level| level.into_iter().map(|keys| keys.to_vec()).collect())
        .collect()
}

fn keys(tree: &BTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

// ============================================================================
// Scenario A: canonical inserts
// ============================================================================

#[test]
fn test_scenario_insert_traversal() {
    let tree = scenario_tree();
    assert_eq!(
        keys(&tree),
        vec![1, 2, 3, 4, 5, 6, 7, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 24, 25, 26]
    );
    assert_eq!(tree.len(), SCENARIO_KEYS.len());
}

#[test]
fn test_scenario_insert_shape() {
    let tree = scenario_tree();

    assert_eq!(tree.root().unwrap().keys(), &[15]);
    assert_eq!(tree.height(), 4);
    assert_eq!(
        level_keys(&tree),
        vec![
            vec![vec![15]],
            vec![vec![10], vec![20]],
            vec![vec![3, 5], vec![13], vec![18], vec![24]],
            vec![
                vec![1, 2],
                vec![4],
                vec![6, 7],
                vec![11, 12],
                vec![14],
                vec![16, 17],
                vec![19],
                vec![21, 22],
                vec![25, 26],
            ],
        ]
    );
}

#[test]
fn test_scenario_insert_display() {
    let tree = scenario_tree();
    let expected = "[15]\n\
                    [10] [20]\n\
                    [3, 5] [13] [18] [24]\n\
                    [1, 2] [4] [6, 7] [11, 12] [14] [16, 17] [19] [21, 22] [25, 26]";
    assert_eq!(format!("{}", tree), expected);
}

// ============================================================================
// Scenario B: canonical deletes after A
// ============================================================================

#[test]
fn test_scenario_delete_traversal() {
    let mut tree = scenario_tree();
    for k in SCENARIO_DELETES {
        tree.delete(&k).unwrap();
        tree.validate().unwrap();
        assert!(!tree.contains(&k));
    }

    assert_eq!(
        keys(&tree),
        vec![3, 5, 10, 11, 12, 14, 15, 17, 18, 19, 20, 21, 22, 24, 25, 26]
    );
}

#[test]
fn test_scenario_delete_shape() {
    let mut tree = scenario_tree();
    for k in SCENARIO_DELETES {
        tree.delete(&k).unwrap();
    }

    assert_eq!(tree.height(), 3);
    assert_eq!(
        level_keys(&tree),
        vec![
            vec![vec![15, 20]],
            vec![vec![5, 12], vec![18], vec![24]],
            vec![
                vec![3],
                vec![10, 11],
                vec![14],
                vec![17],
                vec![19],
                vec![21, 22],
                vec![25, 26],
            ],
        ]
    );
    assert!(tree.stats().root_shrinks >= 1);
}

// ============================================================================
// Scenario C: search misses
// ============================================================================

#[test]
fn test_search_miss_leaves_tree_unchanged() {
    let tree = scenario_tree();
    let before = tree.root().cloned();

    for k in [0, 8, 9, 23, 27, 100] {
        assert_eq!(tree.search(&k).unwrap_err(), Error::KeyNotFound);
    }

    assert_eq!(tree.root().cloned(), before);
    assert_eq!(tree.len(), SCENARIO_KEYS.len());
}

#[test]
fn test_delete_miss_leaves_tree_unchanged() {
    let mut tree = scenario_tree();
    let before = tree.root().cloned();

    for k in [0, 8, 9, 23, 27, 100] {
        assert_eq!(tree.delete(&k), Err(Error::KeyNotFound));
        // Repeating is still a no-op
        assert_eq!(tree.delete(&k), Err(Error::KeyNotFound));
    }

    assert_eq!(tree.root().cloned(), before);
    assert_eq!(tree.len(), SCENARIO_KEYS.len());
}

// ============================================================================
// Scenario D: full teardown
// ============================================================================

#[test]
fn test_delete_everything_empties_tree() {
    let mut tree = scenario_tree();
    for k in SCENARIO_KEYS {
        tree.delete(&k).unwrap();
        tree.validate().unwrap();
    }

    assert!(tree.root().is_none());
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.search(&1).unwrap_err(), Error::EmptyTree);
    assert_eq!(tree.delete(&1), Err(Error::EmptyTree));
}

#[test]
fn test_tree_is_reusable_after_teardown() {
    let mut tree = scenario_tree();
    for k in SCENARIO_KEYS.iter().rev() {
        tree.delete(k).unwrap();
    }
    assert!(tree.root().is_none());

    for k in SCENARIO_KEYS {
        tree.insert(k);
    }
    assert_eq!(level_keys(&tree), level_keys(&scenario_tree()));
}

// ============================================================================
// Other degrees
// ============================================================================

#[test]
fn test_larger_degrees_round_trip() {
    for t in [3, 4, 5, 8, 16] {
        let mut tree = BTree::new(t).unwrap();
        let n = 1_000;
        for i in 0..n {
            tree.insert((i * 7919) % n);
        }
        tree.validate().unwrap();
        assert_eq!(keys(&tree), (0..n).collect::<Vec<_>>());

        for i in (0..n).filter(|i| i % 2 == 0) {
            tree.delete(&i).unwrap();
        }
        tree.validate().unwrap();
        assert_eq!(keys(&tree), (0..n).filter(|i| i % 2 == 1).collect::<Vec<_>>());

        for i in (0..n).filter(|i| i % 2 == 1) {
            tree.delete(&i).unwrap();
        }
        assert!(tree.root().is_none(), "t = {t} did not empty");
    }
}

#[test]
fn test_string_keys() {
    let mut tree: BTree<String> = BTree::new(3).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry", "date", "grape"] {
        tree.insert(word.to_string());
    }
    tree.delete(&"fig".to_string()).unwrap();

    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("pear"));
    let words: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(
        words,
        vec!["apple", "banana", "cherry", "date", "grape", "kiwi", "pear"]
    );
}
