//! Property-based tests comparing `List` against a `Vec` model.

use proptest::prelude::*;
use proptest::sample::Index;
use unrolled_list::{Error, List};

#[derive(Clone, Debug)]
enum Op {
    Append(u8),
    Insert(Index, u8),
    Remove(Index),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Append),
        3 => (any::<Index>(), any::<u8>()).prop_map(|(at, value)| Op::Insert(at, value)),
        2 => any::<Index>().prop_map(Op::Remove),
    ]
}

fn arbitrary_node_size() -> impl Strategy<Value = usize> {
    prop_oneof![Just(2usize), Just(4usize), Just(6usize), Just(8usize)]
}

/// Apply `op` to both the list and the model, checking that they agree on the
/// outcome.
fn apply(list: &mut List<u8>, model: &mut Vec<u8>, op: &Op) -> Result<(), TestCaseError> {
    match op {
        Op::Append(value) => {
            let added = list.append(*value);
            prop_assert_eq!(added, !model.contains(value));
            if added {
                model.push(*value);
            }
        }
        Op::Insert(at, value) => {
            let at = at.index(model.len() + 1);
            list.insert(at, *value).unwrap();
            if at < model.len() || !model.contains(value) {
                model.insert(at, *value);
            }
        }
        Op::Remove(at) => {
            if model.is_empty() {
                prop_assert_eq!(
                    list.remove(0),
                    Err(Error::IndexOutOfBounds { index: 0, len: 0 })
                );
            } else {
                let at = at.index(model.len());
                prop_assert_eq!(list.remove(at), Ok(model.remove(at)));
            }
        }
    }
    Ok(())
}

fn check_occupancy(list: &List<u8>) -> Result<(), TestCaseError> {
    let size = list.node_size();
    let lens = list.node_lens();
    prop_assert_eq!(lens.iter().sum::<usize>(), list.len());
    prop_assert_eq!(lens.len(), list.node_count());
    for (i, &len) in lens.iter().enumerate() {
        prop_assert!(len >= 1 && len <= size, "node {} holds {} elements", i, len);
        if i + 1 < lens.len() {
            prop_assert!(len >= size / 2, "non-last node {} holds {} elements", i, len);
        }
    }
    Ok(())
}

fn dedup_first(values: &[u8]) -> Vec<u8> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(*value);
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of operations keeps the list equal to the model and every
    /// node within its occupancy bounds.
    #[test]
    fn list_matches_vec_model(
        node_size in arbitrary_node_size(),
        ops in prop::collection::vec(arbitrary_op(), 1..120),
    ) {
        let mut list = List::with_node_size(node_size).unwrap();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;
            check_occupancy(&list)?;
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(list.to_vec(), model.clone());
        prop_assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(),
            model.iter().rev().copied().collect::<Vec<_>>());
    }

    /// Inserting at a position and removing from it again restores the list.
    #[test]
    fn insert_then_remove_restores(
        node_size in arbitrary_node_size(),
        values in prop::collection::vec(any::<u8>(), 0..60),
        at in any::<Index>(),
    ) {
        let mut list: List<u16> = List::with_node_size(node_size).unwrap();
        list.extend(values.into_iter().map(u16::from));
        let before = list.to_vec();
        let at = at.index(list.len() + 1);
        // never present, so not rejected even at the end
        let value = u16::MAX;
        list.insert(at, value).unwrap();
        prop_assert_eq!(list.len(), before.len() + 1);
        prop_assert_eq!(list.get(at), Some(&value));
        prop_assert_eq!(list.remove(at), Ok(value));
        prop_assert_eq!(list.to_vec(), before);
    }

    /// Sorting yields the ordered first occurrences and packs every node but
    /// the last.
    #[test]
    fn sort_orders_first_occurrences(
        node_size in arbitrary_node_size(),
        ops in prop::collection::vec(arbitrary_op(), 0..80),
        descending in any::<bool>(),
    ) {
        let mut list = List::with_node_size(node_size).unwrap();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;
        }
        let mut expected = dedup_first(&model);
        if descending {
            list.sort_descending();
            expected.sort_by(|a, b| b.cmp(a));
        } else {
            list.sort();
            expected.sort();
        }
        prop_assert_eq!(list.to_vec(), expected);
        check_occupancy(&list)?;
        let lens = list.node_lens();
        if let Some((_, full)) = lens.split_last() {
            prop_assert!(full.iter().all(|&len| len == node_size));
        }
    }

    /// A cursor walking forward and removing every other element behaves like
    /// `Vec::retain`.
    #[test]
    fn cursor_removal_matches_retain(
        node_size in arbitrary_node_size(),
        values in prop::collection::vec(any::<u8>(), 0..60),
    ) {
        let mut list = List::with_node_size(node_size).unwrap();
        list.extend(values);
        let mut expected = list.to_vec();
        let mut cursor = list.cursor();
        let mut keep = true;
        while cursor.has_next() {
            cursor.next(&list).unwrap();
            if !keep {
                cursor.remove(&mut list).unwrap();
            }
            keep = !keep;
        }
        let mut keep = true;
        expected.retain(|_| {
            let kept = keep;
            keep = !keep;
            kept
        });
        prop_assert_eq!(list.to_vec(), expected);
        check_occupancy(&list)?;
    }
}
