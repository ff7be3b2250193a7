#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can check
// internals-adjacent invariants (slot growth, stats) through the public
// surface.

use crate::chain_table::ChainTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Short mixed-case words over a small alphabet to force collisions,
// case-folding and the occasional empty token.
prop_compose! {
    fn arb_word()(s in "[a-cA-C]{0,4}") -> String { s }
}

#[derive(Clone, Debug)]
enum Op {
    Ensure(String),
    Bump(String),
    Contains(String),
    InsertRaw(String, u64),
}

prop_compose! {
    fn arb_ops()(ops in proptest::collection::vec(
        prop_oneof![
            arb_word().prop_map(Op::Ensure),
            arb_word().prop_map(Op::Bump),
            arb_word().prop_map(Op::Contains),
            (arb_word(), 1u64..4).prop_map(|(w, c)| Op::InsertRaw(w, c)),
        ], 1..100)) -> Vec<Op> { ops }
}

// Per-word model state: how many nodes exist for the word (raw inserts
// create duplicates) and the total count summed across them.
#[derive(Clone, Copy, Default)]
struct ModelEntry {
    nodes: u64,
    total: u64,
}

// State machine harness over ChainTable against a HashMap model. The
// model mirrors the duplicate-node semantics: `bump`/`ensure` on a word
// with N nodes adds N to its total.
proptest! {
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        const INITIAL_SLOTS: usize = 2;
        let mut sut = ChainTable::with_slots(INITIAL_SLOTS);
        let mut model: HashMap<String, ModelEntry> = HashMap::new();

        for op in ops {
            match op {
                Op::Ensure(w) => {
                    let key = w.to_lowercase();
                    sut.ensure(&w);
                    let e = model.entry(key).or_default();
                    if e.nodes == 0 {
                        e.nodes = 1;
                        e.total = 1;
                    } else {
                        e.total += e.nodes;
                    }
                }
                Op::Bump(w) => {
                    let key = w.to_lowercase();
                    let bumped = sut.bump(&w) as u64;
                    let e = model.entry(key).or_default();
                    prop_assert_eq!(bumped, e.nodes, "bump touches every node of the word");
                    e.total += e.nodes;
                }
                Op::Contains(w) => {
                    let before = (sut.len(), sut.head_count(), sut.slot_count(), sut.load_factor());
                    let has = sut.contains(&w);
                    let in_model = model
                        .get(&w.to_lowercase())
                        .map(|e| e.nodes > 0)
                        .unwrap_or(false);
                    prop_assert_eq!(has, in_model);
                    let after = (sut.len(), sut.head_count(), sut.slot_count(), sut.load_factor());
                    prop_assert_eq!(before, after, "contains must not mutate");
                }
                Op::InsertRaw(w, c) => {
                    let key = w.to_lowercase();
                    sut.insert(&w, c);
                    let e = model.entry(key).or_default();
                    e.nodes += 1;
                    e.total += c;
                }
            }

            // Post-conditions after each op.
            for (word, e) in &model {
                if e.nodes > 0 {
                    prop_assert_eq!(sut.count(word), e.total);
                }
            }
            let model_nodes: u64 = model.values().map(|e| e.nodes).sum();
            prop_assert_eq!(sut.len() as u64, model_nodes);
            prop_assert!(sut.head_count() <= sut.slot_count());
            prop_assert_eq!(
                sut.load_factor(),
                sut.head_count() as f64 / sut.slot_count() as f64
            );
            prop_assert_eq!(
                sut.avg_chain_length(),
                sut.len() as f64 / sut.slot_count() as f64
            );
            // Slot array only doubles: always a power-of-two multiple of
            // the configured initial size.
            prop_assert_eq!(sut.slot_count() % INITIAL_SLOTS, 0);
            prop_assert!((sut.slot_count() / INITIAL_SLOTS).is_power_of_two());
            // Rehash keeps up with growth: chains average at most one
            // node per slot once the triggering insert returns.
            prop_assert!(sut.len() <= sut.slot_count());
        }

        // Final sweep: every stored pair is reachable and the rendered
        // report lists one line per node plus header and trailer.
        let total_from_iter: u64 = sut.iter().map(|(_, c)| c).sum();
        let total_from_model: u64 = model.values().map(|e| e.total).sum();
        prop_assert_eq!(total_from_iter, total_from_model);
        prop_assert_eq!(sut.render().lines().count(), sut.len() + 2);
    }
}
