// ChainTable integration suite, exercising only the public surface.
//
// Each test documents the behavior verified and the invariants assumed.
// The core invariants:
// - Membership: every inserted word is found afterwards, case-insensitively.
// - Growth: the slot array doubles as soon as items outnumber slots and
//   no (word, count) pair is lost across a rehash.
// - Looseness: raw insert appends duplicate nodes; ensure/bump are the
//   explicit merge path.
// - Statistics: load factor and average chain length are exact ratios.
use tally_map::ChainTable;

// Test: a size-2 table plus three distinct words must resize at least
// once, whatever the hash distribution.
// Verifies: slot count doubles, all words stay retrievable with correct
// counts, summed counts are unchanged.
#[test]
fn three_words_in_two_slots_force_rehash() {
    let mut t = ChainTable::with_slots(2);
    t.ensure("alpha");
    t.ensure("beta");
    t.ensure("gamma");

    assert!(t.slot_count() > 2, "rehash must have occurred");
    assert_eq!(t.slot_count(), 4);
    for w in ["alpha", "beta", "gamma"] {
        assert!(t.contains(w));
        assert_eq!(t.count(w), 1);
    }
    assert_eq!(t.iter().map(|(_, c)| c).sum::<u64>(), 3);
}

// Test: membership across casing.
// Verifies: contains(word) is true after insert for any casing of word.
#[test]
fn inserted_words_are_always_found() {
    let mut t = ChainTable::new();
    let words = ["Apple", "BANANA", "cherry", "dAtE"];
    for w in &words {
        t.ensure(w);
    }
    for w in &words {
        assert!(t.contains(w));
        assert!(t.contains(&w.to_lowercase()));
        assert!(t.contains(&w.to_uppercase()));
    }
}

// Test: duplicate-node semantics through a rehash.
// Verifies: raw duplicate nodes survive resizing intact and bump still
// reaches all of them afterwards.
#[test]
fn duplicate_nodes_survive_rehash() {
    let mut t = ChainTable::with_slots(2);
    t.insert("echo", 1);
    t.insert("echo", 2);
    // Push items past the slot count to force doubling.
    t.insert("foxtrot", 1);
    assert_eq!(t.slot_count(), 4);

    assert_eq!(t.count("echo"), 3);
    assert_eq!(t.bump("echo"), 2, "both echo nodes still present");
    assert_eq!(t.count("echo"), 5);
}

// Test: insert with an explicit count then a single bump.
// Verifies: the bump adds exactly 1 to that node's stored count.
#[test]
fn insert_then_bump_adds_exactly_one() {
    let mut t = ChainTable::new();
    t.insert("golf", 7);
    assert_eq!(t.bump("golf"), 1);
    assert_eq!(t.count("golf"), 8);
}

// Test: sustained growth from a small table.
// Verifies: slot count stays a power-of-two multiple of the initial
// size, chains stay at most one node per slot on average, and every
// word remains retrievable.
#[test]
fn sustained_growth_keeps_everything() {
    let mut t = ChainTable::with_slots(2);
    let words: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
    for w in &words {
        t.ensure(w);
    }

    assert_eq!(t.len(), 100);
    assert_eq!(t.slot_count(), 128);
    assert!(t.head_count() <= t.slot_count());
    assert_eq!(t.load_factor(), t.head_count() as f64 / 128.0);
    assert_eq!(t.avg_chain_length(), 100.0 / 128.0);
    for w in &words {
        assert!(t.contains(w));
        assert_eq!(t.count(w), 1);
    }
}

// Test: lookups on an empty or miss-heavy table.
// Verifies: contains/bump/count degrade to a no-op scan, never an error.
#[test]
fn misses_are_no_ops() {
    let mut t = ChainTable::new();
    assert!(!t.contains("nothing"));
    assert_eq!(t.bump("nothing"), 0);
    assert_eq!(t.count("nothing"), 0);
    assert!(t.is_empty());

    t.ensure("something");
    assert!(!t.contains("nothing"));
    assert_eq!(t.len(), 1);
}

// Test: report shape on a default table.
// Verifies: header line, one line per node, trailing average line.
#[test]
fn render_has_header_body_and_trailer() {
    let mut t = ChainTable::new();
    t.ensure("one");
    t.ensure("two");
    t.ensure("two");

    let report = t.render();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Word counts:");
    assert!(lines[1..3].contains(&"(one, 1)"));
    assert!(lines[1..3].contains(&"(two, 2)"));
    assert_eq!(lines[3], "Average collision chain length: 0.0625");
}
