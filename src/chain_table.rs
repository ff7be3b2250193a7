//! ChainTable: separately chained word-count table with arena-backed chains.
//!
//! Slots hold optional chain heads; the nodes themselves live in a
//! `SlotMap` arena and link forward through slotmap keys, so each node has
//! exactly one owner (its predecessor, or the slot for a head) without any
//! raw-pointer plumbing. The table never removes entries and the slot
//! array only ever doubles.

use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct EntryNode {
    word: String,
    count: u64,
    next: Option<DefaultKey>,
}

impl EntryNode {
    fn new(word: String, count: u64) -> Self {
        Self {
            word,
            count,
            next: None,
        }
    }

    fn bump(&mut self) {
        self.count += 1;
    }
}

/// Word-frequency hash table using separate chaining.
///
/// Words are lowercased on the way in; lookups are therefore
/// case-insensitive. Raw [`insert`](ChainTable::insert) never merges with
/// an existing node for the same word: callers that want merge semantics
/// use [`ensure`](ChainTable::ensure), which is the explicit
/// contains-then-bump-or-insert two-step.
#[derive(Debug)]
pub struct ChainTable {
    slots: Vec<Option<DefaultKey>>,
    arena: SlotMap<DefaultKey, EntryNode>,
    initial_slots: usize,
    item_count: usize,
    head_count: usize,
    load_factor: f64,
}

impl ChainTable {
    const DEFAULT_SLOTS: usize = 32;

    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_SLOTS)
    }

    /// Create a table with `initial_slots` empty slots. The slot count
    /// stays a power-of-two multiple of this value forever.
    pub fn with_slots(initial_slots: usize) -> Self {
        assert!(initial_slots > 0, "table requires at least one slot");
        Self {
            slots: vec![None; initial_slots],
            arena: SlotMap::with_key(),
            initial_slots,
            item_count: 0,
            head_count: 0,
            load_factor: 0.0,
        }
    }

    /// Number of stored nodes (raw insertions, duplicates included).
    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty slots.
    pub fn head_count(&self) -> usize {
        self.head_count
    }

    /// Occupied slots over total slots, recomputed after every insertion.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Stored nodes over total slots.
    pub fn avg_chain_length(&self) -> f64 {
        self.item_count as f64 / self.slots.len() as f64
    }

    /// Initial slot count this table was configured with.
    pub fn initial_slot_count(&self) -> usize {
        self.initial_slots
    }

    // Polynomial 31-hash over the word's chars in wrapping i32 arithmetic,
    // reduced modulo the slot count with the sign forced non-negative.
    // Negative intermediate hashes are legal; only the final index must be
    // in range. Expects `word` to already be lowercased.
    fn slot_index(&self, word: &str) -> usize {
        let mut hash: i32 = 0;
        for c in word.chars() {
            hash = hash.wrapping_mul(31).wrapping_add(c as i32);
        }
        (hash % self.slots.len() as i32).unsigned_abs() as usize
    }

    /// Append a node for `word` with an explicit starting count.
    ///
    /// Always creates a new node at the tail of the word's chain, even if
    /// the word is already present; the table never merges on insert.
    /// Doubles the slot array once the average chain length exceeds 1.
    pub fn insert(&mut self, word: &str, count: u64) {
        self.insert_lower(word.to_lowercase(), count);
    }

    /// Case-insensitive membership test. Never mutates the table.
    pub fn contains(&self, word: &str) -> bool {
        self.chain_contains(&word.to_lowercase())
    }

    /// Increment the count of every node matching `word` (all duplicates,
    /// not just the first). Returns the number of nodes incremented; 0
    /// when the word is absent.
    pub fn bump(&mut self, word: &str) -> usize {
        self.chain_bump(&word.to_lowercase())
    }

    /// Merge-on-insert: bump an existing word, or insert it with count 1.
    pub fn ensure(&mut self, word: &str) {
        let word = word.to_lowercase();
        if self.chain_contains(&word) {
            self.chain_bump(&word);
        } else {
            self.insert_lower(word, 1);
        }
    }

    /// Total occurrences recorded for `word`: the sum of counts across
    /// every matching node in its chain.
    pub fn count(&self, word: &str) -> u64 {
        let word = word.to_lowercase();
        let mut total = 0;
        let mut cur = self.slots[self.slot_index(&word)];
        while let Some(key) = cur {
            let node = &self.arena[key];
            if node.word == word {
                total += node.count;
            }
            cur = node.next;
        }
        total
    }

    /// Iterate stored `(word, count)` pairs in slot order, then chain
    /// order within a slot. Not sorted.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            arena: &self.arena,
            next_slot: 0,
            cur: None,
        }
    }

    /// Render the report: a header, one `(word, count)` line per node in
    /// iteration order, and a trailing average-chain-length line. Pure;
    /// the caller decides where the string goes.
    pub fn render(&self) -> String {
        let mut out = String::from("Word counts:\n");
        for (word, count) in self.iter() {
            out.push_str(&format!("({word}, {count})\n"));
        }
        out.push_str(&format!(
            "Average collision chain length: {}\n",
            self.avg_chain_length()
        ));
        out
    }

    fn insert_lower(&mut self, word: String, count: u64) {
        self.append(word, count);
        if self.item_count > self.slots.len() {
            self.rehash();
        }
    }

    // Expects lowercase.
    fn chain_contains(&self, word: &str) -> bool {
        let mut cur = self.slots[self.slot_index(word)];
        while let Some(key) = cur {
            let node = &self.arena[key];
            if node.word == word {
                return true;
            }
            cur = node.next;
        }
        false
    }

    // Expects lowercase. Walks the full chain so duplicate nodes created
    // by raw `insert` are all incremented.
    fn chain_bump(&mut self, word: &str) -> usize {
        let mut bumped = 0;
        let mut cur = self.slots[self.slot_index(word)];
        while let Some(key) = cur {
            let node = &mut self.arena[key];
            if node.word == word {
                node.bump();
                bumped += 1;
            }
            cur = node.next;
        }
        bumped
    }

    // Tail-append into the word's chain. Expects lowercase. Updates
    // item_count, head_count and load_factor but never triggers a rehash.
    fn append(&mut self, word: String, count: u64) {
        let index = self.slot_index(&word);
        let key = self.arena.insert(EntryNode::new(word, count));
        match self.slots[index] {
            None => {
                self.slots[index] = Some(key);
                self.head_count += 1;
            }
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.arena[tail].next {
                    tail = next;
                }
                self.arena[tail].next = Some(key);
            }
        }
        self.item_count += 1;
        self.load_factor = self.head_count as f64 / self.slots.len() as f64;
    }

    // Double the slot array and re-append every stored node into it,
    // walking each old chain at the node itself so the last node of every
    // chain is carried over too. Old nodes are discarded.
    fn rehash(&mut self) {
        let doubled = self.slots.len() * 2;
        let old_slots = std::mem::replace(&mut self.slots, vec![None; doubled]);
        let mut old_arena = std::mem::take(&mut self.arena);
        self.item_count = 0;
        self.head_count = 0;
        self.load_factor = 0.0;

        for head in old_slots.into_iter().flatten() {
            let mut cur = Some(head);
            while let Some(key) = cur {
                let node = old_arena.remove(key).expect("chain key valid in old arena");
                cur = node.next;
                self.append(node.word, node.count);
            }
        }
    }
}

impl Default for ChainTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(word, count)` pairs in slot-then-chain order.
pub struct Iter<'a> {
    slots: &'a [Option<DefaultKey>],
    arena: &'a SlotMap<DefaultKey, EntryNode>,
    next_slot: usize,
    cur: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.cur {
                let node = &self.arena[key];
                self.cur = node.next;
                return Some((node.word.as_str(), node.count));
            }
            let head = *self.slots.get(self.next_slot)?;
            self.next_slot += 1;
            self.cur = head;
        }
    }
}
