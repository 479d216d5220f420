//! Open-set implementations for the A* driver.
//!
//! Both frontiers select the member with the smallest estimate and, among
//! equal estimates, the one discovered first. A node is discovered at most
//! once per search (it goes to the closed set when popped), so "discovered
//! first" is the same as "inserted first".

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use mazepath_core::Coord;

/// Open set of discovered but not yet finalized coordinates.
pub(crate) trait Frontier {
    /// Add a newly discovered coordinate with estimate `f`.
    fn push(&mut self, p: Coord, f: i32);

    /// Lower the estimate of a coordinate already in the frontier. Its
    /// discovery position is kept.
    fn decrease(&mut self, p: Coord, f: i32);

    /// Remove and return the member with the smallest estimate, earliest
    /// discovered first among equals.
    fn pop(&mut self) -> Option<Coord>;

    /// Whether `p` is currently a member.
    fn contains(&self, p: Coord) -> bool;

    /// Number of members.
    fn len(&self) -> usize;
}

// ---------------------------------------------------------------------------
// LinearFrontier
// ---------------------------------------------------------------------------

/// Insertion-ordered list scanned in full on every pop.
#[derive(Debug, Default)]
pub(crate) struct LinearFrontier {
    entries: Vec<(Coord, i32)>,
}

impl LinearFrontier {
    fn position(&self, p: Coord) -> Option<usize> {
        self.entries.iter().position(|&(q, _)| q == p)
    }
}

impl Frontier for LinearFrontier {
    fn push(&mut self, p: Coord, f: i32) {
        self.entries.push((p, f));
    }

    fn decrease(&mut self, p: Coord, f: i32) {
        if let Some(i) = self.position(p) {
            self.entries[i].1 = f;
        }
    }

    fn pop(&mut self) -> Option<Coord> {
        // min_by_key keeps the first of several equal minima.
        let (best, _) = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|&(_, &(_, f))| f)?;
        Some(self.entries.remove(best).0)
    }

    fn contains(&self, p: Coord) -> bool {
        self.position(p).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(f, seq)`, reversed so `BinaryHeap` pops the
/// smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapEntry {
    f: i32,
    seq: u64,
    pos: Coord,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary heap with lazy decrease-key.
///
/// Every coordinate gets a discovery sequence number on its first push.
/// Decreasing an estimate pushes a second entry with the same sequence
/// number; the superseded entry is skipped when it surfaces.
#[derive(Debug, Default)]
pub(crate) struct HeapFrontier {
    heap: BinaryHeap<HeapEntry>,
    live: HashMap<Coord, (i32, u64)>,
    next_seq: u64,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, p: Coord, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(p, (f, seq));
        self.heap.push(HeapEntry { f, seq, pos: p });
    }

    fn decrease(&mut self, p: Coord, f: i32) {
        if let Some(entry) = self.live.get_mut(&p) {
            entry.0 = f;
            let seq = entry.1;
            self.heap.push(HeapEntry { f, seq, pos: p });
        }
    }

    fn pop(&mut self) -> Option<Coord> {
        while let Some(top) = self.heap.pop() {
            // Skip stale entries.
            if self.live.get(&top.pos) != Some(&(top.f, top.seq)) {
                continue;
            }
            self.live.remove(&top.pos);
            return Some(top.pos);
        }
        None
    }

    fn contains(&self, p: Coord) -> bool {
        self.live.contains_key(&p)
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}
