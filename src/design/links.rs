// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly linked lists threaded through a slab by index.
//!
//! ```text
//!   Ends { head: 2, tail: 0 }
//!
//!   slab:  [0] k=1 ◄──prev── [1] k=7 ◄──prev── [2] k=4
//!              ──next──►         ──next──►
//!          (tail)                            (head, most recent)
//! ```
//!
//! Several lists may share one [`Slab`]; each list is just its [`Ends`].
//! Freed slots are recycled so the slab never grows past the peak number of
//! live entries.

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub key: i32,
    pub value: i32,
    pub freq: u32,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Head, tail and length of one list.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Ends {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Ends {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Least recently pushed entry.
    pub fn back(&self) -> Option<usize> {
        self.tail
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Slab {
    entries: Vec<Entry>,
    free: Vec<usize>,
}

impl Slab {
    pub fn alloc(&mut self, key: i32, value: i32) -> usize {
        let entry = Entry {
            key,
            value,
            freq: 1,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.entries[slot] = entry;
                slot
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }

    /// Returns the slot to the free list. The slot must already be unlinked.
    pub fn release(&mut self, slot: usize) {
        self.free.push(slot);
    }

    pub fn get(&self, slot: usize) -> &Entry {
        &self.entries[slot]
    }

    pub fn get_mut(&mut self, slot: usize) -> &mut Entry {
        &mut self.entries[slot]
    }

    pub fn push_front(&mut self, list: &mut Ends, slot: usize) {
        self.entries[slot].prev = None;
        self.entries[slot].next = list.head;
        match list.head {
            Some(old) => self.entries[old].prev = Some(slot),
            None => list.tail = Some(slot),
        }
        list.head = Some(slot);
        list.len += 1;
    }

    pub fn unlink(&mut self, list: &mut Ends, slot: usize) {
        let (prev, next) = (self.entries[slot].prev, self.entries[slot].next);
        match prev {
            Some(p) => self.entries[p].next = next,
            None => list.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => list.tail = prev,
        }
        self.entries[slot].prev = None;
        self.entries[slot].next = None;
        list.len -= 1;
    }

    /// Keys from head to tail.
    #[cfg(test)]
    pub fn keys(&self, list: &Ends) -> Vec<i32> {
        std::iter::successors(list.head, |&slot| self.entries[slot].next)
            .map(|slot| self.entries[slot].key)
            .collect()
    }
}
