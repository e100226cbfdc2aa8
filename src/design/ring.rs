// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity ring buffers.

/// Storage shared by the queue and the deque: `len` values starting at
/// `head`, wrapping around the end of `slots`.
#[derive(Debug, Clone)]
struct Ring {
    slots: Vec<i32>,
    head: usize,
    len: usize,
}

impl Ring {
    fn new(capacity: i32) -> Self {
        Self {
            slots: vec![0; capacity.max(0) as usize],
            head: 0,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    fn push_back(&mut self, value: i32) -> bool {
        if self.is_full() {
            return false;
        }
        let at = self.index(self.len);
        self.slots[at] = value;
        self.len += 1;
        true
    }

    fn push_front(&mut self, value: i32) -> bool {
        if self.is_full() {
            return false;
        }
        self.head = self.index(self.capacity() - 1);
        self.slots[self.head] = value;
        self.len += 1;
        true
    }

    fn pop_front(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.head = self.index(1);
        self.len -= 1;
        true
    }

    fn pop_back(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.len -= 1;
        true
    }

    fn front(&self) -> i32 {
        if self.is_empty() {
            -1
        } else {
            self.slots[self.head]
        }
    }

    fn back(&self) -> i32 {
        if self.is_empty() {
            -1
        } else {
            self.slots[self.index(self.len - 1)]
        }
    }
}

/// 622. Design Circular Queue
#[derive(Debug, Clone)]
pub struct MyCircularQueue {
    ring: Ring,
}

impl MyCircularQueue {
    pub fn new(k: i32) -> Self {
        Self { ring: Ring::new(k) }
    }

    pub fn en_queue(&mut self, value: i32) -> bool {
        self.ring.push_back(value)
    }

    pub fn de_queue(&mut self) -> bool {
        self.ring.pop_front()
    }

    /// Front value, or -1 when empty.
    pub fn front(&self) -> i32 {
        self.ring.front()
    }

    /// Rear value, or -1 when empty.
    pub fn rear(&self) -> i32 {
        self.ring.back()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

/// 641. Design Circular Deque
#[derive(Debug, Clone)]
pub struct MyCircularDeque {
    ring: Ring,
}

impl MyCircularDeque {
    pub fn new(k: i32) -> Self {
        Self { ring: Ring::new(k) }
    }

    pub fn insert_front(&mut self, value: i32) -> bool {
        self.ring.push_front(value)
    }

    pub fn insert_last(&mut self, value: i32) -> bool {
        self.ring.push_back(value)
    }

    pub fn delete_front(&mut self) -> bool {
        self.ring.pop_front()
    }

    pub fn delete_last(&mut self) -> bool {
        self.ring.pop_back()
    }

    pub fn get_front(&self) -> i32 {
        self.ring.front()
    }

    pub fn get_rear(&self) -> i32 {
        self.ring.back()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue() {
        let mut q = MyCircularQueue::new(3);
        assert!(q.en_queue(1));
        assert!(q.en_queue(2));
        assert!(q.en_queue(3));
        assert!(!q.en_queue(4));
        assert_eq!(q.rear(), 3);
        assert!(q.is_full());
        assert!(q.de_queue());
        assert!(q.en_queue(4));
        assert_eq!(q.rear(), 4);
        assert_eq!(q.front(), 2);
    }

    #[test]
    fn deque() {
        let mut d = MyCircularDeque::new(3);
        assert!(d.insert_last(1));
        assert!(d.insert_last(2));
        assert!(d.insert_front(3));
        assert!(!d.insert_front(4));
        assert_eq!(d.get_rear(), 2);
        assert!(d.is_full());
        assert!(d.delete_last());
        assert!(d.insert_front(4));
        assert_eq!(d.get_front(), 4);
        assert_eq!(d.get_rear(), 1);
    }

    #[test]
    fn empty_and_zero_capacity() {
        let mut q = MyCircularQueue::new(1);
        assert!(q.is_empty());
        assert_eq!(q.front(), -1);
        assert!(!q.de_queue());
        let mut d = MyCircularDeque::new(0);
        assert!(d.is_full());
        assert!(!d.insert_front(1));
        assert!(!d.delete_last());
        assert_eq!(d.get_rear(), -1);
    }
}
