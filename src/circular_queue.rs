//! CircularQueue: growable FIFO over a power-of-two ring buffer.

use crate::capacity::slot_count;
use crate::config::DEFAULT_QUEUE_CAPACITY;
use crate::error::QueueError;
use core::fmt;
use tracing::debug;

/// A FIFO queue backed by a ring buffer whose length is a power of two.
///
/// The buffer doubles when an enqueue finds it full and never shrinks.
pub struct CircularQueue<T> {
    /// Vacant slots hold `None`.
    buffer: Box<[Option<T>]>,
    /// Index of the front element.
    head: usize,
    /// Index the next enqueue writes to.
    tail: usize,
    count: usize,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Queue with room for at least `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: empty_ring(slot_count(capacity)),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Appends `item` at the back, growing the buffer first if it is full.
    pub fn enqueue(&mut self, item: T) {
        if self.count == self.buffer.len() {
            self.grow();
        }
        self.buffer[self.tail] = Some(item);
        self.tail = (self.tail + 1) & self.mask();
        self.count += 1;
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.count == 0 {
            return Err(QueueError::Empty);
        }
        let item = self.buffer[self.head].take();
        self.head = (self.head + 1) & self.mask();
        self.count -= 1;
        item.ok_or(QueueError::Empty)
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        if self.count == 0 {
            return Err(QueueError::Empty);
        }
        self.buffer[self.head].as_ref().ok_or(QueueError::Empty)
    }

    /// Doubles the buffer, moving live elements to `0..count` in FIFO order.
    fn grow(&mut self) {
        let old_capacity = self.buffer.len();
        let new_capacity = old_capacity * 2;
        let mut old = core::mem::replace(&mut self.buffer, empty_ring(new_capacity));
        for i in 0..self.count {
            self.buffer[i] = old[(self.head + i) & (old_capacity - 1)].take();
        }
        self.head = 0;
        self.tail = self.count;
        debug!(old_capacity, new_capacity, "circular queue grew");
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

fn empty_ring<T>(len: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(len).collect()
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut q = Self::with_capacity(iter.size_hint().0.max(DEFAULT_QUEUE_CAPACITY));
        q.extend(iter);
        q
    }
}

/// Iterator over queued elements, front to back.
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.count {
            return None;
        }
        let index = (self.queue.head + self.offset) & self.queue.mask();
        self.offset += 1;
        self.queue.buffer[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.queue.count - self.offset;
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
