use crate::graph::{Distance, NodeId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeapEntry {
    pub key: Distance,
    pub node: NodeId,
}

/// Binary min-heap of node ids keyed by the distance they had when pushed.
///
/// There is no decrease-key: a node whose distance drops is pushed again and
/// the caller skips whichever copy turns out stale when it is popped. Order
/// among equal keys is unspecified.
#[derive(Debug, Default)]
pub struct MinHeap {
    entries: Vec<HeapEntry>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn peek(&self) -> Option<&HeapEntry> {
        self.entries.first()
    }

    pub fn push(&mut self, node: NodeId, key: Distance) {
        self.entries.push(HeapEntry { key, node });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the entry with the smallest key, `None` once the heap is empty.
    pub fn pop(&mut self) -> Option<HeapEntry> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Some(root)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = parent(i);
            if self.entries[i].key < self.entries[parent].key {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let size = self.entries.len();
        loop {
            let (left, right) = (left_child(i), right_child(i));
            let mut smallest = i;
            if left < size && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < size && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}
