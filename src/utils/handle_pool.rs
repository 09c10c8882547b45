use std::cmp::Ordering;
use std::collections::binary_heap::BinaryHeap;
use std::marker::PhantomData;

use super::handle::{HandleIndex, HandleLike};

#[derive(PartialEq, Eq)]
struct InverseHandleIndex(HandleIndex);

impl PartialOrd for InverseHandleIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InverseHandleIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// `HandlePool` mints handles with a continuous `index` field and tells whether
/// a given handle is still alive.
///
/// An odd version marks a live slot, an even one a freed slot. Freed indices are
/// handed out again lowest first.
pub struct HandlePool<H: HandleLike> {
    versions: Vec<HandleIndex>,
    frees: BinaryHeap<InverseHandleIndex>,
    _phantom: PhantomData<H>,
}

impl<H: HandleLike> Default for HandlePool<H> {
    fn default() -> Self {
        HandlePool::new()
    }
}

impl<H: HandleLike> HandlePool<H> {
    pub fn new() -> Self {
        HandlePool {
            versions: Vec::new(),
            frees: BinaryHeap::new(),
            _phantom: PhantomData,
        }
    }

    /// Creates an unused handle.
    pub fn create(&mut self) -> H {
        if let Some(InverseHandleIndex(index)) = self.frees.pop() {
            let version = &mut self.versions[index as usize];
            *version += 1;
            H::new(index, *version)
        } else {
            self.versions.push(1);
            H::new(self.versions.len() as HandleIndex - 1, 1)
        }
    }

    /// Returns true if `handle` was created by this pool and has not been freed yet.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        let index = handle.index() as usize;
        index < self.versions.len()
            && self.versions[index] & 0x1 == 1
            && self.versions[index] == handle.version()
    }

    /// Recycles the index of `handle`. Returns false if it was not alive.
    pub fn free(&mut self, handle: H) -> bool {
        if !self.contains(handle) {
            return false;
        }

        self.versions[handle.index() as usize] += 1;
        self.frees.push(InverseHandleIndex(handle.index()));
        true
    }

    /// Returns the number of alive handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.versions.len() - self.frees.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the alive handles, in index order.
    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.versions
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v & 0x1 == 1)
            .map(|(i, &v)| H::new(i as HandleIndex, v))
    }
}
