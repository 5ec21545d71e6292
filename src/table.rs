//! Growable table of completed blocks for `BlockList`.
//!
//! This plays the role `RawVec` plays for `Vec`: it only stores block
//! storages and knows nothing about how full they are. Every block handed to
//! the table is complete, which is an invariant the owning list upholds.

use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;
use allocator_api2::vec::Vec;

/// Storage of a single block.
pub(crate) type Storage<T, A> = Box<[T], A>;

/// Table of completed block storages.
///
/// Grows by doubling from `INITIAL_CAPACITY` and never shrinks.
pub(crate) struct BlockTable<T, A: Allocator> {
    /// Completed blocks, oldest first
    blocks: Vec<Storage<T, A>, A>,
}

impl<T, A: Allocator> BlockTable<T, A> {
    /// Number of slots reserved on the first push.
    pub(crate) const INITIAL_CAPACITY: usize = 4;

    /// Creates an empty table without allocating.
    #[inline]
    pub(crate) fn new_in(alloc: A) -> Self {
        Self {
            blocks: Vec::new_in(alloc),
        }
    }

    /// Returns the number of blocks in the table.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Appends a completed block.
    pub(crate) fn push(&mut self, block: Storage<T, A>) {
        if self.blocks.len() == self.blocks.capacity() {
            self.make_room();
        }
        self.blocks.push(block);
    }

    /// Removes the most recently completed block.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Storage<T, A>> {
        self.blocks.pop()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&Storage<T, A>> {
        self.blocks.get(index)
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Storage<T, A>] {
        &mut self.blocks
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Storage<T, A>> {
        self.blocks.iter()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Storage<T, A>> {
        self.blocks.iter_mut()
    }

    /// Drops every block, keeping the table's own allocation.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.blocks.clear();
    }

    #[cold]
    fn make_room(&mut self) {
        let additional = if self.blocks.is_empty() {
            Self::INITIAL_CAPACITY
        } else {
            self.blocks.len()
        };
        self.blocks.reserve_exact(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocator_api2::alloc::Global;

    fn storage(values: &[i32]) -> Storage<i32, Global> {
        let mut v = Vec::new_in(Global);
        v.extend(values.iter().copied());
        v.into_boxed_slice()
    }

    #[test]
    fn test_new() {
        let table: BlockTable<i32, Global> = BlockTable::new_in(Global);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.blocks.capacity(), 0);
    }

    #[test]
    fn test_push_grows_by_doubling() {
        let mut table: BlockTable<i32, Global> = BlockTable::new_in(Global);
        table.push(storage(&[1]));
        assert!(table.blocks.capacity() >= BlockTable::<i32, Global>::INITIAL_CAPACITY);

        for i in 0..4 {
            table.push(storage(&[i]));
        }
        assert_eq!(table.len(), 5);
        assert!(table.blocks.capacity() >= 8);
    }

    #[test]
    fn test_get_and_pop() {
        let mut table: BlockTable<i32, Global> = BlockTable::new_in(Global);
        table.push(storage(&[1, 2]));
        table.push(storage(&[3, 4, 5]));

        assert_eq!(&**table.get(0).unwrap(), &[1, 2]);
        assert_eq!(&**table.get(1).unwrap(), &[3, 4, 5]);
        assert!(table.get(2).is_none());

        assert_eq!(&*table.pop().unwrap(), &[3, 4, 5]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iter_and_clear() {
        let mut table: BlockTable<i32, Global> = BlockTable::new_in(Global);
        table.push(storage(&[1, 2]));
        table.push(storage(&[3, 4]));

        for block in table.iter_mut() {
            block[0] *= 10;
        }
        let flat: std::vec::Vec<i32> = table.iter().flat_map(|b| b.iter().copied()).collect();
        assert_eq!(flat, [10, 2, 30, 4]);

        table.clear();
        assert!(table.is_empty());
        assert!(table.blocks.capacity() >= 2);
    }
}
