//! Views over single blocks of a `BlockList`.

use std::fmt;
use std::ops::{Deref, DerefMut};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{check_destination, Result};
use crate::table::Storage;

/// A read-only view of one physical block: its storage plus how much of it is in use.
///
/// Two blocks are equal only if they denote the same storage used to the
/// same extent; the element values are never compared.
pub struct Block<'a, T> {
    storage: &'a [T],
    len: usize,
    /// Address of whatever owns `storage`, so zero-sized blocks stay distinct
    owner: usize,
}

impl<'a, T> Block<'a, T> {
    #[cfg(test)]
    pub(crate) fn new(storage: &'a [T], len: usize) -> Self {
        Self::with_owner(storage, len, storage.as_ptr() as usize)
    }

    /// Creates a view identified by the boxed slot holding the storage.
    #[inline]
    pub(crate) fn in_slot<A: Allocator>(slot: &'a Storage<T, A>, len: usize) -> Self {
        Self::with_owner(slot, len, slot as *const Storage<T, A> as usize)
    }

    #[inline]
    fn with_owner(storage: &'a [T], len: usize, owner: usize) -> Self {
        debug_assert!(len <= storage.len());
        Self {
            storage,
            len,
            owner,
        }
    }

    /// Returns the number of elements in use.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocated length of the underlying storage.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if every slot of the storage is in use.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Returns the elements in use.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.storage[..self.len]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Returns the position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Clones the elements in use into `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Fails if the elements do not fit into `buffer[offset..]`.
    pub fn copy_to(&self, buffer: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        check_destination(buffer.len(), offset, self.len)?;
        buffer[offset..offset + self.len].clone_from_slice(self.as_slice());
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Clone for Block<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Block<'_, T> {}

impl<T> PartialEq for Block<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && std::ptr::eq(self.storage, other.storage)
            && self.len == other.len
    }
}

impl<T> Eq for Block<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Block<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for Block<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A block detached from its list by `BlockList::move_to_block`.
///
/// The block exclusively owns its storage; the list it came from keeps no
/// alias to it. Dereferences to the elements in use.
pub struct OwnedBlock<T, A: Allocator = Global> {
    storage: Storage<T, A>,
    len: usize,
}

impl<T, A: Allocator> OwnedBlock<T, A> {
    #[inline]
    pub(crate) fn new(storage: Storage<T, A>, len: usize) -> Self {
        debug_assert!(len <= storage.len());
        Self { storage, len }
    }

    /// Returns the allocated length of the storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns a borrowed view of this block.
    #[inline]
    pub fn as_block(&self) -> Block<'_, T> {
        Block::in_slot(&self.storage, self.len)
    }

    /// Consumes the block and returns its whole storage.
    ///
    /// Slots past `len()` hold default values.
    #[inline]
    pub fn into_storage(self) -> Storage<T, A> {
        self.storage
    }
}

impl<T, A: Allocator> Deref for OwnedBlock<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.storage[..self.len]
    }
}

impl<T, A: Allocator> DerefMut for OwnedBlock<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for OwnedBlock<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_identity() {
        let a = [1, 2, 3, 0];
        let b = [1, 2, 3, 0];

        assert_eq!(Block::new(&a, 3), Block::new(&a, 3));
        assert_ne!(Block::new(&a, 3), Block::new(&a, 2));
        assert_ne!(Block::new(&a, 3), Block::new(&b, 3));
        assert_ne!(Block::new(&a[..3], 3), Block::new(&a, 3));
    }

    #[test]
    fn test_accessors() {
        let storage = [5, 6, 7, 0];
        let block = Block::new(&storage, 3);

        assert_eq!(block.len(), 3);
        assert_eq!(block.capacity(), 4);
        assert!(!block.is_full());
        assert_eq!(block.as_slice(), &[5, 6, 7]);
        assert_eq!(block.first(), Some(&5));
        assert_eq!(block.last(), Some(&7));
        assert_eq!(block.get(3), None);
        assert_eq!(block.index_of(&6), Some(1));
        assert!(!block.contains(&0));
        assert_eq!(block.into_iter().copied().collect::<Vec<_>>(), [5, 6, 7]);
    }

    #[test]
    fn test_empty() {
        let storage: [i32; 0] = [];
        let block = Block::new(&storage, 0);
        assert!(block.is_empty());
        assert!(block.is_full());
        assert_eq!(block.first(), None);
        assert_eq!(block.last(), None);
    }

    #[test]
    fn test_copy_to() {
        let storage = [1, 2, 3];
        let block = Block::new(&storage, 2);
        let mut buffer = [0; 4];

        block.copy_to(&mut buffer, 1).unwrap();
        assert_eq!(buffer, [0, 1, 2, 0]);
        assert!(block.copy_to(&mut buffer, 3).is_err());
        assert_eq!(block.to_vec(), [1, 2]);
    }
}
