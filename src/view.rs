//! Lazy projection over every block of a `BlockList`.

use std::fmt;
use std::iter::FusedIterator;

use allocator_api2::alloc::{Allocator, Global};

use crate::block::Block;
use crate::error::{check_destination, Result};
use crate::BlockList;

/// All blocks of a list in order: completed blocks first, then the active block.
///
/// Nothing is copied; each `Block` is produced on demand. The view always
/// has at least one entry because an empty list still has an (empty)
/// active block.
pub struct BlockView<'a, T, A: Allocator + Clone = Global> {
    list: &'a BlockList<T, A>,
}

impl<'a, T, A: Allocator + Clone> BlockView<'a, T, A> {
    #[inline]
    pub(crate) fn new(list: &'a BlockList<T, A>) -> Self {
        Self { list }
    }

    /// Returns the number of blocks, including the active block.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.list.block_count()
    }

    /// Returns the block at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Block<'a, T>> {
        if index < self.len() {
            Some(self.list.block(index))
        } else {
            None
        }
    }

    /// Returns the active block.
    #[inline]
    pub fn active(&self) -> Block<'a, T> {
        self.list.block(self.len() - 1)
    }

    #[inline]
    pub fn iter(&self) -> Blocks<'a, T, A> {
        Blocks {
            list: self.list,
            front: 0,
            back: self.len(),
        }
    }

    /// Returns the index of `block` in this view, comparing by identity.
    pub fn index_of(&self, block: &Block<'_, T>) -> Option<usize> {
        (0..self.len()).find(|&i| self.list.block(i) == *block)
    }

    pub fn contains(&self, block: &Block<'_, T>) -> bool {
        self.index_of(block).is_some()
    }

    /// Writes every block into `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Fails if the blocks do not fit into `buffer[offset..]`.
    pub fn copy_to(&self, buffer: &mut [Block<'a, T>], offset: usize) -> Result<()> {
        check_destination(buffer.len(), offset, self.len())?;
        for (slot, block) in buffer[offset..].iter_mut().zip(self.iter()) {
            *slot = block;
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<Block<'a, T>> {
        self.iter().collect()
    }
}

impl<T, A: Allocator + Clone> Clone for BlockView<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator + Clone> Copy for BlockView<'_, T, A> {}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for BlockView<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, A: Allocator + Clone> IntoIterator for BlockView<'a, T, A> {
    type Item = Block<'a, T>;
    type IntoIter = Blocks<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the blocks of a `BlockView`.
pub struct Blocks<'a, T, A: Allocator + Clone = Global> {
    list: &'a BlockList<T, A>,
    front: usize,
    back: usize,
}

impl<'a, T, A: Allocator + Clone> Iterator for Blocks<'a, T, A> {
    type Item = Block<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let block = self.list.block(self.front);
        self.front += 1;
        Some(block)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator + Clone> DoubleEndedIterator for Blocks<'_, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.list.block(self.back))
    }
}

impl<T, A: Allocator + Clone> ExactSizeIterator for Blocks<'_, T, A> {}

impl<T, A: Allocator + Clone> FusedIterator for Blocks<'_, T, A> {}
