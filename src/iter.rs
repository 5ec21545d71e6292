//! Iterator implementations for `BlockList`.

use std::iter::FusedIterator;
use std::slice;

use allocator_api2::alloc::{Allocator, Global};

use crate::table::Storage;
use crate::BlockList;

/// An iterator over references to elements of a `BlockList`.
pub struct Iter<'a, T, A: Allocator + Clone = Global> {
    list: &'a BlockList<T, A>,
    /// Elements left in the current block
    current: slice::Iter<'a, T>,
    /// Next block to load
    block_index: usize,
    /// Elements not yet yielded
    remaining: usize,
}

impl<'a, T, A: Allocator + Clone> Iter<'a, T, A> {
    pub(crate) fn new(list: &'a BlockList<T, A>) -> Self {
        Self {
            list,
            current: Default::default(),
            block_index: 0,
            remaining: list.len(),
        }
    }

    #[cold]
    fn next_block(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.current = self.list.block_slice(self.block_index).iter();
        self.block_index += 1;

        let item = self.current.next()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<'a, T, A: Allocator + Clone> Iterator for Iter<'a, T, A> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => self.next_block(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, A: Allocator + Clone> ExactSizeIterator for Iter<'_, T, A> {}

impl<T, A: Allocator + Clone> FusedIterator for Iter<'_, T, A> {}

impl<T, A: Allocator + Clone> Clone for Iter<'_, T, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current.clone(),
            block_index: self.block_index,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to elements of a `BlockList`.
pub struct IterMut<'a, T, A: Allocator = Global> {
    /// Completed blocks not yet visited
    blocks: slice::IterMut<'a, Storage<T, A>>,
    /// Occupied part of the active block, taken once the table is exhausted
    active: Option<&'a mut [T]>,
    current: slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T, A: Allocator> IterMut<'a, T, A> {
    pub(crate) fn new(
        blocks: slice::IterMut<'a, Storage<T, A>>,
        active: &'a mut [T],
        len: usize,
    ) -> Self {
        Self {
            blocks,
            active: Some(active),
            current: Default::default(),
            remaining: len,
        }
    }

    #[cold]
    fn next_block(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let block: &'a mut [T] = match self.blocks.next() {
            Some(storage) => &mut storage[..],
            None => self.active.take()?,
        };
        self.current = block.iter_mut();

        let item = self.current.next()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<'a, T, A: Allocator> Iterator for IterMut<'a, T, A> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => self.next_block(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, A: Allocator> ExactSizeIterator for IterMut<'_, T, A> {}

impl<T, A: Allocator> FusedIterator for IterMut<'_, T, A> {}
