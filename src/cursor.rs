//! Stateful positional handle over a `BlockList`.

use std::fmt;

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{check_destination, BlockListError, InvalidState, Result};
use crate::position::Position;
use crate::BlockList;

/// A position inside a `BlockList` that caches its block coordinates.
///
/// Stepping with [`inc`](Self::inc) and [`dec`](Self::dec) is O(1) amortized
/// because the cursor only looks up a block when it crosses a boundary.
/// Inserts and removals go through the cursor and keep the cached
/// coordinates valid.
///
/// The cursor holds the list mutably borrowed, so the list cannot change
/// behind its back.
///
/// One past the last element is a valid position ("at end"); there
/// [`value`](Self::value) is `None` and [`insert`](Self::insert) appends.
///
/// # Example
///
/// ```
/// use block_list::{BlockList, Options};
///
/// let mut list = BlockList::from_iter_with_options(0..6, Options::new(2).unwrap());
/// let mut cursor = list.cursor(2).unwrap();
/// cursor.insert_range([10, 11]);
/// assert_eq!(cursor.value(), Some(&2));
/// cursor.remove().unwrap();
/// assert_eq!(list.to_vec(), [0, 1, 10, 11, 3, 4, 5]);
/// ```
pub struct Cursor<'a, T, A: Allocator + Clone = Global> {
    list: &'a mut BlockList<T, A>,
    /// Logical index
    index: usize,
    /// Cached block, `block_count` when at end
    block_index: usize,
    element_index: usize,
    /// Elements in use in the cached block, 0 when at end
    block_len: usize,
}

impl<'a, T, A: Allocator + Clone> Cursor<'a, T, A> {
    pub(crate) fn new(list: &'a mut BlockList<T, A>, index: usize) -> Result<Self> {
        let mut cursor = Self {
            list,
            index: 0,
            block_index: 0,
            element_index: 0,
            block_len: 0,
        };
        cursor.seek(index)?;
        Ok(cursor)
    }

    /// Returns the logical index of the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor is one past the last element.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index == self.list.len()
    }

    /// Moves the cursor to `index`, locating its block from scratch.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index > len`.
    pub fn seek(&mut self, index: usize) -> Result<()> {
        let len = self.list.len();
        if index > len {
            return Err(BlockListError::out_of_range("index", index, len + 1));
        }

        self.index = index;
        if index == len {
            self.move_to_end();
        } else {
            let pos = self.list.position(index);
            self.load(pos);
        }
        Ok(())
    }

    /// Moves to the next element.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if the cursor is at end.
    #[inline]
    pub fn inc(&mut self) -> Result<()> {
        self.advance(1)
    }

    /// Moves to the previous element.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if the cursor is at index 0.
    #[inline]
    pub fn dec(&mut self) -> Result<()> {
        self.retreat(1)
    }

    /// Moves `count` elements forward.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` without moving if fewer than `count`
    /// elements are left before the end.
    pub fn advance(&mut self, count: usize) -> Result<()> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BlockListError::out_of_range("count", count, remaining + 1));
        }
        for _ in 0..count {
            self.step_forward();
        }
        Ok(())
    }

    /// Moves `count` elements back.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` without moving if `count > index`.
    pub fn retreat(&mut self, count: usize) -> Result<()> {
        if count > self.index {
            return Err(BlockListError::out_of_range("count", count, self.index + 1));
        }
        for _ in 0..count {
            self.step_back();
        }
        Ok(())
    }

    /// Returns the element under the cursor, or `None` at end.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        if self.is_at_end() {
            return None;
        }
        Some(&self.list.block_slice(self.block_index)[self.element_index])
    }

    /// Returns the element under the cursor mutably, or `None` at end.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        if self.is_at_end() {
            return None;
        }
        Some(&mut self.list.block_slice_mut(self.block_index)[self.element_index])
    }

    /// Inserts `item` at the cursor without moving it.
    ///
    /// Afterwards the cursor points at `item`; call [`inc`](Self::inc) to move
    /// past it.
    pub fn insert(&mut self, item: T)
    where
        T: Default,
    {
        if self.is_at_end() {
            self.list.add(item);
            let pos = self.list.position(self.index);
            self.load(pos);
        } else {
            let pos = self.current();
            self.list.insert_at(pos, item);
            // The cached block may have been completed by a resize.
            self.block_len = self.list.block_len(self.block_index);
        }
    }

    /// Inserts every item of `items` in order, leaving the cursor after the last one.
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, items: I)
    where
        T: Default,
    {
        for item in items {
            self.insert(item);
            self.step_forward();
        }
    }

    /// Removes and returns the element under the cursor.
    ///
    /// The cursor then points at the element that followed it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState::CursorAtEnd` if the cursor is at end.
    pub fn remove(&mut self) -> Result<T>
    where
        T: Default,
    {
        if self.is_at_end() {
            return Err(InvalidState::CursorAtEnd.into());
        }

        let pos = self.current();
        let item = self.list.remove_at_position(pos);
        if self.is_at_end() {
            self.move_to_end();
        } else {
            self.block_len = self.list.block_len(self.block_index);
        }
        Ok(item)
    }

    /// Removes `count` elements starting at the cursor.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` without removing anything if fewer
    /// than `count` elements are left before the end.
    pub fn remove_range(&mut self, count: usize) -> Result<()>
    where
        T: Default,
    {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BlockListError::out_of_range("count", count, remaining + 1));
        }
        for _ in 0..count {
            self.remove()?;
        }
        Ok(())
    }

    /// Clones `count` elements starting at the cursor into `buffer[offset..]`.
    ///
    /// The cursor does not move.
    ///
    /// # Errors
    ///
    /// Fails if fewer than `count` elements are left before the end or if
    /// they do not fit into `buffer[offset..]`.
    pub fn copy_to(&self, buffer: &mut [T], offset: usize, count: usize) -> Result<()>
    where
        T: Clone,
    {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BlockListError::out_of_range("count", count, remaining + 1));
        }
        check_destination(buffer.len(), offset, count)?;
        if count == 0 {
            return Ok(());
        }

        self.list
            .clone_from_position(self.current(), &mut buffer[offset..offset + count]);
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.list.len() - self.index
    }

    #[inline]
    fn current(&self) -> Position {
        Position::new(self.block_index, self.element_index)
    }

    fn load(&mut self, pos: Position) {
        self.block_index = pos.block_index;
        self.element_index = pos.element_index;
        self.block_len = self.list.block_len(pos.block_index);
    }

    fn move_to_end(&mut self) {
        self.block_index = self.list.block_count();
        self.element_index = 0;
        self.block_len = 0;
    }

    #[inline]
    fn step_forward(&mut self) {
        debug_assert!(!self.is_at_end());
        self.index += 1;
        self.element_index += 1;
        if self.element_index == self.block_len {
            self.step_forward_rare();
        }
    }

    #[cold]
    fn step_forward_rare(&mut self) {
        if self.is_at_end() {
            self.move_to_end();
            return;
        }
        self.block_index += 1;
        self.element_index = 0;
        self.block_len = self.list.block_len(self.block_index);
    }

    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.index > 0);
        self.index -= 1;
        if self.element_index == 0 {
            self.step_back_rare();
        } else {
            self.element_index -= 1;
        }
    }

    #[cold]
    fn step_back_rare(&mut self) {
        self.block_index -= 1;
        self.block_len = self.list.block_len(self.block_index);
        self.element_index = self.block_len - 1;
    }
}

impl<T, A: Allocator + Clone> fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("block_index", &self.block_index)
            .field("element_index", &self.element_index)
            .field("block_len", &self.block_len)
            .finish()
    }
}
