//! A segmented list whose blocks never change length once allocated.
//!
//! `BlockList` stores its elements in a chain of fixed-length blocks instead
//! of one contiguous buffer. Appending is amortized O(1) and never moves
//! existing elements. Inserting or removing at an arbitrary index ripples a
//! single element across each following block boundary instead of
//! reallocating or shifting the whole tail through one buffer.
//!
//! Unused slots of the last block hold `T::default()`, so every method that
//! adds, inserts or removes elements requires `T: Default`. Reading,
//! searching and iterating work for any `T`.
//!
//! # Example
//!
//! ```
//! use block_list::{BlockList, Options};
//!
//! let mut list = BlockList::with_options(Options::new(4).unwrap());
//! list.add_range(0..10);
//! assert_eq!(list.block_count(), 3);
//!
//! list.insert(0, 99).unwrap();
//! assert_eq!(list[0], 99);
//! assert_eq!(list[10], 9);
//!
//! assert_eq!(list.remove_at(0).unwrap(), 99);
//! assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
//! ```

mod block;
mod cursor;
mod error;
mod iter;
mod options;
mod position;
mod table;
mod view;

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::Vec as AllocVec;
pub use block::{Block, OwnedBlock};
pub use cursor::Cursor;
pub use error::{BlockListError, InvalidState, Result};
pub use iter::{Iter, IterMut};
pub use options::Options;
pub use view::{BlockView, Blocks};

use error::check_destination;
use position::Position;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use table::{BlockTable, Storage};
use tracing::trace;

/// A list stored as a chain of fixed-length blocks.
///
/// # Memory Layout
///
/// Blocks have lengths `initial, initial, 2*initial, 4*initial, ...` where
/// `initial` comes from [`Options`]. Completed blocks are always full; only
/// the last ("active") block may be partially filled. This keeps unused
/// capacity below the length of the largest block, i.e. under 50%.
///
/// Slots of the active block past the last element hold `T::default()`,
/// which is why operations that allocate or vacate slots require
/// `T: Default`.
pub struct BlockList<T, A: Allocator + Clone = Global> {
    /// Completed blocks, every one of them full
    table: BlockTable<T, A>,
    /// Block receiving appends
    active: Storage<T, A>,
    /// Number of occupied slots in `active`
    active_len: usize,
    /// Number of elements
    len: usize,
    /// Sum of all block lengths
    capacity: usize,
    options: Options,
    alloc: A,
}

fn empty_storage<T, A: Allocator>(alloc: A) -> Storage<T, A> {
    AllocVec::new_in(alloc).into_boxed_slice()
}

impl<T> BlockList<T> {
    /// Creates an empty list with the default options.
    ///
    /// Does not allocate until elements are added.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::BlockList;
    /// let list: BlockList<i32> = BlockList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_options(Options::DEFAULT)
    }

    /// Creates an empty list with the given options.
    #[inline]
    pub fn with_options(options: Options) -> Self {
        Self::with_options_in(options, Global)
    }

    /// Creates a list holding the items of `iter`, in order.
    pub fn from_iter_with_options<I>(iter: I, options: Options) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Default,
    {
        let mut list = Self::with_options(options);
        list.add_range(iter);
        list
    }
}

impl<T, A: Allocator + Clone> BlockList<T, A> {
    /// Creates an empty list allocating its blocks from `alloc`.
    #[inline]
    pub fn new_in(alloc: A) -> Self {
        Self::with_options_in(Options::DEFAULT, alloc)
    }

    /// Creates an empty list with the given options, allocating from `alloc`.
    pub fn with_options_in(options: Options, alloc: A) -> Self {
        Self {
            table: BlockTable::new_in(alloc.clone()),
            active: empty_storage(alloc.clone()),
            active_len: 0,
            len: 0,
            capacity: 0,
            options,
            alloc,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sum of the lengths of every allocated block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of blocks, counting the active block.
    ///
    /// An empty list still reports one (empty) block.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.table.len() + 1
    }

    /// Returns `true` if the list consists of a single block.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns `true` if the next append has to allocate a block.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the options the list was created with.
    #[inline]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the allocator blocks are allocated from.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a view over every block of the list.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::{BlockList, Options};
    ///
    /// let list = BlockList::from_iter_with_options(0..10, Options::new(4).unwrap());
    /// let lens: Vec<usize> = list.blocks().iter().map(|b| b.capacity()).collect();
    /// assert_eq!(lens, [4, 4, 8]);
    /// ```
    #[inline]
    pub fn blocks(&self) -> BlockView<'_, T, A> {
        BlockView::new(self)
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let pos = self.position(index);
        Some(&self.block_slice(pos.block_index)[pos.element_index])
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let pos = self.position(index);
        Some(&mut self.block_slice_mut(pos.block_index)[pos.element_index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(BlockListError::out_of_range("index", index, len)),
        }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState::FirstOfEmpty` if the list is empty.
    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(InvalidState::FirstOfEmpty.into());
        }
        Ok(&self.block_slice(0)[0])
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState::LastOfEmpty` if the list is empty.
    pub fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(InvalidState::LastOfEmpty.into());
        }
        Ok(&self.active[self.active_len - 1])
    }

    /// Appends an element to the back of the list.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::BlockList;
    /// let mut list: BlockList<i32> = BlockList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn add(&mut self, item: T)
    where
        T: Default,
    {
        if self.is_full() {
            self.resize();
        }
        self.active[self.active_len] = item;
        self.active_len += 1;
        self.len += 1;
    }

    /// Same as [`add`](Self::add).
    #[inline]
    pub fn push(&mut self, item: T)
    where
        T: Default,
    {
        self.add(item);
    }

    /// Appends every item of `items`, in order.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I)
    where
        T: Default,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Inserts `item` at `index`, moving every later element one position forward.
    ///
    /// No block changes length: each block past the insertion point hands
    /// its last element to its successor, and the former last element of
    /// the list is appended.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index > len`; the list is unchanged.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()>
    where
        T: Default,
    {
        if index > self.len {
            return Err(BlockListError::out_of_range("index", index, self.len + 1));
        }
        if index == self.len {
            self.add(item);
            return Ok(());
        }
        let pos = self.position(index);
        self.insert_at(pos, item);
        Ok(())
    }

    /// Inserts every item of `items` starting at `index`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index > len`.
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<()>
    where
        T: Default,
    {
        let mut cursor = self.cursor(index)?;
        cursor.insert_range(items);
        Ok(())
    }

    /// Removes and returns the element at `index`, moving every later element one position back.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index >= len`; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T>
    where
        T: Default,
    {
        if index >= self.len {
            return Err(BlockListError::out_of_range("index", index, self.len));
        }
        let pos = self.position(index);
        Ok(self.remove_at_position(pos))
    }

    /// Removes the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq + Default,
    {
        match self.index_of(item) {
            Some(index) => {
                let pos = self.position(index);
                self.remove_at_position(pos);
                true
            }
            None => false,
        }
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index > len` or fewer than
    /// `count` elements follow `index`.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()>
    where
        T: Default,
    {
        let mut cursor = self.cursor(index)?;
        cursor.remove_range(count)
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::BlockList;
    /// let mut list: BlockList<i32> = BlockList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.is_empty() {
            None
        } else {
            Some(self.remove_last())
        }
    }

    /// Removes every element and releases every block.
    ///
    /// Options are kept.
    pub fn clear(&mut self) {
        if self.capacity > 0 {
            trace!(len = self.len, blocks = self.block_count(), "clearing block list");
        }
        self.reset();
    }

    /// Detaches the storage of a contiguous list without copying it.
    ///
    /// The list is left empty with no allocated blocks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState::NotContiguous` if the list has more than one
    /// block, or `InvalidState::MoveOfEmpty` if it has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::{BlockList, Options};
    ///
    /// let mut list = BlockList::from_iter_with_options(0..4, Options::new(4).unwrap());
    /// let block = list.move_to_block().unwrap();
    /// assert_eq!(&*block, &[0, 1, 2, 3]);
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn move_to_block(&mut self) -> Result<OwnedBlock<T, A>> {
        if self.is_empty() {
            return Err(InvalidState::MoveOfEmpty.into());
        }
        if !self.is_contiguous() {
            return Err(InvalidState::NotContiguous.into());
        }

        let storage = mem::replace(&mut self.active, empty_storage(self.alloc.clone()));
        let len = self.active_len;
        self.reset();
        trace!(len, capacity = storage.len(), "moved storage out of block list");
        Ok(OwnedBlock::new(storage, len))
    }

    /// Returns `true` if the list contains an element equal to `item`.
    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element equal to `item`.
    ///
    /// Only occupied slots are searched, so the default filler at the end of
    /// the active block never matches.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut processed = 0;
        for block in self.table.iter() {
            if let Some(index) = block.iter().position(|x| x == item) {
                return Some(processed + index);
            }
            processed += block.len();
        }

        self.active[..self.active_len]
            .iter()
            .position(|x| x == item)
            .map(|index| processed + index)
    }

    /// Clones every element into `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Fails if the elements do not fit into `buffer[offset..]`.
    pub fn copy_to(&self, buffer: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        self.copy_range_to(0, buffer, offset, self.len)
    }

    /// Clones `count` elements starting at `index` into `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if the source range is not inside the
    /// list, or an error if the destination range is not inside `buffer`.
    pub fn copy_range_to(
        &self,
        index: usize,
        buffer: &mut [T],
        offset: usize,
        count: usize,
    ) -> Result<()>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(BlockListError::out_of_range("index", index, self.len + 1));
        }
        if count > self.len - index {
            return Err(BlockListError::out_of_range(
                "count",
                count,
                self.len - index + 1,
            ));
        }
        check_destination(buffer.len(), offset, count)?;
        if count == 0 {
            return Ok(());
        }

        let pos = self.position(index);
        self.clone_from_position(pos, &mut buffer[offset..offset + count]);
        Ok(())
    }

    /// Converts the list into a standard `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(self.len);
        for block in self.table.iter() {
            vec.extend_from_slice(block);
        }
        vec.extend_from_slice(&self.active[..self.active_len]);
        vec
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        for index in [a, b] {
            if index >= self.len {
                return Err(BlockListError::out_of_range("index", index, self.len));
            }
        }
        self.swap_unchecked(a, b);
        Ok(())
    }

    /// Reverses the order of elements in the list.
    pub fn reverse(&mut self) {
        self.reverse_unchecked(0, self.len);
    }

    /// Reverses the order of `count` elements starting at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if the range is not inside the list.
    pub fn reverse_range(&mut self, index: usize, count: usize) -> Result<()> {
        if index > self.len {
            return Err(BlockListError::out_of_range("index", index, self.len + 1));
        }
        if count > self.len - index {
            return Err(BlockListError::out_of_range(
                "count",
                count,
                self.len - index + 1,
            ));
        }
        self.reverse_unchecked(index, count);
        Ok(())
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter::new(self)
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, A> {
        IterMut::new(
            self.table.iter_mut(),
            &mut self.active[..self.active_len],
            self.len,
        )
    }

    /// Returns a cursor positioned at `index`.
    ///
    /// `index == len` positions the cursor at the end.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Range` if `index > len`.
    pub fn cursor(&mut self, index: usize) -> Result<Cursor<'_, T, A>> {
        Cursor::new(self, index)
    }

    /// Locates a logical index.
    ///
    /// Elements of the active block are found without scanning the table.
    pub(crate) fn position(&self, index: usize) -> Position {
        debug_assert!(index < self.len);

        let active_start = self.len - self.active_len;
        if index >= active_start {
            return Position::new(self.table.len(), index - active_start);
        }

        let mut element_index = index;
        for (block_index, block) in self.table.iter().enumerate() {
            if element_index < block.len() {
                return Position::new(block_index, element_index);
            }
            element_index -= block.len();
        }
        unreachable!("index {index} is before the active block but past every completed block")
    }

    /// Returns a view of the block at `block_index`, which must be at most `table.len()`.
    pub(crate) fn block(&self, block_index: usize) -> Block<'_, T> {
        match self.table.get(block_index) {
            Some(storage) => Block::in_slot(storage, storage.len()),
            None => {
                debug_assert_eq!(block_index, self.table.len());
                Block::in_slot(&self.active, self.active_len)
            }
        }
    }

    /// Returns the number of elements in use in the block at `block_index`.
    #[inline]
    pub(crate) fn block_len(&self, block_index: usize) -> usize {
        match self.table.get(block_index) {
            Some(storage) => storage.len(),
            None => self.active_len,
        }
    }

    /// Returns the occupied part of the block at `block_index`.
    #[inline]
    pub(crate) fn block_slice(&self, block_index: usize) -> &[T] {
        match self.table.get(block_index) {
            Some(storage) => &storage[..],
            None => &self.active[..self.active_len],
        }
    }

    #[inline]
    pub(crate) fn block_slice_mut(&mut self, block_index: usize) -> &mut [T] {
        if block_index < self.table.len() {
            &mut self.table.as_mut_slice()[block_index][..]
        } else {
            &mut self.active[..self.active_len]
        }
    }

    /// Inserts `item` at `pos`, which must locate an existing element.
    ///
    /// Walks forward from `pos`: every block rotates right by one and the
    /// element that falls off its end is carried into slot 0 of the next
    /// block. The element carried out of the active block is appended last,
    /// so a resize can only happen after every shift is done.
    pub(crate) fn insert_at(&mut self, pos: Position, item: T)
    where
        T: Default,
    {
        let carry = if pos.block_index == self.table.len() {
            let suffix = &mut self.active[pos.element_index..self.active_len];
            suffix.rotate_right(1);
            mem::replace(&mut suffix[0], item)
        } else {
            let blocks = &mut self.table.as_mut_slice()[pos.block_index..];

            let suffix = &mut blocks[0][pos.element_index..];
            suffix.rotate_right(1);
            let mut carry = mem::replace(&mut suffix[0], item);

            for block in &mut blocks[1..] {
                block.rotate_right(1);
                carry = mem::replace(&mut block[0], carry);
            }

            let active = &mut self.active[..self.active_len];
            if !active.is_empty() {
                active.rotate_right(1);
                carry = mem::replace(&mut active[0], carry);
            }
            carry
        };

        self.add(carry);
    }

    /// Removes and returns the element at `pos`, which must locate an existing element.
    ///
    /// The removed element is rotated to the end of its block, then swapped
    /// across each following block boundary until it reaches the last
    /// occupied slot of the active block, where it is popped.
    pub(crate) fn remove_at_position(&mut self, pos: Position) -> T
    where
        T: Default,
    {
        if pos.block_index == self.table.len() {
            self.active[pos.element_index..self.active_len].rotate_left(1);
        } else {
            let blocks = &mut self.table.as_mut_slice()[pos.block_index..];
            blocks[0][pos.element_index..].rotate_left(1);

            for k in 1..blocks.len() {
                let (done, rest) = blocks.split_at_mut(k);
                let predecessor = &mut done[k - 1];
                let last = predecessor.len() - 1;
                mem::swap(&mut predecessor[last], &mut rest[0][0]);
                rest[0].rotate_left(1);
            }

            debug_assert!(self.active_len > 0, "active block empty while table is not");
            if let Some(predecessor) = blocks.last_mut() {
                let last = predecessor.len() - 1;
                mem::swap(&mut predecessor[last], &mut self.active[0]);
            }
            self.active[..self.active_len].rotate_left(1);
        }

        self.remove_last()
    }

    /// Clones elements starting at `pos` until `dest` is full.
    pub(crate) fn clone_from_position(&self, pos: Position, dest: &mut [T])
    where
        T: Clone,
    {
        let mut written = 0;
        let mut block_index = pos.block_index;
        let mut start = pos.element_index;

        while written < dest.len() {
            let src = &self.block_slice(block_index)[start..];
            let n = src.len().min(dest.len() - written);
            dest[written..written + n].clone_from_slice(&src[..n]);

            written += n;
            block_index += 1;
            start = 0;
        }
    }

    fn remove_last(&mut self) -> T
    where
        T: Default,
    {
        debug_assert!(!self.is_empty());

        self.len -= 1;
        self.active_len -= 1;
        let item = mem::take(&mut self.active[self.active_len]);

        // Only the active block may be partially filled, so an emptied active
        // block is replaced by the last completed one.
        if self.active_len == 0 {
            match self.table.pop() {
                Some(block) => {
                    self.capacity -= self.active.len();
                    self.active_len = block.len();
                    self.active = block;
                    trace!(
                        block_len = self.active_len,
                        blocks = self.block_count(),
                        "demoted completed block"
                    );
                }
                None => self.reset(),
            }
            debug_assert!(self.is_full());
        }

        item
    }

    fn reset(&mut self) {
        self.table.clear();
        self.active = empty_storage(self.alloc.clone());
        self.active_len = 0;
        self.len = 0;
        self.capacity = 0;
    }

    #[cold]
    #[inline(never)]
    fn resize(&mut self)
    where
        T: Default,
    {
        debug_assert!(self.is_full());

        let initial = self.options.initial_capacity();
        if self.is_empty() {
            self.active = self.allocate_block(initial);
            self.capacity = initial;
            trace!(block_len = initial, "allocated first block");
            return;
        }

        // The second block repeats the first length; doubling starts after
        // that so unused capacity stays below half of the total.
        let next = if self.capacity == initial {
            initial
        } else {
            self.active
                .len()
                .checked_mul(2)
                .expect("block list capacity overflow")
        };
        let block = self.allocate_block(next);
        let completed = mem::replace(&mut self.active, block);
        self.table.push(completed);
        self.active_len = 0;
        self.capacity += next;
        trace!(block_len = next, blocks = self.block_count(), "allocated block");
    }

    fn allocate_block(&self, len: usize) -> Storage<T, A>
    where
        T: Default,
    {
        let mut storage = AllocVec::with_capacity_in(len, self.alloc.clone());
        storage.extend(std::iter::repeat_with(T::default).take(len));
        storage.into_boxed_slice()
    }

    fn swap_unchecked(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (a, b) = (a.min(b), a.max(b));
        let pa = self.position(a);
        let pb = self.position(b);

        if pa.block_index == pb.block_index {
            self.block_slice_mut(pa.block_index)
                .swap(pa.element_index, pb.element_index);
        } else if pb.block_index == self.table.len() {
            let lower = &mut self.table.as_mut_slice()[pa.block_index];
            mem::swap(
                &mut lower[pa.element_index],
                &mut self.active[pb.element_index],
            );
        } else {
            let (lo, hi) = self.table.as_mut_slice().split_at_mut(pb.block_index);
            mem::swap(
                &mut lo[pa.block_index][pa.element_index],
                &mut hi[0][pb.element_index],
            );
        }
    }

    fn reverse_unchecked(&mut self, index: usize, count: usize) {
        if count < 2 {
            return;
        }
        let (mut i, mut j) = (index, index + count - 1);
        while i < j {
            self.swap_unchecked(i, j);
            i += 1;
            j -= 1;
        }
    }
}

impl<T> Default for BlockList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default, A: Allocator + Clone> Clone for BlockList<T, A> {
    /// Rebuilds the list with the same options; block layout depends only on
    /// length and options, so the clone has the same blocks.
    fn clone(&self) -> Self {
        let mut list = Self::with_options_in(self.options, self.alloc.clone());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq, A: Allocator + Clone, B: Allocator + Clone> PartialEq<BlockList<T, B>>
    for BlockList<T, A>
{
    /// Compares elements only; block layout is ignored.
    fn eq(&self, other: &BlockList<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator + Clone> Eq for BlockList<T, A> {}

impl<T: Hash, A: Allocator + Clone> Hash for BlockList<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for BlockList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: Allocator + Clone> Index<usize> for BlockList<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds for block list of length {len}"),
        }
    }
}

impl<T, A: Allocator + Clone> IndexMut<usize> for BlockList<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds for block list of length {len}"),
        }
    }
}

impl<T: Default, A: Allocator + Clone> Extend<T> for BlockList<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T: Clone + Default + 'a, A: Allocator + Clone> Extend<&'a T> for BlockList<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_range(iter.into_iter().cloned());
    }
}

impl<T: Default> FromIterator<T> for BlockList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_options(iter, Options::DEFAULT)
    }
}

impl<'a, T, A: Allocator + Clone> IntoIterator for &'a BlockList<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator + Clone> IntoIterator for &'a mut BlockList<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
