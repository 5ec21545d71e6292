//! Construction-time configuration for `BlockList`.

use std::num::NonZeroUsize;

use crate::error::{BlockListError, Result};

/// Configuration fixed when a `BlockList` is created.
///
/// The only knob is the length of the first block. The second block has the
/// same length and every later block doubles the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    initial_capacity: NonZeroUsize,
}

impl Options {
    /// Length of the first block when none is given.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

    /// Options used by `BlockList::new`.
    pub const DEFAULT: Options = Options {
        initial_capacity: match NonZeroUsize::new(Self::DEFAULT_INITIAL_CAPACITY) {
            Some(capacity) => capacity,
            None => panic!("default initial capacity must be non-zero"),
        },
    };

    /// Creates options with the given first-block length.
    ///
    /// # Errors
    ///
    /// Returns `BlockListError::Argument` if `initial_capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use block_list::Options;
    ///
    /// let options = Options::new(4).unwrap();
    /// assert_eq!(options.initial_capacity(), 4);
    /// assert!(Options::new(0).is_err());
    /// ```
    pub fn new(initial_capacity: usize) -> Result<Self> {
        NonZeroUsize::new(initial_capacity)
            .map(Self::with_initial_capacity)
            .ok_or_else(|| {
                BlockListError::argument("initial_capacity", "must be a positive integer")
            })
    }

    /// Creates options from an already validated first-block length.
    #[inline]
    pub const fn with_initial_capacity(initial_capacity: NonZeroUsize) -> Self {
        Self { initial_capacity }
    }

    /// Returns the length of the first block.
    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity.get()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Options::default().initial_capacity(), 32);
        assert_eq!(Options::default(), Options::DEFAULT);
    }

    #[test]
    fn test_new() {
        assert_eq!(Options::new(1).unwrap().initial_capacity(), 1);
        assert_eq!(Options::new(4).unwrap(), Options::new(4).unwrap());
        assert_ne!(Options::new(4).unwrap(), Options::new(8).unwrap());
        assert!(matches!(
            Options::new(0),
            Err(BlockListError::Argument {
                param: "initial_capacity",
                ..
            })
        ));
    }
}
