//! Error types for `BlockList` operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlockListError>;

/// Errors reported by `BlockList`, its cursors and its configuration.
///
/// Every error is reported before the structure is mutated, so a failed call
/// leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockListError {
    /// An index or count argument falls outside `[0, bound)`.
    #[error("{param} {value} is out of range (expected a value below {bound})")]
    Range {
        /// Name of the offending argument
        param: &'static str,
        /// Value that was passed
        value: usize,
        /// Exclusive upper bound of the valid interval
        bound: usize,
    },

    /// A structural precondition of the operation is not met.
    #[error("invalid state: {0}")]
    InvalidState(InvalidState),

    /// A required argument is unusable.
    #[error("invalid argument `{param}`: {reason}")]
    Argument {
        /// Name of the offending argument
        param: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// The structural precondition that an operation found unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("cannot get the first item of an empty collection")]
    FirstOfEmpty,
    #[error("cannot get the last item of an empty collection")]
    LastOfEmpty,
    #[error("cannot move a non-contiguous block list")]
    NotContiguous,
    #[error("cannot move an empty block list")]
    MoveOfEmpty,
    #[error("cannot remove an item when the cursor is at the end of the block list")]
    CursorAtEnd,
}

impl BlockListError {
    #[inline]
    pub(crate) fn out_of_range(param: &'static str, value: usize, bound: usize) -> Self {
        Self::Range {
            param,
            value,
            bound,
        }
    }

    #[inline]
    pub(crate) fn argument(param: &'static str, reason: &'static str) -> Self {
        Self::Argument { param, reason }
    }
}

impl From<InvalidState> for BlockListError {
    fn from(state: InvalidState) -> Self {
        Self::InvalidState(state)
    }
}

/// Checks that `count` elements fit into a buffer of `buffer_len` starting at `offset`.
pub(crate) fn check_destination(buffer_len: usize, offset: usize, count: usize) -> Result<()> {
    if count > buffer_len {
        return Err(BlockListError::argument(
            "buffer",
            "destination is too small for the requested copy",
        ));
    }
    let bound = buffer_len - count + 1;
    if offset >= bound {
        return Err(BlockListError::out_of_range("offset", offset, bound));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BlockListError::out_of_range("index", 7, 5);
        assert_eq!(
            err.to_string(),
            "index 7 is out of range (expected a value below 5)"
        );

        let err = BlockListError::from(InvalidState::NotContiguous);
        assert_eq!(
            err.to_string(),
            "invalid state: cannot move a non-contiguous block list"
        );
    }

    #[test]
    fn test_check_destination() {
        assert!(check_destination(10, 0, 10).is_ok());
        assert!(check_destination(10, 3, 7).is_ok());
        assert_eq!(
            check_destination(10, 4, 7),
            Err(BlockListError::out_of_range("offset", 4, 4))
        );
        assert!(matches!(
            check_destination(3, 0, 4),
            Err(BlockListError::Argument { param: "buffer", .. })
        ));
        assert!(check_destination(0, 0, 0).is_ok());
    }
}
