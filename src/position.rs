/// Location of a logical index inside the block structure.
///
/// `block_index` ranges over `0..=table.len()`, where `table.len()` denotes
/// the active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) block_index: usize,
    pub(crate) element_index: usize,
}

impl Position {
    #[inline]
    pub(crate) const fn new(block_index: usize, element_index: usize) -> Self {
        Self {
            block_index,
            element_index,
        }
    }
}
