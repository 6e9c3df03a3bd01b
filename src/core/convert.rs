use anyhow::Result;

/// Conversion from a dense index (side slot, difficulty id, ...)
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Conversion to a dense index, the inverse of [`FromIndex`]
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}
