#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("symbol {0} has no code in the table")]
    UnknownSymbol(String),

    /// A code table entry that is not made of `0` and `1`.
    #[error("invalid bit {found:?} at index {index}, expected '0' or '1'")]
    InvalidBit { index: usize, found: char },

    #[error("{count} trailing bits do not form a code")]
    TrailingBits { count: usize },
}
