//! igbinary decoder error type.

use multipack_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IgbinaryError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid igbinary header")]
    BadHeader,
    #[error("unknown igbinary type 0x{0:02x}")]
    UnknownType(u8),
    #[error("string reference {0} out of range")]
    InvalidStringRef(usize),
    #[error("array key is not a long or string")]
    InvalidKey,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("maximum nesting depth exceeded")]
    DepthExceeded,
    #[error("invalid igbinary byte at offset {0}")]
    InvalidByte(usize),
}

impl From<BufferError> for IgbinaryError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => IgbinaryError::UnexpectedEof,
            BufferError::InvalidUtf8 => IgbinaryError::InvalidUtf8,
        }
    }
}
