//! MessagePack decoder error type.

use multipack_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("map key is not a string")]
    InvalidKey,
    #[error("maximum nesting depth exceeded")]
    DepthExceeded,
    #[error("unsupported MessagePack type 0x{0:02x}")]
    UnsupportedType(u8),
    #[error("invalid MessagePack byte at offset {0}")]
    InvalidByte(usize),
}

impl From<BufferError> for MsgPackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => MsgPackError::UnexpectedEof,
            BufferError::InvalidUtf8 => MsgPackError::InvalidUtf8,
        }
    }
}
