//! JSON encoder/decoder error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("maximum nesting depth exceeded")]
    DepthExceeded,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid JSON at byte {0}")]
    InvalidByte(usize),
    #[error("unescaped control character at byte {0}")]
    ControlCharacter(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid UTF-16 escape at byte {0}")]
    InvalidUtf16(usize),
    #[error("non-finite number cannot be encoded")]
    NonFinite,
}
