//! URL-safe base64 encoding/decoding for multipack.
//!
//! This is the transport layer applied on top of already-serialized
//! payloads: a URL-safe (`-`/`_`) alphabet with no `=` padding, so the
//! binary wire formats can travel through text-only channels. Encoding
//! and decoding are bit-for-bit compatible with the classic URL-safe
//! base64 variant, and decoding tolerates input that carries padding.

mod constants;
mod from_base64_url;
mod to_base64_url;

pub use constants::{ALPHABET_URL, PAD};
pub use from_base64_url::from_base64_url;
pub use to_base64_url::to_base64_url;

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input length is impossible for base64 (`len % 4 == 1`).
    InvalidLength,
    /// A byte outside the URL-safe alphabet, at the given position.
    InvalidCharacter(usize),
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidLength => write!(f, "invalid base64 length"),
            Base64Error::InvalidCharacter(pos) => {
                write!(f, "invalid base64 character at position {pos}")
            }
        }
    }
}

impl std::error::Error for Base64Error {}
