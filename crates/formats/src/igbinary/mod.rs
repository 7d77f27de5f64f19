//! igbinary v2 encoding/decoding.
//!
//! Binary object-graph format with an interned string table: each
//! distinct non-empty string is written once and referenced by id
//! afterwards, which keeps documents with repeated keys compact.

mod constants;
mod decoder;
mod encoder;
mod error;

pub use decoder::IgbinaryDecoder;
pub use encoder::IgbinaryEncoder;
pub use error::IgbinaryError;
