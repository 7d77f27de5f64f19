//! Wire-format codecs for multipack.
//!
//! One payload model, three interchangeable wire formats:
//!
//! - [`Value`]: the closed payload union all codecs share
//! - [`json`]: human-readable structured text
//! - [`msgpack`]: compact binary maps/arrays (MessagePack)
//! - [`igbinary`]: binary object graphs with string interning
//!   (igbinary v2)
//! - [`codecs`]: encoder/decoder pairs behind one registry
//!
//! Every codec round-trips any [`Value`]: `decode(encode(v)) == v`, up
//! to the documented narrowing (e.g. float32 widening on MessagePack
//! decode).

mod value;

pub mod codecs;
pub mod igbinary;
pub mod json;
pub mod msgpack;

pub use codecs::{CodecError, Codecs, IgbinaryCodec, JsonCodec, MsgPackCodec, ValueCodec};
pub use value::Value;
