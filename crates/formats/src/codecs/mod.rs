//! Combined value codecs.

mod igbinary;
mod json;
mod msgpack;
mod registry;
mod types;

pub use igbinary::IgbinaryCodec;
pub use json::JsonCodec;
pub use msgpack::MsgPackCodec;
pub use registry::Codecs;
pub use types::{CodecError, ValueCodec};
