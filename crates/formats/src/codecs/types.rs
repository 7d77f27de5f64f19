//! Common codec trait and error.

use crate::{igbinary::IgbinaryError, json::JsonError, msgpack::MsgPackError, Value};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] JsonError),
    #[error("MessagePack codec error: {0}")]
    MsgPack(#[from] MsgPackError),
    #[error("igbinary codec error: {0}")]
    Igbinary(#[from] IgbinaryError),
}

/// Trait for codecs that encode/decode [`Value`].
pub trait ValueCodec {
    fn id(&self) -> &'static str;
    fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError>;
    fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError>;
}
