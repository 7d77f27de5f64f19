//! MessagePack codec wrapper.

use crate::{msgpack::MsgPackDecoder, msgpack::MsgPackEncoder, Value};

use super::types::{CodecError, ValueCodec};

#[derive(Debug)]
pub struct MsgPackCodec {
    pub encoder: MsgPackEncoder,
    pub decoder: MsgPackDecoder,
}

impl Default for MsgPackCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackCodec {
    pub fn new() -> Self {
        Self {
            encoder: MsgPackEncoder::new(),
            decoder: MsgPackDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "msgpack"
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value))
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl ValueCodec for MsgPackCodec {
    fn id(&self) -> &'static str {
        self.id()
    }

    fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.encode(value)
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.decode(bytes)
    }
}
