//! JSON codec wrapper.

use crate::{json::JsonDecoder, json::JsonEncoder, Value};

use super::types::{CodecError, ValueCodec};

#[derive(Debug)]
pub struct JsonCodec {
    pub encoder: JsonEncoder,
    pub decoder: JsonDecoder,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonCodec {
    pub fn new() -> Self {
        Self {
            encoder: JsonEncoder::new(),
            decoder: JsonDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "json"
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value)?)
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl ValueCodec for JsonCodec {
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
