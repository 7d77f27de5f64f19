//! igbinary codec wrapper.

use crate::{igbinary::IgbinaryDecoder, igbinary::IgbinaryEncoder, Value};

use super::types::{CodecError, ValueCodec};

#[derive(Debug)]
pub struct IgbinaryCodec {
    pub encoder: IgbinaryEncoder,
    pub decoder: IgbinaryDecoder,
}

impl Default for IgbinaryCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl IgbinaryCodec {
    pub fn new() -> Self {
        Self {
            encoder: IgbinaryEncoder::new(),
            decoder: IgbinaryDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "igbinary"
    }

    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, CodecError> {
        Ok(self.encoder.encode(value))
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl ValueCodec for IgbinaryCodec {
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
