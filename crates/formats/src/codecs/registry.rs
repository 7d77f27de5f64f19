//! Aggregate codec holder.

use super::{IgbinaryCodec, JsonCodec, MsgPackCodec};

/// The set of codecs a runtime actually has.
///
/// JSON is always present; the binary codecs are optional so a slim
/// runtime (or a test) can genuinely lack one. A `None` slot is how the
/// facade distinguishes "this codec is unavailable" from "this codec
/// failed".
#[derive(Debug)]
pub struct Codecs {
    pub json: JsonCodec,
    pub msgpack: Option<MsgPackCodec>,
    pub igbinary: Option<IgbinaryCodec>,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new()
    }
}

impl Codecs {
    /// All codecs available.
    pub fn new() -> Self {
        Self {
            json: JsonCodec::new(),
            msgpack: Some(MsgPackCodec::new()),
            igbinary: Some(IgbinaryCodec::new()),
        }
    }
}
