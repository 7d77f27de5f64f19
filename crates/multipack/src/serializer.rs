//! The serialization facade.

use multipack_base64::{from_base64_url, to_base64_url};
use multipack_formats::{Codecs, Value};

use crate::error::{json_detail, CodecOp, SerializerError};
use crate::mode::{resolve, Mode, ModeSelector, MODES};

/// JSON nesting ceiling used by `unserialize`.
pub const JSON_DEFAULT_DEPTH: usize = 512;

/// Mode-switched serialization facade.
///
/// One instance owns a selected [`Mode`] and dispatches
/// [`serialize`](Serializer::serialize) /
/// [`unserialize`](Serializer::unserialize) to the codec bound to that
/// mode, optionally passing the result through URL-safe base64 for
/// text-only transports. The mode must be set, at construction or via
/// [`set_mode`](Serializer::set_mode), before either operation works,
/// and can be reassigned at any time.
///
/// Instances are cheap but not internally synchronized; concurrent use
/// with different modes needs separate instances.
///
/// ```
/// use multipack::{Serializer, Value};
///
/// let mut s = Serializer::with_mode("json")?;
/// let payload = Value::Object(vec![("money".into(), Value::Int(3000))]);
/// let wire = s.serialize(&payload, false)?;
/// assert_eq!(wire, b"{\"money\":3000}");
/// assert_eq!(s.unserialize(&wire, false)?, payload);
/// # Ok::<(), multipack::SerializerError>(())
/// ```
#[derive(Debug)]
pub struct Serializer {
    mode: Option<Mode>,
    codecs: Codecs,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    /// An unconfigured instance: every codec available, no mode set.
    pub fn new() -> Self {
        Self::with_codecs(Codecs::new())
    }

    /// An instance with a mode already selected.
    pub fn with_mode(mode: impl Into<ModeSelector>) -> Result<Self, SerializerError> {
        let mut serializer = Self::new();
        serializer.set_mode(mode)?;
        Ok(serializer)
    }

    /// An unconfigured instance over a caller-built codec registry.
    ///
    /// Lets slim runtimes drop a binary codec (the facade then reports
    /// it as unavailable) and lets tests stub availability.
    pub fn with_codecs(mut codecs: Codecs) -> Self {
        // facade-wide JSON codec settings
        codecs.json.encoder.coerce_numeric_strings = true;
        codecs.json.decoder.max_depth = JSON_DEFAULT_DEPTH;
        codecs.json.decoder.big_int_as_str = true;
        Self { mode: None, codecs }
    }

    /// Selects the serialization mode.
    ///
    /// Accepts every identifier in the alias table: `1`/`"j"`/`"json"`,
    /// `2`/`"m"`/`"mp"`/`"msgpack"`/`"messagepack"`,
    /// `3`/`"i"`/`"ib"`/`"ig"`/`"igbinary"`. String forms are trimmed
    /// and matched case-insensitively. On success the previous mode is
    /// overwritten; on failure it is left untouched.
    ///
    /// Returns `&mut self` so configuration can chain.
    pub fn set_mode(
        &mut self,
        mode: impl Into<ModeSelector>,
    ) -> Result<&mut Self, SerializerError> {
        let resolved = resolve(mode.into())?;
        self.mode = Some(resolved);
        Ok(self)
    }

    /// The numeric id of the current mode.
    pub fn mode(&self) -> Result<u8, SerializerError> {
        self.mode.map(Mode::id).ok_or(SerializerError::ModeNotSet)
    }

    /// The canonical name of the current mode.
    pub fn mode_name(&self) -> Result<&'static str, SerializerError> {
        let mode = self.mode.ok_or(SerializerError::ModeNotSet)?;
        MODES
            .iter()
            .find(|info| info.mode == mode)
            .map(|info| info.name)
            .ok_or(SerializerError::ModeNameMissing)
    }

    /// All supported modes as an ordered name → id map.
    pub fn available_modes(&self) -> Value {
        Value::Object(
            MODES
                .iter()
                .map(|info| (info.name.to_owned(), Value::Int(info.id as i64)))
                .collect(),
        )
    }

    /// All supported modes encoded as JSON text.
    pub fn available_modes_json(&mut self) -> Result<String, SerializerError> {
        let modes = self.available_modes();
        self.codecs
            .json
            .encoder
            .encode_string(&modes)
            .map_err(|err| SerializerError::Serialize(json_detail(&err).to_owned()))
    }

    /// Serializes `data` according to the current mode.
    ///
    /// With `transport` set, the serialized bytes are additionally
    /// base64url-encoded so binary formats survive text-only channels.
    ///
    /// Empty payloads (null, `false`, empty string, empty collections)
    /// are rejected up front. An unset mode reports
    /// [`SerializerError::UnknownMode`].
    pub fn serialize(
        &mut self,
        data: &Value,
        transport: bool,
    ) -> Result<Vec<u8>, SerializerError> {
        if data.is_empty_payload() {
            return Err(SerializerError::EmptySerializeData);
        }
        let serialized = match self.mode {
            Some(Mode::Json) => self
                .codecs
                .json
                .encoder
                .encode(data)
                .map_err(|err| SerializerError::Serialize(json_detail(&err).to_owned()))?,
            Some(Mode::MsgPack) => {
                let codec = self
                    .codecs
                    .msgpack
                    .as_mut()
                    .ok_or(SerializerError::CodecUnavailable(CodecOp::MsgPackEncode))?;
                codec
                    .encode(data)
                    .map_err(|_| SerializerError::CodecFailed(CodecOp::MsgPackEncode))?
            }
            Some(Mode::Igbinary) => {
                let codec = self
                    .codecs
                    .igbinary
                    .as_mut()
                    .ok_or(SerializerError::CodecUnavailable(CodecOp::IgbinaryEncode))?;
                codec
                    .encode(data)
                    .map_err(|_| SerializerError::CodecFailed(CodecOp::IgbinaryEncode))?
            }
            None => return Err(SerializerError::UnknownMode),
        };
        if transport {
            Ok(to_base64_url(&serialized).into_bytes())
        } else {
            Ok(serialized)
        }
    }

    /// Reconstructs the structured data `serialize` produced.
    ///
    /// With `transport` set, the input is base64url-decoded first; any
    /// failure there is the flat [`SerializerError::TransportDecodeFailed`].
    pub fn unserialize(
        &mut self,
        data: &[u8],
        transport: bool,
    ) -> Result<Value, SerializerError> {
        if data.is_empty() {
            return Err(SerializerError::EmptyUnserializeData);
        }
        let decoded;
        let payload: &[u8] = if transport {
            let text = std::str::from_utf8(data)
                .map_err(|_| SerializerError::TransportDecodeFailed)?;
            decoded =
                from_base64_url(text).map_err(|_| SerializerError::TransportDecodeFailed)?;
            &decoded
        } else {
            data
        };
        match self.mode {
            Some(Mode::Json) => self
                .codecs
                .json
                .decoder
                .decode(payload)
                .map_err(|err| SerializerError::Unserialize(json_detail(&err).to_owned())),
            Some(Mode::MsgPack) => {
                let codec = self
                    .codecs
                    .msgpack
                    .as_mut()
                    .ok_or(SerializerError::CodecUnavailable(CodecOp::MsgPackDecode))?;
                codec
                    .decode(payload)
                    .map_err(|_| SerializerError::CodecFailed(CodecOp::MsgPackDecode))
            }
            Some(Mode::Igbinary) => {
                let codec = self
                    .codecs
                    .igbinary
                    .as_mut()
                    .ok_or(SerializerError::CodecUnavailable(CodecOp::IgbinaryDecode))?;
                codec
                    .decode(payload)
                    .map_err(|_| SerializerError::CodecFailed(CodecOp::IgbinaryDecode))
            }
            None => Err(SerializerError::UnknownMode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Serializer;
    use crate::error::SerializerError;
    use multipack_formats::Value;

    #[test]
    fn chained_configuration() {
        let mut s = Serializer::new();
        let id = s.set_mode("mp").unwrap().mode().unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn failed_set_mode_keeps_previous_mode() {
        let mut s = Serializer::with_mode("json").unwrap();
        assert_eq!(
            s.set_mode("yaml").unwrap_err(),
            SerializerError::UnsupportedMode
        );
        assert_eq!(s.mode().unwrap(), 1);
        assert_eq!(s.mode_name().unwrap(), "json");
    }

    #[test]
    fn available_modes_map() {
        let s = Serializer::new();
        assert_eq!(
            s.available_modes(),
            Value::Object(vec![
                ("json".into(), Value::Int(1)),
                ("msgpack".into(), Value::Int(2)),
                ("igbinary".into(), Value::Int(3)),
            ])
        );
    }

    #[test]
    fn available_modes_as_json() {
        let mut s = Serializer::new();
        assert_eq!(
            s.available_modes_json().unwrap(),
            "{\"json\":1,\"msgpack\":2,\"igbinary\":3}"
        );
    }

    #[test]
    fn mode_reassignment_never_unsets() {
        let mut s = Serializer::new();
        s.set_mode(1).unwrap();
        s.set_mode("igbinary").unwrap();
        assert_eq!(s.mode().unwrap(), 3);
        s.set_mode("messagepack").unwrap();
        assert_eq!(s.mode_name().unwrap(), "msgpack");
    }
}
