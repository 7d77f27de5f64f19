//! The facade error taxonomy.

use multipack_formats::json::JsonError;
use thiserror::Error;

/// Which codec operation an unavailability/failure error refers to.
///
/// Carries the operation direction too, because the caller-facing
/// wording differs per codec and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOp {
    MsgPackEncode,
    MsgPackDecode,
    IgbinaryEncode,
    IgbinaryDecode,
}

impl CodecOp {
    pub(crate) fn unavailable_message(self) -> &'static str {
        match self {
            CodecOp::MsgPackEncode => "MessagePack encoding not available.",
            CodecOp::MsgPackDecode => "MessagePack decoding not available.",
            CodecOp::IgbinaryEncode => "Igbinary serialization not available.",
            CodecOp::IgbinaryDecode => "Igbinary unserialization not available.",
        }
    }

    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            CodecOp::MsgPackEncode => "Encoding to MessagePack failed.",
            CodecOp::MsgPackDecode => "Decoding from MessagePack failed.",
            CodecOp::IgbinaryEncode => "Serialization to Igbinary failed.",
            CodecOp::IgbinaryDecode => "Unserialization from Igbinary failed.",
        }
    }
}

/// Coarse error classification for callers that route on kind rather
/// than on the literal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Mode selection problems: invalid identifier, mode never set.
    Configuration,
    /// Bad caller input: empty payload, empty serialized data.
    Validation,
    /// The selected codec is not present in this runtime.
    Unavailable,
    /// The codec ran and reported a failure.
    Codec,
    /// The transport (base64) layer failed.
    Transport,
}

/// Everything `Serializer` can report.
///
/// The `Display` text of each variant is part of the contract; callers
/// that match on strings keep working, new callers should use
/// [`SerializerError::kind`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SerializerError {
    #[error("The serialization mode cannot be empty.")]
    EmptyModeIdentifier,
    #[error("Unsupported serialization mode.")]
    UnsupportedMode,
    #[error("The mode is not set.")]
    ModeNotSet,
    #[error("The mode string could not be found.")]
    ModeNameMissing,
    #[error("The data to be serialized cannot be empty.")]
    EmptySerializeData,
    #[error("The data to be unserialized cannot be empty.")]
    EmptyUnserializeData,
    #[error("Unknown serialization mode.")]
    UnknownMode,
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Unserialization error: {0}")]
    Unserialize(String),
    #[error("{}", .0.unavailable_message())]
    CodecUnavailable(CodecOp),
    #[error("{}", .0.failure_message())]
    CodecFailed(CodecOp),
    #[error("Base64 encoding failed.")]
    TransportEncodeFailed,
    #[error("Base64 decoding failed.")]
    TransportDecodeFailed,
}

impl SerializerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerializerError::EmptyModeIdentifier
            | SerializerError::UnsupportedMode
            | SerializerError::ModeNotSet
            | SerializerError::ModeNameMissing
            | SerializerError::UnknownMode => ErrorKind::Configuration,
            SerializerError::EmptySerializeData | SerializerError::EmptyUnserializeData => {
                ErrorKind::Validation
            }
            SerializerError::CodecUnavailable(_) => ErrorKind::Unavailable,
            SerializerError::Serialize(_)
            | SerializerError::Unserialize(_)
            | SerializerError::CodecFailed(_) => ErrorKind::Codec,
            SerializerError::TransportEncodeFailed | SerializerError::TransportDecodeFailed => {
                ErrorKind::Transport
            }
        }
    }
}

/// Caller-facing detail text for a JSON codec error. The facade wraps
/// this into the "Serialization error: …" / "Unserialization error: …"
/// message.
pub(crate) fn json_detail(err: &JsonError) -> &'static str {
    match err {
        JsonError::DepthExceeded => "Maximum stack depth exceeded.",
        JsonError::UnexpectedEof => "Malformed JSON.",
        JsonError::InvalidByte(_) => "JSON Syntax error.",
        JsonError::ControlCharacter(_) => "Control character error.",
        JsonError::InvalidUtf8 => "Invalid or non-UTF-8 characters.",
        JsonError::InvalidUtf16(_) => "Invalid or non-UTF-16 characters.",
        JsonError::NonFinite => "Data contains infinity or NaN and cannot be encoded.",
    }
}
