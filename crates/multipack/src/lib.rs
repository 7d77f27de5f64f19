//! multipack: a mode-switched serialization facade.
//!
//! One [`Serializer`] instance owns a selected wire format (JSON,
//! MessagePack, or igbinary) and encodes/decodes a shared [`Value`]
//! payload type through whichever codec the mode selects. An optional
//! transport step layers URL-safe, padding-free base64 on top so the
//! binary formats can travel through text-only channels.
//!
//! ```
//! use multipack::{Serializer, Value};
//!
//! let mut s = Serializer::new();
//! s.set_mode("msgpack")?;
//!
//! let payload = Value::Object(vec![
//!     ("fruit".into(), Value::Str("orange".into())),
//!     ("money".into(), Value::Int(3000)),
//! ]);
//!
//! let wire = s.serialize(&payload, true)?; // base64url text
//! assert_eq!(s.unserialize(&wire, true)?, payload);
//! # Ok::<(), multipack::SerializerError>(())
//! ```
//!
//! The mode never guesses: bytes are always decoded by the codec the
//! current mode names, and selecting a mode whose codec is missing from
//! the runtime reports a distinct unavailability error so callers can
//! fall back to another format.

mod error;
mod mode;
mod serializer;

pub use error::{CodecOp, ErrorKind, SerializerError};
pub use mode::{Mode, ModeInfo, ModeSelector, MODES};
pub use serializer::{Serializer, JSON_DEFAULT_DEPTH};

pub use multipack_formats::{Codecs, IgbinaryCodec, JsonCodec, MsgPackCodec, Value};
