//! JSON encoder.

use multipack_buffers::Writer;

use crate::Value;

use super::error::JsonError;
use super::util::numeric_literal;

/// Writer-based JSON encoder.
///
/// Produces compact JSON (no whitespace). Non-ASCII characters are
/// written as raw UTF-8 and `/` is never escaped, so multilingual
/// payloads stay readable on the wire. With
/// [`coerce_numeric_strings`](Self::coerce_numeric_strings) enabled,
/// string *values* that classify as numeric literals are emitted as
/// bare numbers; object keys are never coerced.
#[derive(Debug)]
pub struct JsonEncoder {
    writer: Writer,
    pub coerce_numeric_strings: bool,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            coerce_numeric_strings: false,
        }
    }

    /// Encodes a value and returns the JSON bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, JsonError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.reset();
                Err(err)
            }
        }
    }

    /// Encodes a value and returns the JSON text.
    pub fn encode_string(&mut self, value: &Value) -> Result<String, JsonError> {
        let bytes = self.encode(value)?;
        String::from_utf8(bytes).map_err(|_| JsonError::InvalidUtf8)
    }

    fn write_any(&mut self, value: &Value) -> Result<(), JsonError> {
        match value {
            Value::Null => self.writer.utf8("null"),
            Value::Bool(true) => self.writer.utf8("true"),
            Value::Bool(false) => self.writer.utf8("false"),
            Value::Int(i) => self.write_int(*i),
            Value::Float(x) => self.write_float(*x)?,
            Value::Str(s) => {
                if self.coerce_numeric_strings {
                    match numeric_literal(s) {
                        Some(Value::Int(i)) => self.write_int(i),
                        Some(Value::Float(x)) => self.write_float(x)?,
                        _ => self.write_str(s),
                    }
                } else {
                    self.write_str(s);
                }
            }
            Value::Array(items) => {
                self.writer.u8(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_any(item)?;
                }
                self.writer.u8(b']');
            }
            Value::Object(pairs) => {
                self.writer.u8(b'{');
                for (i, (key, val)) in pairs.iter().enumerate() {
                    if i > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_str(key);
                    self.writer.u8(b':');
                    self.write_any(val)?;
                }
                self.writer.u8(b'}');
            }
        }
        Ok(())
    }

    fn write_int(&mut self, i: i64) {
        self.writer.utf8(&i.to_string());
    }

    fn write_float(&mut self, x: f64) -> Result<(), JsonError> {
        if !x.is_finite() {
            return Err(JsonError::NonFinite);
        }
        let mut s = format!("{x}");
        // keep whole floats float-shaped so they re-read as floats
        if !s.contains('.') && !s.contains('e') && !s.contains('E') {
            s.push_str(".0");
        }
        self.writer.utf8(&s);
        Ok(())
    }

    fn write_str(&mut self, s: &str) {
        self.writer.u8(b'"');
        let mut utf8_buf = [0u8; 4];
        for ch in s.chars() {
            match ch {
                '"' => self.writer.utf8("\\\""),
                '\\' => self.writer.utf8("\\\\"),
                '\u{8}' => self.writer.utf8("\\b"),
                '\u{c}' => self.writer.utf8("\\f"),
                '\n' => self.writer.utf8("\\n"),
                '\r' => self.writer.utf8("\\r"),
                '\t' => self.writer.utf8("\\t"),
                c if (c as u32) < 0x20 => {
                    self.writer.utf8(&format!("\\u{:04x}", c as u32));
                }
                c => self.writer.utf8(c.encode_utf8(&mut utf8_buf)),
            }
        }
        self.writer.u8(b'"');
    }
}
