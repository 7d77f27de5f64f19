//! igbinary encoder.

use std::collections::HashMap;

use multipack_buffers::Writer;

use crate::Value;

use super::constants::*;

/// igbinary v2 encoder over [`Value`].
///
/// Every document starts with the version header. Non-empty strings are
/// interned: the first occurrence is written in full and registered in
/// the string table, repeats are written as table back-references. Both
/// array keys and values share the same table. `Array` values are
/// written as pair lists with ascending integer keys, matching how the
/// format represents sequences.
#[derive(Debug)]
pub struct IgbinaryEncoder {
    writer: Writer,
    strings: HashMap<String, usize>,
}

impl Default for IgbinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl IgbinaryEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            strings: HashMap::new(),
        }
    }

    /// Encodes a value and returns the igbinary bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.strings.clear();
        self.writer.u32(VERSION);
        self.write_any(value);
        self.writer.flush()
    }

    fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.writer.u8(T_NULL),
            Value::Bool(b) => self.writer.u8(if *b { T_BOOL_TRUE } else { T_BOOL_FALSE }),
            Value::Int(i) => self.write_long(*i),
            Value::Float(x) => {
                self.writer.u8(T_DOUBLE);
                self.writer.f64(*x);
            }
            Value::Str(s) => self.write_string(s),
            Value::Array(items) => {
                self.write_array_header(items.len());
                for (i, item) in items.iter().enumerate() {
                    self.write_long(i as i64);
                    self.write_any(item);
                }
            }
            Value::Object(pairs) => {
                self.write_array_header(pairs.len());
                for (key, val) in pairs {
                    self.write_string(key);
                    self.write_any(val);
                }
            }
        }
    }

    fn write_long(&mut self, i: i64) {
        let negative = i < 0;
        let magnitude = i.unsigned_abs();
        if magnitude <= 0xff {
            self.writer
                .u8(if negative { T_LONG8N } else { T_LONG8P });
            self.writer.u8(magnitude as u8);
        } else if magnitude <= 0xffff {
            self.writer
                .u8(if negative { T_LONG16N } else { T_LONG16P });
            self.writer.u16(magnitude as u16);
        } else if magnitude <= 0xffff_ffff {
            self.writer
                .u8(if negative { T_LONG32N } else { T_LONG32P });
            self.writer.u32(magnitude as u32);
        } else {
            self.writer
                .u8(if negative { T_LONG64N } else { T_LONG64P });
            self.writer.u64(magnitude);
        }
    }

    fn write_string(&mut self, s: &str) {
        if s.is_empty() {
            self.writer.u8(T_STRING_EMPTY);
            return;
        }
        if let Some(&id) = self.strings.get(s) {
            if id <= 0xff {
                self.writer.u8(T_STRING_ID8);
                self.writer.u8(id as u8);
            } else if id <= 0xffff {
                self.writer.u8(T_STRING_ID16);
                self.writer.u16(id as u16);
            } else {
                self.writer.u8(T_STRING_ID32);
                self.writer.u32(id as u32);
            }
            return;
        }
        self.strings.insert(s.to_owned(), self.strings.len());
        let len = s.len();
        if len <= 0xff {
            self.writer.u8(T_STRING8);
            self.writer.u8(len as u8);
        } else if len <= 0xffff {
            self.writer.u8(T_STRING16);
            self.writer.u16(len as u16);
        } else {
            self.writer.u8(T_STRING32);
            self.writer.u32(len as u32);
        }
        self.writer.utf8(s);
    }

    fn write_array_header(&mut self, len: usize) {
        if len <= 0xff {
            self.writer.u8(T_ARRAY8);
            self.writer.u8(len as u8);
        } else if len <= 0xffff {
            self.writer.u8(T_ARRAY16);
            self.writer.u16(len as u16);
        } else {
            self.writer.u8(T_ARRAY32);
            self.writer.u32(len as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IgbinaryEncoder;
    use crate::Value;

    fn encode(v: &Value) -> Vec<u8> {
        IgbinaryEncoder::new().encode(v)
    }

    #[test]
    fn header_and_scalars() {
        assert_eq!(encode(&Value::Null), [0, 0, 0, 2, 0x00]);
        assert_eq!(encode(&Value::Bool(true)), [0, 0, 0, 2, 0x05]);
        assert_eq!(encode(&Value::Int(5)), [0, 0, 0, 2, 0x06, 5]);
        assert_eq!(encode(&Value::Int(-5)), [0, 0, 0, 2, 0x07, 5]);
        assert_eq!(encode(&Value::Int(3000)), [0, 0, 0, 2, 0x08, 0x0b, 0xb8]);
        assert_eq!(
            encode(&Value::Int(-70000)),
            [0, 0, 0, 2, 0x0b, 0x00, 0x01, 0x11, 0x70]
        );
        assert_eq!(encode(&Value::Str(String::new())), [0, 0, 0, 2, 0x10]);
    }

    #[test]
    fn long64_magnitudes() {
        let bytes = encode(&Value::Int(i64::MIN));
        assert_eq!(bytes[4], 0x21);
        assert_eq!(&bytes[5..], (1u64 << 63).to_be_bytes());
    }

    #[test]
    fn arrays_get_integer_keys() {
        assert_eq!(
            encode(&Value::Array(vec![Value::Int(7), Value::Int(8)])),
            [0, 0, 0, 2, 0x14, 2, 0x06, 0, 0x06, 7, 0x06, 1, 0x06, 8]
        );
    }

    #[test]
    fn repeated_strings_become_references() {
        let v = Value::Array(vec![
            Value::Str("dup".into()),
            Value::Str("dup".into()),
            Value::Str("other".into()),
            Value::Str("dup".into()),
        ]);
        let bytes = encode(&v);
        assert_eq!(
            bytes,
            [
                0, 0, 0, 2, 0x14, 4, //
                0x06, 0, 0x11, 3, b'd', b'u', b'p', //
                0x06, 1, 0x0d, 0, //
                0x06, 2, 0x11, 5, b'o', b't', b'h', b'e', b'r', //
                0x06, 3, 0x0d, 0,
            ]
        );
    }

    #[test]
    fn object_keys_share_the_string_table() {
        let v = Value::Object(vec![("k".into(), Value::Str("k".into()))]);
        assert_eq!(
            encode(&v),
            [0, 0, 0, 2, 0x14, 1, 0x11, 1, b'k', 0x0d, 0]
        );
    }
}
