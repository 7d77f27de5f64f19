//! MessagePack encoder.

use multipack_buffers::Writer;

use crate::Value;

use super::constants::*;

/// MessagePack encoder over [`Value`].
///
/// Always picks the smallest wire representation for integers, strings,
/// arrays, and maps, so output matches the canonical encoding other
/// MessagePack implementations produce for the same data.
#[derive(Debug)]
pub struct MsgPackEncoder {
    writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a value and returns the MessagePack bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.writer.u8(NIL),
            Value::Bool(b) => self.writer.u8(if *b { TRUE } else { FALSE }),
            Value::Int(i) => self.write_integer(*i),
            Value::Float(x) => {
                self.writer.u8(F64);
                self.writer.f64(*x);
            }
            Value::Str(s) => self.write_str(s),
            Value::Array(items) => {
                self.write_array_header(items.len());
                for item in items {
                    self.write_any(item);
                }
            }
            Value::Object(pairs) => {
                self.write_map_header(pairs.len());
                for (key, val) in pairs {
                    self.write_str(key);
                    self.write_any(val);
                }
            }
        }
    }

    fn write_integer(&mut self, i: i64) {
        if i >= 0 {
            if i < 0x80 {
                self.writer.u8(i as u8);
            } else if i <= 0xff {
                self.writer.u8(U8);
                self.writer.u8(i as u8);
            } else if i <= 0xffff {
                self.writer.u8(U16);
                self.writer.u16(i as u16);
            } else if i <= 0xffff_ffff {
                self.writer.u8(U32);
                self.writer.u32(i as u32);
            } else {
                self.writer.u8(U64);
                self.writer.u64(i as u64);
            }
        } else if i >= -32 {
            self.writer.u8(i as i8 as u8);
        } else if i >= i8::MIN as i64 {
            self.writer.u8(I8);
            self.writer.i8(i as i8);
        } else if i >= i16::MIN as i64 {
            self.writer.u8(I16);
            self.writer.i16(i as i16);
        } else if i >= i32::MIN as i64 {
            self.writer.u8(I32);
            self.writer.i32(i as i32);
        } else {
            self.writer.u8(I64);
            self.writer.i64(i);
        }
    }

    fn write_str(&mut self, s: &str) {
        let len = s.len();
        if len < 32 {
            self.writer.u8(0xa0 | len as u8);
        } else if len <= 0xff {
            self.writer.u8(STR8);
            self.writer.u8(len as u8);
        } else if len <= 0xffff {
            self.writer.u8(STR16);
            self.writer.u16(len as u16);
        } else {
            self.writer.u8(STR32);
            self.writer.u32(len as u32);
        }
        self.writer.utf8(s);
    }

    fn write_array_header(&mut self, len: usize) {
        if len < 16 {
            self.writer.u8(0x90 | len as u8);
        } else if len <= 0xffff {
            self.writer.u8(ARR16);
            self.writer.u16(len as u16);
        } else {
            self.writer.u8(ARR32);
            self.writer.u32(len as u32);
        }
    }

    fn write_map_header(&mut self, len: usize) {
        if len < 16 {
            self.writer.u8(0x80 | len as u8);
        } else if len <= 0xffff {
            self.writer.u8(MAP16);
            self.writer.u16(len as u16);
        } else {
            self.writer.u8(MAP32);
            self.writer.u32(len as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MsgPackEncoder;
    use crate::Value;

    fn encode(v: &Value) -> Vec<u8> {
        MsgPackEncoder::new().encode(v)
    }

    #[test]
    fn scalars_use_minimal_forms() {
        assert_eq!(encode(&Value::Null), [0xc0]);
        assert_eq!(encode(&Value::Bool(false)), [0xc2]);
        assert_eq!(encode(&Value::Bool(true)), [0xc3]);
        assert_eq!(encode(&Value::Int(5)), [0x05]);
        assert_eq!(encode(&Value::Int(127)), [0x7f]);
        assert_eq!(encode(&Value::Int(200)), [0xcc, 200]);
        assert_eq!(encode(&Value::Int(3000)), [0xcd, 0x0b, 0xb8]);
        assert_eq!(encode(&Value::Int(-1)), [0xff]);
        assert_eq!(encode(&Value::Int(-32)), [0xe0]);
        assert_eq!(encode(&Value::Int(-33)), [0xd0, 0xdf]);
        assert_eq!(encode(&Value::Int(-200)), [0xd1, 0xff, 0x38]);
    }

    #[test]
    fn floats_are_f64() {
        assert_eq!(
            encode(&Value::Float(1.5)),
            [0xcb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn short_strings_are_fixstr() {
        assert_eq!(encode(&Value::Str("abc".into())), [0xa3, b'a', b'b', b'c']);
    }

    #[test]
    fn str8_boundary() {
        let s = "x".repeat(32);
        let bytes = encode(&Value::Str(s));
        assert_eq!(bytes[0], 0xd9);
        assert_eq!(bytes[1], 32);
    }

    #[test]
    fn containers() {
        assert_eq!(
            encode(&Value::Array(vec![Value::Int(1), Value::Int(2)])),
            [0x92, 1, 2]
        );
        assert_eq!(
            encode(&Value::Object(vec![("a".into(), Value::Int(1))])),
            [0x81, 0xa1, b'a', 1]
        );
    }

    #[test]
    fn arr16_boundary() {
        let items = vec![Value::Int(0); 16];
        let bytes = encode(&Value::Array(items));
        assert_eq!(&bytes[..3], [0xdc, 0x00, 0x10]);
    }
}
