//! igbinary decoder.

use multipack_buffers::Reader;

use crate::Value;

use super::constants::*;
use super::error::IgbinaryError;

/// igbinary v2 decoder producing [`Value`].
///
/// Rebuilds the string table while reading and resolves back-references
/// against it. Pair lists whose keys are exactly the integers `0..n`
/// decode as `Array`; everything else decodes as `Object` with integer
/// keys stringified.
#[derive(Default, Debug)]
pub struct IgbinaryDecoder;

impl IgbinaryDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one igbinary document; trailing bytes are an error.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value, IgbinaryError> {
        let mut reader = Reader::new(bytes);
        let version = reader.u32().map_err(|_| IgbinaryError::BadHeader)?;
        if version != VERSION {
            return Err(IgbinaryError::BadHeader);
        }
        let mut strings: Vec<String> = Vec::new();
        let value = self.read_any(&mut reader, &mut strings, 0)?;
        if !reader.is_done() {
            return Err(IgbinaryError::InvalidByte(reader.pos()));
        }
        Ok(value)
    }

    fn read_any(
        &self,
        r: &mut Reader<'_>,
        strings: &mut Vec<String>,
        depth: usize,
    ) -> Result<Value, IgbinaryError> {
        if depth > MAX_DEPTH {
            return Err(IgbinaryError::DepthExceeded);
        }
        let t = r.u8()?;
        match t {
            T_NULL => Ok(Value::Null),
            T_BOOL_FALSE => Ok(Value::Bool(false)),
            T_BOOL_TRUE => Ok(Value::Bool(true)),
            T_LONG8P => Ok(Value::Int(r.u8()? as i64)),
            T_LONG8N => Ok(Value::Int(-(r.u8()? as i64))),
            T_LONG16P => Ok(Value::Int(r.u16()? as i64)),
            T_LONG16N => Ok(Value::Int(-(r.u16()? as i64))),
            T_LONG32P => Ok(Value::Int(r.u32()? as i64)),
            T_LONG32N => Ok(Value::Int(-(r.u32()? as i64))),
            T_LONG64P => {
                let magnitude = r.u64()?;
                i64::try_from(magnitude)
                    .map(Value::Int)
                    .map_err(|_| IgbinaryError::IntegerOverflow)
            }
            T_LONG64N => {
                let magnitude = r.u64()?;
                if magnitude > (1u64 << 63) {
                    return Err(IgbinaryError::IntegerOverflow);
                }
                Ok(Value::Int((magnitude as i128).wrapping_neg() as i64))
            }
            T_DOUBLE => Ok(Value::Float(r.f64()?)),
            T_STRING_EMPTY => Ok(Value::Str(String::new())),
            T_STRING8 => {
                let len = r.u8()? as usize;
                self.read_string(r, strings, len)
            }
            T_STRING16 => {
                let len = r.u16()? as usize;
                self.read_string(r, strings, len)
            }
            T_STRING32 => {
                let len = r.u32()? as usize;
                self.read_string(r, strings, len)
            }
            T_STRING_ID8 => {
                let id = r.u8()? as usize;
                self.read_string_ref(strings, id)
            }
            T_STRING_ID16 => {
                let id = r.u16()? as usize;
                self.read_string_ref(strings, id)
            }
            T_STRING_ID32 => {
                let id = r.u32()? as usize;
                self.read_string_ref(strings, id)
            }
            T_ARRAY8 => {
                let count = r.u8()? as usize;
                self.read_pairs(r, strings, count, depth)
            }
            T_ARRAY16 => {
                let count = r.u16()? as usize;
                self.read_pairs(r, strings, count, depth)
            }
            T_ARRAY32 => {
                let count = r.u32()? as usize;
                self.read_pairs(r, strings, count, depth)
            }
            other => Err(IgbinaryError::UnknownType(other)),
        }
    }

    fn read_string(
        &self,
        r: &mut Reader<'_>,
        strings: &mut Vec<String>,
        len: usize,
    ) -> Result<Value, IgbinaryError> {
        let s = r.utf8(len)?.to_owned();
        strings.push(s.clone());
        Ok(Value::Str(s))
    }

    fn read_string_ref(
        &self,
        strings: &[String],
        id: usize,
    ) -> Result<Value, IgbinaryError> {
        strings
            .get(id)
            .map(|s| Value::Str(s.clone()))
            .ok_or(IgbinaryError::InvalidStringRef(id))
    }

    fn read_pairs(
        &self,
        r: &mut Reader<'_>,
        strings: &mut Vec<String>,
        count: usize,
        depth: usize,
    ) -> Result<Value, IgbinaryError> {
        // every pair takes at least two bytes
        if count * 2 > r.remaining() {
            return Err(IgbinaryError::UnexpectedEof);
        }
        let mut pairs: Vec<(Value, Value)> = Vec::with_capacity(count);
        for _ in 0..count {
            let key = self.read_any(r, strings, depth + 1)?;
            if !matches!(key, Value::Int(_) | Value::Str(_)) {
                return Err(IgbinaryError::InvalidKey);
            }
            let val = self.read_any(r, strings, depth + 1)?;
            pairs.push((key, val));
        }
        let sequential = pairs
            .iter()
            .enumerate()
            .all(|(i, (k, _))| matches!(k, Value::Int(n) if *n == i as i64));
        if sequential {
            return Ok(Value::Array(pairs.into_iter().map(|(_, v)| v).collect()));
        }
        Ok(Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        Value::Str(s) => s,
                        Value::Int(i) => i.to_string(),
                        _ => unreachable!("keys are pre-checked"),
                    };
                    (key, v)
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::IgbinaryDecoder;
    use crate::igbinary::{IgbinaryEncoder, IgbinaryError};
    use crate::Value;

    fn roundtrip(v: Value) {
        let bytes = IgbinaryEncoder::new().encode(&v);
        assert_eq!(IgbinaryDecoder::new().decode(&bytes).unwrap(), v);
    }

    #[test]
    fn roundtrips() {
        roundtrip(Value::Null);
        roundtrip(Value::Bool(false));
        roundtrip(Value::Int(0));
        roundtrip(Value::Int(255));
        roundtrip(Value::Int(-256));
        roundtrip(Value::Int(i64::MAX));
        roundtrip(Value::Int(i64::MIN));
        roundtrip(Value::Float(2.75));
        roundtrip(Value::Str(String::new()));
        roundtrip(Value::Str("Lambë".into()));
        roundtrip(Value::Array(vec![
            Value::Str("dup".into()),
            Value::Str("dup".into()),
        ]));
        roundtrip(Value::Object(vec![
            ("name".into(), Value::Str("name".into())),
            ("n".into(), Value::Int(-1)),
            ("nested".into(), Value::Array(vec![Value::Null])),
        ]));
    }

    #[test]
    fn non_sequential_integer_keys_become_object() {
        // {1: "a"}: keys don't start at 0, so this is a map
        let bytes = [0, 0, 0, 2, 0x14, 1, 0x06, 1, 0x11, 1, b'a'];
        assert_eq!(
            IgbinaryDecoder::new().decode(&bytes).unwrap(),
            Value::Object(vec![("1".into(), Value::Str("a".into()))])
        );
    }

    #[test]
    fn empty_pair_list_is_an_array() {
        let bytes = [0, 0, 0, 2, 0x14, 0];
        assert_eq!(
            IgbinaryDecoder::new().decode(&bytes).unwrap(),
            Value::Array(vec![])
        );
    }

    #[test]
    fn bad_header_is_rejected() {
        assert_eq!(
            IgbinaryDecoder::new().decode(&[0, 0, 0, 9, 0x00]),
            Err(IgbinaryError::BadHeader)
        );
        assert_eq!(
            IgbinaryDecoder::new().decode(&[0, 0]),
            Err(IgbinaryError::BadHeader)
        );
    }

    #[test]
    fn dangling_string_reference() {
        let bytes = [0, 0, 0, 2, 0x0d, 3];
        assert_eq!(
            IgbinaryDecoder::new().decode(&bytes),
            Err(IgbinaryError::InvalidStringRef(3))
        );
    }

    #[test]
    fn unknown_type_byte() {
        assert_eq!(
            IgbinaryDecoder::new().decode(&[0, 0, 0, 2, 0x17]),
            Err(IgbinaryError::UnknownType(0x17))
        );
    }

    #[test]
    fn trailing_bytes_error() {
        assert_eq!(
            IgbinaryDecoder::new().decode(&[0, 0, 0, 2, 0x00, 0x00]),
            Err(IgbinaryError::InvalidByte(5))
        );
    }
}
