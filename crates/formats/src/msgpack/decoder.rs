//! MessagePack decoder.

use multipack_buffers::Reader;

use crate::Value;

use super::constants::*;
use super::error::MsgPackError;

/// MessagePack decoder producing [`Value`].
///
/// Accepts the full integer/float family (float32 widens to `Float`)
/// and stringifies integer map keys. Payloads the value model cannot
/// hold (bin, ext, unsigned values beyond `i64`) are rejected.
#[derive(Default, Debug)]
pub struct MsgPackDecoder;

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes one MessagePack value; trailing bytes are an error.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value, MsgPackError> {
        let mut reader = Reader::new(bytes);
        let value = self.read_any(&mut reader, 0)?;
        if !reader.is_done() {
            return Err(MsgPackError::InvalidByte(reader.pos()));
        }
        Ok(value)
    }

    fn read_any(&self, r: &mut Reader<'_>, depth: usize) -> Result<Value, MsgPackError> {
        if depth > MAX_DEPTH {
            return Err(MsgPackError::DepthExceeded);
        }
        let byte = r.u8()?;
        match byte {
            0x00..=0x7f => Ok(Value::Int(byte as i64)),
            0x80..=0x8f => self.read_map(r, (byte & 0x0f) as usize, depth),
            0x90..=0x9f => self.read_array(r, (byte & 0x0f) as usize, depth),
            0xa0..=0xbf => self.read_str(r, (byte & 0x1f) as usize),
            NIL => Ok(Value::Null),
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            F32 => Ok(Value::Float(r.f32()? as f64)),
            F64 => Ok(Value::Float(r.f64()?)),
            U8 => Ok(Value::Int(r.u8()? as i64)),
            U16 => Ok(Value::Int(r.u16()? as i64)),
            U32 => Ok(Value::Int(r.u32()? as i64)),
            U64 => {
                let raw = r.u64()?;
                i64::try_from(raw)
                    .map(Value::Int)
                    .map_err(|_| MsgPackError::IntegerOverflow)
            }
            I8 => Ok(Value::Int(r.i8()? as i64)),
            I16 => Ok(Value::Int(r.i16()? as i64)),
            I32 => Ok(Value::Int(r.i32()? as i64)),
            I64 => Ok(Value::Int(r.i64()?)),
            STR8 => {
                let len = r.u8()? as usize;
                self.read_str(r, len)
            }
            STR16 => {
                let len = r.u16()? as usize;
                self.read_str(r, len)
            }
            STR32 => {
                let len = r.u32()? as usize;
                self.read_str(r, len)
            }
            ARR16 => {
                let len = r.u16()? as usize;
                self.read_array(r, len, depth)
            }
            ARR32 => {
                let len = r.u32()? as usize;
                self.read_array(r, len, depth)
            }
            MAP16 => {
                let len = r.u16()? as usize;
                self.read_map(r, len, depth)
            }
            MAP32 => {
                let len = r.u32()? as usize;
                self.read_map(r, len, depth)
            }
            0xe0..=0xff => Ok(Value::Int(byte as i8 as i64)),
            other => Err(MsgPackError::UnsupportedType(other)),
        }
    }

    fn read_str(&self, r: &mut Reader<'_>, len: usize) -> Result<Value, MsgPackError> {
        Ok(Value::Str(r.utf8(len)?.to_owned()))
    }

    fn read_array(
        &self,
        r: &mut Reader<'_>,
        len: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        // each element takes at least one byte
        if len > r.remaining() {
            return Err(MsgPackError::UnexpectedEof);
        }
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(self.read_any(r, depth + 1)?);
        }
        Ok(Value::Array(items))
    }

    fn read_map(
        &self,
        r: &mut Reader<'_>,
        len: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        if len * 2 > r.remaining() {
            return Err(MsgPackError::UnexpectedEof);
        }
        let mut pairs = Vec::with_capacity(len);
        for _ in 0..len {
            let key = match self.read_any(r, depth + 1)? {
                Value::Str(s) => s,
                Value::Int(i) => i.to_string(),
                _ => return Err(MsgPackError::InvalidKey),
            };
            let val = self.read_any(r, depth + 1)?;
            pairs.push((key, val));
        }
        Ok(Value::Object(pairs))
    }
}
