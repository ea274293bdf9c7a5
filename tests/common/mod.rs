//! Shared test support: a stand-in tree encoder.
//!
//! The real structured-tree encoder is an external collaborator; the codec
//! only needs something implementing [`TreeCodec`] that can round-trip a
//! record and report how many bytes it consumed. This stub uses a trivial
//! tag-byte format with u32 little-endian lengths.

#![allow(dead_code)]

use bedrock_wire::error::{Result, WireError};
use bedrock_wire::protocol::tree::{Compound, TreeCodec, TreeEncoding, TreeValue};

pub struct FlatTreeCodec;

impl TreeCodec for FlatTreeCodec {
    fn encode(&self, record: &Compound, _encoding: TreeEncoding, out: &mut Vec<u8>) -> Result<()> {
        put_compound(record, out);
        Ok(())
    }

    fn decode(&self, bytes: &[u8], _encoding: TreeEncoding) -> Result<(Compound, usize)> {
        let mut cursor = Cursor { bytes, pos: 0 };
        let record = take_compound(&mut cursor)?;
        Ok((record, cursor.pos))
    }
}

const TAG_BYTE: u8 = 1;
const TAG_SHORT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_LONG: u8 = 4;
const TAG_FLOAT: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_STRING: u8 = 7;
const TAG_BYTE_ARRAY: u8 = 8;
const TAG_LIST: u8 = 9;
const TAG_COMPOUND: u8 = 10;

fn put_str(s: &str, out: &mut Vec<u8>) {
    out.extend((s.len() as u32).to_le_bytes());
    out.extend(s.as_bytes());
}

fn put_value(v: &TreeValue, out: &mut Vec<u8>) {
    match v {
        TreeValue::Byte(x) => {
            out.push(TAG_BYTE);
            out.push(*x as u8);
        }
        TreeValue::Short(x) => {
            out.push(TAG_SHORT);
            out.extend(x.to_le_bytes());
        }
        TreeValue::Int(x) => {
            out.push(TAG_INT);
            out.extend(x.to_le_bytes());
        }
        TreeValue::Long(x) => {
            out.push(TAG_LONG);
            out.extend(x.to_le_bytes());
        }
        TreeValue::Float(x) => {
            out.push(TAG_FLOAT);
            out.extend(x.to_le_bytes());
        }
        TreeValue::Double(x) => {
            out.push(TAG_DOUBLE);
            out.extend(x.to_le_bytes());
        }
        TreeValue::String(s) => {
            out.push(TAG_STRING);
            put_str(s, out);
        }
        TreeValue::ByteArray(b) => {
            out.push(TAG_BYTE_ARRAY);
            out.extend((b.len() as u32).to_le_bytes());
            out.extend(b);
        }
        TreeValue::List(items) => {
            out.push(TAG_LIST);
            out.extend((items.len() as u32).to_le_bytes());
            for item in items {
                put_value(item, out);
            }
        }
        TreeValue::Compound(c) => {
            out.push(TAG_COMPOUND);
            put_compound(c, out);
        }
    }
}

fn put_compound(c: &Compound, out: &mut Vec<u8>) {
    out.extend((c.0.len() as u32).to_le_bytes());
    for (key, value) in &c.0 {
        put_str(key, out);
        put_value(value, out);
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.bytes.len() - self.pos;
        if remaining < n {
            return Err(WireError::StreamExhausted {
                needed: n - remaining,
                remaining,
            });
        }
        let chunk = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(chunk)
    }

    fn take_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn take_str(&mut self) -> Result<String> {
        let len = self.take_u32()? as usize;
        let b = self.take(len)?;
        String::from_utf8(b.to_vec()).map_err(|e| WireError::invalid("tree string", e.to_string()))
    }
}

fn take_value(c: &mut Cursor<'_>) -> Result<TreeValue> {
    let tag = c.take(1)?[0];
    Ok(match tag {
        TAG_BYTE => TreeValue::Byte(c.take(1)?[0] as i8),
        TAG_SHORT => {
            let b = c.take(2)?;
            TreeValue::Short(i16::from_le_bytes([b[0], b[1]]))
        }
        TAG_INT => {
            let b = c.take(4)?;
            TreeValue::Int(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        }
        TAG_LONG => {
            let b = c.take(8)?;
            TreeValue::Long(i64::from_le_bytes(b.try_into().unwrap()))
        }
        TAG_FLOAT => {
            let b = c.take(4)?;
            TreeValue::Float(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        }
        TAG_DOUBLE => {
            let b = c.take(8)?;
            TreeValue::Double(f64::from_le_bytes(b.try_into().unwrap()))
        }
        TAG_STRING => TreeValue::String(c.take_str()?),
        TAG_BYTE_ARRAY => {
            let len = c.take_u32()? as usize;
            TreeValue::ByteArray(c.take(len)?.to_vec())
        }
        TAG_LIST => {
            let len = c.take_u32()?;
            let mut items = Vec::new();
            for _ in 0..len {
                items.push(take_value(c)?);
            }
            TreeValue::List(items)
        }
        TAG_COMPOUND => TreeValue::Compound(take_compound(c)?),
        tag => {
            return Err(WireError::UnknownTag {
                tag: u32::from(tag),
                enum_name: "flat tree value",
            })
        }
    })
}

fn take_compound(c: &mut Cursor<'_>) -> Result<Compound> {
    let len = c.take_u32()?;
    let mut record = Compound::new();
    for _ in 0..len {
        let key = c.take_str()?;
        record.insert(key, take_value(c)?);
    }
    Ok(record)
}

/// A small record with a few mixed entries, for packet-level tests.
pub fn sample_record() -> Compound {
    let mut record = Compound::new();
    record.insert("id", TreeValue::String("Chest".to_owned()));
    record.insert("x", TreeValue::Int(-31));
    record.insert("y", TreeValue::Int(64));
    record.insert("z", TreeValue::Int(209));
    record.insert(
        "Items",
        TreeValue::List(vec![TreeValue::Compound(
            [
                ("Name".to_owned(), TreeValue::String("minecraft:dirt".to_owned())),
                ("Count".to_owned(), TreeValue::Byte(12)),
            ]
            .into_iter()
            .collect(),
        )]),
    );
    record
}
