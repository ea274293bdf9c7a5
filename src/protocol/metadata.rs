//! # Tagged Value Codec
//!
//! Entity metadata: an open-ended mapping from numeric key to one of nine
//! known value shapes. The in-memory side is a closed sum type, so encode
//! dispatch is exhaustively checked by the compiler; there is no "unknown
//! variant" path to fall through. On decode, an unrecognized wire tag means
//! the stream is unsynchronized and the whole packet decode aborts.

use crate::core::types::{BlockPos, Vec3};
use crate::core::{Reader, Writer};
use crate::error::{Result, WireError};
use crate::protocol::tree::{Compound, TreeEncoding};
use std::collections::BTreeMap;

const TAG_U8: u32 = 0;
const TAG_I16: u32 = 1;
const TAG_I32: u32 = 2;
const TAG_F32: u32 = 3;
const TAG_STRING: u32 = 4;
const TAG_COMPOUND: u32 = 5;
const TAG_BLOCK_POS: u32 = 6;
const TAG_I64: u32 = 7;
const TAG_VEC3: u32 = 8;

/// One entity metadata value. Exactly one variant is ever active, and the
/// wire tag and the in-memory variant agree in both directions.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    U8(u8),
    I16(i16),
    /// Zig-zag varint payload.
    I32(i32),
    F32(f32),
    String(String),
    /// Nested record, serialized by the external tree encoder in the
    /// network little-endian variant.
    Compound(Compound),
    BlockPos(BlockPos),
    /// Zig-zag varint payload.
    I64(i64),
    Vec3(Vec3),
}

impl MetadataValue {
    fn tag(&self) -> u32 {
        match self {
            MetadataValue::U8(_) => TAG_U8,
            MetadataValue::I16(_) => TAG_I16,
            MetadataValue::I32(_) => TAG_I32,
            MetadataValue::F32(_) => TAG_F32,
            MetadataValue::String(_) => TAG_STRING,
            MetadataValue::Compound(_) => TAG_COMPOUND,
            MetadataValue::BlockPos(_) => TAG_BLOCK_POS,
            MetadataValue::I64(_) => TAG_I64,
            MetadataValue::Vec3(_) => TAG_VEC3,
        }
    }

    fn encode_payload(&self, w: &mut Writer<'_>) -> Result<()> {
        match self {
            MetadataValue::U8(x) => w.u8(*x),
            MetadataValue::I16(x) => w.i16(*x),
            MetadataValue::I32(x) => w.var_i32(*x),
            MetadataValue::F32(x) => w.f32(*x),
            MetadataValue::String(x) => w.string(x),
            MetadataValue::Compound(x) => w.compound(x, TreeEncoding::NetworkLittleEndian),
            MetadataValue::BlockPos(x) => w.block_pos(*x),
            MetadataValue::I64(x) => w.var_i64(*x),
            MetadataValue::Vec3(x) => w.vec3(*x),
        }
    }

    fn decode_payload(tag: u32, r: &mut Reader<'_>) -> Result<Self> {
        Ok(match tag {
            TAG_U8 => MetadataValue::U8(r.u8()?),
            TAG_I16 => MetadataValue::I16(r.i16()?),
            TAG_I32 => MetadataValue::I32(r.var_i32()?),
            TAG_F32 => MetadataValue::F32(r.f32()?),
            TAG_STRING => MetadataValue::String(r.string()?),
            TAG_COMPOUND => MetadataValue::Compound(r.compound(TreeEncoding::NetworkLittleEndian)?),
            TAG_BLOCK_POS => MetadataValue::BlockPos(r.block_pos()?),
            TAG_I64 => MetadataValue::I64(r.var_i64()?),
            TAG_VEC3 => MetadataValue::Vec3(r.vec3()?),
            tag => {
                return Err(WireError::UnknownTag {
                    tag,
                    enum_name: "entity metadata",
                })
            }
        })
    }
}

/// Per-entity attribute map: numeric key to heterogeneously-typed value.
/// A `BTreeMap` keeps the encoding order deterministic within a run.
pub type EntityMetadata = BTreeMap<u32, MetadataValue>;

/// Writes an entity metadata map: varuint32 entry count, then per entry a
/// varuint32 key, varuint32 type tag and the type-specific payload.
pub fn write_entity_metadata(w: &mut Writer<'_>, x: &EntityMetadata) -> Result<()> {
    let count = u32::try_from(x.len())
        .map_err(|_| WireError::invalid("entity metadata", "entry count exceeds u32"))?;
    w.var_u32(count)?;
    for (key, value) in x {
        w.var_u32(*key)?;
        w.var_u32(value.tag())?;
        value.encode_payload(w)?;
    }
    Ok(())
}

/// Reads an entity metadata map written by [`write_entity_metadata`].
pub fn read_entity_metadata(r: &mut Reader<'_>) -> Result<EntityMetadata> {
    let count = r.var_u32()?;
    let mut map = EntityMetadata::new();
    for _ in 0..count {
        let key = r.var_u32()?;
        let tag = r.var_u32()?;
        map.insert(key, MetadataValue::decode_payload(tag, r)?);
    }
    Ok(map)
}
