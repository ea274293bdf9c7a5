//! Reading half of the primitive codec.
//!
//! A [`Reader`] is a cursor over a borrowed byte buffer. Every read advances
//! the cursor and fails with [`WireError::StreamExhausted`] when fewer bytes
//! remain than the field declares; a truncated stream never yields a
//! zero-filled or partial value.

use crate::core::types::{BlockPos, Rgba, Vec2, Vec3};
use crate::error::{Result, WireError};
use crate::protocol::tree::{Compound, TreeCodec, TreeEncoding};
use crate::PROTOCOL_VERSION;
use uuid::Uuid;

/// Reads wire-format fields from a byte buffer. One `Reader` wraps exactly
/// one in-flight buffer; a caller cancels a decode by dropping it.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    tree: Option<&'a dyn TreeCodec>,
    protocol: u32,
}

impl<'a> Reader<'a> {
    /// Creates a reader with no tree codec installed. Decoding a compound
    /// record through it fails with [`WireError::UnsupportedVariant`].
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            tree: None,
            protocol: PROTOCOL_VERSION,
        }
    }

    /// Creates a reader that delegates nested records to `tree`.
    pub fn with_tree_codec(buf: &'a [u8], tree: &'a dyn TreeCodec) -> Self {
        Self {
            tree: Some(tree),
            ..Self::new(buf)
        }
    }

    /// Overrides the protocol version used for version-gated wire quirks.
    pub fn with_protocol(mut self, protocol: u32) -> Self {
        self.protocol = protocol;
        self
    }

    /// The protocol version this reader decodes for.
    pub fn protocol(&self) -> u32 {
        self.protocol
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Takes `n` bytes off the front of the buffer.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(WireError::StreamExhausted {
                needed: n - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let chunk = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(chunk)
    }

    /// Reads a single byte.
    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads a bool; any non-zero byte is treated as true.
    pub fn bool(&mut self) -> Result<bool> {
        Ok(self.u8()? != 0)
    }

    /// Reads a little-endian int16.
    pub fn i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a little-endian float32.
    pub fn f32(&mut self) -> Result<f32> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a rotational angle in degrees stored as a single byte.
    pub fn byte_angle(&mut self) -> Result<f32> {
        Ok(f32::from(self.u8()?) * (360.0 / 256.0))
    }

    /// Reads a varuint32-length-prefixed string. The bytes must be valid
    /// UTF-8 to be representable as a `String`.
    pub fn string(&mut self) -> Result<String> {
        let b = self.byte_slice()?;
        String::from_utf8(b).map_err(|e| WireError::invalid("string", e.to_string()))
    }

    /// Reads a varuint32-length-prefixed byte blob.
    pub fn byte_slice(&mut self) -> Result<Vec<u8>> {
        let len = self.var_u32()? as usize;
        Ok(self.take(len)?.to_vec())
    }

    /// Reads three float32s as an x, y, z vector.
    pub fn vec3(&mut self) -> Result<Vec3> {
        Ok(Vec3::new(self.f32()?, self.f32()?, self.f32()?))
    }

    /// Reads two float32s as an x, y vector.
    pub fn vec2(&mut self) -> Result<Vec2> {
        Ok(Vec2::new(self.f32()?, self.f32()?))
    }

    /// Reads a block position stored as three signed varints.
    pub fn block_pos(&mut self) -> Result<BlockPos> {
        Ok(BlockPos::new(self.var_i32()?, self.var_i32()?, self.var_i32()?))
    }

    /// Reads a block position with an unsigned y coordinate.
    pub fn ublock_pos(&mut self) -> Result<BlockPos> {
        let x = self.var_i32()?;
        let y = self.var_u32()?;
        let y = i32::try_from(y)
            .map_err(|_| WireError::invalid("block position", "unsigned y coordinate overflows i32"))?;
        let z = self.var_i32()?;
        Ok(BlockPos::new(x, y, z))
    }

    /// Reads an RGBA colour packed into one varuint32.
    pub fn rgba(&mut self) -> Result<Rgba> {
        Ok(Rgba::unpack(self.var_u32()?))
    }

    /// Reads a UUID from the protocol's wire order by applying the exact
    /// inverse of the write transform. The transform is an involution, so
    /// the inverse is again reversing each 8-byte half in place.
    pub fn uuid(&mut self) -> Result<Uuid> {
        let chunk = self.take(16)?;
        let mut b = [0u8; 16];
        b.copy_from_slice(chunk);
        b[..8].reverse();
        b[8..].reverse();
        Ok(Uuid::from_bytes(b))
    }

    /// Reads a zig-zag signed varint32.
    pub fn var_i32(&mut self) -> Result<i32> {
        let u = self.var_u32()?;
        Ok((u >> 1) as i32 ^ -((u & 1) as i32))
    }

    /// Reads a zig-zag signed varint64.
    pub fn var_i64(&mut self) -> Result<i64> {
        let u = self.var_u64()?;
        Ok((u >> 1) as i64 ^ -((u & 1) as i64))
    }

    /// Reads an unsigned varint32 of at most 5 bytes.
    pub fn var_u32(&mut self) -> Result<u32> {
        let mut v: u32 = 0;
        for i in 0..5 {
            let b = self.u8()?;
            v |= u32::from(b & 0x7f) << (i * 7);
            if b & 0x80 == 0 {
                return Ok(v);
            }
        }
        Err(WireError::invalid("varuint32", "continuation bit set past 5 bytes"))
    }

    /// Reads an unsigned varint64 of at most 10 bytes.
    pub fn var_u64(&mut self) -> Result<u64> {
        let mut v: u64 = 0;
        for i in 0..10 {
            let b = self.u8()?;
            v |= u64::from(b & 0x7f) << (i * 7);
            if b & 0x80 == 0 {
                return Ok(v);
            }
        }
        Err(WireError::invalid("varuint64", "continuation bit set past 10 bytes"))
    }

    /// Decodes a nested record through the external tree encoder, advancing
    /// the cursor by exactly the bytes the record occupied.
    pub fn compound(&mut self, encoding: TreeEncoding) -> Result<Compound> {
        let tree = self
            .tree
            .ok_or(WireError::UnsupportedVariant("compound record, but no tree codec installed"))?;
        let (record, consumed) = tree.decode(&self.buf[self.pos..], encoding)?;
        debug_assert!(consumed <= self.remaining());
        self.pos += consumed;
        Ok(record)
    }
}
