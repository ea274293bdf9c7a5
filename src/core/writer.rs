//! Writing half of the primitive codec.
//!
//! A [`Writer`] appends fields to a growable buffer; writes never fail on
//! capacity. Every operation still returns `Result` so that failures from
//! value preconditions or nested encoders propagate up through a multi-field
//! composite write instead of unwinding through it.

use crate::core::types::{BlockPos, Rgba, Vec2, Vec3};
use crate::error::{Result, WireError};
use crate::protocol::tree::{Compound, TreeCodec, TreeEncoding};
use crate::PROTOCOL_VERSION;
use bytes::{BufMut, BytesMut};
use uuid::Uuid;

/// Writes wire-format fields to an in-memory buffer. One `Writer` wraps
/// exactly one in-flight buffer; a caller cancels an encode by dropping it.
pub struct Writer<'a> {
    buf: BytesMut,
    tree: Option<&'a dyn TreeCodec>,
    protocol: u32,
}

impl Default for Writer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Writer<'a> {
    /// Creates a writer with no tree codec installed. Encoding a compound
    /// record through it fails with [`WireError::UnsupportedVariant`].
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
            tree: None,
            protocol: PROTOCOL_VERSION,
        }
    }

    /// Creates a writer that delegates nested records to `tree`.
    pub fn with_tree_codec(tree: &'a dyn TreeCodec) -> Self {
        Self {
            tree: Some(tree),
            ..Self::new()
        }
    }

    /// Overrides the protocol version used for version-gated wire quirks.
    pub fn with_protocol(mut self, protocol: u32) -> Self {
        self.protocol = protocol;
        self
    }

    /// The protocol version this writer encodes for.
    pub fn protocol(&self) -> u32 {
        self.protocol
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the writer, returning the encoded frame.
    pub fn into_bytes(self) -> BytesMut {
        self.buf
    }

    /// Writes a single byte.
    pub fn u8(&mut self, x: u8) -> Result<()> {
        self.buf.put_u8(x);
        Ok(())
    }

    /// Writes a bool as either 0 or 1.
    pub fn bool(&mut self, x: bool) -> Result<()> {
        self.u8(u8::from(x))
    }

    /// Writes a little-endian int16.
    pub fn i16(&mut self, x: i16) -> Result<()> {
        self.buf.put_i16_le(x);
        Ok(())
    }

    /// Writes a little-endian float32.
    pub fn f32(&mut self, x: f32) -> Result<()> {
        self.buf.put_f32_le(x);
        Ok(())
    }

    /// Writes a rotational angle in degrees as a single byte, giving it a
    /// resolution of 360/256. Intentionally lossy.
    pub fn byte_angle(&mut self, x: f32) -> Result<()> {
        self.u8((x / (360.0 / 256.0)) as u8)
    }

    /// Writes a string prefixed with a varuint32 byte length. No text
    /// validation happens at this layer.
    pub fn string(&mut self, x: &str) -> Result<()> {
        self.byte_slice(x.as_bytes())
    }

    /// Writes a byte blob prefixed with a varuint32 length.
    pub fn byte_slice(&mut self, x: &[u8]) -> Result<()> {
        let len = u32::try_from(x.len())
            .map_err(|_| WireError::invalid("byte slice", "length exceeds u32"))?;
        self.var_u32(len)?;
        self.buf.put_slice(x);
        Ok(())
    }

    /// Appends raw bytes with no length prefix.
    pub fn bytes(&mut self, x: &[u8]) -> Result<()> {
        self.buf.put_slice(x);
        Ok(())
    }

    /// Writes three float32s in x, y, z order.
    pub fn vec3(&mut self, x: Vec3) -> Result<()> {
        self.f32(x.x)?;
        self.f32(x.y)?;
        self.f32(x.z)
    }

    /// Writes two float32s in x, y order.
    pub fn vec2(&mut self, x: Vec2) -> Result<()> {
        self.f32(x.x)?;
        self.f32(x.y)
    }

    /// Writes a block position as three signed varints.
    pub fn block_pos(&mut self, x: BlockPos) -> Result<()> {
        self.var_i32(x.x())?;
        self.var_i32(x.y())?;
        self.var_i32(x.z())
    }

    /// Writes a block position with an unsigned y. The y coordinate is a
    /// height and must be non-negative.
    pub fn ublock_pos(&mut self, x: BlockPos) -> Result<()> {
        self.var_i32(x.x())?;
        let y = u32::try_from(x.y())
            .map_err(|_| WireError::invalid("block position", "unsigned y coordinate is negative"))?;
        self.var_u32(y)?;
        self.var_i32(x.z())
    }

    /// Writes an RGBA colour packed into one varuint32.
    pub fn rgba(&mut self, x: Rgba) -> Result<()> {
        self.var_u32(x.pack())
    }

    /// Writes a UUID in the protocol's wire order: the two 8-byte halves
    /// swapped and the whole sequence reversed, which comes down to
    /// reversing each half in place.
    pub fn uuid(&mut self, x: Uuid) -> Result<()> {
        let mut b = x.into_bytes();
        b[..8].reverse();
        b[8..].reverse();
        self.buf.put_slice(&b);
        Ok(())
    }

    /// Writes a zig-zag signed varint32 as 1-5 bytes.
    pub fn var_i32(&mut self, x: i32) -> Result<()> {
        self.var_u32(((x << 1) ^ (x >> 31)) as u32)
    }

    /// Writes a zig-zag signed varint64 as 1-10 bytes.
    pub fn var_i64(&mut self, x: i64) -> Result<()> {
        self.var_u64(((x << 1) ^ (x >> 63)) as u64)
    }

    /// Writes an unsigned varint32 as 1-5 bytes.
    pub fn var_u32(&mut self, x: u32) -> Result<()> {
        let mut u = x;
        while u >= 0x80 {
            self.buf.put_u8(u as u8 | 0x80);
            u >>= 7;
        }
        self.buf.put_u8(u as u8);
        Ok(())
    }

    /// Writes an unsigned varint64 as 1-10 bytes.
    pub fn var_u64(&mut self, x: u64) -> Result<()> {
        let mut u = x;
        while u >= 0x80 {
            self.buf.put_u8(u as u8 | 0x80);
            u >>= 7;
        }
        self.buf.put_u8(u as u8);
        Ok(())
    }

    /// Serializes a nested record through the external tree encoder.
    pub fn compound(&mut self, record: &Compound, encoding: TreeEncoding) -> Result<()> {
        let tree = self
            .tree
            .ok_or(WireError::UnsupportedVariant("compound record, but no tree codec installed"))?;
        let mut out = Vec::new();
        tree.encode(record, encoding, &mut out)?;
        self.buf.put_slice(&out);
        Ok(())
    }
}
