//! Small composite value types carried by the wire grammar.
//!
//! These are pure wire values: no math, no game semantics. Components are
//! laid out in the order the protocol writes them.

/// A block position in the world, `[x, y, z]`.
///
/// Encoded either as three signed varints (the form used by most packets)
/// or with an unsigned y (the form used by block entity packets, where y is
/// a non-negative height).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockPos(pub [i32; 3]);

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> i32 {
        self.0[0]
    }

    pub fn y(&self) -> i32 {
        self.0[1]
    }

    pub fn z(&self) -> i32 {
        self.0[2]
    }
}

/// Three consecutive 32-bit floats, no compression.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Two consecutive 32-bit floats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGBA colour, packed on the wire as `r | g<<8 | b<<16 | a<<24` inside
/// one unsigned varint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the four channels into the wire word.
    pub(crate) fn pack(self) -> u32 {
        u32::from(self.r) | u32::from(self.g) << 8 | u32::from(self.b) << 16 | u32::from(self.a) << 24
    }

    /// Unpacks the wire word back into channels.
    pub(crate) fn unpack(val: u32) -> Self {
        Self {
            r: val as u8,
            g: (val >> 8) as u8,
            b: (val >> 16) as u8,
            a: (val >> 24) as u8,
        }
    }
}
