//! # Primitive Codec
//!
//! The atomic, bidirectional wire grammar every higher component builds on:
//! varints (zig-zag signed and unsigned), fixed-width little-endian numerics,
//! length-prefixed strings and blobs, vectors, block positions, packed
//! colours, and the protocol's non-standard UUID byte order.
//!
//! ## Components
//! - **Reader**: consuming cursor over a borrowed byte buffer
//! - **Writer**: appending cursor over a growable buffer
//! - **Types**: the small composite value types the grammar carries
//!
//! Every encode/decode pair is an exact inverse: `decode(encode(x)) == x`
//! for each representable `x`, with the single deliberate exception of the
//! lossy rotation byte.

pub mod reader;
pub mod types;
pub mod writer;

pub use reader::Reader;
pub use types::{BlockPos, Rgba, Vec2, Vec3};
pub use writer::Writer;
