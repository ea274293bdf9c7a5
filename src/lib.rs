//! # bedrock-wire
//!
//! Binary wire-protocol codec for the Bedrock game network protocol: a
//! symmetric encode/decode layer turning in-memory packet structures into an
//! exact byte stream and back, byte-for-byte compatible with the externally
//! fixed format. Consumers are client and server implementations that must
//! interoperate with unmodified peers on the wire.
//!
//! ## Components
//! - **[`core`]**: the primitive wire grammar (varints, fixed-width
//!   numerics, strings, vectors, positions, colours, identifiers)
//! - **[`protocol`]**: composite codecs — entity metadata (tagged values),
//!   item stacks, attribute lists, and the external tree-encoder seam
//! - **[`packet`]**: the packet contract, representative packet shapes, and
//!   the ID-to-shape registry
//!
//! ## Scope
//! The transport below this layer (reliability, fragmentation, compression,
//! encryption) is assumed to deliver a plain byte stream; a malformed or
//! truncated stream is an immediate, non-recoverable failure for that single
//! decode attempt, and recovery is the transport's call.
//!
//! ## Example
//! ```
//! use bedrock_wire::core::{Reader, Writer};
//! use bedrock_wire::packet::{ContainerClose, PacketRegistry};
//!
//! # fn main() -> bedrock_wire::error::Result<()> {
//! let registry = PacketRegistry::new();
//!
//! let mut w = Writer::new();
//! registry.encode_packet(&mut w, &ContainerClose { window_id: 7 })?;
//!
//! let mut r = Reader::new(w.as_slice());
//! let packet = registry.decode_packet(&mut r)?;
//! assert_eq!(packet.id(), bedrock_wire::packet::ids::CONTAINER_CLOSE);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod packet;
pub mod protocol;

pub use crate::core::{Reader, Writer};
pub use crate::error::{Result, WireError};
pub use crate::packet::{Packet, PacketRegistry};

/// The protocol version this codec targets. Wire quirks that appeared in a
/// specific version are gated on it through per-version lookup tables.
pub const PROTOCOL_VERSION: u32 = 408;
