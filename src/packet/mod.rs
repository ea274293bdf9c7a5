//! # Packets & Dispatch
//!
//! The packet contract and the registry binding stable numeric identifiers
//! to concrete field layouts.
//!
//! Each packet shape declares its fields in a fixed order; `encode` and
//! `decode` walk that order identically in both directions. The order is
//! part of the protocol contract, not an implementation detail. A failure
//! anywhere in the field chain aborts the whole packet: the transport treats
//! the buffer as one atomic frame, so partial bytes are discarded by the
//! caller.
//!
//! The catalog here holds the representative shapes this crate ships;
//! consumers extend it through [`PacketRegistry::register`].

pub mod block_actor_data;
pub mod container_close;
pub mod mob_armour_equipment;
pub mod registry;
pub mod update_attributes;

pub use block_actor_data::BlockActorData;
pub use container_close::ContainerClose;
pub use mob_armour_equipment::MobArmourEquipment;
pub use registry::PacketRegistry;
pub use update_attributes::UpdateAttributes;

use crate::core::{Reader, Writer};
use crate::error::Result;
use std::fmt;

/// Stable numeric packet identifiers, externally assigned and unique across
/// the whole registry.
pub mod ids {
    pub const UPDATE_ATTRIBUTES: u32 = 0x1d;
    pub const MOB_ARMOUR_EQUIPMENT: u32 = 0x20;
    pub const CONTAINER_CLOSE: u32 = 0x2f;
    pub const BLOCK_ACTOR_DATA: u32 = 0x38;
}

/// One packet shape: a stable numeric identifier plus an ordered sequence of
/// typed fields with symmetric encode/decode.
pub trait Packet: fmt::Debug + Send + Sync {
    /// The packet's stable numeric identifier.
    fn id(&self) -> u32;

    /// Appends the packet's fields to `w` in declared order.
    fn encode(&self, w: &mut Writer<'_>) -> Result<()>;

    /// Populates the packet's fields from `r` in the exact order used by
    /// [`Packet::encode`].
    fn decode(&mut self, r: &mut Reader<'_>) -> Result<()>;
}
