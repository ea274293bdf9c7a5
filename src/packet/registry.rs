//! Packet registry: the explicit, statically assembled table binding packet
//! identifiers to constructors.

use crate::core::{Reader, Writer};
use crate::error::{Result, WireError};
use crate::packet::{
    ids, BlockActorData, ContainerClose, MobArmourEquipment, Packet, UpdateAttributes,
};
use std::collections::HashMap;
use tracing::trace;

type PacketCtor = fn() -> Box<dyn Packet>;

/// Maps stable numeric packet identifiers to packet constructors. The table
/// is assembled once at construction; lookups afterwards are read-only, so a
/// registry can be shared freely between decode call sites.
pub struct PacketRegistry {
    ctors: HashMap<u32, PacketCtor>,
}

impl Default for PacketRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketRegistry {
    /// Creates a registry holding the built-in packet catalog.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ids::CONTAINER_CLOSE, || Box::<ContainerClose>::default());
        registry.register(ids::UPDATE_ATTRIBUTES, || Box::<UpdateAttributes>::default());
        registry.register(ids::MOB_ARMOUR_EQUIPMENT, || {
            Box::<MobArmourEquipment>::default()
        });
        registry.register(ids::BLOCK_ACTOR_DATA, || Box::<BlockActorData>::default());
        registry
    }

    /// Creates a registry with no shapes registered.
    pub fn empty() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// Binds `id` to a packet constructor. A later registration for the same
    /// ID replaces the earlier one.
    pub fn register(&mut self, id: u32, ctor: PacketCtor) {
        self.ctors.insert(id, ctor);
    }

    /// Whether a shape is registered for `id`.
    pub fn contains(&self, id: u32) -> bool {
        self.ctors.contains_key(&id)
    }

    /// Writes the packet's identifier followed by its fields.
    pub fn encode_packet(&self, w: &mut Writer<'_>, packet: &dyn Packet) -> Result<()> {
        trace!(id = packet.id(), "encoding packet");
        w.var_u32(packet.id())?;
        packet.encode(w)
    }

    /// Reads a packet identifier from the stream, looks up the registered
    /// shape, instantiates it and decodes its fields. Whether the connection
    /// can recover from an unknown identifier is the transport's decision.
    pub fn decode_packet(&self, r: &mut Reader<'_>) -> Result<Box<dyn Packet>> {
        let id = r.var_u32()?;
        let ctor = self.ctors.get(&id).ok_or(WireError::UnknownPacket { id })?;
        trace!(id, "decoding packet");
        let mut packet = ctor();
        packet.decode(r)?;
        Ok(packet)
    }
}
