use crate::core::{Reader, Writer};
use crate::error::Result;
use crate::packet::{ids, Packet};
use crate::protocol::item::{read_item, write_item, ItemStack};

/// Sent by the server to update the armour an entity is wearing. Sent for
/// both players and other entities such as zombies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobArmourEquipment {
    /// Runtime ID of the entity, unique per world session.
    pub entity_runtime_id: u64,
    pub helmet: ItemStack,
    pub chestplate: ItemStack,
    pub leggings: ItemStack,
    pub boots: ItemStack,
}

impl Packet for MobArmourEquipment {
    fn id(&self) -> u32 {
        ids::MOB_ARMOUR_EQUIPMENT
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<()> {
        w.var_u64(self.entity_runtime_id)?;
        write_item(w, &self.helmet)?;
        write_item(w, &self.chestplate)?;
        write_item(w, &self.leggings)?;
        write_item(w, &self.boots)
    }

    fn decode(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.entity_runtime_id = r.var_u64()?;
        self.helmet = read_item(r)?;
        self.chestplate = read_item(r)?;
        self.leggings = read_item(r)?;
        self.boots = read_item(r)?;
        Ok(())
    }
}
