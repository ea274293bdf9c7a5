use crate::core::types::BlockPos;
use crate::core::{Reader, Writer};
use crate::error::Result;
use crate::packet::{ids, Packet};
use crate::protocol::tree::{Compound, TreeEncoding};

/// Sent by the server to update the data of a block entity client-side, for
/// example the contents of a chest. The record should contain all properties
/// of the block, not just the ones that changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockActorData {
    /// Position of the block holding the block entity. The y coordinate is
    /// a height and is written unsigned.
    pub position: BlockPos,
    /// The new block entity data, serialized by the external tree encoder.
    pub nbt_data: Compound,
}

impl Packet for BlockActorData {
    fn id(&self) -> u32 {
        ids::BLOCK_ACTOR_DATA
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<()> {
        w.ublock_pos(self.position)?;
        w.compound(&self.nbt_data, TreeEncoding::NetworkLittleEndian)
    }

    fn decode(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.position = r.ublock_pos()?;
        self.nbt_data = r.compound(TreeEncoding::NetworkLittleEndian)?;
        Ok(())
    }
}
