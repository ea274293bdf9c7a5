use crate::core::{Reader, Writer};
use crate::error::Result;
use crate::packet::{ids, Packet};
use crate::protocol::attribute::{read_attributes, write_attributes, Attribute};

/// Sent by the server to update attributes of an entity, such as health or
/// movement speed. Only changed attributes need to be included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAttributes {
    /// Runtime ID of the entity, unique per world session.
    pub entity_runtime_id: u64,
    /// The attributes the entity gets.
    pub attributes: Vec<Attribute>,
}

impl Packet for UpdateAttributes {
    fn id(&self) -> u32 {
        ids::UPDATE_ATTRIBUTES
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<()> {
        w.var_u64(self.entity_runtime_id)?;
        write_attributes(w, &self.attributes)
    }

    fn decode(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.entity_runtime_id = r.var_u64()?;
        self.attributes = read_attributes(r)?;
        Ok(())
    }
}
