use crate::core::{Reader, Writer};
use crate::error::Result;
use crate::packet::{ids, Packet};

/// Sent by the server to close a container the player has open, or by the
/// client to tell the server it closed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerClose {
    /// ID of the window to close, matching the one the container was
    /// opened with.
    pub window_id: u8,
}

impl Packet for ContainerClose {
    fn id(&self) -> u32 {
        ids::CONTAINER_CLOSE
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<()> {
        w.u8(self.window_id)
    }

    fn decode(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.window_id = r.u8()?;
        Ok(())
    }
}
