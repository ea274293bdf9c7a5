//! Entity attribute list codec, used by the update-attributes packet.

use crate::core::{Reader, Writer};
use crate::error::{Result, WireError};

/// One entity attribute, such as health or movement speed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    /// Smallest value the attribute may take.
    pub min: f32,
    /// Largest value the attribute may take.
    pub max: f32,
    /// Current value.
    pub value: f32,
    /// Value the attribute resets to.
    pub default: f32,
    /// Vanilla attribute name, such as `minecraft:health`.
    pub name: String,
}

/// Writes a list of attributes: varuint32 count, then per entry min, max,
/// value and default as float32s followed by the name string.
pub fn write_attributes(w: &mut Writer<'_>, x: &[Attribute]) -> Result<()> {
    let count = u32::try_from(x.len())
        .map_err(|_| WireError::invalid("attribute list", "length exceeds u32"))?;
    w.var_u32(count)?;
    for attribute in x {
        w.f32(attribute.min)?;
        w.f32(attribute.max)?;
        w.f32(attribute.value)?;
        w.f32(attribute.default)?;
        w.string(&attribute.name)?;
    }
    Ok(())
}

/// Reads a list of attributes written by [`write_attributes`].
pub fn read_attributes(r: &mut Reader<'_>) -> Result<Vec<Attribute>> {
    let count = r.var_u32()?;
    let mut attributes = Vec::new();
    for _ in 0..count {
        attributes.push(Attribute {
            min: r.f32()?,
            max: r.f32()?,
            value: r.f32()?,
            default: r.f32()?,
            name: r.string()?,
        });
    }
    Ok(attributes)
}
