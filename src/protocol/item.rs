//! # Item Stack Codec
//!
//! Encodes and decodes one inventory slot, including the legacy
//! nested-record block and per-item trailing quirks. The quirks are data,
//! not code: they live in a lookup table keyed by protocol version and item
//! network ID, so a new item-specific wire oddity is one table row rather
//! than another branch in the codec path.

use crate::core::{Reader, Writer};
use crate::error::{Result, WireError};
use crate::protocol::tree::{Compound, TreeEncoding};

/// Network ID of the shield item, the one entry in the quirk table at
/// protocol 408.
pub const SHIELD_NETWORK_ID: i32 = 513;

/// Marker written in place of the nested-record block when a record follows.
const USER_DATA_VERSIONED: i16 = -1;
/// Version byte written after a [`USER_DATA_VERSIONED`] marker.
const USER_DATA_VERSION: u8 = 1;

/// Largest metadata value the aux word can carry: the count owns the low 8
/// bits and the sign bit must stay clear.
const MAX_METADATA_VALUE: u32 = (1 << 23) - 1;

/// Extra trailing fields some items carry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemQuirk {
    /// One trailing signed varint64, present even when zero.
    BlockingTick,
}

/// Per-item wire quirks: (minimum protocol version, item network ID, quirk).
const ITEM_QUIRKS: &[(u32, i32, ItemQuirk)] = &[(408, SHIELD_NETWORK_ID, ItemQuirk::BlockingTick)];

fn quirks_for(protocol: u32, network_id: i32) -> impl Iterator<Item = ItemQuirk> {
    ITEM_QUIRKS
        .iter()
        .filter(move |(min_protocol, id, _)| protocol >= *min_protocol && network_id == *id)
        .map(|(_, _, quirk)| *quirk)
}

/// One inventory slot. A `network_id` of 0 denotes an empty slot and implies
/// no other field is present on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStack {
    /// Network ID of the item; 0 means "no item".
    pub network_id: i32,
    /// Item metadata such as durability or variant.
    pub metadata_value: u32,
    /// Stack size; packed into the low 8 bits of the aux word.
    pub count: u8,
    /// Optional nested record holding custom item data such as display
    /// names and enchantments.
    pub nbt_data: Option<Compound>,
    /// Block names this item can be placed on in adventure mode.
    pub can_be_placed_on: Vec<String>,
    /// Block names this item can break in adventure mode.
    pub can_break: Vec<String>,
    /// Tick the item started blocking. Only on the wire for items whose
    /// quirk table entry says so (the shield at protocol 408).
    pub blocking_tick: i64,
}

impl ItemStack {
    /// An empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.network_id == 0
    }
}

/// Writes one item stack. Field order is part of the protocol contract and
/// mirrors [`read_item`] exactly.
pub fn write_item(w: &mut Writer<'_>, x: &ItemStack) -> Result<()> {
    w.var_i32(x.network_id)?;
    if x.network_id == 0 {
        // Empty slot; no more data follows.
        return Ok(());
    }
    if x.metadata_value > MAX_METADATA_VALUE {
        return Err(WireError::invalid(
            "item metadata value",
            format!("{} does not fit the aux word", x.metadata_value),
        ));
    }
    let aux = (x.metadata_value as i32) << 8 | i32::from(x.count);
    w.var_i32(aux)?;

    match &x.nbt_data {
        Some(record) => {
            w.i16(USER_DATA_VERSIONED)?;
            w.u8(USER_DATA_VERSION)?;
            w.compound(record, TreeEncoding::NetworkLittleEndian)?;
        }
        None => w.i16(0)?,
    }

    write_block_names(w, &x.can_be_placed_on)?;
    write_block_names(w, &x.can_break)?;

    for quirk in quirks_for(w.protocol(), x.network_id) {
        match quirk {
            ItemQuirk::BlockingTick => w.var_i64(x.blocking_tick)?,
        }
    }
    Ok(())
}

/// Reads one item stack written by [`write_item`].
pub fn read_item(r: &mut Reader<'_>) -> Result<ItemStack> {
    let network_id = r.var_i32()?;
    if network_id == 0 {
        return Ok(ItemStack::empty());
    }

    let aux = r.var_i32()?;
    if aux < 0 {
        return Err(WireError::invalid("item aux word", "negative value"));
    }
    let count = (aux & 0xff) as u8;
    let metadata_value = (aux >> 8) as u32;

    let nbt_data = match r.i16()? {
        0 => None,
        USER_DATA_VERSIONED => {
            let version = r.u8()?;
            if version != USER_DATA_VERSION {
                return Err(WireError::invalid(
                    "item user data version",
                    format!("unexpected version {version}"),
                ));
            }
            Some(r.compound(TreeEncoding::NetworkLittleEndian)?)
        }
        marker => {
            return Err(WireError::invalid(
                "item user data marker",
                format!("unexpected marker {marker}"),
            ))
        }
    };

    let can_be_placed_on = read_block_names(r)?;
    let can_break = read_block_names(r)?;

    let mut blocking_tick = 0;
    for quirk in quirks_for(r.protocol(), network_id) {
        match quirk {
            ItemQuirk::BlockingTick => blocking_tick = r.var_i64()?,
        }
    }

    Ok(ItemStack {
        network_id,
        metadata_value,
        count,
        nbt_data,
        can_be_placed_on,
        can_break,
        blocking_tick,
    })
}

fn write_block_names(w: &mut Writer<'_>, names: &[String]) -> Result<()> {
    let len = u32::try_from(names.len())
        .map_err(|_| WireError::invalid("block name list", "length exceeds u32"))?;
    w.var_u32(len)?;
    for name in names {
        w.string(name)?;
    }
    Ok(())
}

fn read_block_names(r: &mut Reader<'_>) -> Result<Vec<String>> {
    let len = r.var_u32()?;
    let mut names = Vec::new();
    for _ in 0..len {
        names.push(r.string()?);
    }
    Ok(names)
}
