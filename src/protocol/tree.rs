//! # Tree-Encoder Interface
//!
//! Seam for the external structured-tree (NBT-style) encoder that some
//! fields and packets embed. The tree *wire format* is owned by that
//! collaborator and is deliberately not reimplemented here: this module only
//! defines the in-memory record model, the endianness selector, and the
//! service trait the codec calls through.

use crate::error::Result;
use std::collections::BTreeMap;

/// Endianness variants understood by the external tree encoder. The network
/// little-endian variant is the one used throughout this protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEncoding {
    /// Little-endian with varint lengths, used on the wire.
    NetworkLittleEndian,
    /// Plain little-endian, used on disk by the same game.
    LittleEndian,
    /// Big-endian, used by the Java edition of the game.
    BigEndian,
}

/// A single value inside a nested record.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<u8>),
    List(Vec<TreeValue>),
    Compound(Compound),
}

/// A nested, self-describing record embedded inside certain fields. Uses a
/// BTreeMap so that encoding order is deterministic within a process run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound(pub BTreeMap<String, TreeValue>);

impl Compound {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TreeValue) -> Option<TreeValue> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.0.get(key)
    }
}

impl FromIterator<(String, TreeValue)> for Compound {
    fn from_iter<T: IntoIterator<Item = (String, TreeValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The external tree-encoder service.
///
/// The tree format is self-describing, so `decode` must report how many
/// bytes of the input it consumed; the caller advances its cursor by exactly
/// that amount.
pub trait TreeCodec {
    /// Serializes `record` in the given encoding, appending to `out`.
    fn encode(&self, record: &Compound, encoding: TreeEncoding, out: &mut Vec<u8>) -> Result<()>;

    /// Decodes one record from the front of `bytes`, returning it together
    /// with the number of bytes consumed.
    fn decode(&self, bytes: &[u8], encoding: TreeEncoding) -> Result<(Compound, usize)>;
}
