//! # Composite Codecs
//!
//! The codecs built on top of the primitive wire grammar.
//!
//! ## Components
//! - **Metadata**: tagged-union codec for per-entity attribute maps
//! - **Item**: inventory slot codec with the versioned quirk table
//! - **Attribute**: entity attribute list codec
//! - **Tree**: interface to the external structured-tree encoder

pub mod attribute;
pub mod item;
pub mod metadata;
pub mod tree;

pub use attribute::{read_attributes, write_attributes, Attribute};
pub use item::{read_item, write_item, ItemStack, SHIELD_NETWORK_ID};
pub use metadata::{read_entity_metadata, write_entity_metadata, EntityMetadata, MetadataValue};
pub use tree::{Compound, TreeCodec, TreeEncoding, TreeValue};
