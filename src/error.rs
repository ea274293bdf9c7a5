//! # Error Types
//!
//! Error handling for the wire codec.
//!
//! All error kinds abort the current packet (en/de)code immediately; nothing
//! in this layer retries, and a partially-populated packet is never returned
//! as if it were complete. Recovery (skipping a frame, dropping the
//! connection) is the transport's decision, not this layer's.
//!
//! ## Error Categories
//! - **StreamExhausted**: decode attempted past the available bytes
//! - **UnknownTag / UnknownPacket**: unrecognized wire tag or packet ID
//! - **InvalidValue**: a decoded or supplied value violates a structural precondition
//! - **UnsupportedVariant**: encode given a value shape outside the codec's known set

use thiserror::Error;

/// WireError is the primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum WireError {
    /// A read ran past the end of the buffer. The stream is unsynchronized
    /// and the whole packet decode must be abandoned.
    #[error("stream exhausted: needed {needed} more byte(s), {remaining} remaining")]
    StreamExhausted { needed: usize, remaining: usize },

    /// An unrecognized type tag was read where a known tag was required.
    #[error("unknown wire tag {tag} for {enum_name}")]
    UnknownTag { tag: u32, enum_name: &'static str },

    /// No packet shape is registered for this numeric identifier.
    #[error("unknown packet ID {id:#04x}")]
    UnknownPacket { id: u32 },

    /// A value violates a structural precondition of the wire format.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },

    /// Encode was handed an in-memory shape the protocol cannot express.
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(&'static str),
}

impl WireError {
    /// Shorthand for [`WireError::InvalidValue`] with a formatted reason.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WireError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Type alias for Results using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
