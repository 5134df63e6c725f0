//! Object types and the envelope codec
//!
//! All content is stored as objects identified by SHA-1 hashes. Two kinds are
//! produced here:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (names, modes, and object IDs)
//!
//! A third kind, **commit**, is a recognized label for decoding purposes but
//! is never produced by this crate.
//!
//! All objects serialize to the envelope format `<type> <size>\0<content>`;
//! the SHA-1 of the envelope is the object's identity.

pub mod blob;
pub mod entry_mode;
pub mod error;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw binary format
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
