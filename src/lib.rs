//! A minimal content-addressable object store and Merkle-tree builder.
//!
//! Objects (blobs and trees) are stored under keys derived from the SHA-1
//! hash of their envelope `<type> <size>\0<content>`, giving every piece of
//! content a deterministic identity. Directory snapshots are built bottom-up:
//! file blobs and sub-trees are persisted first, then referenced by name from
//! a sorted parent tree object.

pub mod areas;
pub mod artifacts;
pub mod commands;
