//! Object-database data structures
//!
//! This module contains the core types of the object store:
//!
//! - `objects`: object kinds (blob, tree), the envelope codec, and object
//!   identifiers

pub mod objects;
