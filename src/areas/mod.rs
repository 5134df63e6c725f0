//! Core repository components
//!
//! This module contains the building blocks of the object store:
//!
//! - `database`: Object database for storing blobs and trees
//! - `refs`: Reference bootstrap (the HEAD symbolic reference)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub(crate) mod database;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;
