//! Command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: low-level commands for direct object manipulation
//!   (hash-object, cat-file, write-tree, ls-tree)
//! - `porcelain`: user-facing commands (init)
//!
//! Each command is a thin wrapper over the areas layer, implemented as
//! methods on [`crate::areas::repository::Repository`].

pub mod plumbing;
pub mod porcelain;
