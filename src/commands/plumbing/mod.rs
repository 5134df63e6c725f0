//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: compute a blob's identity and optionally store it
//! - `cat-file`: print the decoded content of an object
//! - `write-tree`: snapshot the working directory into a tree object
//! - `ls-tree`: list the entries of a stored tree

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
