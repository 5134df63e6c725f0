//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: initialize a new repository

pub mod init;
