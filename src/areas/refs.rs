//! Reference bootstrap
//!
//! Only the minimal reference surface needed by `init` lives here: the
//! `refs/` directory layout and the HEAD symbolic reference. No commit
//! objects are ever produced by this crate, so branch tips are never written.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Reference file manager rooted at the repository's `.git` directory.
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Point HEAD at a branch via a symbolic reference.
    pub fn set_head(&self, branch_name: &str) -> anyhow::Result<()> {
        std::fs::write(
            self.head_path(),
            format!("ref: refs/heads/{branch_name}\n"),
        )
        .context("Unable to write HEAD reference")?;

        Ok(())
    }
}
