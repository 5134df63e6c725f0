//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files
//! (blobs) and subdirectories (other trees), along with their names and
//! modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>` with no delimiter between
//! records.
//!
//! ## Canonical ordering
//!
//! [`Tree::build`] sorts entries by name, byte-wise ascending, before
//! serialization. The ordering is part of the hashed content: the same entry
//! set serialized in a different order yields a different, non-canonical
//! identity. Decoding preserves *stored* order, so a non-canonical tree still
//! decodes; it simply cannot collide with a canonical one.

use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::error::ObjectError;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// A single directory entry: mode, name, and the child's identity.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    mode: EntryMode,
    name: String,
    oid: ObjectId,
}

impl TreeEntry {
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// The object kind this entry references (tree for directories,
    /// blob for files).
    pub fn object_type(&self) -> ObjectType {
        self.mode.object_type()
    }

    fn write_to(&self, out: &mut Vec<u8>) -> anyhow::Result<()> {
        let header = format!("{} {}\0", self.mode.as_str(), self.name);
        out.write_all(header.as_bytes())?;
        self.oid.write_raw_to(out)?;

        Ok(())
    }
}

/// Tree object representing one directory level
///
/// Holds entries in serialization order. Trees assembled from a workspace
/// walk go through [`Tree::build`], which establishes the canonical sorted
/// order; trees loaded from the database keep whatever order was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a canonical tree from a set of entries.
    ///
    /// Sorts by name, byte-wise ascending. Only trees built here produce the
    /// canonical identity for a directory.
    pub fn build(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();
        for entry in &self.entries {
            entry.write_to(&mut content_bytes)?;
        }

        let mut tree_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        tree_bytes.write_all(header.as_bytes())?;
        tree_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.last() != Some(&b' ') {
                return Err(ObjectError::CorruptObject(
                    "tree entry mode is not space-terminated".to_string(),
                )
                .into());
            }
            mode_bytes.pop();

            let mode = std::str::from_utf8(&mode_bytes).map_err(|_| {
                ObjectError::CorruptObject("tree entry mode is not UTF-8".to_string())
            })?;
            let mode = EntryMode::try_parse(mode)?;

            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || name_bytes.last() != Some(&b'\0') {
                return Err(ObjectError::CorruptObject(
                    "tree entry name is not NUL-terminated".to_string(),
                )
                .into());
            }
            name_bytes.pop();
            let name = std::str::from_utf8(&name_bytes)
                .map_err(|_| {
                    ObjectError::CorruptObject("tree entry name is not UTF-8".to_string())
                })?
                .to_owned();

            let oid = ObjectId::read_raw_from(&mut reader)?;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode().as_str(),
                    entry.object_type().as_str(),
                    entry.oid().as_ref(),
                    entry.name()
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
