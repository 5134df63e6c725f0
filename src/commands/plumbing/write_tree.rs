use crate::areas::repository::Repository;
use crate::areas::workspace::WorkspaceEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Snapshot the working directory into a tree object and print its
    /// identity.
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        let object_id = self.build_tree(None)?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }

    /// Recursively persist one directory level, children first.
    ///
    /// Post-order traversal: every blob and sub-tree is stored before the
    /// tree referencing it, so a reader can never observe a dangling child.
    /// The returned identity is a pure function of the directory's recursive
    /// content; enumeration order on disk does not matter because the entry
    /// set is sorted before serialization.
    fn build_tree(&self, prefix: Option<&Path>) -> anyhow::Result<ObjectId> {
        let mut entries = Vec::new();

        for child in self.workspace().list_dir(prefix)? {
            let entry = match child {
                WorkspaceEntry::Directory { name, path } => {
                    let oid = self.build_tree(Some(&path))?;
                    TreeEntry::new(EntryMode::Directory, name, oid)
                }
                WorkspaceEntry::File { name, path } => {
                    let blob = Blob::new(self.workspace().read_file(&path)?);
                    let oid = blob.object_id()?;
                    self.database().store(blob)?;
                    TreeEntry::new(EntryMode::Regular, name, oid)
                }
            };

            entries.push(entry);
        }

        let tree = Tree::build(entries);
        let object_id = tree.object_id()?;
        self.database().store(tree)?;

        Ok(object_id)
    }
}
