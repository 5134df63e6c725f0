use crate::artifacts::objects::error::ObjectError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// An immediate child of a workspace directory.
///
/// Paths are relative to the workspace root so they can be fed back into
/// [`Workspace::list_dir`] and [`Workspace::read_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEntry {
    File { name: String, path: PathBuf },
    Directory { name: String, path: PathBuf },
}

/// The working directory being snapshotted.
///
/// Only plain files and directories are supported; the reserved `.git`
/// namespace is excluded from every listing.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the immediate children of a directory, classified by kind.
    ///
    /// `dir_path` is relative to the workspace root; `None` lists the root
    /// itself. Symbolic links and other special entries are fatal
    /// ([`ObjectError::UnsupportedEntry`]), never silently skipped. The
    /// returned order is whatever the filesystem yields; canonical ordering
    /// is the tree builder's concern.
    pub fn list_dir(&self, dir_path: Option<&Path>) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let dir_path = match dir_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir_path)
            .context(format!("Unable to list directory {}", dir_path.display()))?
        {
            let entry = entry?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| anyhow::anyhow!("Non UTF-8 entry name: {:?}", name))?;

            if IGNORED_PATHS.contains(&name.as_str()) {
                continue;
            }

            let path = entry
                .path()
                .strip_prefix(self.path.as_ref())
                .map(Path::to_path_buf)
                .context("Entry escapes the workspace root")?;

            // file_type does not follow symlinks, so a link never
            // masquerades as its target
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                entries.push(WorkspaceEntry::Directory { name, path });
            } else if file_type.is_file() {
                entries.push(WorkspaceEntry::File { name, path });
            } else {
                return Err(ObjectError::UnsupportedEntry(path).into());
            }
        }

        Ok(entries)
    }

    /// Read a file's full content, byte-accurate.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }
}
