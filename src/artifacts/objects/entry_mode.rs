use crate::artifacts::objects::error::ObjectError;
use crate::artifacts::objects::object_type::ObjectType;

/// Tree entry mode, stored as its decimal-ASCII rendering.
///
/// The mode set is closed: directories and regular files. Executable bits and
/// symbolic links are out of scope; the workspace walk rejects anything that
/// is not a plain file or directory before a mode is ever assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Directory,
    Regular,
}

impl EntryMode {
    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::Directory => "40000",
            EntryMode::Regular => "100644",
        }
    }

    /// The object kind a child with this mode must have.
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Directory => ObjectType::Tree,
            EntryMode::Regular => ObjectType::Blob,
        }
    }

    pub fn try_parse(mode: &str) -> anyhow::Result<Self> {
        match mode {
            "40000" => Ok(EntryMode::Directory),
            "100644" => Ok(EntryMode::Regular),
            other => {
                Err(ObjectError::CorruptObject(format!("invalid entry mode {other:?}")).into())
            }
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
