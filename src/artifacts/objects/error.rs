use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;

/// Errors raised by the object database and the workspace walk.
///
/// Every failure is terminal for the operation that detects it; there are no
/// transient failure sources (local filesystem and pure computation only), so
/// nothing here is ever retried. Values convert into `anyhow::Error` via `?`
/// and remain downcastable at the command seam.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// No stored envelope exists for the given identity.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The stored bytes violate the envelope or tree-entry format contract.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// The object exists but is not of the kind the caller required.
    #[error("object {oid} is a {actual}, expected a {expected}")]
    WrongKind {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    /// A directory contains an entry outside the supported set
    /// (e.g. a symbolic link or a socket).
    #[error("unsupported entry in workspace: {}", .0.display())]
    UnsupportedEntry(PathBuf),
}
