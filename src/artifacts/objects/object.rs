use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;
use std::path::PathBuf;

/// Serialization into the envelope format `<type> <size>\0<content>`.
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Deserialization from envelope content (the header has already been
/// consumed and validated by the database).
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// Identity of the object: the SHA-1 of its full envelope.
    ///
    /// Content addressing hinges on this being a pure function of the
    /// serialized bytes, so identical kind and content always hash alike.
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }

    fn object_path(&self) -> Result<PathBuf> {
        Ok(self.object_id()?.to_path())
    }
}

/// A decoded object of any recognized kind.
///
/// Commits are never produced by this crate, so their content is kept opaque.
#[derive(Debug)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Bytes),
}
