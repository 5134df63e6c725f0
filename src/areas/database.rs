use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::error::ObjectError;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// The on-disk object database.
///
/// Envelopes are zlib-compressed and stored under a two-level fanout:
/// the first two hex characters of the identity name the bucket directory,
/// the remaining 38 name the file. Objects are write-once: an identity that
/// already exists on disk is never rewritten nor re-encoded.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist an object unless its identity is already stored.
    pub fn store(&self, object: impl Object) -> anyhow::Result<()> {
        let object_path = self.path.join(object.object_path()?);
        let object_content = object.serialize()?;

        // write the object to disk unless it already exists
        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object_content)?;
        }

        Ok(())
    }

    /// Load and decode the object with the given identity.
    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, content) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(Cursor::new(
                content,
            ))?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(Cursor::new(
                content,
            ))?))),
            // commits are never produced here; their content stays opaque
            ObjectType::Commit => Ok(ObjectBox::Commit(content)),
        }
    }

    /// Load an object that the caller requires to be a tree.
    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        let (object_type, content) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Tree => Tree::deserialize(Cursor::new(content)),
            actual => Err(ObjectError::WrongKind {
                oid: object_id.clone(),
                expected: ObjectType::Tree,
                actual,
            }
            .into()),
        }
    }

    /// Read, decompress, and validate an envelope, returning its kind and
    /// content.
    ///
    /// The declared length in the header must match the remaining byte count
    /// exactly; a mismatch is corruption, not something to trust silently.
    fn parse_object_as_bytes(&self, object_id: &ObjectId) -> anyhow::Result<(ObjectType, Bytes)> {
        let envelope = self.read_object(object_id)?;

        let mut reader = Cursor::new(&envelope[..]);
        let (object_type, declared_size) = ObjectType::parse_header(&mut reader)?;

        let content = envelope.slice(reader.position() as usize..);
        if content.len() != declared_size {
            return Err(ObjectError::CorruptObject(format!(
                "envelope of {object_id} declares {declared_size} content bytes but carries {}",
                content.len()
            ))
            .into());
        }

        Ok((object_type, content))
    }

    fn read_object(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(ObjectError::NotFound(object_id.clone()).into());
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into()).map_err(|_| {
            ObjectError::CorruptObject(format!("unable to decompress object {object_id}")).into()
        })
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
