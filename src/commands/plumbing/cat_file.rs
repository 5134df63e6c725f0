use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn cat_file(&mut self, object_sha: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha.to_string())?;

        match self.database().parse_object(&object_id)? {
            // blobs and commits print their raw content, byte for byte
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            ObjectBox::Commit(content) => self.writer().write_all(&content)?,
            ObjectBox::Tree(tree) => writeln!(self.writer(), "{}", tree.display())?,
        }

        Ok(())
    }
}
