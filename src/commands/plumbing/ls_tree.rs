use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// List the entries of a stored tree, in stored (sorted) order.
    ///
    /// Shallow: child identities are printed, never resolved into content.
    pub fn ls_tree(&mut self, object_sha: &str, name_only: bool) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha.to_string())?;

        let tree = self.database().parse_object_as_tree(&object_id)?;

        for entry in tree.entries() {
            if name_only {
                writeln!(self.writer(), "{}", entry.name())?;
            } else {
                writeln!(
                    self.writer(),
                    "{} {} {}\t{}",
                    entry.mode().as_str(),
                    entry.object_type().as_str(),
                    entry.oid().as_ref(),
                    entry.name()
                )?;
            }
        }

        Ok(())
    }
}
