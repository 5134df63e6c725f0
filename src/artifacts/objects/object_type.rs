use crate::artifacts::objects::error::ObjectError;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Parse the envelope header `<type> <size>\0`.
    ///
    /// Consumes the header from the reader and returns the object type along
    /// with the declared content length. The caller is responsible for
    /// checking that the remaining bytes match the declared length.
    pub fn parse_header(reader: &mut impl BufRead) -> anyhow::Result<(ObjectType, usize)> {
        let mut object_type = Vec::new();
        reader.read_until(b' ', &mut object_type)?;
        if object_type.last() != Some(&b' ') {
            return Err(
                ObjectError::CorruptObject("envelope header has no space".to_string()).into(),
            );
        }
        object_type.pop();

        let object_type = std::str::from_utf8(&object_type)
            .map_err(|_| ObjectError::CorruptObject("envelope type is not UTF-8".to_string()))?;
        let object_type = ObjectType::try_from(object_type)?;

        let mut size = Vec::new();
        reader.read_until(b'\0', &mut size)?;
        if size.last() != Some(&b'\0') {
            return Err(
                ObjectError::CorruptObject("envelope header has no NUL".to_string()).into(),
            );
        }
        size.pop();

        let size = std::str::from_utf8(&size)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| {
                ObjectError::CorruptObject("envelope size is not a decimal integer".to_string())
            })?;

        Ok((object_type, size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            other => {
                Err(ObjectError::CorruptObject(format!("invalid object type {other:?}")).into())
            }
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
