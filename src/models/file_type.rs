use serde::{Deserialize, Serialize};

/// File name and extension derived from a path or URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileType {
    /// File name without extension (e.g., "document")
    pub name: String,
    /// Extension without the dot (None if the path has no alphanumeric extension)
    pub extension: Option<String>,
    /// Name and extension joined (e.g., "document.pdf"), or just the name
    pub full_name: String,
}

impl FileType {
    /// Parse a path or URL into its file name parts.
    ///
    /// The extension is whatever follows the last `.`, provided it is purely
    /// ASCII alphanumeric. Without one, the whole last path segment is the
    /// name and `full_name` equals it.
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);

        match extension_of(path) {
            Some(extension) => {
                let name = &file_name[..file_name.len() - extension.len() - 1];
                Self {
                    name: name.to_string(),
                    extension: Some(extension.to_string()),
                    full_name: format!("{}.{}", name, extension),
                }
            }
            None => Self {
                name: file_name.to_string(),
                extension: None,
                full_name: file_name.to_string(),
            },
        }
    }
}

fn extension_of(path: &str) -> Option<&str> {
    let (_, last) = path.rsplit_once('.')?;
    (!last.is_empty() && last.chars().all(|c| c.is_ascii_alphanumeric())).then_some(last)
}

/// Parse a path or URL into a [`FileType`].
pub fn path_to_file_type(path: &str) -> FileType {
    FileType::from_path(path)
}
