use std::path::{Path, PathBuf};

/// A locally selected candidate file. Selections are ordered; only the first
/// one is ever uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSelection {
    pub file_name: String,
    pub path: PathBuf,
}

impl VideoSelection {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { file_name, path }
    }
}

impl From<&Path> for VideoSelection {
    fn from(path: &Path) -> Self {
        Self::from_path(path.to_path_buf())
    }
}

/// A video ready to be transmitted under the multipart field `video`.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
