use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::application::interfaces::video_picker::VideoPicker;
use crate::domain::value_objects::video_upload::{VideoSelection, VideoUpload};

/// Filesystem-backed picker: the caller's path arguments are the selection,
/// in the order they were given.
pub struct FsVideoPicker {
    selections: Vec<VideoSelection>,
}

impl FsVideoPicker {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let selections = paths.into_iter().map(VideoSelection::from_path).collect();
        Self { selections }
    }
}

#[async_trait]
impl VideoPicker for FsVideoPicker {
    fn selected(&self) -> Vec<VideoSelection> {
        self.selections.clone()
    }

    async fn open(&self, selection: &VideoSelection) -> Result<VideoUpload> {
        let bytes = tokio::fs::read(&selection.path)
            .await
            .with_context(|| format!("failed to read {}", selection.path.display()))?;
        let content_type = mime_guess::from_path(&selection.path)
            .first_or_octet_stream()
            .to_string();

        Ok(VideoUpload {
            file_name: selection.file_name.clone(),
            content_type,
            bytes,
        })
    }
}
