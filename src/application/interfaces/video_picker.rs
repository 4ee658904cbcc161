use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::video_upload::{VideoSelection, VideoUpload};

/// The file-input analogue of the original browser client: enumerates the
/// user's current selections and opens one of them for transmission.
#[async_trait]
#[automock]
pub trait VideoPicker: Send + Sync {
    /// Current selections in selection order. May be empty.
    fn selected(&self) -> Vec<VideoSelection>;

    async fn open(&self, selection: &VideoSelection) -> Result<VideoUpload>;
}
