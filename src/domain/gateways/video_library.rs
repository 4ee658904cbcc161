use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::video_listing::VideoListing;

#[async_trait]
#[automock]
pub trait VideoLibraryGateway {
    /// `GET /list_uploaded_videos/`
    async fn list_uploaded_videos(&self) -> Result<VideoListing>;
}
