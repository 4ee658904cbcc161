use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{action_status::ActionStatus, video_upload::VideoUpload};

/// Backend surface for the camera action endpoints. An `Err` is a transport
/// or parse failure; a backend-reported error arrives as a successful
/// `ActionStatus` with its `error` field set.
#[async_trait]
#[automock]
pub trait CameraControlGateway {
    /// `POST /toggle_camera/{mode}/` — `mode` is embedded verbatim.
    async fn toggle_camera(&self, mode: &str) -> Result<ActionStatus>;

    /// `POST /release_camera/`
    async fn release_camera(&self) -> Result<ActionStatus>;

    /// `POST /upload_video/` — multipart form, field `video`.
    async fn upload_video(&self, upload: VideoUpload) -> Result<ActionStatus>;
}
