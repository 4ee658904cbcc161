use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart;
use url::Url;

use crate::domain::gateways::camera_control::CameraControlGateway;
use crate::domain::gateways::video_library::VideoLibraryGateway;
use crate::domain::value_objects::action_status::ActionStatus;
use crate::domain::value_objects::video_listing::VideoListing;
use crate::domain::value_objects::video_upload::VideoUpload;

/// Multipart field name the backend expects the video under.
const VIDEO_FIELD: &str = "video";

/// Thin reqwest client for the camera backend. Error replies carry JSON
/// bodies with non-2xx statuses, so bodies are parsed without inspecting the
/// status line; an unparseable body is a transport-level failure.
pub struct CameraBackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CameraBackendClient {
    pub fn new(base_url: Url, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("failed to build http client")?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn post_action(&self, path: &str) -> Result<ActionStatus> {
        let resp = self.http.post(self.endpoint(path)).send().await?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl CameraControlGateway for CameraBackendClient {
    async fn toggle_camera(&self, mode: &str) -> Result<ActionStatus> {
        // `mode` goes into the path verbatim, matching the backend route.
        self.post_action(&format!("toggle_camera/{mode}/")).await
    }

    async fn release_camera(&self) -> Result<ActionStatus> {
        self.post_action("release_camera/").await
    }

    async fn upload_video(&self, upload: VideoUpload) -> Result<ActionStatus> {
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = multipart::Form::new().part(VIDEO_FIELD, part);

        let resp = self
            .http
            .post(self.endpoint("upload_video/"))
            .multipart(form)
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl VideoLibraryGateway for CameraBackendClient {
    async fn list_uploaded_videos(&self) -> Result<VideoListing> {
        let resp = self
            .http
            .get(self.endpoint("list_uploaded_videos/"))
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CameraBackendClient {
        let base_url = base.parse().expect("base url should parse");
        CameraBackendClient::new(base_url, None).expect("client should build")
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = client("http://localhost:8000");
        assert_eq!(
            client.endpoint("toggle_camera/night/"),
            "http://localhost:8000/toggle_camera/night/"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_on_base() {
        let client = client("http://localhost:8000/");
        assert_eq!(
            client.endpoint("/release_camera/"),
            "http://localhost:8000/release_camera/"
        );
    }

    #[test]
    fn mode_is_embedded_verbatim() {
        let client = client("http://cam.local");
        assert_eq!(
            client.endpoint(&format!("toggle_camera/{}/", "anti_cheating")),
            "http://cam.local/toggle_camera/anti_cheating/"
        );
    }
}
