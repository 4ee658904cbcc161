use serde::{Deserialize, Serialize};

/// Uploaded videos are served as static assets under this prefix.
pub const VIDEO_ASSET_PREFIX: &str = "/static/videos";

/// Response body of `GET /list_uploaded_videos/`. An absent `videos` field
/// means "no videos"; a present but empty list is an empty listing, which is
/// a different branch on the rendering side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoListing {
    pub videos: Option<Vec<String>>,
}

/// One renderable link to an uploaded video. Filenames come from the backend
/// verbatim; they are assumed URL-safe and are not escaped here.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoLink {
    pub file_name: String,
    pub href: String,
}

impl VideoLink {
    pub fn for_file(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            href: format!("{VIDEO_ASSET_PREFIX}/{file_name}"),
        }
    }
}

impl VideoListing {
    /// Links in the order the backend returned them, or `None` when the
    /// `videos` field is absent.
    pub fn links(&self) -> Option<Vec<VideoLink>> {
        self.videos
            .as_ref()
            .map(|videos| videos.iter().map(|file| VideoLink::for_file(file)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_href_uses_static_asset_path() {
        let link = VideoLink::for_file("a.mp4");
        assert_eq!(link.href, "/static/videos/a.mp4");
        assert_eq!(link.file_name, "a.mp4");
    }

    #[test]
    fn links_preserve_backend_order() {
        let listing = VideoListing {
            videos: Some(vec!["a.mp4".to_string(), "b.mp4".to_string()]),
        };
        let links = listing.links().expect("videos field is present");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "/static/videos/a.mp4");
        assert_eq!(links[1].href, "/static/videos/b.mp4");
    }

    #[test]
    fn absent_field_yields_no_links() {
        let listing: VideoListing =
            serde_json::from_str("{}").expect("empty body should deserialize");
        assert_eq!(listing.links(), None);
    }

    #[test]
    fn present_empty_field_yields_empty_links() {
        let listing: VideoListing =
            serde_json::from_str(r#"{"videos":[]}"#).expect("body should deserialize");
        assert_eq!(listing.links(), Some(Vec::new()));
    }
}
