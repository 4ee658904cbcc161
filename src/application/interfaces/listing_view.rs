use mockall::automock;

use crate::domain::value_objects::video_listing::VideoLink;

/// Text rendered when the backend reports no `videos` field at all.
pub const EMPTY_LISTING_TEXT: &str = "No videos found.";

/// Rendering surface for the uploaded-video listing. `clear` is only called
/// once a response has been parsed; a failed fetch leaves the surface as-is.
#[automock]
pub trait VideoListView: Send + Sync {
    fn clear(&self);

    /// One link per filename, in the order received from the backend.
    fn render_links(&self, links: &[VideoLink]);

    fn render_empty(&self);
}
