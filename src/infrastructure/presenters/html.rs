use std::sync::Mutex;

use crate::application::interfaces::listing_view::{EMPTY_LISTING_TEXT, VideoListView};
use crate::domain::value_objects::video_listing::VideoLink;

/// Buffers the listing as an HTML fragment, one anchor per video opening in
/// a new browsing context. Useful for embedding the listing in a page.
pub struct HtmlListView {
    container: Mutex<String>,
}

impl HtmlListView {
    pub fn new() -> Self {
        Self {
            container: Mutex::new(String::new()),
        }
    }

    /// The rendered inner-HTML of the listing container.
    pub fn fragment(&self) -> String {
        self.container.lock().expect("listing buffer poisoned").clone()
    }
}

impl Default for HtmlListView {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoListView for HtmlListView {
    fn clear(&self) {
        self.container.lock().expect("listing buffer poisoned").clear();
    }

    fn render_links(&self, links: &[VideoLink]) {
        let mut container = self.container.lock().expect("listing buffer poisoned");
        for link in links {
            container.push_str(&format!(
                "<div><a href=\"{}\" target=\"_blank\">{}</a></div>\n",
                link.href, link.file_name
            ));
        }
    }

    fn render_empty(&self) {
        self.container
            .lock()
            .expect("listing buffer poisoned")
            .push_str(EMPTY_LISTING_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_anchor_per_link_in_order() {
        let view = HtmlListView::new();
        view.clear();
        view.render_links(&[VideoLink::for_file("a.mp4"), VideoLink::for_file("b.mp4")]);

        let fragment = view.fragment();
        let first = fragment
            .find(r#"<a href="/static/videos/a.mp4" target="_blank">a.mp4</a>"#)
            .expect("first anchor should be rendered");
        let second = fragment
            .find(r#"<a href="/static/videos/b.mp4" target="_blank">b.mp4</a>"#)
            .expect("second anchor should be rendered");
        assert!(first < second);
        assert_eq!(fragment.matches("<a ").count(), 2);
    }

    #[test]
    fn renders_empty_text_without_anchors() {
        let view = HtmlListView::new();
        view.clear();
        view.render_empty();

        assert_eq!(view.fragment(), EMPTY_LISTING_TEXT);
    }

    #[test]
    fn clear_resets_a_previous_rendering() {
        let view = HtmlListView::new();
        view.render_links(&[VideoLink::for_file("old.mp4")]);
        view.clear();
        view.render_empty();

        assert_eq!(view.fragment(), EMPTY_LISTING_TEXT);
    }
}
