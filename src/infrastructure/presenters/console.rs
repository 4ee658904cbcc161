use crate::application::interfaces::feedback::UserNotifier;
use crate::application::interfaces::listing_view::{EMPTY_LISTING_TEXT, VideoListView};
use crate::domain::value_objects::video_listing::VideoLink;

/// Prints notices straight to stdout, one line per notice.
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Plain-text listing view: one `name<TAB>href` line per video.
pub struct ConsoleListView;

impl VideoListView for ConsoleListView {
    fn clear(&self) {
        // A fresh terminal run has nothing to clear.
    }

    fn render_links(&self, links: &[VideoLink]) {
        for link in links {
            println!("{}\t{}", link.file_name, link.href);
        }
    }

    fn render_empty(&self) {
        println!("{EMPTY_LISTING_TEXT}");
    }
}
