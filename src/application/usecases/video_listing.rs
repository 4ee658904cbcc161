use std::sync::Arc;

use tracing::error;

use crate::application::interfaces::feedback::UserNotifier;
use crate::application::interfaces::listing_view::VideoListView;
use crate::application::usecases::camera_control::BACKEND_UNREACHABLE_FEEDBACK;
use crate::domain::gateways::video_library::VideoLibraryGateway;

pub struct VideoListingUseCase<G, V, N>
where
    G: VideoLibraryGateway + Send + Sync,
    V: VideoListView,
    N: UserNotifier,
{
    gateway: Arc<G>,
    view: Arc<V>,
    notifier: Arc<N>,
}

impl<G, V, N> VideoListingUseCase<G, V, N>
where
    G: VideoLibraryGateway + Send + Sync,
    V: VideoListView,
    N: UserNotifier,
{
    pub fn new(gateway: Arc<G>, view: Arc<V>, notifier: Arc<N>) -> Self {
        Self {
            gateway,
            view,
            notifier,
        }
    }

    /// Fetches the listing and re-renders the view. The view is cleared only
    /// once a response has been parsed; a failed fetch leaves it untouched.
    pub async fn list_videos(&self) {
        let listing = match self.gateway.list_uploaded_videos().await {
            Ok(listing) => listing,
            Err(err) => {
                error!(error = %err, "Failed to list uploaded videos");
                self.notifier.notify(BACKEND_UNREACHABLE_FEEDBACK);
                return;
            }
        };

        self.view.clear();
        match listing.links() {
            Some(links) => self.view.render_links(&links),
            None => self.view.render_empty(),
        }
    }
}
