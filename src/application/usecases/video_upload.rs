use std::sync::Arc;

use tracing::error;

use crate::application::interfaces::feedback::UserNotifier;
use crate::application::interfaces::video_picker::VideoPicker;
use crate::application::usecases::camera_control::BACKEND_UNREACHABLE_FEEDBACK;
use crate::domain::gateways::camera_control::CameraControlGateway;

pub const SELECT_FILE_FEEDBACK: &str = "Please select a video file.";
pub const UNREADABLE_FILE_FEEDBACK: &str = "Could not read the selected video file.";

pub struct VideoUploadUseCase<G, P, N>
where
    G: CameraControlGateway + Send + Sync,
    P: VideoPicker,
    N: UserNotifier,
{
    gateway: Arc<G>,
    picker: Arc<P>,
    notifier: Arc<N>,
}

impl<G, P, N> VideoUploadUseCase<G, P, N>
where
    G: CameraControlGateway + Send + Sync,
    P: VideoPicker,
    N: UserNotifier,
{
    pub fn new(gateway: Arc<G>, picker: Arc<P>, notifier: Arc<N>) -> Self {
        Self {
            gateway,
            picker,
            notifier,
        }
    }

    /// Uploads the first selected video. With no selection the operation
    /// short-circuits before any network involvement.
    pub async fn upload_video(&self) {
        let selections = self.picker.selected();
        let Some(first) = selections.first() else {
            self.notifier.notify(SELECT_FILE_FEEDBACK);
            return;
        };

        // Only the first selection is uploaded, later ones are ignored.
        let upload = match self.picker.open(first).await {
            Ok(upload) => upload,
            Err(err) => {
                error!(error = %err, file = %first.file_name, "Failed to read selected video");
                self.notifier.notify(UNREADABLE_FILE_FEEDBACK);
                return;
            }
        };

        match self.gateway.upload_video(upload).await {
            Ok(action_status) => self.notifier.notify(action_status.feedback()),
            Err(err) => {
                error!(error = %err, file = %first.file_name, "Failed to upload video");
                self.notifier.notify(BACKEND_UNREACHABLE_FEEDBACK);
            }
        }
    }
}
