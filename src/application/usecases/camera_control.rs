use std::sync::Arc;

use tracing::error;

use crate::application::interfaces::feedback::UserNotifier;
use crate::domain::gateways::camera_control::CameraControlGateway;

/// Generic notice when the request itself failed and no backend answer was
/// obtained. The diagnostic detail goes to the log, not the user.
pub const BACKEND_UNREACHABLE_FEEDBACK: &str = "Could not reach the camera backend.";

/// Toggle and release actions against the camera backend. Every invocation
/// is independent: failures are logged, surfaced once, and never propagated.
pub struct CameraControlUseCase<G, N>
where
    G: CameraControlGateway + Send + Sync,
    N: UserNotifier,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G, N> CameraControlUseCase<G, N>
where
    G: CameraControlGateway + Send + Sync,
    N: UserNotifier,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn toggle_camera(&self, mode: &str) {
        match self.gateway.toggle_camera(mode).await {
            Ok(action_status) => self.notifier.notify(action_status.feedback()),
            Err(err) => {
                error!(error = %err, mode, "Failed to toggle camera");
                self.notifier.notify(BACKEND_UNREACHABLE_FEEDBACK);
            }
        }
    }

    pub async fn release_camera(&self) {
        match self.gateway.release_camera().await {
            Ok(action_status) => self.notifier.notify(action_status.feedback()),
            Err(err) => {
                error!(error = %err, "Failed to release camera");
                self.notifier.notify(BACKEND_UNREACHABLE_FEEDBACK);
            }
        }
    }
}
