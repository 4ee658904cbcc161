use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use camctl::application::usecases::camera_control::CameraControlUseCase;
use camctl::application::usecases::video_listing::VideoListingUseCase;
use camctl::application::usecases::video_upload::VideoUploadUseCase;
use camctl::cli::{Cli, Command, ListFormat};
use camctl::config::config_loader;
use camctl::infrastructure::backend_http::CameraBackendClient;
use camctl::infrastructure::fs::FsVideoPicker;
use camctl::infrastructure::presenters::{ConsoleListView, ConsoleNotifier, HtmlListView};
use camctl::observability;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("camctl exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    observability::init_observability("camctl")?;

    let config = config_loader::load(cli.backend_url)?;
    let client = Arc::new(CameraBackendClient::new(
        config.backend.base_url,
        config.backend.timeout_secs,
    )?);
    let notifier = Arc::new(ConsoleNotifier);

    match cli.command {
        Command::Toggle { mode } => {
            CameraControlUseCase::new(client, notifier)
                .toggle_camera(&mode)
                .await;
        }
        Command::Release => {
            CameraControlUseCase::new(client, notifier)
                .release_camera()
                .await;
        }
        Command::Upload { files } => {
            let picker = Arc::new(FsVideoPicker::new(files));
            VideoUploadUseCase::new(client, picker, notifier)
                .upload_video()
                .await;
        }
        Command::List { format } => match format {
            ListFormat::Text => {
                let view = Arc::new(ConsoleListView);
                VideoListingUseCase::new(client, view, notifier)
                    .list_videos()
                    .await;
            }
            ListFormat::Html => {
                let view = Arc::new(HtmlListView::new());
                VideoListingUseCase::new(client, view.clone(), notifier)
                    .list_videos()
                    .await;
                print!("{}", view.fragment());
            }
        },
    }

    Ok(())
}
