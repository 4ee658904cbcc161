pub mod client;

pub use client::CameraBackendClient;
