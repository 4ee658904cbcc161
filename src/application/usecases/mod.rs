pub mod camera_control;
pub mod video_listing;
pub mod video_upload;
