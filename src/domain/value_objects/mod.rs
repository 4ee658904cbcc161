pub mod action_status;
pub mod video_listing;
pub mod video_upload;
