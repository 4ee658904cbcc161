pub mod camera_control;
pub mod video_library;
