pub mod video_picker;

pub use video_picker::FsVideoPicker;
