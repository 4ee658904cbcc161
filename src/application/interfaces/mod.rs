pub mod feedback;
pub mod listing_view;
pub mod video_picker;
