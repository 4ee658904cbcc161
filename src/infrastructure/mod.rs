pub mod backend_http;
pub mod fs;
pub mod presenters;
