pub mod console;
pub mod html;

pub use console::{ConsoleListView, ConsoleNotifier};
pub use html::HtmlListView;
