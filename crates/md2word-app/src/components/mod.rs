mod markdown_input;
mod sidebar;
mod toolbar;
mod word_preview;

pub use markdown_input::MarkdownInput;
pub use sidebar::Sidebar;
pub use toolbar::{EditorToolbar, ToolbarAction};
pub use word_preview::WordPreview;
