//! md2word-core: Pure Rust editor logic without browser dependencies.
//!
//! This crate provides:
//! - `EditorConfig` and the derived preview stylesheet
//! - `DocumentState` - Markdown source plus the HTML derived from it
//! - `PreviewSurface` - the pristine/dirty lifecycle of the editable preview
//! - `TextEditingSurface` - the seam over the browser's selection and native commands
//! - `FormatPainter` and `ListStyler` - toolbar logic generic over that seam
//! - Export packaging, sidebar layout and host synchronisation
//!
//! Everything here runs natively, so the browser layer can stay thin.

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod export;
pub mod host;
pub mod input;
pub mod layout;
pub mod lists;
pub mod painter;
pub mod preview;
pub mod stylesheet;
pub mod surface;

pub use config::{
    ConfigField, EditorConfig, FontFamily, FontSizes, HeadingLevel, PanelColors, parse_px,
};
pub use controller::EditorController;
pub use document::{DocumentState, MarkdownParser, WeaverMarkdown};
pub use error::{EditorError, HostError, ParseError, SurfaceError, UploadError};
pub use export::{DOCUMENT_FILE_NAME, DOCUMENT_MIME_TYPE, ExportFile, wrap_document};
pub use host::{
    API_VERSION, ComponentValue, DEBOUNCE_DELAY, Debouncer, HostArgs, HostMessage, HostSync,
    InboundMessage,
};
pub use input::{
    ACCEPTED_EXTENSIONS, DEMO_MARKDOWN, PLACEHOLDER, decode_upload, has_accepted_extension,
};
pub use layout::{DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH, ResizeDrag, SidebarLayout, clamp_width};
pub use lists::{
    BulletStyle, ListKind, ListMarker, ListStyler, MARKER_ATTRIBUTE, NumberStyle, UnknownListStyle,
    nearest_list,
};
pub use painter::{FormatPainter, PainterOutcome, PainterStyle};
pub use preview::{PreviewSurface, RenderOutcome, SurfaceState};
pub use smol_str::SmolStr;
pub use stylesheet::{DIAMOND_MARKER_RULE, PREVIEW_CLASS, preview_stylesheet};
pub use surface::{NativeCommand, TextEditingSurface};
