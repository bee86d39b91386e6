//! Error types for md2word.
//!
//! Nothing in the editor is fatal: every error here ends up logged by the
//! caller, which then degrades to "no visible effect".

use miette::Diagnostic;

/// Top-level error for editor operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum EditorError {
    /// Markdown could not be turned into HTML
    #[error(transparent)]
    #[diagnostic_source]
    Parse(#[from] ParseError),

    /// The editable surface rejected an operation
    #[error(transparent)]
    #[diagnostic_source]
    Surface(#[from] SurfaceError),

    /// Reading an uploaded file failed
    #[error(transparent)]
    #[diagnostic_source]
    Upload(#[from] UploadError),

    /// Talking to the embedding host failed
    #[error(transparent)]
    #[diagnostic_source]
    Host(#[from] HostError),

    /// Clipboard write failed, including the selection fallback
    #[error("clipboard unavailable: {0}")]
    #[diagnostic(code(md2word::clipboard))]
    Clipboard(String),

    /// The platform refused to hand the export to the user
    #[error("download failed: {0}")]
    #[diagnostic(code(md2word::download))]
    Download(String),
}

/// Markdown parser failure or absence.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no markdown parser configured")]
    #[diagnostic(
        code(md2word::parse::unavailable),
        help("the preview stays empty until a parser is available")
    )]
    Unavailable,

    #[error("markdown parser failed: {0}")]
    #[diagnostic(code(md2word::parse::failed))]
    Failed(String),
}

/// Error reported by a `TextEditingSurface` implementation.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// There is no selection to act on.
    #[error("no selection")]
    #[diagnostic(code(md2word::surface::no_selection))]
    NoSelection,

    /// The selection crosses a boundary a single wrapping element cannot span.
    #[error("selection cannot be wrapped: {0}")]
    #[diagnostic(code(md2word::surface::wrap))]
    Wrap(String),

    /// The native command was refused or is unsupported.
    #[error("native command `{command}` failed")]
    #[diagnostic(code(md2word::surface::command))]
    Command { command: &'static str },

    /// Anything else the platform reported.
    #[error("{0}")]
    #[diagnostic(code(md2word::surface::platform))]
    Platform(String),
}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError::Platform(s.to_string())
    }
}

impl From<String> for SurfaceError {
    fn from(s: String) -> Self {
        SurfaceError::Platform(s)
    }
}

/// Uploaded file could not be read.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("failed to read `{name}`: {reason}")]
#[diagnostic(code(md2word::upload))]
pub struct UploadError {
    pub name: String,
    pub reason: String,
}

/// Host protocol failure.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum HostError {
    /// Message could not be (de)serialised
    #[error("host message encoding: {0}")]
    #[diagnostic(code(md2word::host::encode))]
    Encode(#[from] serde_json::Error),

    /// There is no parent frame to talk to
    #[error("no host frame")]
    #[diagnostic(code(md2word::host::detached))]
    Detached,

    /// postMessage or another platform call failed
    #[error("host transport: {0}")]
    #[diagnostic(code(md2word::host::transport))]
    Transport(String),
}
