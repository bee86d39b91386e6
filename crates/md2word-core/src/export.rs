//! Packaging the edited preview as a downloadable document.
//!
//! Word opens an HTML file served as `application/msword` with a `.doc`
//! extension, so the export is the surface markup in a minimal skeleton.

/// Name of the downloaded file.
pub const DOCUMENT_FILE_NAME: &str = "document.doc";

/// MIME type that associates the download with a word processor.
pub const DOCUMENT_MIME_TYPE: &str = "application/msword";

const SKELETON_HEAD: &str = r#"<!DOCTYPE html><html><head><meta charset="utf-8"></head><body>"#;
const SKELETON_TAIL: &str = "</body></html>";

/// Wrap surface markup in the fixed document skeleton.
pub fn wrap_document(body: &str) -> String {
    let mut out = String::with_capacity(SKELETON_HEAD.len() + body.len() + SKELETON_TAIL.len());
    out.push_str(SKELETON_HEAD);
    out.push_str(body);
    out.push_str(SKELETON_TAIL);
    out
}

/// A file ready to hand to the platform's download mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Build the download from the surface's current inner markup.
    pub fn from_surface_html(inner_html: &str) -> Self {
        Self {
            file_name: DOCUMENT_FILE_NAME,
            mime_type: DOCUMENT_MIME_TYPE,
            contents: wrap_document(inner_html),
        }
    }
}
