//! Markdown input panel helpers: upload decoding and the seed document.

use crate::error::UploadError;

/// Advisory file-picker filter. Not enforced: any file is read as text.
pub const ACCEPTED_EXTENSIONS: &str = ".md,.txt";

/// Placeholder shown in an empty Markdown panel.
pub const PLACEHOLDER: &str = "Paste your Markdown here or upload a file...";

/// Document the standalone page opens with.
pub const DEMO_MARKDOWN: &str = r#"# Markdown to Word Converter

This is a demo of a real-time Markdown to Word converter.

## Features

- **Side-by-side view**: Edit Markdown on the left and see the styled, editable preview on the right.
- **Customizable Styles**: Use the sidebar to change fonts and font sizes for headings.
- **Editable Preview**: Fine-tune the output directly in the right panel using the editor toolbar.

### How to use

1.  Type or paste Markdown in this panel.
2.  Upload a `.md` file.
3.  Open the sidebar on the left to configure styles.
4.  Use the toolbar above the right panel to make final edits.

---

### Example Table

| Feature         | Status      | Priority |
|-----------------|-------------|----------|
| Markdown Parsing| Done        | High     |
| Style Config    | Done        | High     |
| Editable Output | Done        | Medium   |
| Export to .docx | Not planned | Low      |

### Example List

- Bullet item 1
- Bullet item 2
  - Nested item
"#;

/// Turn the outcome of reading an uploaded file into Markdown text.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD, the same
/// way a browser's text reader treats them. A UTF-8 byte order mark is dropped.
pub fn decode_upload(name: &str, read: Result<Vec<u8>, String>) -> Result<String, UploadError> {
    let bytes = read.map_err(|reason| UploadError {
        name: name.to_string(),
        reason,
    })?;
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Whether `name` matches the advisory extension filter.
pub fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .split(',')
        .any(|ext| lower.ends_with(ext))
}
