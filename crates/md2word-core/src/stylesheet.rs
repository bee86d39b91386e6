//! Stylesheet derived from `EditorConfig`.
//!
//! Every rule is scoped to `.word-preview`, so the configuration never leaks
//! into the Markdown panel or the sidebar.

use crate::config::EditorConfig;

/// Class carried by the editable preview surface.
pub const PREVIEW_CLASS: &str = "word-preview";

/// Companion rule for the diamond bullet, which has no native list-style keyword.
pub const DIAMOND_MARKER_RULE: &str =
    r#".word-preview ul[data-marker="diamond"] > li::marker{content:'◆ ';}"#;

/// Generate the preview stylesheet for `config`.
///
/// Pure: the same config always yields byte-identical output.
pub fn preview_stylesheet(config: &EditorConfig) -> String {
    let fonts = &config.font_family;
    let sizes = &config.font_size;

    format!(
        r#".word-preview {{
    font-family: {english}, {chinese};
    font-size: {body}px;
    line-height: 1.6;
    color: #1f2937;
}}
.word-preview h1 {{
    font-size: {h1}px;
    font-weight: bold;
    margin-top: 12px;
    margin-bottom: 8px;
    border-bottom: 1px solid #e2e8f0;
    padding-bottom: 2px;
}}
.word-preview h2 {{
    font-size: {h2}px;
    font-weight: bold;
    margin-top: 10px;
    margin-bottom: 6px;
}}
.word-preview h3 {{
    font-size: {h3}px;
    font-weight: bold;
    margin-top: 8px;
    margin-bottom: 4px;
}}
.word-preview p {{
    margin-bottom: 12px;
}}
.word-preview ul, .word-preview ol {{
    margin-left: 20px;
    margin-bottom: 12px;
}}
.word-preview table {{
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 12px;
}}
.word-preview th, .word-preview td {{
    border: 1px solid #cbd5e0;
    padding: 6px 10px;
}}
.word-preview th {{
    background-color: #f7fafc;
    font-weight: bold;
}}
.word-preview code {{
    background-color: #e5e7eb;
    padding: 2px 4px;
    border-radius: 4px;
    font-family: monospace;
}}
.word-preview blockquote {{
    border-left: 4px solid #e2e8f0;
    padding-left: 12px;
    color: #4a5568;
    margin-left: 0;
    margin-right: 0;
}}
"#,
        english = fonts.english,
        chinese = fonts.chinese,
        body = sizes.body,
        h1 = sizes.h1,
        h2 = sizes.h2,
        h3 = sizes.h3,
    )
}
