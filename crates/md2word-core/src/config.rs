//! Editor configuration: fonts, sizes and panel colors.
//!
//! The record is always fully populated. Edits replace exactly one leaf field,
//! leaving the rest untouched. Serialisation uses the camelCase keys the
//! embedding host already stores (`fontFamily.english`, `colors.wordBg`, ...).

use serde::{Deserialize, Deserializer, Serialize};

/// Complete style configuration for the preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    pub font_family: FontFamily,
    pub font_size: FontSizes,
    pub colors: PanelColors,
}

/// Font stacks for Latin-script and CJK text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub english: String,
    pub chinese: String,
}

/// Font sizes in pixels.
///
/// Sizes arriving over the wire go through the same lenient conversion as
/// form input, so a host that stores `32.0` or `-5` does not lose the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    #[serde(deserialize_with = "lenient_px")]
    pub h1: u32,
    #[serde(deserialize_with = "lenient_px")]
    pub h2: u32,
    #[serde(deserialize_with = "lenient_px")]
    pub h3: u32,
    #[serde(deserialize_with = "lenient_px")]
    pub body: u32,
}

/// Background colors, one per panel, as CSS color strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelColors {
    pub markdown_bg: String,
    pub word_bg: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamily {
                english: "Times New Roman, serif".to_string(),
                chinese: r#""Microsoft YaHei", "微软雅黑", sans-serif"#.to_string(),
            },
            font_size: FontSizes {
                h1: 32,
                h2: 24,
                h3: 20,
                body: 16,
            },
            colors: PanelColors {
                markdown_bg: "#ffffff".to_string(),
                word_bg: "#ffffff".to_string(),
            },
        }
    }
}

/// Which font size a size edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    Body,
}

impl HeadingLevel {
    /// All levels in sidebar order.
    pub const ALL: [HeadingLevel; 4] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::Body,
    ];

    /// Label shown next to the size input.
    pub fn label(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::Body => "BODY",
        }
    }
}

/// A single leaf edit to the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigField {
    EnglishFont(String),
    ChineseFont(String),
    FontSize(HeadingLevel, u32),
    MarkdownBackground(String),
    WordBackground(String),
}

impl ConfigField {
    /// Build a size edit from raw form input.
    ///
    /// See `parse_px` for how odd input is mapped.
    pub fn font_size_from_input(level: HeadingLevel, input: &str) -> Self {
        ConfigField::FontSize(level, parse_px(input))
    }
}

impl FontSizes {
    pub fn get(&self, level: HeadingLevel) -> u32 {
        match level {
            HeadingLevel::H1 => self.h1,
            HeadingLevel::H2 => self.h2,
            HeadingLevel::H3 => self.h3,
            HeadingLevel::Body => self.body,
        }
    }

    fn set(&mut self, level: HeadingLevel, px: u32) {
        match level {
            HeadingLevel::H1 => self.h1 = px,
            HeadingLevel::H2 => self.h2 = px,
            HeadingLevel::H3 => self.h3 = px,
            HeadingLevel::Body => self.body = px,
        }
    }
}

impl EditorConfig {
    /// Replace one field. Returns whether anything changed.
    pub fn set(&mut self, field: ConfigField) -> bool {
        let before = self.clone();
        match field {
            ConfigField::EnglishFont(v) => self.font_family.english = v,
            ConfigField::ChineseFont(v) => self.font_family.chinese = v,
            ConfigField::FontSize(level, px) => self.font_size.set(level, px),
            ConfigField::MarkdownBackground(v) => self.colors.markdown_bg = v,
            ConfigField::WordBackground(v) => self.colors.word_bg = v,
        }
        *self != before
    }

    /// Copy with one field replaced.
    pub fn with(mut self, field: ConfigField) -> Self {
        self.set(field);
        self
    }
}

/// Pixel size from the signed integer prefix of `input`.
///
/// Leading whitespace and an optional sign are accepted. No digits gives 0.
/// The result saturates into `u32`: negative sizes become 0 and anything past
/// `u32::MAX` becomes `u32::MAX`.
pub fn parse_px(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || negative {
        return 0;
    }
    rest[..digits]
        .parse::<u64>()
        .map_or(u32::MAX, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Pixel size from a float, truncated toward zero and saturated into `u32`.
fn px_from_f64(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.trunc().min(u32::MAX as f64) as u32
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPx {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

fn lenient_px<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(match RawPx::deserialize(deserializer)? {
        RawPx::Unsigned(n) => u32::try_from(n).unwrap_or(u32::MAX),
        RawPx::Signed(_) => 0,
        RawPx::Float(f) => px_from_f64(f),
        RawPx::Text(s) => parse_px(&s),
    })
}
