//! Bullet and numbering styles for lists in the preview.
//!
//! New lists are created with the native insert-list command and then
//! annotated. Changing the style selector restyles the list around the caret
//! in place.

use std::str::FromStr;

use crate::surface::{NativeCommand, TextEditingSurface};

/// Attribute carrying a custom marker the native list styles cannot express.
pub const MARKER_ATTRIBUTE: &str = "data-marker";

/// Kind of list, by tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    /// Upper-case tag name as reported by the DOM.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "UL",
            ListKind::Numbered => "OL",
        }
    }

    fn insert_command(self) -> NativeCommand {
        match self {
            ListKind::Bullet => NativeCommand::InsertUnorderedList,
            ListKind::Numbered => NativeCommand::InsertOrderedList,
        }
    }
}

/// Bullet marker for unordered lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BulletStyle {
    #[default]
    Disc,
    Circle,
    Square,
    /// No native keyword; drawn by `DIAMOND_MARKER_RULE`.
    Diamond,
}

impl BulletStyle {
    pub const ALL: [BulletStyle; 4] = [
        BulletStyle::Disc,
        BulletStyle::Circle,
        BulletStyle::Square,
        BulletStyle::Diamond,
    ];

    /// Selector value, also the CSS keyword where one exists.
    pub fn as_str(self) -> &'static str {
        match self {
            BulletStyle::Disc => "disc",
            BulletStyle::Circle => "circle",
            BulletStyle::Square => "square",
            BulletStyle::Diamond => "diamond",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BulletStyle::Disc => "• Disc",
            BulletStyle::Circle => "○ Circle",
            BulletStyle::Square => "■ Square",
            BulletStyle::Diamond => "◆ Diamond",
        }
    }

    /// What to write onto a `UL` for this style.
    pub fn marker(self) -> ListMarker {
        match self {
            BulletStyle::Diamond => ListMarker {
                list_style_type: "none",
                data_marker: Some("diamond"),
            },
            other => ListMarker {
                list_style_type: other.as_str(),
                data_marker: None,
            },
        }
    }
}

/// Numbering scheme for ordered lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumberStyle {
    #[default]
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl NumberStyle {
    pub const ALL: [NumberStyle; 5] = [
        NumberStyle::Decimal,
        NumberStyle::LowerAlpha,
        NumberStyle::UpperAlpha,
        NumberStyle::LowerRoman,
        NumberStyle::UpperRoman,
    ];

    /// The `list-style-type` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            NumberStyle::Decimal => "decimal",
            NumberStyle::LowerAlpha => "lower-alpha",
            NumberStyle::UpperAlpha => "upper-alpha",
            NumberStyle::LowerRoman => "lower-roman",
            NumberStyle::UpperRoman => "upper-roman",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberStyle::Decimal => "1, 2, 3",
            NumberStyle::LowerAlpha => "a, b, c",
            NumberStyle::UpperAlpha => "A, B, C",
            NumberStyle::LowerRoman => "i, ii, iii",
            NumberStyle::UpperRoman => "I, II, III",
        }
    }

    pub fn marker(self) -> ListMarker {
        ListMarker {
            list_style_type: self.as_str(),
            data_marker: None,
        }
    }
}

/// Marker annotation for a list element.
///
/// `data_marker: None` means the attribute must be removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListMarker {
    pub list_style_type: &'static str,
    pub data_marker: Option<&'static str>,
}

/// Unknown style keyword.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown list style `{0}`")]
pub struct UnknownListStyle(pub String);

impl FromStr for BulletStyle {
    type Err = UnknownListStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BulletStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownListStyle(s.to_string()))
    }
}

impl FromStr for NumberStyle {
    type Err = UnknownListStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownListStyle(s.to_string()))
    }
}

/// Currently selected bullet and number styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListStyler {
    pub bullet: BulletStyle,
    pub number: NumberStyle,
}

impl ListStyler {
    /// Insert a bulleted list at the caret using the selected bullet style.
    ///
    /// Returns whether a list was found and annotated.
    pub fn apply_bullet<S: TextEditingSurface>(&self, surface: &mut S) -> bool {
        insert_list(surface, ListKind::Bullet, self.bullet.marker())
    }

    /// Insert a numbered list at the caret using the selected number style.
    pub fn apply_number<S: TextEditingSurface>(&self, surface: &mut S) -> bool {
        insert_list(surface, ListKind::Numbered, self.number.marker())
    }

    /// Choose a bullet style and restyle the bulleted list around the caret, if any.
    pub fn set_bullet_style<S: TextEditingSurface>(
        &mut self,
        style: BulletStyle,
        surface: &mut S,
    ) -> bool {
        self.bullet = style;
        restyle_nearest(surface, ListKind::Bullet, style.marker())
    }

    /// Choose a number style and restyle the numbered list around the caret, if any.
    pub fn set_number_style<S: TextEditingSurface>(
        &mut self,
        style: NumberStyle,
        surface: &mut S,
    ) -> bool {
        self.number = style;
        restyle_nearest(surface, ListKind::Numbered, style.marker())
    }
}

/// Nearest ancestor of the selection anchor with the list kind's tag.
///
/// The search walks up from the anchor element and stops at the surface root,
/// so lists outside the editable surface are never touched.
pub fn nearest_list<S: TextEditingSurface>(surface: &S, kind: ListKind) -> Option<S::Element> {
    let mut current = surface.selection_anchor_element();
    while let Some(el) = current {
        if surface.is_root(&el) {
            return None;
        }
        if surface.tag_name(&el).eq_ignore_ascii_case(kind.tag()) {
            return Some(el);
        }
        current = surface.parent_element(&el);
    }
    None
}

fn insert_list<S: TextEditingSurface>(surface: &mut S, kind: ListKind, marker: ListMarker) -> bool {
    if let Err(e) = surface.exec_native_command(&kind.insert_command()) {
        tracing::warn!(error = %e, ?kind, "insert list failed");
        return false;
    }
    restyle_nearest(surface, kind, marker)
}

fn restyle_nearest<S: TextEditingSurface>(
    surface: &mut S,
    kind: ListKind,
    marker: ListMarker,
) -> bool {
    match nearest_list(surface, kind) {
        Some(list) => {
            tracing::debug!(?kind, style = marker.list_style_type, "restyling list");
            surface.set_list_marker(&list, marker);
            true
        }
        None => false,
    }
}
