//! In-memory stand-in for the browser's editable surface.

#![allow(dead_code)]

use md2word_core::{ListMarker, NativeCommand, PainterStyle, SurfaceError, TextEditingSurface};

#[derive(Clone, Debug, Default)]
pub struct FakeNode {
    pub tag: String,
    pub parent: Option<usize>,
    pub computed: Option<PainterStyle>,
    pub list_style_type: Option<String>,
    pub data_marker: Option<String>,
}

#[derive(Clone, Debug)]
pub struct FakeSelection {
    pub anchor: usize,
    pub text: String,
}

/// Flat node arena with a single selection.
///
/// Node 0 is `HTML`, node 1 is the editable root `DIV`; everything created
/// through `add` hangs below one of them.
#[derive(Debug)]
pub struct FakeSurface {
    pub nodes: Vec<FakeNode>,
    pub selection: Option<FakeSelection>,
    pub wrap_fails: bool,
    pub commands_fail: bool,
    pub commands: Vec<NativeCommand>,
    /// `(anchor, style)` for every successful wrap.
    pub wrapped: Vec<(usize, PainterStyle)>,
}

pub const DOCUMENT: usize = 0;
pub const ROOT: usize = 1;

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            nodes: vec![
                FakeNode {
                    tag: "HTML".into(),
                    ..Default::default()
                },
                FakeNode {
                    tag: "DIV".into(),
                    parent: Some(DOCUMENT),
                    ..Default::default()
                },
            ],
            selection: None,
            wrap_fails: false,
            commands_fail: false,
            commands: Vec::new(),
            wrapped: Vec::new(),
        }
    }

    pub fn add(&mut self, tag: &str, parent: usize) -> usize {
        self.nodes.push(FakeNode {
            tag: tag.to_string(),
            parent: Some(parent),
            ..Default::default()
        });
        self.nodes.len() - 1
    }

    pub fn add_styled(&mut self, tag: &str, parent: usize, style: PainterStyle) -> usize {
        let id = self.add(tag, parent);
        self.nodes[id].computed = Some(style);
        id
    }

    /// Select `text` inside `anchor`. Empty text is a caret.
    pub fn select(&mut self, anchor: usize, text: &str) {
        self.selection = Some(FakeSelection {
            anchor,
            text: text.to_string(),
        });
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn styles_applied_to(&self, anchor: usize) -> Vec<&PainterStyle> {
        self.wrapped
            .iter()
            .filter(|(a, _)| *a == anchor)
            .map(|(_, s)| s)
            .collect()
    }

    fn insert_list(&mut self, tag: &str) {
        let Some(sel) = self.selection.clone() else {
            return;
        };
        let parent = self.nodes[sel.anchor].parent.unwrap_or(ROOT);
        let list = self.add(tag, parent);
        let item = self.add("LI", list);
        self.selection = Some(FakeSelection {
            anchor: item,
            text: sel.text,
        });
    }
}

impl TextEditingSurface for FakeSurface {
    type Element = usize;

    fn selection_anchor_element(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.anchor)
    }

    fn selection_is_collapsed(&self) -> bool {
        self.selection.as_ref().is_none_or(|s| s.text.is_empty())
    }

    fn selected_text(&self) -> String {
        self.selection
            .as_ref()
            .map(|s| s.text.clone())
            .unwrap_or_default()
    }

    fn computed_style(&self, element: &usize) -> Option<PainterStyle> {
        self.nodes.get(*element)?.computed.clone()
    }

    fn wrap_selection(&mut self, style: &PainterStyle) -> Result<(), SurfaceError> {
        if self.wrap_fails {
            return Err(SurfaceError::Wrap("partially selected element".into()));
        }
        let sel = self.selection.as_ref().ok_or(SurfaceError::NoSelection)?;
        self.wrapped.push((sel.anchor, style.clone()));
        Ok(())
    }

    fn exec_native_command(&mut self, command: &NativeCommand) -> Result<(), SurfaceError> {
        if self.commands_fail {
            return Err(SurfaceError::Command {
                command: command.name(),
            });
        }
        self.commands.push(command.clone());
        match command {
            NativeCommand::InsertUnorderedList => self.insert_list("UL"),
            NativeCommand::InsertOrderedList => self.insert_list("OL"),
            _ => {}
        }
        Ok(())
    }

    fn parent_element(&self, element: &usize) -> Option<usize> {
        self.nodes.get(*element)?.parent
    }

    fn tag_name(&self, element: &usize) -> String {
        self.nodes[*element].tag.clone()
    }

    fn is_root(&self, element: &usize) -> bool {
        *element == ROOT
    }

    fn set_list_marker(&mut self, list: &usize, marker: ListMarker) {
        let node = &mut self.nodes[*list];
        node.list_style_type = Some(marker.list_style_type.to_string());
        node.data_marker = marker.data_marker.map(str::to_string);
    }
}

pub fn style(weight: &str, color: &str) -> PainterStyle {
    PainterStyle {
        font_weight: weight.into(),
        font_style: "normal".into(),
        text_decoration_line: "none".into(),
        color: color.into(),
        background_color: "rgba(0, 0, 0, 0)".into(),
        font_family: "Georgia".into(),
        font_size: "16px".into(),
        line_height: "25.6px".into(),
        letter_spacing: "normal".into(),
    }
}
