//! Sidebar layout: open/closed flag and a clamped, drag-resizable width.
//!
//! Session-only state; nothing here is persisted.

/// Narrowest sidebar width in CSS pixels.
pub const MIN_WIDTH: u32 = 280;
/// Widest sidebar width in CSS pixels.
pub const MAX_WIDTH: u32 = 500;
/// Width a fresh session starts with.
pub const DEFAULT_WIDTH: u32 = 320;

/// Sidebar open flag and width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarLayout {
    open: bool,
    width: u32,
    drag: ResizeDrag,
}

impl Default for SidebarLayout {
    fn default() -> Self {
        Self {
            open: true,
            width: DEFAULT_WIDTH,
            drag: ResizeDrag::default(),
        }
    }
}

/// Clamp a proposed width into `[MIN_WIDTH, MAX_WIDTH]`.
///
/// Accepts any pointer coordinate, including negative or non-finite ones.
pub fn clamp_width(proposed: f64) -> u32 {
    if proposed.is_nan() {
        return MIN_WIDTH;
    }
    proposed.round().clamp(MIN_WIDTH as f64, MAX_WIDTH as f64) as u32
}

impl SidebarLayout {
    /// Layout with an explicit starting width (clamped).
    pub fn with_width(width: u32) -> Self {
        Self {
            width: clamp_width(width as f64),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_active()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the sidebar. Any drag in progress is abandoned.
    pub fn close(&mut self) {
        self.open = false;
        self.drag.end();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Pointer-down on the resize handle. Ignored while closed.
    pub fn begin_resize(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.drag.begin();
        true
    }

    /// Pointer moved during a drag; returns the new width if it changed.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<u32> {
        let width = self.drag.track(pointer_x)?;
        if width == self.width {
            return None;
        }
        self.width = width;
        Some(width)
    }

    /// Pointer-up: end the drag wherever the pointer is.
    pub fn end_resize(&mut self) {
        self.drag.end();
    }
}

/// Resize drag in progress or not.
///
/// Movement is only tracked between `begin` and `end`; the platform installs
/// its move/up listeners for exactly that window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeDrag {
    active: bool,
}

impl ResizeDrag {
    pub fn begin(&mut self) {
        self.active = true;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clamped width for a pointer position, or `None` when not dragging.
    pub fn track(&self, pointer_x: f64) -> Option<u32> {
        self.active.then(|| clamp_width(pointer_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = SidebarLayout::default();
        assert!(layout.is_open());
        assert_eq!(layout.width(), 320);
        assert!(!layout.is_resizing());
    }

    #[test]
    fn test_with_width_clamps() {
        assert_eq!(SidebarLayout::with_width(260).width(), MIN_WIDTH);
        assert_eq!(SidebarLayout::with_width(900).width(), MAX_WIDTH);
    }

    #[test]
    fn test_drag_clamps_every_move() {
        let mut layout = SidebarLayout::default();
        assert!(layout.begin_resize());
        assert_eq!(layout.drag_to(400.0), Some(400));
        assert_eq!(layout.drag_to(-5000.0), Some(MIN_WIDTH));
        assert_eq!(layout.drag_to(1e9), Some(MAX_WIDTH));
        assert_eq!(layout.drag_to(f64::INFINITY), None);
        assert_eq!(layout.width(), MAX_WIDTH);
        layout.end_resize();
        assert_eq!(layout.drag_to(300.0), None);
        assert_eq!(layout.width(), MAX_WIDTH);
    }

    #[test]
    fn test_moves_ignored_without_drag() {
        let mut layout = SidebarLayout::default();
        assert_eq!(layout.drag_to(450.0), None);
        assert_eq!(layout.width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_closed_sidebar_does_not_resize() {
        let mut layout = SidebarLayout::default();
        layout.toggle();
        assert!(!layout.is_open());
        assert!(!layout.begin_resize());
        assert_eq!(layout.drag_to(450.0), None);
    }

    #[test]
    fn test_close_abandons_drag() {
        let mut layout = SidebarLayout::default();
        layout.begin_resize();
        layout.close();
        assert!(!layout.is_resizing());
        layout.open();
        assert_eq!(layout.drag_to(450.0), None);
    }

    #[test]
    fn test_clamp_width_nan() {
        assert_eq!(clamp_width(f64::NAN), MIN_WIDTH);
        assert_eq!(clamp_width(f64::NEG_INFINITY), MIN_WIDTH);
    }
}
