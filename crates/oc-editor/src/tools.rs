//! Tool state for canvas interactions.
//!
//! Exactly one tool is active at a time. `Node` is an armed single-shot
//! placement; `Connector` and `Image` act at selection time and never
//! persist, so the only tools with pointer behavior are `Select` and the
//! armed `Node` placement (both handled by the editor session).

use crate::input::{InputEvent, Modifiers};
use oc_core::Scene;
use oc_raster::{hit_test, hit_test_rect};

/// The active tool determines how pointer input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Node,
    Connector,
    Image,
}

/// Cursor hint for the host shell while a tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Crosshair,
}

/// Pointer-selection state: click/shift-click selection, dragging the
/// selected objects, and marquee (rubber-band) selection on empty space.
#[derive(Debug, Default)]
pub struct SelectState {
    /// Drag state (moving the selected objects).
    dragging: bool,
    last_x: f32,
    last_y: f32,
    /// Marquee anchor, set when pointer-down hits empty space.
    marquee_start: Option<(f32, f32)>,
    /// Current marquee rectangle (normalized x, y, w, h), for the host to
    /// draw as an overlay.
    pub marquee_rect: Option<(f32, f32, f32, f32)>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset transient gesture state (called when the tool switches away).
    pub fn reset(&mut self) {
        self.dragging = false;
        self.marquee_start = None;
        self.marquee_rect = None;
    }

    /// Interpret a pointer event against the scene.
    pub fn handle(&mut self, scene: &mut Scene, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y, modifiers } => {
                self.pointer_down(scene, x, y, modifiers);
            }
            InputEvent::PointerMove { x, y, .. } => {
                self.pointer_move(scene, x, y);
            }
            InputEvent::PointerUp { .. } => {
                self.pointer_up(scene);
            }
            _ => {}
        }
    }

    fn pointer_down(&mut self, scene: &mut Scene, x: f32, y: f32, modifiers: Modifiers) {
        self.marquee_start = None;
        self.marquee_rect = None;

        if let Some(hit_id) = hit_test(scene, x, y) {
            if modifiers.shift {
                // Shift+click: toggle membership.
                scene.toggle_selected(hit_id);
            } else if !scene.is_selected(hit_id) {
                // Click on unselected object: replace selection.
                scene.select_only(hit_id);
            }
            // Clicking an already-selected object keeps the selection
            // so a multi-selection can be dragged as a unit.
            self.dragging = true;
            self.last_x = x;
            self.last_y = y;
        } else {
            // Empty space: start a marquee.
            if !modifiers.shift {
                scene.clear_selection();
            }
            self.dragging = false;
            self.marquee_start = Some((x, y));
            self.marquee_rect = Some((x, y, 0.0, 0.0));
        }
    }

    fn pointer_move(&mut self, scene: &mut Scene, x: f32, y: f32) {
        if let Some((sx, sy)) = self.marquee_start {
            self.marquee_rect = Some(normalize_rect(sx, sy, x, y));
            return;
        }
        if self.dragging && !scene.selected().is_empty() {
            let dx = x - self.last_x;
            let dy = y - self.last_y;
            self.last_x = x;
            self.last_y = y;
            scene.move_selected(dx, dy);
        }
    }

    fn pointer_up(&mut self, scene: &mut Scene) {
        if let Some((rx, ry, rw, rh)) = self.marquee_rect.take() {
            self.marquee_start = None;
            if rw > 0.0 || rh > 0.0 {
                let hits = hit_test_rect(scene, rx, ry, rw, rh);
                scene.extend_selection(hits);
            }
        }
        self.dragging = false;
    }
}

/// Normalize a drag rectangle from anchor + current positions.
fn normalize_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32, f32) {
    let rx = x1.min(x2);
    let ry = y1.min(y2);
    let rw = (x2 - x1).abs();
    let rh = (y2 - y1).abs();
    (rx, ry, rw, rh)
}
