//! Input abstraction layer.
//!
//! Normalizes host events (pointer, file picker result, window resize)
//! into a unified `InputEvent` enum consumed by the editor, so the
//! controller can be driven deterministically in tests.

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        alt: false,
        ctrl: false,
    };
}

/// A normalized event from the host shell.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer pressed on the canvas, in canvas coordinates.
    PointerDown { x: f32, y: f32, modifiers: Modifiers },

    /// Pointer moved.
    PointerMove { x: f32, y: f32, modifiers: Modifiers },

    /// Pointer released.
    PointerUp { x: f32, y: f32, modifiers: Modifiers },

    /// The file picker resolved with an uploaded file, read fully into
    /// memory.
    FileChosen { bytes: Vec<u8> },

    /// The host window changed size; the drawing surface is derived from
    /// it minus the fixed chrome margins.
    WindowResized { width: f32, height: f32 },
}
