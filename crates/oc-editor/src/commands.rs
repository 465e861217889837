//! UI-level command set.
//!
//! Each toolbar gesture maps to one discrete `UiCommand` value consumed by
//! the editor session. Effects that only the host shell can perform (file
//! picking, saving the exported bytes) come back as `EditorRequest`s.

use crate::tools::ToolKind;

/// A discrete command issued by the host toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Activate a tool. `Connector` and `Image` act immediately;
    /// `Node` arms the next canvas click.
    SetTool(ToolKind),
    /// Place a role node at the fallback position without a click
    /// (the toolbar's instant-add behavior).
    AddDefaultNode,
    /// Remove every selected object.
    DeleteSelected,
    /// Remove all objects and reset the background.
    ClearCanvas,
    /// Flatten the scene to a PNG at the fixed multiplier.
    ExportPng,
}

/// An effect the host shell must perform on the editor's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRequest {
    /// Open the platform file picker for a single image file; the chosen
    /// file comes back as `InputEvent::FileChosen`.
    PickImage,
    /// Offer the encoded bytes to the user as a downloadable file.
    SaveFile { name: String, bytes: Vec<u8> },
}
