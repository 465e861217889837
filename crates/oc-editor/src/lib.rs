pub mod commands;
pub mod editor;
pub mod input;
pub mod tools;

pub use commands::{EditorRequest, UiCommand};
pub use editor::Editor;
pub use input::{InputEvent, Modifiers};
pub use tools::{CursorHint, ToolKind};
