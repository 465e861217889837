//! Headless editor session: build a small chart and export it as PNG.
//!
//! Run with `RUST_LOG=info cargo run --example headless_export` to see the
//! editor's event log. Writes `organograma.png` to the current directory.

use oc_editor::{Editor, EditorRequest, InputEvent, Modifiers, ToolKind, UiCommand};

fn click(editor: &mut Editor, x: f32, y: f32) {
    editor.handle_event(InputEvent::PointerDown {
        x,
        y,
        modifiers: Modifiers::NONE,
    });
    editor.handle_event(InputEvent::PointerUp {
        x,
        y,
        modifiers: Modifiers::NONE,
    });
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut editor = Editor::from_window(1280.0, 820.0);

    // A manager node and two reports, connected by the stock segments.
    editor.dispatch(UiCommand::SetTool(ToolKind::Node));
    click(&mut editor, 600.0, 140.0);
    editor.dispatch(UiCommand::SetTool(ToolKind::Node));
    click(&mut editor, 380.0, 420.0);
    editor.dispatch(UiCommand::SetTool(ToolKind::Node));
    click(&mut editor, 820.0, 420.0);
    editor.dispatch(UiCommand::SetTool(ToolKind::Connector));
    editor.dispatch(UiCommand::SetTool(ToolKind::Connector));

    for request in editor.dispatch(UiCommand::ExportPng) {
        if let EditorRequest::SaveFile { name, bytes } = request {
            std::fs::write(&name, bytes).map_err(|e| format!("write {name}: {e}"))?;
            println!("wrote {name}");
        }
    }
    Ok(())
}
