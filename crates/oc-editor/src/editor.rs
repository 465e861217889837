//! The editor session: owns the scene, the active tool, and transient
//! gesture state, and turns commands/events into scene mutations.
//!
//! The session is single-threaded by construction — every entry point
//! takes `&mut self`, so the host event loop serializes all mutations.

use crate::commands::{EditorRequest, UiCommand};
use crate::input::InputEvent;
use crate::tools::{CursorHint, SelectState, ToolKind};
use oc_core::model::Viewport;
use oc_core::{defaults, Scene};
use oc_raster::export_png;

pub struct Editor {
    scene: Scene,
    active_tool: ToolKind,
    select: SelectState,
}

impl Editor {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(viewport),
            active_tool: ToolKind::Select,
            select: SelectState::new(),
        }
    }

    /// Create an editor sized from the host window (chrome margins
    /// subtracted).
    pub fn from_window(window_width: f32, window_height: f32) -> Self {
        Self::new(Viewport::from_window(window_width, window_height))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Marquee overlay rectangle for the host to draw, if a rubber-band
    /// selection is in progress.
    pub fn marquee_rect(&self) -> Option<(f32, f32, f32, f32)> {
        self.select.marquee_rect
    }

    /// Cursor the host should show: crosshair while a node placement is
    /// armed, default otherwise.
    pub fn cursor(&self) -> CursorHint {
        match self.active_tool {
            ToolKind::Node => CursorHint::Crosshair,
            _ => CursorHint::Default,
        }
    }

    /// Consume one toolbar command. Returns any effects the host shell
    /// must perform.
    pub fn dispatch(&mut self, command: UiCommand) -> Vec<EditorRequest> {
        match command {
            UiCommand::SetTool(ToolKind::Select) => {
                self.set_tool(ToolKind::Select);
                vec![]
            }
            UiCommand::SetTool(ToolKind::Node) => {
                // Arm the single-shot placement; the next canvas click
                // places the node.
                self.set_tool(ToolKind::Node);
                vec![]
            }
            UiCommand::SetTool(ToolKind::Connector) => {
                // Immediate: no drag-to-draw interaction exists.
                self.scene.add_connector();
                self.set_tool(ToolKind::Select);
                vec![]
            }
            UiCommand::SetTool(ToolKind::Image) => {
                self.set_tool(ToolKind::Select);
                vec![EditorRequest::PickImage]
            }
            UiCommand::AddDefaultNode => {
                self.scene.add_role_node_default();
                vec![]
            }
            UiCommand::DeleteSelected => {
                self.scene.remove_selected();
                vec![]
            }
            UiCommand::ClearCanvas => {
                self.scene.clear();
                vec![]
            }
            UiCommand::ExportPng => match export_png(&self.scene, defaults::EXPORT_MULTIPLIER) {
                Ok(bytes) => {
                    log::info!("exported {} ({} bytes)", defaults::EXPORT_FILENAME, bytes.len());
                    vec![EditorRequest::SaveFile {
                        name: defaults::EXPORT_FILENAME.to_string(),
                        bytes,
                    }]
                }
                Err(e) => {
                    log::warn!("export failed: {e}");
                    vec![]
                }
            },
        }
    }

    /// Consume one normalized input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::WindowResized { width, height } => {
                self.scene
                    .set_viewport(Viewport::from_window(width, height));
            }
            InputEvent::FileChosen { bytes } => {
                if let Err(e) = self.scene.add_image(&bytes) {
                    // The scene is unchanged; report and carry on.
                    log::warn!("dropped uploaded image: {e}");
                }
            }
            ref pointer => match self.active_tool {
                ToolKind::Select => self.select.handle(&mut self.scene, pointer),
                ToolKind::Node => self.handle_armed_placement(pointer),
                // Connector and Image never persist as active tools, but
                // a stray event while they are set is simply ignored.
                ToolKind::Connector | ToolKind::Image => {}
            },
        }
    }

    /// Armed node placement: the click position is offset so it lands near
    /// the node's visual center, then the tool reverts to select.
    fn handle_armed_placement(&mut self, event: &InputEvent) {
        if let InputEvent::PointerDown { x, y, .. } = *event {
            let (ox, oy) = defaults::NODE_CLICK_OFFSET;
            self.scene.add_role_node(x - ox, y - oy);
            self.set_tool(ToolKind::Select);
        }
    }

    fn set_tool(&mut self, tool: ToolKind) {
        if self.active_tool != tool {
            self.select.reset();
        }
        self.active_tool = tool;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use pretty_assertions::assert_eq;

    fn editor() -> Editor {
        Editor::new(Viewport {
            width: 800.0,
            height: 600.0,
        })
    }

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

    #[test]
    fn starts_in_select_with_empty_scene() {
        let e = editor();
        assert_eq!(e.active_tool(), ToolKind::Select);
        assert!(e.scene().is_empty());
        assert_eq!(e.cursor(), CursorHint::Default);
    }

    #[test]
    fn armed_node_placement_offsets_the_click_and_reverts() {
        let mut e = editor();
        let requests = e.dispatch(UiCommand::SetTool(ToolKind::Node));
        assert!(requests.is_empty());
        assert_eq!(e.active_tool(), ToolKind::Node);
        assert_eq!(e.cursor(), CursorHint::Crosshair);

        click(&mut e, 400.0, 300.0);

        assert_eq!(e.scene().len(), 3);
        let rect = &e.scene().objects()[0];
        assert_eq!((rect.x, rect.y), (300.0, 240.0));
        assert_eq!(e.active_tool(), ToolKind::Select);
    }

    #[test]
    fn armed_placement_fires_once() {
        let mut e = editor();
        e.dispatch(UiCommand::SetTool(ToolKind::Node));
        click(&mut e, 400.0, 300.0);
        // Back in select: a click on empty space selects, never places.
        click(&mut e, 700.0, 500.0);
        assert_eq!(e.scene().len(), 3);
    }

    #[test]
    fn connector_tool_acts_immediately() {
        let mut e = editor();
        let requests = e.dispatch(UiCommand::SetTool(ToolKind::Connector));
        assert!(requests.is_empty());
        assert_eq!(e.scene().len(), 1);
        assert_eq!(e.active_tool(), ToolKind::Select);

        // Repeated activations stack identical connectors.
        e.dispatch(UiCommand::SetTool(ToolKind::Connector));
        e.dispatch(UiCommand::SetTool(ToolKind::Connector));
        assert_eq!(e.scene().len(), 3);
    }

    #[test]
    fn image_tool_requests_a_file_pick() {
        let mut e = editor();
        let requests = e.dispatch(UiCommand::SetTool(ToolKind::Image));
        assert_eq!(requests, vec![EditorRequest::PickImage]);
        assert_eq!(e.active_tool(), ToolKind::Select);
        assert!(e.scene().is_empty());
    }

    #[test]
    fn file_chosen_adds_a_decoded_image() {
        let mut e = editor();
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 255, 0, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        e.handle_event(InputEvent::FileChosen { bytes: png });
        assert_eq!(e.scene().len(), 1);
    }

    #[test]
    fn undecodable_file_is_dropped_silently() {
        let mut e = editor();
        e.handle_event(InputEvent::FileChosen {
            bytes: b"not an image".to_vec(),
        });
        assert!(e.scene().is_empty());
    }

    #[test]
    fn add_default_node_uses_the_fallback_position() {
        let mut e = editor();
        e.dispatch(UiCommand::AddDefaultNode);
        assert_eq!(e.scene().len(), 3);
        let rect = &e.scene().objects()[0];
        assert_eq!((rect.x, rect.y), (200.0, 150.0));
    }

    #[test]
    fn delete_selected_and_clear() {
        let mut e = editor();
        e.dispatch(UiCommand::AddDefaultNode);
        e.dispatch(UiCommand::SetTool(ToolKind::Connector));
        assert_eq!(e.scene().len(), 4);

        // Nothing selected: delete is a no-op.
        e.dispatch(UiCommand::DeleteSelected);
        assert_eq!(e.scene().len(), 4);

        // Select the rect by clicking near its corner, then delete.
        click(&mut e, 210.0, 155.0);
        assert_eq!(e.scene().selected().len(), 1);
        e.dispatch(UiCommand::DeleteSelected);
        assert_eq!(e.scene().len(), 3);

        e.dispatch(UiCommand::ClearCanvas);
        assert!(e.scene().is_empty());
    }

    #[test]
    fn export_returns_a_save_request_with_the_fixed_name() {
        let mut e = editor();
        let requests = e.dispatch(UiCommand::ExportPng);
        assert_eq!(requests.len(), 1);
        match &requests[0] {
            EditorRequest::SaveFile { name, bytes } => {
                assert_eq!(name, "organograma.png");
                assert!(!bytes.is_empty());
            }
            r => panic!("expected SaveFile, got {r:?}"),
        }
    }

    #[test]
    fn resize_never_touches_objects() {
        let mut e = editor();
        e.dispatch(UiCommand::AddDefaultNode);
        let before: Vec<(f32, f32)> = e.scene().objects().iter().map(|o| (o.x, o.y)).collect();

        e.handle_event(InputEvent::WindowResized {
            width: 1440.0,
            height: 900.0,
        });
        e.handle_event(InputEvent::WindowResized {
            width: 640.0,
            height: 480.0,
        });

        assert_eq!(e.scene().len(), 3);
        let after: Vec<(f32, f32)> = e.scene().objects().iter().map(|o| (o.x, o.y)).collect();
        assert_eq!(before, after);
        assert_eq!(e.scene().viewport.width, 560.0);
        assert_eq!(e.scene().viewport.height, 380.0);
    }

    #[test]
    fn switching_tools_cancels_an_armed_placement() {
        let mut e = editor();
        e.dispatch(UiCommand::SetTool(ToolKind::Node));
        e.dispatch(UiCommand::SetTool(ToolKind::Select));
        click(&mut e, 400.0, 300.0);
        assert!(e.scene().is_empty());
    }
}
