//! The scene surface: a z-ordered list of placed objects plus background,
//! viewport, and the multi-selection set.
//!
//! All mutations are synchronous and infallible except image decode. The
//! scene never re-renders itself — callers rasterize it after mutating
//! (see `oc-raster`).

use crate::defaults;
use crate::id::ObjectId;
use crate::model::*;
use smallvec::SmallVec;

/// The IDs spawned by one role-node placement: rectangle, name label,
/// role label — in z order.
pub type RoleNodeIds = SmallVec<[ObjectId; 3]>;

/// The drawing surface and everything placed on it.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Placed objects in paint (z) order.
    objects: Vec<SceneObject>,

    /// Background fill, white by default.
    pub background: Color,

    /// Current drawing surface dimensions.
    pub viewport: Viewport,

    /// Ordered multi-selection. Every entry refers to a live object.
    selection: Vec<ObjectId>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            objects: Vec::new(),
            background: Color::WHITE,
            viewport,
            selection: Vec::new(),
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in z order (first = bottom).
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    // ─── Placement ───────────────────────────────────────────────────────

    /// Place a role node: a rounded rectangle with its top-left at (x, y)
    /// plus the two placeholder labels, horizontally centered in the
    /// rectangle at fixed rows.
    ///
    /// The three objects are independent — moving or deleting one does not
    /// affect the others. The returned IDs are in z order.
    pub fn add_role_node(&mut self, x: f32, y: f32) -> RoleNodeIds {
        let mut rect = SceneObject::new(
            ObjectId::with_prefix("rect"),
            ObjectKind::Rect {
                width: defaults::NODE_WIDTH,
                height: defaults::NODE_HEIGHT,
                corner_radius: defaults::NODE_CORNER_RADIUS,
            },
            x,
            y,
        );
        rect.fill = Some(defaults::NODE_FILL);
        rect.stroke = Some(StrokeStyle {
            color: defaults::NODE_STROKE,
            width: defaults::NODE_STROKE_WIDTH,
        });
        rect.shadow = Some(Shadow {
            offset_x: defaults::NODE_SHADOW_OFFSET.0,
            offset_y: defaults::NODE_SHADOW_OFFSET.1,
            blur: defaults::NODE_SHADOW_BLUR,
            color: defaults::NODE_SHADOW_COLOR,
        });

        let mut name = SceneObject::new(
            ObjectId::with_prefix("name"),
            ObjectKind::Text {
                content: defaults::NAME_PLACEHOLDER.into(),
                font: FontSpec {
                    family: defaults::LABEL_FONT_FAMILY.into(),
                    weight: defaults::NAME_FONT_WEIGHT,
                    size: defaults::NAME_FONT_SIZE,
                },
            },
            x + defaults::NAME_CENTER_OFFSET.0,
            y + defaults::NAME_CENTER_OFFSET.1,
        );
        name.fill = Some(defaults::NAME_COLOR);

        let mut role = SceneObject::new(
            ObjectId::with_prefix("role"),
            ObjectKind::Text {
                content: defaults::ROLE_PLACEHOLDER.into(),
                font: FontSpec {
                    family: defaults::LABEL_FONT_FAMILY.into(),
                    weight: defaults::ROLE_FONT_WEIGHT,
                    size: defaults::ROLE_FONT_SIZE,
                },
            },
            x + defaults::ROLE_CENTER_OFFSET.0,
            y + defaults::ROLE_CENTER_OFFSET.1,
        );
        role.fill = Some(defaults::ROLE_COLOR);

        let ids: RoleNodeIds = [rect.id, name.id, role.id].into_iter().collect();
        self.objects.push(rect);
        self.objects.push(name);
        self.objects.push(role);
        log::info!("placed role node at ({x}, {y})");
        ids
    }

    /// Place a role node at the fallback position (toolbar-triggered
    /// placement without a click).
    pub fn add_role_node_default(&mut self) -> RoleNodeIds {
        let (x, y) = defaults::NODE_FALLBACK_POS;
        self.add_role_node(x, y)
    }

    /// Place the fixed connector segment. Repeated calls stack identical
    /// lines — connectors do not anchor to nodes.
    pub fn add_connector(&mut self) -> ObjectId {
        let (sx, sy) = defaults::CONNECTOR_START;
        let (ex, ey) = defaults::CONNECTOR_END;
        let mut line = SceneObject::new(
            ObjectId::with_prefix("line"),
            ObjectKind::Line {
                x2: ex - sx,
                y2: ey - sy,
            },
            sx,
            sy,
        );
        line.stroke = Some(StrokeStyle {
            color: defaults::CONNECTOR_STROKE,
            width: defaults::CONNECTOR_STROKE_WIDTH,
        });
        let id = line.id;
        self.objects.push(line);
        log::info!("placed connector");
        id
    }

    /// Decode an uploaded image and place it at the fixed position, scaled
    /// by the fixed factor. On decode failure the scene is left unchanged.
    pub fn add_image(&mut self, bytes: &[u8]) -> Result<ObjectId, String> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| format!("image decode failed: {e}"))?
            .to_rgba8();
        let (pw, ph) = decoded.dimensions();

        let (x, y) = defaults::IMAGE_POS;
        let mut img = SceneObject::new(
            ObjectId::with_prefix("image"),
            ObjectKind::Image {
                width: pw as f32 * defaults::IMAGE_SCALE,
                height: ph as f32 * defaults::IMAGE_SCALE,
                pixel_width: pw,
                pixel_height: ph,
                pixels: decoded.into_raw(),
            },
            x,
            y,
        );
        // Uploaded bitmaps have no fill/stroke; keep the default None.
        img.fill = None;
        let id = img.id;
        self.objects.push(img);
        log::info!("placed image ({pw}x{ph} source, {}x scale)", defaults::IMAGE_SCALE);
        Ok(id)
    }

    // ─── Selection ───────────────────────────────────────────────────────

    pub fn selected(&self) -> &[ObjectId] {
        &self.selection
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }

    /// Replace the selection with a single object.
    pub fn select_only(&mut self, id: ObjectId) {
        if self.index_of(id).is_some() {
            self.selection.clear();
            self.selection.push(id);
        }
    }

    /// Shift-click semantics: toggle an object in or out of the selection.
    pub fn toggle_selected(&mut self, id: ObjectId) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else if self.index_of(id).is_some() {
            self.selection.push(id);
        }
    }

    /// Add objects to the selection (marquee result), skipping duplicates.
    pub fn extend_selection(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        for id in ids {
            if !self.selection.contains(&id) && self.index_of(id).is_some() {
                self.selection.push(id);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Translate every selected object by (dx, dy). Labels move
    /// independently of their rectangle — only what is selected moves.
    pub fn move_selected(&mut self, dx: f32, dy: f32) {
        for obj in &mut self.objects {
            if self.selection.contains(&obj.id) {
                obj.x += dx;
                obj.y += dy;
            }
        }
    }

    // ─── Removal ─────────────────────────────────────────────────────────

    /// Remove every selected object and empty the selection.
    /// Returns the number of objects removed (0 for an empty selection).
    pub fn remove_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let before = self.objects.len();
        let selection = std::mem::take(&mut self.selection);
        self.objects.retain(|o| !selection.contains(&o.id));
        let removed = before - self.objects.len();
        if removed > 0 {
            log::info!("removed {removed} selected object(s)");
        }
        removed
    }

    /// Remove all objects and reset the background to white.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.selection.clear();
        self.background = Color::WHITE;
        log::info!("cleared canvas");
    }

    // ─── Viewport ────────────────────────────────────────────────────────

    /// Resize the drawing surface. Idempotent: only the visible dimensions
    /// change; objects, positions, and selection are untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
