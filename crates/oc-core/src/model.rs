//! Visual primitives placed on the canvas.
//!
//! The scene is a flat, z-ordered list of independent objects: rounded
//! rectangles, text labels, line segments, and uploaded bitmaps. There is
//! no containment hierarchy — a role node is three separate objects that
//! happen to be placed together (see `Scene::add_role_node`).

use crate::defaults;
use crate::id::ObjectId;
use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                let a = if bytes.len() == 4 {
                    hex_val(bytes[3])?
                } else {
                    15
                };
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    (a * 17) as f32 / 255.0,
                ))
            }
            6 | 8 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                let a = if bytes.len() == 8 {
                    hex_val(bytes[6])? << 4 | hex_val(bytes[7])?
                } else {
                    255
                };
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ))
            }
            _ => None,
        }
    }

    /// Format as a hex string. Fully opaque colors get the short
    /// `#RRGGBB` form, anything else carries the alpha byte.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba_u8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Quantize to 8-bit channels for rasterization.
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

// ─── Stroke / Shadow / Font ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub weight: u16, // 100..900
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: defaults::LABEL_FONT_FAMILY.into(),
            weight: 400,
            size: 14.0,
        }
    }
}

// ─── Object kinds ────────────────────────────────────────────────────────

/// The visual primitive kinds that can be placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Rounded rectangle.
    Rect {
        width: f32,
        height: f32,
        corner_radius: f32,
    },

    /// Text label. The object's (x, y) is the label's center.
    Text { content: String, font: FontSpec },

    /// Straight line segment. The object's (x, y) is the first endpoint;
    /// (x2, y2) is the second endpoint relative to it.
    Line { x2: f32, y2: f32 },

    /// Uploaded bitmap, decoded to RGBA8 and scaled at placement time.
    /// `width`/`height` are the logical (already scaled) dimensions.
    Image {
        width: f32,
        height: f32,
        pixel_width: u32,
        pixel_height: u32,
        #[serde(skip)]
        pixels: Vec<u8>,
    },
}

/// A single object on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Position. Top-left for rects and images, center for text,
    /// first endpoint for lines.
    pub x: f32,
    pub y: f32,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
    pub shadow: Option<Shadow>,
}

impl SceneObject {
    pub fn new(id: ObjectId, kind: ObjectKind, x: f32, y: f32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            fill: None,
            stroke: None,
            shadow: None,
        }
    }

    /// Axis-aligned bounding box, used for hit testing and marquee selection.
    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            ObjectKind::Rect { width, height, .. } => Bounds {
                x: self.x,
                y: self.y,
                width: *width,
                height: *height,
            },
            ObjectKind::Text { content, font } => {
                // No shaping context: approximate from glyph count and size.
                // The object's position is the label center.
                let w = content.chars().count() as f32 * font.size * 0.6;
                let h = font.size * 1.2;
                Bounds {
                    x: self.x - w / 2.0,
                    y: self.y - h / 2.0,
                    width: w,
                    height: h,
                }
            }
            ObjectKind::Line { x2, y2 } => {
                let (ax, ay) = (self.x, self.y);
                let (bx, by) = (self.x + x2, self.y + y2);
                let slop = defaults::LINE_HIT_SLOP;
                Bounds {
                    x: ax.min(bx) - slop,
                    y: ay.min(by) - slop,
                    width: (bx - ax).abs() + slop * 2.0,
                    height: (by - ay).abs() + slop * 2.0,
                }
            }
            ObjectKind::Image { width, height, .. } => Bounds {
                x: self.x,
                y: self.y,
                width: *width,
                height: *height,
            },
        }
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Absolute axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this bounds intersects with a rectangle (AABB overlap).
    pub fn intersects_rect(&self, rx: f32, ry: f32, rw: f32, rh: f32) -> bool {
        self.x < rx + rw
            && self.x + self.width > rx
            && self.y < ry + rh
            && self.y + self.height > ry
    }
}

// ─── Viewport ────────────────────────────────────────────────────────────

/// The canvas (drawing surface) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    /// Derive the drawing surface size from the host window, reserving the
    /// fixed chrome margins. Clamped to a small positive floor so a tiny
    /// window never produces a zero-sized surface.
    pub fn from_window(window_width: f32, window_height: f32) -> Self {
        Self {
            width: (window_width - defaults::CHROME_MARGIN_X).max(1.0),
            height: (window_height - defaults::CHROME_MARGIN_Y).max(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_hex_parse() {
        let c = Color::from_hex("#3b82f6").unwrap();
        assert_eq!(c.to_rgba_u8(), [59, 130, 246, 255]);

        let c2 = Color::from_hex("FF000080").unwrap();
        assert!((c2.a - 128.0 / 255.0).abs() < 0.01);

        let c3 = Color::from_hex("#fff").unwrap();
        assert_eq!(c3.to_rgba_u8(), [255, 255, 255, 255]);

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("nope").is_none());
    }

    #[test]
    fn color_hex_format() {
        assert_eq!(Color::from_hex("#3b82f6").unwrap().to_hex(), "#3b82f6");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        // Translucent colors keep their alpha byte.
        assert_eq!(Color::rgba(1.0, 0.0, 0.0, 128.0 / 255.0).to_hex(), "#ff000080");
    }

    #[test]
    fn rect_bounds_are_top_left_anchored() {
        let obj = SceneObject::new(
            ObjectId::with_prefix("rect"),
            ObjectKind::Rect {
                width: 200.0,
                height: 120.0,
                corner_radius: 12.0,
            },
            40.0,
            50.0,
        );
        let b = obj.bounds();
        assert_eq!(b.x, 40.0);
        assert_eq!(b.y, 50.0);
        assert!(b.contains(40.0, 50.0));
        assert!(b.contains(240.0, 170.0));
        assert!(!b.contains(241.0, 50.0));
    }

    #[test]
    fn text_bounds_are_center_anchored() {
        let obj = SceneObject::new(
            ObjectId::with_prefix("label"),
            ObjectKind::Text {
                content: "Nome".into(),
                font: FontSpec::default(),
            },
            100.0,
            35.0,
        );
        let (cx, cy) = obj.bounds().center();
        assert!((cx - 100.0).abs() < 0.01);
        assert!((cy - 35.0).abs() < 0.01);
    }

    #[test]
    fn line_bounds_include_slop() {
        let obj = SceneObject::new(
            ObjectId::with_prefix("line"),
            ObjectKind::Line { x2: 200.0, y2: 0.0 },
            100.0,
            100.0,
        );
        let b = obj.bounds();
        // A horizontal line still has clickable thickness.
        assert!(b.height > 0.0);
        assert!(b.contains(200.0, 100.0));
    }

    #[test]
    fn scene_object_json_roundtrip() {
        let obj = SceneObject::new(
            ObjectId::intern("rect_json"),
            ObjectKind::Rect {
                width: 200.0,
                height: 120.0,
                corner_radius: 12.0,
            },
            40.0,
            50.0,
        );
        let json = serde_json::to_string(&obj).unwrap();
        let back: SceneObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, obj.id);
        assert_eq!((back.x, back.y), (40.0, 50.0));
        assert!(matches!(
            back.kind,
            ObjectKind::Rect { width, .. } if width == 200.0
        ));
    }

    #[test]
    fn viewport_from_window_subtracts_chrome() {
        let vp = Viewport::from_window(1280.0, 820.0);
        assert_eq!(vp.width, 1200.0);
        assert_eq!(vp.height, 720.0);

        // Tiny windows clamp instead of going negative.
        let small = Viewport::from_window(10.0, 10.0);
        assert_eq!(small.width, 1.0);
        assert_eq!(small.height, 1.0);
    }
}
