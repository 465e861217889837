//! Shared application-wide constants.
//! Centralizes the tweakable values used when placing and exporting objects.

use crate::model::Color;

// Role node
/// Default node width in canvas units.
pub const NODE_WIDTH: f32 = 200.0;
/// Default node height in canvas units.
pub const NODE_HEIGHT: f32 = 120.0;
/// Corner radius for node rectangles.
pub const NODE_CORNER_RADIUS: f32 = 12.0;
/// Node fill.
pub const NODE_FILL: Color = Color::rgba(0.231, 0.510, 0.965, 1.0); // #3b82f6
/// Node stroke.
pub const NODE_STROKE: Color = Color::rgba(0.145, 0.388, 0.922, 1.0); // #2563eb
/// Node stroke width.
pub const NODE_STROKE_WIDTH: f32 = 2.0;
/// Drop shadow color: rgba(37, 99, 235, 0.3).
pub const NODE_SHADOW_COLOR: Color = Color::rgba(0.145, 0.388, 0.922, 0.3);
/// Drop shadow blur radius.
pub const NODE_SHADOW_BLUR: f32 = 12.0;
/// Drop shadow offset.
pub const NODE_SHADOW_OFFSET: (f32, f32) = (0.0, 4.0);
/// Fallback placement when the node tool fires without a click position.
pub const NODE_FALLBACK_POS: (f32, f32) = (200.0, 150.0);
/// Offset subtracted from a placement click so it lands near the node's
/// visual center rather than its top-left corner.
pub const NODE_CLICK_OFFSET: (f32, f32) = (100.0, 60.0);

// Labels
/// Placeholder text for the name label.
pub const NAME_PLACEHOLDER: &str = "Nome";
/// Placeholder text for the role label.
pub const ROLE_PLACEHOLDER: &str = "Cargo";
/// Label font family.
pub const LABEL_FONT_FAMILY: &str = "Inter";
/// Name label: font size, weight, color, and center offset within the node.
pub const NAME_FONT_SIZE: f32 = 16.0;
pub const NAME_FONT_WEIGHT: u16 = 600;
pub const NAME_COLOR: Color = Color::WHITE;
pub const NAME_CENTER_OFFSET: (f32, f32) = (100.0, 35.0);
/// Role label: font size, weight, color, and center offset within the node.
pub const ROLE_FONT_SIZE: f32 = 14.0;
pub const ROLE_FONT_WEIGHT: u16 = 400;
pub const ROLE_COLOR: Color = Color::rgba(0.878, 0.906, 1.0, 1.0); // #e0e7ff
pub const ROLE_CENTER_OFFSET: (f32, f32) = (100.0, 60.0);

// Connector
/// Fixed connector segment: start point.
pub const CONNECTOR_START: (f32, f32) = (100.0, 100.0);
/// Fixed connector segment: end point.
pub const CONNECTOR_END: (f32, f32) = (300.0, 100.0);
/// Connector stroke.
pub const CONNECTOR_STROKE: Color = Color::rgba(0.580, 0.639, 0.722, 1.0); // #94a3b8
/// Connector stroke width.
pub const CONNECTOR_STROKE_WIDTH: f32 = 2.0;

// Image placement
/// Fixed position for uploaded images.
pub const IMAGE_POS: (f32, f32) = (150.0, 150.0);
/// Fixed scale factor applied to uploaded images.
pub const IMAGE_SCALE: f32 = 0.3;

// Export
/// Resolution multiplier for PNG export.
pub const EXPORT_MULTIPLIER: f32 = 2.0;
/// Fixed download filename for exported charts.
pub const EXPORT_FILENAME: &str = "organograma.png";

// Viewport chrome
/// Horizontal margin reserved for the toolbar and page padding.
pub const CHROME_MARGIN_X: f32 = 80.0;
/// Vertical margin reserved for the page header and padding.
pub const CHROME_MARGIN_Y: f32 = 100.0;

// Hit testing
/// Minimum half-thickness used when hit testing thin line segments.
pub const LINE_HIT_SLOP: f32 = 4.0;
