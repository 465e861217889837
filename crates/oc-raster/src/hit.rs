//! Hit testing: point → object lookup.
//!
//! Scans the object list front-to-back (reverse z order) so the topmost
//! object under the pointer wins, matching paint order.

use oc_core::id::ObjectId;
use oc_core::Scene;

/// Find the topmost object at position (px, py).
/// Returns `None` if only the background is hit.
pub fn hit_test(scene: &Scene, px: f32, py: f32) -> Option<ObjectId> {
    scene
        .objects()
        .iter()
        .rev()
        .find(|obj| obj.bounds().contains(px, py))
        .map(|obj| obj.id)
}

/// Find all objects whose bounds intersect the given rectangle, in z
/// order. Used for marquee (rubber-band) selection.
pub fn hit_test_rect(scene: &Scene, rx: f32, ry: f32, rw: f32, rh: f32) -> Vec<ObjectId> {
    scene
        .objects()
        .iter()
        .filter(|obj| obj.bounds().intersects_rect(rx, ry, rw, rh))
        .map(|obj| obj.id)
        .collect()
}
