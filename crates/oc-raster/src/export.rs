//! Flatten the scene to a PNG byte vector.
//!
//! Export reflects exactly what the painter renders: the visible viewport
//! at `multiplier`× resolution, background included, partially-offscreen
//! objects clipped at the pixmap edge.

use crate::paint::paint_scene;
use oc_core::Scene;
use tiny_skia::Pixmap;

/// Render the scene at `multiplier`× the viewport resolution and encode
/// it as PNG. An empty scene yields a blank background-colored image.
pub fn export_png(scene: &Scene, multiplier: f32) -> Result<Vec<u8>, String> {
    if !(multiplier.is_finite() && multiplier > 0.0) {
        return Err(format!("invalid export multiplier: {multiplier}"));
    }

    let width = (scene.viewport.width * multiplier).round().max(1.0) as u32;
    let height = (scene.viewport.height * multiplier).round().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("cannot allocate {width}x{height} export surface"))?;

    paint_scene(&mut pixmap, scene, multiplier);

    pixmap
        .encode_png()
        .map_err(|e| format!("png encoding failed: {e}"))
}
