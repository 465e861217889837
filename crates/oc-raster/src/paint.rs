//! Scene → tiny-skia drawing commands.
//!
//! Walks the scene's object list in z order and emits fills and strokes
//! onto a `Pixmap`. All coordinates are multiplied by a uniform `scale`
//! so the same painter serves both on-screen rendering and 2× PNG export.

use oc_core::model::{Color, ObjectKind, SceneObject, Shadow, StrokeStyle};
use oc_core::Scene;
use tiny_skia::{
    FillRule, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

/// Circle-to-bezier control point ratio for quarter-arc corners.
const BEZIER_K: f32 = 0.552_284_8;

/// Paint the whole scene onto `pixmap` at the given scale.
/// The caller is responsible for sizing the pixmap; objects extending past
/// its edges are clipped by tiny-skia as usual.
pub fn paint_scene(pixmap: &mut Pixmap, scene: &Scene, scale: f32) {
    pixmap.fill(to_skia_color(scene.background));

    for obj in scene.objects() {
        match &obj.kind {
            ObjectKind::Rect {
                width,
                height,
                corner_radius,
            } => paint_rect(pixmap, obj, *width, *height, *corner_radius, scale),

            ObjectKind::Line { x2, y2 } => paint_line(pixmap, obj, *x2, *y2, scale),

            ObjectKind::Image {
                width,
                height,
                pixel_width,
                pixel_height,
                pixels,
            } => paint_image(
                pixmap,
                obj,
                *width,
                *height,
                *pixel_width,
                *pixel_height,
                pixels,
                scale,
            ),

            ObjectKind::Text { content, .. } => {
                // Glyph output needs a font context; the label still exists
                // for selection, hit testing, and removal.
                log::trace!(
                    "TEXT {} {:?} at ({}, {})",
                    obj.id,
                    content,
                    obj.x,
                    obj.y
                );
            }
        }
    }
}

// ─── Shape painters ──────────────────────────────────────────────────────

fn paint_rect(
    pixmap: &mut Pixmap,
    obj: &SceneObject,
    width: f32,
    height: f32,
    corner_radius: f32,
    scale: f32,
) {
    let x = obj.x * scale;
    let y = obj.y * scale;
    let w = width * scale;
    let h = height * scale;
    let r = (corner_radius * scale).min(w / 2.0).min(h / 2.0);

    // Shadow first, under the shape. tiny-skia has no gaussian blur
    // primitive; the offset translucent fill stands in for it.
    if let Some(shadow) = &obj.shadow {
        paint_rect_shadow(pixmap, shadow, x, y, w, h, r, scale);
    }

    let Some(path) = build_rounded_rect_path(x, y, w, h, r) else {
        return;
    };

    if let Some(fill) = &obj.fill {
        let mut paint = Paint::default();
        let [cr, cg, cb, ca] = fill.to_rgba_u8();
        paint.set_color_rgba8(cr, cg, cb, ca);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    if let Some(stroke) = &obj.stroke {
        stroke_path(pixmap, &path, stroke, scale);
    }
}

fn paint_rect_shadow(
    pixmap: &mut Pixmap,
    shadow: &Shadow,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    scale: f32,
) {
    let sx = x + shadow.offset_x * scale;
    let sy = y + shadow.offset_y * scale;
    let Some(path) = build_rounded_rect_path(sx, sy, w, h, r) else {
        return;
    };
    let mut paint = Paint::default();
    let [cr, cg, cb, ca] = shadow.color.to_rgba_u8();
    paint.set_color_rgba8(cr, cg, cb, ca);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn paint_line(pixmap: &mut Pixmap, obj: &SceneObject, x2: f32, y2: f32, scale: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(obj.x * scale, obj.y * scale);
    pb.line_to((obj.x + x2) * scale, (obj.y + y2) * scale);
    let Some(path) = pb.finish() else {
        return;
    };

    if let Some(stroke) = &obj.stroke {
        stroke_path(pixmap, &path, stroke, scale);
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_image(
    pixmap: &mut Pixmap,
    obj: &SceneObject,
    width: f32,
    height: f32,
    pixel_width: u32,
    pixel_height: u32,
    pixels: &[u8],
    scale: f32,
) {
    let Some(size) = IntSize::from_wh(pixel_width, pixel_height) else {
        return;
    };
    // Decoded uploads are straight-alpha RGBA; tiny-skia pixmaps store
    // premultiplied alpha.
    let mut data = Vec::with_capacity(pixels.len());
    for px in pixels.chunks_exact(4) {
        let c = tiny_skia::ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let Some(src) = Pixmap::from_vec(data, size) else {
        log::warn!("image {} has inconsistent pixel buffer, skipping", obj.id);
        return;
    };

    // Scale source pixels to the logical placement size, then by the
    // painter scale, and translate to position.
    let sx = width * scale / pixel_width as f32;
    let sy = height * scale / pixel_height as f32;
    let transform =
        Transform::from_scale(sx, sy).post_translate(obj.x * scale, obj.y * scale);
    pixmap.draw_pixmap(0, 0, src.as_ref(), &PixmapPaint::default(), transform, None);
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn stroke_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, stroke: &StrokeStyle, scale: f32) {
    let mut paint = Paint::default();
    let [cr, cg, cb, ca] = stroke.color.to_rgba_u8();
    paint.set_color_rgba8(cr, cg, cb, ca);
    paint.anti_alias = true;

    let skia_stroke = Stroke {
        width: stroke.width * scale,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(path, &paint, &skia_stroke, Transform::identity(), None);
}

/// Build a rounded rectangle path with quarter-arc cubic corners.
fn build_rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<tiny_skia::Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let mut pb = PathBuilder::new();
    if r <= 0.0 {
        pb.move_to(x, y);
        pb.line_to(x + w, y);
        pb.line_to(x + w, y + h);
        pb.line_to(x, y + h);
        pb.close();
        return pb.finish();
    }

    let k = r * BEZIER_K;

    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

fn to_skia_color(c: Color) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_rgba_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oc_core::model::Viewport;

    fn pixmap(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h).unwrap()
    }

    #[test]
    fn empty_scene_paints_background_only() {
        let scene = Scene::new(Viewport {
            width: 4.0,
            height: 4.0,
        });
        let mut px = pixmap(4, 4);
        paint_scene(&mut px, &scene, 1.0);

        for p in px.pixels() {
            assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (255, 255, 255, 255));
        }
    }

    #[test]
    fn node_rect_fills_pixels() {
        let mut scene = Scene::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        scene.add_role_node(50.0, 50.0);
        let mut px = pixmap(400, 300);
        paint_scene(&mut px, &scene, 1.0);

        // Center of the rectangle is node blue, far corner stays white.
        let center = px.pixel(150, 110).unwrap();
        assert_eq!((center.red(), center.green(), center.blue()), (59, 130, 246));
        let corner = px.pixel(399, 299).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));
    }

    #[test]
    fn connector_strokes_pixels_on_its_segment() {
        let mut scene = Scene::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        scene.add_connector();
        let mut px = pixmap(400, 300);
        paint_scene(&mut px, &scene, 1.0);

        // Midpoint of the fixed (100,100)→(300,100) segment is painted.
        let mid = px.pixel(200, 100).unwrap();
        assert_ne!((mid.red(), mid.green(), mid.blue()), (255, 255, 255));
    }

    fn png_of(color: [u8; 4], w: u32, h: u32) -> Vec<u8> {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(w, h, image::Rgba(color))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        png
    }

    #[test]
    fn opaque_image_pixels_land_at_the_fixed_position() {
        let mut scene = Scene::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        // 10x10 solid red, scaled 0.3x to 3x3 at (150, 150).
        scene.add_image(&png_of([255, 0, 0, 255], 10, 10)).unwrap();
        let mut px = pixmap(400, 300);
        paint_scene(&mut px, &scene, 1.0);

        let inside = px.pixel(151, 151).unwrap();
        assert_eq!((inside.red(), inside.green(), inside.blue()), (255, 0, 0));
        let outside = px.pixel(160, 160).unwrap();
        assert_eq!((outside.red(), outside.green(), outside.blue()), (255, 255, 255));
    }

    #[test]
    fn translucent_image_composites_over_the_background() {
        let mut scene = Scene::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        // 50%-alpha mid-gray over white must blend to roughly (191, 191, 191),
        // not vanish into the background.
        scene
            .add_image(&png_of([128, 128, 128, 128], 10, 10))
            .unwrap();
        let mut px = pixmap(400, 300);
        paint_scene(&mut px, &scene, 1.0);

        let p = px.pixel(151, 151).unwrap();
        for channel in [p.red(), p.green(), p.blue()] {
            assert!(
                (channel as i32 - 191).abs() <= 2,
                "expected ~191 composite, got {channel}"
            );
        }
        assert_eq!(p.alpha(), 255);
    }

    #[test]
    fn scale_multiplies_coordinates() {
        let mut scene = Scene::new(Viewport {
            width: 400.0,
            height: 300.0,
        });
        scene.add_role_node(50.0, 50.0);
        let mut px = pixmap(800, 600);
        paint_scene(&mut px, &scene, 2.0);

        // At 2x the rect center lands at (300, 220).
        let center = px.pixel(300, 220).unwrap();
        assert_eq!((center.red(), center.green(), center.blue()), (59, 130, 246));
        // (60, 60) in 2x space is outside the rect (which starts at 100,100).
        let outside = px.pixel(60, 60).unwrap();
        assert_eq!((outside.red(), outside.green(), outside.blue()), (255, 255, 255));
    }
}
