pub mod export;
pub mod hit;
pub mod paint;

pub use export::export_png;
pub use hit::{hit_test, hit_test_rect};
pub use paint::paint_scene;
