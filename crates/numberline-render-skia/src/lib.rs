// File: crates/numberline-render-skia/src/lib.rs
// Summary: Skia renderer crate; exports the frame painter, text shaper and color themes.

pub mod render;
pub mod text;
pub mod theme;

pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use text::TextShaper;
pub use theme::Theme;
