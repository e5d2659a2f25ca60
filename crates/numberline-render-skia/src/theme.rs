// File: crates/numberline-render-skia/src/theme.rs
// Summary: Light/Dark color themes for the number line.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub label: skia::Color,
    pub marker_line: skia::Color,
    pub marker_handle: skia::Color,
    pub marker_handle_dragging: skia::Color,
    pub correct: skia::Color,
    pub user: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            label: skia::Color::from_argb(255, 20, 20, 30),
            marker_line: skia::Color::from_argb(255, 32, 120, 200),
            marker_handle: skia::Color::from_argb(255, 32, 120, 200),
            marker_handle_dragging: skia::Color::from_argb(255, 240, 150, 30),
            correct: skia::Color::from_argb(255, 20, 160, 90),
            user: skia::Color::from_argb(255, 200, 60, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            label: skia::Color::from_argb(255, 235, 235, 245),
            marker_line: skia::Color::from_argb(255, 64, 160, 255),
            marker_handle: skia::Color::from_argb(255, 64, 160, 255),
            marker_handle_dragging: skia::Color::from_argb(255, 255, 230, 70),
            correct: skia::Color::from_argb(255, 40, 200, 120),
            user: skia::Color::from_argb(255, 220, 80, 80),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            marker_line: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_handle: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_handle_dragging: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            correct: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            user: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
