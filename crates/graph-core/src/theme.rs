// File: crates/graph-core/src/theme.rs
// Summary: Color presets applied to the grid, axes, labels, and series of a graph.

use skia_safe as skia;

use crate::geometry::PointF64;
use crate::labels::TextLabelStyle;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid_minor: skia::Color,
    pub grid_major: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    /// Not applied by `Graph::apply_theme`; feed it to the label formatter
    /// through [`Theme::tick_label_style`].
    pub tick_label: skia::Color,
    pub series_line: skia::Color,
    pub series_point: skia::Color,
}

impl Theme {
    /// Stock tick label style in this theme's label colour.
    pub fn tick_label_style(&self, font: skia::Font, offset: PointF64) -> TextLabelStyle {
        TextLabelStyle { font, color: self.tick_label, offset }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid_minor: skia::Color::from_argb(255, 220, 220, 225),
            grid_major: skia::Color::from_argb(255, 170, 170, 180),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick_label: skia::Color::from_argb(255, 90, 90, 100),
            series_line: skia::Color::from_argb(255, 220, 40, 40),
            series_point: skia::Color::from_argb(255, 220, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid_minor: skia::Color::from_argb(255, 40, 40, 45),
            grid_major: skia::Color::from_argb(255, 70, 70, 78),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            series_line: skia::Color::from_argb(255, 64, 160, 255),
            series_point: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid_minor: skia::Color::from_argb(255, 0x07, 0x36, 0x42), // base02
            grid_major: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick_label: skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            series_line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
            series_point: skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid_minor: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            grid_major: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1), // base1
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick_label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            series_line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            series_point: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid_minor: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            grid_major: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            series_line: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            series_point: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
