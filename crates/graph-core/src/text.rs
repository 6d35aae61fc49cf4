// File: crates/graph-core/src/text.rs
// Summary: Font lookup with family fallbacks for labels and titles.

use skia_safe as skia;

/// Sans-serif families tried in order by [`system_font`].
pub const SANS_FAMILIES: &[&str] = &["Ubuntu", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans"];

/// First installed family from `families` at `size` points.
///
/// Falls back to the font manager's default typeface, then to Skia's default
/// font, so a missing family never fails a render.
pub fn system_font(families: &[&str], size: f32) -> skia::Font {
    let mgr = skia::FontMgr::default();
    let typeface = families
        .iter()
        .find_map(|family| mgr.match_family_style(*family, skia::FontStyle::normal()))
        .or_else(|| mgr.legacy_make_typeface(None, skia::FontStyle::normal()));
    match typeface {
        Some(tf) => skia::Font::from_typeface(tf, size.max(1.0)),
        None => {
            let mut font = skia::Font::default();
            font.set_size(size.max(1.0));
            font
        }
    }
}

/// [`system_font`] over [`SANS_FAMILIES`].
pub fn sans(size: f32) -> skia::Font {
    system_font(SANS_FAMILIES, size)
}
