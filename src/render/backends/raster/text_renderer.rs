//! Text rasterization into a coverage mask.
//!
//! A run is laid out on a single line (advances + kerning), shifted so that
//! its anchor lands on the requested point, and its glyph coverage is written
//! into a [`Mask`]. The caller composites the mask with a solid paint, so
//! overlapping glyphs never double-blend.

use crate::render::fonts::{builtin, Face};
use crate::render::Anchor;
use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use tiny_skia::Mask;

/// Horizontal extent and vertical metrics of a laid-out run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunMetrics {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// Measures `text` at em size `size` without drawing it.
pub fn measure(face: &Face, text: &str, size: f32) -> RunMetrics {
    match face {
        Face::Outline(font) => {
            let (_, width) = layout(font, text, size);
            let scaled = font.as_scaled(em_scale(font, size));
            RunMetrics {
                width,
                ascent: scaled.ascent(),
                descent: scaled.descent(),
            }
        }
        Face::Builtin => RunMetrics {
            width: builtin::text_width(text, size),
            ascent: builtin::ascent(size),
            descent: 0.0,
        },
    }
}

/// Writes the coverage of `text`, anchored at `(x, y)`, into `mask`. Existing coverage is kept
/// (max blend), so several runs can share one mask.
pub fn draw_text(mask: &mut Mask, face: &Face, text: &str, size: f32, x: f32, y: f32, anchor: Anchor) {
    let metrics = measure(face, text, size);
    let (dx, dy) = anchor.pen_offset(metrics.width, metrics.ascent, metrics.descent);
    let origin = (x + dx, y + dy);

    let width = mask.width() as i32;
    let height = mask.height() as i32;
    let data = mask.data_mut();
    let mut plot = |px: i32, py: i32, coverage: f32| {
        if px < 0 || py < 0 || px >= width || py >= height {
            return;
        }
        let idx = (py * width + px) as usize;
        let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
        data[idx] = data[idx].max(value);
    };

    match face {
        Face::Outline(font) => {
            let (glyphs, _) = layout(font, text, size);
            for mut glyph in glyphs {
                glyph.position = point(glyph.position.x + origin.0, glyph.position.y + origin.1);
                let Some(outlined) = font.outline_glyph(glyph) else {
                    // whitespace and empty glyphs have no outline
                    continue;
                };
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, c| {
                    plot(bounds.min.x as i32 + gx as i32, bounds.min.y as i32 + gy as i32, c);
                });
            }
        }
        Face::Builtin => {
            builtin::rasterize(text, size, origin.0.round() as i32, origin.1.round() as i32, |px, py| {
                plot(px, py, 1.0)
            });
        }
    }
}

/// Scale for an em size in pixels. `PxScale` is the ascent-to-descent height, not the em.
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(size * font.height_unscaled() / upem),
        _ => PxScale::from(size),
    }
}

/// Positions glyphs along the baseline starting at x = 0. Returns the glyphs and the advance width.
fn layout(font: &FontVec, text: &str, size: f32) -> (Vec<Glyph>, f32) {
    let scale = em_scale(font, size);
    let scaled = font.as_scaled(scale);

    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = 0.0f32;
    let mut prev = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, 0.0)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    (glyphs, caret)
}
