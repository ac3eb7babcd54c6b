pub mod text_renderer;

use crate::render::backend::{ErasedSurface, RenderBackend, RgbaImage, SurfaceSize};
use crate::render::fonts::LabelFont;
use crate::render::{Color, DisplayItem, Point, RenderList};
use anyhow::{anyhow, Result};
use std::any::Any;
use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// CPU backend rasterizing into a tiny-skia pixmap. Text runs are drawn with `font`.
pub struct RasterBackend {
    font: LabelFont,
}

impl RasterBackend {
    pub fn new(font: LabelFont) -> Self {
        Self { font }
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn fill_polygon(
    pixmap: &mut Pixmap,
    points: &[Point],
    fill: Color,
    outline: Option<Color>,
    stroke_width: f32,
) -> Result<()> {
    let [first, rest @ ..] = points else {
        return Err(anyhow!("polygon without points"));
    };
    if rest.len() < 2 {
        return Err(anyhow!("polygon needs at least 3 points, got {}", points.len()));
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    let path = pb.finish().ok_or_else(|| anyhow!("degenerate polygon"))?;

    pixmap.fill_path(&path, &paint_for(fill), FillRule::Winding, Transform::identity(), None);

    if let Some(outline) = outline {
        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint_for(outline), &stroke, Transform::identity(), None);
    }

    Ok(())
}

impl RenderBackend for RasterBackend {
    fn name(&self) -> &str {
        "RasterBackend"
    }

    fn create_surface(&self, size: SurfaceSize) -> Result<Box<dyn ErasedSurface>> {
        Ok(Box::new(RasterSurface::new(size)?))
    }

    /// Plays every item of the list onto the surface, in order.
    fn render(&mut self, list: &RenderList, surface: &mut dyn ErasedSurface) -> Result<()> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<RasterSurface>()
            .ok_or_else(|| anyhow!("RasterBackend used with non-raster surface"))?;

        for item in list.items.iter() {
            match item {
                DisplayItem::Clear { color } => {
                    let [r, g, b, a] = color.to_u8();
                    s.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
                }
                DisplayItem::Polygon {
                    points,
                    fill,
                    outline,
                    stroke_width,
                } => {
                    fill_polygon(&mut s.pixmap, points, *fill, *outline, *stroke_width)?;
                }
                DisplayItem::TextRun {
                    x,
                    y,
                    text,
                    size,
                    color,
                    anchor,
                } => {
                    let mut mask = Mask::new(s.size.width, s.size.height)
                        .ok_or_else(|| anyhow!("cannot allocate text mask"))?;
                    text_renderer::draw_text(&mut mask, &self.font.face, text, *size, *x, *y, *anchor);

                    let rect = Rect::from_xywh(0.0, 0.0, s.size.width as f32, s.size.height as f32)
                        .ok_or_else(|| anyhow!("invalid surface rect"))?;
                    s.pixmap
                        .fill_rect(rect, &paint_for(*color), Transform::identity(), Some(&mask));
                }
            }
        }

        Ok(())
    }

    /// Copies the pixmap out, undoing tiny-skia's premultiplied alpha.
    fn snapshot(&mut self, surface: &mut dyn ErasedSurface) -> Result<RgbaImage> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<RasterSurface>()
            .ok_or_else(|| anyhow!("RasterBackend used with non-raster surface"))?;

        let pixels = s
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        Ok(RgbaImage::from_raw(
            pixels,
            s.size.width,
            s.size.height,
            s.size.width * 4,
        ))
    }
}

/// A fixed-size RGBA canvas. Starts fully transparent and is never resized.
pub struct RasterSurface {
    pixmap: Pixmap,
    size: SurfaceSize,
}

impl RasterSurface {
    pub fn new(size: SurfaceSize) -> Result<Self> {
        let pixmap = Pixmap::new(size.width, size.height)
            .ok_or_else(|| anyhow!("cannot create {}x{} surface", size.width, size.height))?;
        Ok(Self { pixmap, size })
    }
}

impl ErasedSurface for RasterSurface {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
