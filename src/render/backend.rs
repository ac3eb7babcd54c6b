use crate::render::RenderList;
use std::any::Any;

/// Size of a surface in pixels. It's a simple struct to hold width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Straight (non-premultiplied) RGBA8 snapshot of a surface.
#[derive(Clone)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
}

impl RgbaImage {
    pub fn from_raw(pixels: Vec<u8>, width: u32, height: u32, stride: u32) -> Self {
        assert!(
            pixels.len() >= (height as usize) * (stride as usize),
            "pixel buffer too small for image dimensions"
        );

        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    /// RGBA value of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let off = (y * self.stride + x * 4) as usize;
        [
            self.pixels[off],
            self.pixels[off + 1],
            self.pixels[off + 2],
            self.pixels[off + 3],
        ]
    }
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Type-erased surface so callers can hold it without generics.
pub trait ErasedSurface: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Core backend interface.
pub trait RenderBackend {
    /// Name of the backend, for logging.
    fn name(&self) -> &str;

    /// Create a new surface with the given size. The surface starts fully transparent.
    fn create_surface(&self, size: SurfaceSize) -> anyhow::Result<Box<dyn ErasedSurface>>;

    /// Play the render list onto the given surface, in order.
    fn render(&mut self, list: &RenderList, surface: &mut dyn ErasedSurface) -> anyhow::Result<()>;

    /// Copy the surface contents out as straight-alpha RGBA8.
    fn snapshot(&mut self, surface: &mut dyn ErasedSurface) -> anyhow::Result<RgbaImage>;
}
