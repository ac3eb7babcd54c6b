pub mod backend;

/// Rendering backends for the icon.
pub mod backends {
    /// CPU raster backend (tiny-skia)
    pub mod raster;
}

pub mod fonts;

mod render_list;
pub use render_list::*;

pub use backend::{RgbaImage, SurfaceSize};
