//! The whole run: provision the font, draw the icon, write the PNG.

use crate::assets::{ensure_font, FontAsset};
use crate::config::IconConfig;
use crate::errors::IconError;
use crate::icon::shield_icon;
use crate::net::Fetcher;
use crate::persist::write_png;
use crate::render::backend::RenderBackend;
use crate::render::backends::raster::RasterBackend;
use crate::render::fonts::{FontSource, LabelFont};
use crate::render::RgbaImage;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub asset: FontAsset,
    pub font: FontSource,
}

fn renderer_error(e: anyhow::Error) -> IconError {
    IconError::Renderer(format!("{e:#}"))
}

/// Draws the icon described by `config` with `backend` and returns its pixels.
pub fn render_icon(backend: &mut dyn RenderBackend, config: &IconConfig) -> Result<RgbaImage, IconError> {
    let mut surface = backend.create_surface(config.canvas).map_err(renderer_error)?;
    log::debug!("Rendering with {}", backend.name());

    backend
        .render(&shield_icon(config), surface.as_mut())
        .map_err(renderer_error)?;
    backend.snapshot(surface.as_mut()).map_err(renderer_error)
}

/// Runs the full pipeline. Only rendering and writing the output can fail; font problems
/// fall back silently (apart from logging).
pub async fn generate<F: Fetcher>(config: &IconConfig, fetcher: &F) -> Result<GeneratedIcon, IconError> {
    let asset = ensure_font(&config.font.path, &config.font.url, fetcher).await;

    let font = LabelFont::resolve(asset.path(), &config.font.system_families);
    log::info!("Using {} for labels", font.source);
    let source = font.source.clone();

    let mut backend = RasterBackend::new(font);
    let image = render_icon(&mut backend, config)?;

    write_png(&image, &config.output_path)?;
    log::info!("Icon saved to {}", config.output_path.display());

    Ok(GeneratedIcon {
        path: config.output_path.clone(),
        asset,
        font: source,
    })
}
