use std::path::{Path, PathBuf};

use egui::{Color32, pos2};
use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::primitive::{Shape, distance_to_segment};
use crate::surface::Surface;

/// Errors surfaced to the user when saving the canvas fails. A failed save
/// leaves the in-memory drawing untouched.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write image to {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("could not encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Software-render the surface into an RGB buffer of the given size.
///
/// This mirrors what the on-screen painter does: background fill first, then
/// every visible primitive in insertion order. Dabs are filled disks;
/// segments are capsules (round caps included in the distance test).
pub fn rasterize(surface: &Surface, width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, to_rgb(surface.background()));

    for (_, primitive) in surface.iter_visible() {
        let color = to_rgb(primitive.color);
        let bounds = primitive.rect().expand(1.0);

        // Only scan the primitive's bounding box, clipped to the image.
        let x0 = bounds.min.x.floor().max(0.0) as u32;
        let y0 = bounds.min.y.floor().max(0.0) as u32;
        let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(width);
        let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let covered = match primitive.shape {
                    Shape::Dab { center, radius } => (p - center).length() <= radius,
                    Shape::Segment { from, to, .. } => {
                        distance_to_segment(p, from, to) <= primitive.width / 2.0
                    }
                };
                if covered {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    img
}

/// Rasterize the surface at the given size and write it as a PNG file,
/// overwriting any existing file at `path`.
pub fn save_png(surface: &Surface, width: u32, height: u32, path: &Path) -> Result<(), ExportError> {
    let img = rasterize(surface, width, height);
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved canvas ({width}x{height}) to {}", path.display());
    Ok(())
}

/// PNG-encode the rasterized surface into memory.
pub fn encode_png(surface: &Surface, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let img = rasterize(surface, width, height);
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}
