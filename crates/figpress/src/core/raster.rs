//! SVG to PNG rasterisation
//!
//! The font database is loaded once when a [`Rasterizer`] is built and shared
//! by every image it renders. Output PNGs are opaque RGB so the PDF writer can
//! embed them directly.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::canvas::UNITS_PER_INCH;
use crate::core::error::{ReportError, Result};

/// Sans-serif families tried, in order, when the system default is missing
pub const SANS_CANDIDATES: &[&str] = &[
    "Helvetica",
    "Arial",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];

/// A PNG written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
    /// Pixels per inch the image was rendered at
    pub dpi: f64,
}

impl RenderedImage {
    /// Physical size in inches at the rendered resolution
    pub fn size_inches(&self) -> (f64, f64) {
        (
            f64::from(self.width_px) / self.dpi,
            f64::from(self.height_px) / self.dpi,
        )
    }
}

/// Opaque RGB pixels produced from an SVG document
#[derive(Debug, Clone)]
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Rasterises SVG documents with a shared font database
pub struct Rasterizer {
    options: usvg::Options<'static>,
    dpi: f64,
}

impl Rasterizer {
    /// Build a rasterizer producing `dpi` pixels per inch, loading system fonts
    pub fn new(dpi: f64) -> Self {
        let mut options = usvg::Options::default();
        let fontdb = options.fontdb_mut();
        fontdb.load_system_fonts();
        if let Some(family) = pick_sans_family(fontdb) {
            trace!(family, "Using sans-serif family");
            fontdb.set_sans_serif_family(family.clone());
            options.font_family = family;
        }
        debug!(faces = options.fontdb.len(), dpi, "Rasterizer ready");
        Self { options, dpi }
    }

    /// Build a rasterizer without system fonts; text is skipped when drawn
    pub fn without_fonts(dpi: f64) -> Self {
        Self {
            options: usvg::Options::default(),
            dpi,
        }
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Number of font faces available to text rendering
    pub fn font_count(&self) -> usize {
        self.options.fontdb.len()
    }

    /// The font database loaded for this rasterizer
    pub fn fonts(&self) -> &usvg::fontdb::Database {
        &self.options.fontdb
    }

    /// Render `svg` onto a white background
    pub fn rasterize(&self, svg: &str) -> Result<RgbImage> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| ReportError::render_failure(format!("invalid SVG: {}", e)))?;

        let scale = (self.dpi / UNITS_PER_INCH) as f32;
        let size = tree.size();
        let width = (size.width() * scale).ceil().max(1.0) as u32;
        let height = (size.height() * scale).ceil().max(1.0) as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            ReportError::render_failure(format!("cannot allocate {}x{} pixmap", width, height))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        // The background is opaque, so dropping alpha loses nothing.
        let mut data = vec![0u8; (width as usize) * (height as usize) * 3];
        for (src, dst) in pixmap.data().chunks_exact(4).zip(data.chunks_exact_mut(3)) {
            dst.copy_from_slice(&src[..3]);
        }

        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    /// Render `svg` and write it as a PNG at `path`
    pub fn write_png(&self, svg: &str, path: &Path) -> Result<RenderedImage> {
        let image = self.rasterize(svg)?;
        let file = File::create(path).map_err(|e| {
            ReportError::render_failure(format!("cannot create {}: {}", path.display(), e))
        })?;
        encode_png(&image, self.dpi, BufWriter::new(file))?;
        debug!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            "Image written"
        );
        Ok(RenderedImage {
            path: path.to_path_buf(),
            width_px: image.width,
            height_px: image.height,
            dpi: self.dpi,
        })
    }

    /// Render `svg` into PNG bytes
    pub fn png_bytes(&self, svg: &str) -> Result<Vec<u8>> {
        let image = self.rasterize(svg)?;
        let mut out = Vec::new();
        encode_png(&image, self.dpi, &mut out)?;
        Ok(out)
    }
}

fn encode_png<W: std::io::Write>(image: &RgbImage, dpi: f64, sink: W) -> Result<()> {
    let mut encoder = png::Encoder::new(sink, image.width, image.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let pixels_per_meter = (dpi / 0.0254).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder
        .write_header()
        .map_err(|e| ReportError::render_failure(format!("PNG header: {}", e)))?;
    writer
        .write_image_data(&image.data)
        .map_err(|e| ReportError::render_failure(format!("PNG data: {}", e)))?;
    writer
        .finish()
        .map_err(|e| ReportError::render_failure(format!("PNG finish: {}", e)))
}

fn pick_sans_family(fontdb: &usvg::fontdb::Database) -> Option<String> {
    let available = |name: &str| {
        fontdb
            .faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    SANS_CANDIDATES
        .iter()
        .find(|name| available(name))
        .map(|name| name.to_string())
        .or_else(|| {
            fontdb
                .faces()
                .next()
                .and_then(|face| face.families.first().map(|(family, _)| family.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::SvgCanvas;
    use crate::core::types::{Rgb, ShapeStyle};

    fn sample_svg() -> String {
        let mut canvas = SvgCanvas::from_inches(2.0, 1.0);
        canvas.circle(100.0, 50.0, 30.0, &ShapeStyle::filled(Rgb::GOLD));
        canvas.to_svg()
    }

    #[test]
    fn test_png_signature() {
        let rasterizer = Rasterizer::without_fonts(150.0);
        let bytes = rasterizer.png_bytes(&sample_svg()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_pixel_size_follows_dpi() {
        let rasterizer = Rasterizer::without_fonts(150.0);
        let image = rasterizer.rasterize(&sample_svg()).unwrap();
        assert_eq!((image.width, image.height), (300, 150));
        assert_eq!(image.data.len(), 300 * 150 * 3);
        // Corner pixel is the white background
        assert_eq!(&image.data[..3], &[255, 255, 255]);
    }

    #[test]
    fn test_invalid_svg_is_render_failure() {
        let rasterizer = Rasterizer::without_fonts(100.0);
        let err = rasterizer.rasterize("<not-svg").unwrap_err();
        assert!(err.is_record_scoped());
    }

    #[test]
    fn test_write_png_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circle.png");
        let rasterizer = Rasterizer::without_fonts(100.0);
        let image = rasterizer.write_png(&sample_svg(), &path).unwrap();
        assert!(path.exists());
        assert_eq!(image.size_inches(), (2.0, 1.0));
    }
}
