//! Writing a canvas out as image files.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use spiro_core::{Result, SpiroError};
use spiro_geometry::Color;
use spiro_math::Point2;
use tracing::info;

use crate::canvas::{Canvas, Stroke};

/// File formats a drawing can be saved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Svg,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }

    pub fn exporter(self) -> Box<dyn ImageExporter> {
        match self {
            Self::Png => Box::new(PngExporter),
            Self::Svg => Box::new(SvgExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format '{other}' (png, svg, json)")),
        }
    }
}

/// Produces a file from the current state of a canvas.
pub trait ImageExporter {
    fn format(&self) -> ExportFormat;

    fn export(&self, canvas: &Canvas, path: &Path) -> Result<()>;
}

/// Rasterises strokes onto the canvas background.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

impl PngExporter {
    pub fn rasterize(canvas: &Canvas) -> RgbImage {
        let vp = canvas.viewport();
        let mut img = RgbImage::from_pixel(vp.width, vp.height, Rgb(canvas.background().to_rgb8()));
        for stroke in canvas.strokes() {
            let color = Rgb(stroke.color.to_rgb8());
            for pair in stroke.points.windows(2) {
                draw_segment(&mut img, vp.to_pixel(pair[0]), vp.to_pixel(pair[1]), color);
            }
        }
        img
    }
}

/// Plot a segment by sampling it once per pixel along its longer axis.
fn draw_segment(img: &mut RgbImage, from: Point2, to: Point2, color: Rgb<u8>) {
    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let p = from + delta * (i as f64 / steps as f64);
        let (x, y) = (p.x.round(), p.y.round());
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

impl ImageExporter for PngExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn export(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        Self::rasterize(canvas)
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| SpiroError::Export(format!("{}: {e}", path.display())))
    }
}

/// One `<polyline>` per stroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl ImageExporter for SvgExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Svg
    }

    fn export(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        let vp = canvas.viewport();
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(
            file,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = vp.width,
            h = vp.height
        )?;
        writeln!(
            file,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            canvas.background().to_hex()
        )?;
        for stroke in canvas.strokes().filter(|s| s.points.len() > 1) {
            let points: Vec<String> = stroke
                .points
                .iter()
                .map(|&p| {
                    let px = vp.to_pixel(p);
                    format!("{:.2},{:.2}", px.x, px.y)
                })
                .collect();
            writeln!(
                file,
                r#"  <polyline fill="none" stroke="{}" stroke-width="1" points="{}"/>"#,
                stroke.color.to_hex(),
                points.join(" ")
            )?;
        }
        writeln!(file, "</svg>")?;
        file.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CanvasDump<'a> {
    width: u32,
    height: u32,
    background: Color,
    strokes: Vec<&'a Stroke>,
}

/// Stroke data in surface coordinates, for re-plotting elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ImageExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        let vp = canvas.viewport();
        let dump = CanvasDump {
            width: vp.width,
            height: vp.height,
            background: canvas.background(),
            strokes: canvas.strokes().collect(),
        };
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &dump)
            .map_err(|e| SpiroError::Export(format!("{}: {e}", path.display())))
    }
}

/// File stem `"{prefix}-{seconds}.{millis}"` from the current time.
fn timestamped_stem(prefix: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{prefix}-{}.{:03}", now.as_secs(), now.subsec_millis())
}

/// Save the canvas in every requested format under `dir`.
///
/// Returns the written paths in the order of `formats`.
pub fn save_drawing(
    canvas: &Canvas,
    dir: &Path,
    prefix: &str,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let stem = timestamped_stem(prefix);
    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = dir.join(format!("{stem}.{}", format.extension()));
        format.exporter().export(canvas, &path)?;
        info!(path = %path.display(), "saved drawing");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("SVG".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("eps".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_exporter_matches_format() {
        for format in [ExportFormat::Png, ExportFormat::Svg, ExportFormat::Json] {
            assert_eq!(format.exporter().format(), format);
        }
    }

    #[test]
    fn test_timestamped_stem() {
        let stem = timestamped_stem("spiro");
        assert!(stem.starts_with("spiro-"));
        assert!(stem.contains('.'));
    }

    #[test]
    fn test_draw_segment_clips_to_image() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        draw_segment(
            &mut img,
            Point2::new(-5.0, 5.0),
            Point2::new(20.0, 5.0),
            Rgb([0, 0, 0]),
        );
        for x in 0..10 {
            assert_eq!(img.get_pixel(x, 5), &Rgb([0, 0, 0]));
        }
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }
}
