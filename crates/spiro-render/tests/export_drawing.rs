// Integration tests for drawing curves on a canvas and saving them

use spiro_geometry::{Color, CurveParameters};
use spiro_math::Point2;
use spiro_render::{save_drawing, Canvas, ExportFormat, ImageExporter, PngExporter, SvgExporter};
use spiro_trace::{CurveTracer, RenderingSurface};

fn drawn_canvas() -> Canvas {
    let mut canvas = Canvas::new(400, 300);
    let params =
        CurveParameters::new(Point2::ZERO, Color::new(0.0, 0.0, 1.0), 140, 50, 0.6).unwrap();
    let mut tracer = CurveTracer::new(params, &mut canvas).unwrap();
    tracer.draw_full(&mut canvas).unwrap();
    canvas
}

#[test]
fn integration_draw_full_on_canvas() {
    let canvas = drawn_canvas();
    // gcd(140, 50) = 10, so the curve closes after 5 turns: 1800 / 5 + 1 points
    let strokes: Vec<_> = canvas.strokes().collect();
    let drawn: usize = strokes.iter().map(|s| s.points.len()).sum();
    assert_eq!(strokes.len(), 2);
    assert_eq!(drawn, 1 + 1 + 361);
    let bounds = canvas.bounds().unwrap();
    assert!(canvas.viewport().bounds().contains_point(bounds.min));
    assert!(canvas.viewport().bounds().contains_point(bounds.max));
}

#[test]
fn integration_png_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.png");
    let canvas = drawn_canvas();

    PngExporter.export(&canvas, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (400, 300));
    let blue = img.pixels().filter(|p| p.0 == [0, 0, 255]).count();
    assert!(blue > 100, "expected the curve to be rasterised, got {blue} pixels");
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn integration_svg_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.svg");
    SvgExporter.export(&drawn_canvas(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains(r##"stroke="#0000ff""##));
    assert!(content.trim_end().ends_with("</svg>"));
}

#[test]
fn integration_save_drawing_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("drawings");
    let formats = [ExportFormat::Png, ExportFormat::Svg, ExportFormat::Json];

    let written = save_drawing(&drawn_canvas(), &out, "spiro", &formats).unwrap();

    assert_eq!(written.len(), 3);
    for (path, format) in written.iter().zip(formats) {
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), format.extension());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("spiro-"));
    }

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[2]).unwrap()).unwrap();
    assert_eq!(json["width"], 400);
    assert_eq!(json["height"], 300);
    assert!(json["strokes"].is_array());
}

#[test]
fn integration_cleared_pen_leaves_no_strokes() {
    let mut canvas = drawn_canvas();
    let pen = canvas.create_pen();
    canvas.move_to(pen, Point2::ZERO).unwrap();
    canvas.line_to(pen, Point2::new(10.0, 0.0)).unwrap();
    let before = canvas.segment_count();
    canvas.clear(pen).unwrap();
    assert_eq!(canvas.segment_count(), before - 1);
}
