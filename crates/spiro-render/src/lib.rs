pub mod canvas;
pub mod export;

// Re-export main types
pub use canvas::{Canvas, Stroke};
pub use export::{
    save_drawing, ExportFormat, ImageExporter, JsonExporter, PngExporter, SvgExporter,
};
