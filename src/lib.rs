#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod export;
pub mod history;
pub mod panels;
pub mod primitive;
pub mod recorder;
pub mod style;
pub mod surface;

pub use app::SketchApp;
pub use export::ExportError;
pub use history::History;
pub use primitive::{Primitive, PrimitiveId, Shape};
pub use recorder::StrokeRecorder;
pub use style::{Tool, ToolStyle};
pub use surface::Surface;
