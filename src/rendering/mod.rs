pub mod canvas;

// Re-export main types
pub use canvas::{CanvasCommand, RecordingCanvas, TransformGuard};
