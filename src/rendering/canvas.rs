use crate::core::geo::Point;
use crate::traits::CanvasTransform;
use std::ops::{Deref, DerefMut};

/// Transform commands issued to a drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    Save,
    Restore,
    Translate(Point),
    Rotate(f64),
}

/// Canvas that records transform commands instead of drawing.
///
/// Used for headless placement and for checking save/restore nesting.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub commands: Vec<CanvasCommand>,
    depth: usize,
    max_depth: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves not yet restored
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest nesting seen so far
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }
}

impl CanvasTransform for RecordingCanvas {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(CanvasCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!("restore called without a matching save");
        }
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(CanvasCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::Translate(Point::new(x, y)));
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(CanvasCommand::Rotate(angle));
    }
}

/// Restores a saved canvas transform when dropped.
///
/// Derefs to the canvas so drawing happens through the guard; the borrow
/// keeps a second symbol from pushing its transform until this one is gone.
pub struct TransformGuard<'a, C: CanvasTransform + ?Sized> {
    canvas: &'a mut C,
    offset: Point,
}

impl<'a, C: CanvasTransform + ?Sized> TransformGuard<'a, C> {
    /// Wraps a canvas whose transform was already saved
    pub(crate) fn new(canvas: &'a mut C, offset: Point) -> Self {
        Self { canvas, offset }
    }

    /// Offset to translate by to get back to the anchor
    pub fn offset(&self) -> Point {
        self.offset
    }
}

impl<C: CanvasTransform + ?Sized> Deref for TransformGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: CanvasTransform + ?Sized> DerefMut for TransformGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: CanvasTransform + ?Sized> Drop for TransformGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_tracks_depth() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        canvas.save();
        canvas.restore();
        assert_eq!(canvas.depth(), 1);
        assert_eq!(canvas.max_depth(), 2);

        canvas.restore();
        canvas.restore();
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        {
            let mut guard = TransformGuard::new(&mut canvas, Point::new(1.0, 2.0));
            guard.translate(3.0, 4.0);
            assert_eq!(guard.offset(), Point::new(1.0, 2.0));
        }

        assert_eq!(canvas.depth(), 0);
        assert_eq!(
            canvas.commands,
            vec![
                CanvasCommand::Save,
                CanvasCommand::Translate(Point::new(3.0, 4.0)),
                CanvasCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn draw(canvas: &mut RecordingCanvas) -> Result<(), &'static str> {
            canvas.save();
            let _guard = TransformGuard::new(canvas, Point::ORIGIN);
            Err("image not loaded")
        }

        let mut canvas = RecordingCanvas::new();
        assert!(draw(&mut canvas).is_err());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.commands.last(), Some(&CanvasCommand::Restore));
    }
}
