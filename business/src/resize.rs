//! Drag-to-resize for the users table header.
//!
//! The resizer is reattached for every displayed set (see [`ColumnResizer::attach`]),
//! so widths set by dragging are dropped whenever the rows change.
//!
//! While a drag is active the rendering surface holds a [`PointerCapture`]: a global
//! resize cursor with text selection suspended. The capture lives in a
//! [`DragSession`] and is released when the session is dropped, which covers pointer
//! up, reattachment, a new drag and the resizer itself going away.

use log::trace;

use crate::rows::DisplayGeneration;

/// Widths at or below this are rejected while dragging.
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Global pointer state owned by the rendering surface for the length of a drag.
pub trait PointerCapture {
    /// Override the cursor with a resize indicator and suspend text selection.
    fn acquire(&mut self);

    /// Restore the default cursor and text selection.
    fn release(&mut self);
}

/// One drag, from pointer down on a handle to pointer up anywhere.
pub struct DragSession {
    column: usize,
    origin_x: f32,
    origin_width: f32,
    capture: Box<dyn PointerCapture>,
}

impl DragSession {
    fn start(
        column: usize,
        origin_x: f32,
        origin_width: f32,
        mut capture: Box<dyn PointerCapture>,
    ) -> Self {
        capture.acquire();
        Self {
            column,
            origin_x,
            origin_width,
            capture,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Width for a pointer at `pointer_x`, or `None` when it would not exceed
    /// [`MIN_COLUMN_WIDTH`].
    pub fn candidate_width(&self, pointer_x: f32) -> Option<f32> {
        let width = self.origin_width + (pointer_x - self.origin_x);
        (width > MIN_COLUMN_WIDTH).then_some(width)
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.capture.release();
    }
}

impl std::fmt::Debug for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("column", &self.column)
            .field("origin_x", &self.origin_x)
            .field("origin_width", &self.origin_width)
            .finish_non_exhaustive()
    }
}

/// Column width overrides plus the drag state machine (idle or one [`DragSession`]).
#[derive(Debug, Default)]
pub struct ColumnResizer {
    attached_to: Option<DisplayGeneration>,
    widths: Vec<Option<f32>>,
    drag: Option<DragSession>,
}

impl ColumnResizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach handles for `columns` freshly rendered headers.
    ///
    /// Call every frame; only a new `generation` resets widths and drops the drag.
    pub fn attach(&mut self, generation: DisplayGeneration, columns: usize) {
        if self.attached_to == Some(generation) && self.widths.len() == columns {
            return;
        }
        trace!("ColumnResizer: attaching {columns} handles for {generation:?}");
        self.attached_to = Some(generation);
        self.widths = vec![None; columns];
        self.drag = None;
    }

    /// Width override of `column`, if it was dragged since the last attach.
    pub fn width(&self, column: usize) -> Option<f32> {
        self.widths.get(column).copied().flatten()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Column being dragged, if any.
    pub fn dragging_column(&self) -> Option<usize> {
        self.drag.as_ref().map(DragSession::column)
    }

    /// Idle → dragging. `rendered_width` is the header's current width.
    ///
    /// Ignored for columns the resizer is not attached to.
    pub fn pointer_down(
        &mut self,
        column: usize,
        pointer_x: f32,
        rendered_width: f32,
        capture: Box<dyn PointerCapture>,
    ) {
        if column >= self.widths.len() {
            return;
        }
        // A leftover session releases its capture before the new one acquires.
        self.drag = None;
        self.drag = Some(DragSession::start(
            column,
            pointer_x,
            rendered_width,
            capture,
        ));
    }

    /// Applies a pointer move; returns the new width when it was accepted.
    pub fn pointer_move(&mut self, pointer_x: f32) -> Option<f32> {
        let drag = self.drag.as_ref()?;
        let width = drag.candidate_width(pointer_x)?;
        let column = drag.column();
        self.widths[column] = Some(width);
        Some(width)
    }

    /// Dragging → idle.
    pub fn pointer_up(&mut self) {
        if let Some(drag) = self.drag.take() {
            trace!("ColumnResizer: finished dragging column {}", drag.column());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::rows::RowEngine;
    use crate::sort::SortKey;
    use crate::test_utils::sample_users;

    /// Counts outstanding acquisitions.
    #[derive(Clone, Default)]
    struct CountingCapture {
        held: Rc<Cell<i32>>,
    }

    impl PointerCapture for CountingCapture {
        fn acquire(&mut self) {
            self.held.set(self.held.get() + 1);
        }

        fn release(&mut self) {
            self.held.set(self.held.get() - 1);
        }
    }

    fn attached(columns: usize) -> ColumnResizer {
        let mut resizer = ColumnResizer::new();
        resizer.attach(DisplayGeneration::default(), columns);
        resizer
    }

    #[test]
    fn test_drag_applies_width_above_floor() {
        let mut resizer = attached(5);
        resizer.pointer_down(1, 300.0, 100.0, Box::new(CountingCapture::default()));

        assert_eq!(resizer.pointer_move(260.0), Some(60.0));
        assert_eq!(resizer.width(1), Some(60.0));
        assert_eq!(resizer.width(0), None);
    }

    #[test]
    fn test_drag_below_floor_is_rejected() {
        let mut resizer = attached(5);
        resizer.pointer_down(1, 300.0, 100.0, Box::new(CountingCapture::default()));

        assert_eq!(resizer.pointer_move(240.0), None);
        assert_eq!(resizer.width(1), None);

        resizer.pointer_move(330.0);
        assert_eq!(resizer.pointer_move(200.0), None);
        assert_eq!(resizer.width(1), Some(130.0));
    }

    #[test]
    fn test_exact_floor_is_rejected() {
        let mut resizer = attached(1);
        resizer.pointer_down(0, 100.0, 100.0, Box::new(CountingCapture::default()));

        assert_eq!(resizer.pointer_move(50.0), None);
        assert_eq!(resizer.pointer_move(50.5), Some(50.5));
    }

    #[test]
    fn test_move_after_pointer_up_does_nothing() {
        let mut resizer = attached(5);
        resizer.pointer_down(2, 0.0, 100.0, Box::new(CountingCapture::default()));
        resizer.pointer_move(20.0);
        resizer.pointer_up();

        assert!(!resizer.is_dragging());
        assert_eq!(resizer.pointer_move(80.0), None);
        assert_eq!(resizer.width(2), Some(120.0));
    }

    #[test]
    fn test_capture_held_only_while_dragging() {
        let capture = CountingCapture::default();
        let mut resizer = attached(5);

        resizer.pointer_down(0, 0.0, 100.0, Box::new(capture.clone()));
        assert_eq!(capture.held.get(), 1);

        resizer.pointer_up();
        assert_eq!(capture.held.get(), 0);
    }

    #[test]
    fn test_capture_released_on_every_exit_path() {
        let capture = CountingCapture::default();

        let mut resizer = attached(5);
        resizer.pointer_down(0, 0.0, 100.0, Box::new(capture.clone()));
        resizer.pointer_down(1, 0.0, 100.0, Box::new(capture.clone()));
        assert_eq!(capture.held.get(), 1, "new drag releases the old capture");

        resizer.attach(DisplayGeneration::default(), 4);
        assert_eq!(capture.held.get(), 0, "reattach releases the capture");

        resizer.pointer_down(0, 0.0, 100.0, Box::new(capture.clone()));
        drop(resizer);
        assert_eq!(capture.held.get(), 0, "dropping the resizer releases the capture");
    }

    #[test]
    fn test_reattach_same_generation_keeps_widths() {
        let mut resizer = attached(5);
        resizer.pointer_down(3, 0.0, 100.0, Box::new(CountingCapture::default()));
        resizer.pointer_move(50.0);

        resizer.attach(DisplayGeneration::default(), 5);

        assert!(resizer.is_dragging());
        assert_eq!(resizer.width(3), Some(150.0));
    }

    #[test]
    fn test_new_displayed_set_drops_widths() {
        let mut engine = RowEngine::with_users(sample_users());
        let mut resizer = ColumnResizer::new();
        resizer.attach(engine.generation(), 5);
        resizer.pointer_down(0, 0.0, 100.0, Box::new(CountingCapture::default()));
        resizer.pointer_move(40.0);
        resizer.pointer_up();

        engine.sort(SortKey::Age);
        resizer.attach(engine.generation(), 5);

        assert_eq!(resizer.width(0), None);
    }

    #[test]
    fn test_pointer_down_outside_attached_columns_is_ignored() {
        let capture = CountingCapture::default();
        let mut resizer = attached(2);

        resizer.pointer_down(7, 0.0, 100.0, Box::new(capture.clone()));

        assert!(!resizer.is_dragging());
        assert_eq!(capture.held.get(), 0);
    }
}
