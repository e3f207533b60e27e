//! Pointer capture backed by egui temp memory.
//!
//! While a column drag holds the capture, the page shows the resize cursor on every
//! widget and turns off text selection so the drag never highlights cell text.

use egui::{Context, CursorIcon, Id, Ui};
use roster_business::PointerCapture;

fn capture_id() -> Id {
    Id::new("roster_pointer_capture")
}

pub struct EguiPointerCapture {
    ctx: Context,
}

impl EguiPointerCapture {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl PointerCapture for EguiPointerCapture {
    fn acquire(&mut self) {
        self.ctx
            .memory_mut(|mem| mem.data.insert_temp(capture_id(), true));
        self.ctx.request_repaint();
    }

    fn release(&mut self) {
        self.ctx
            .memory_mut(|mem| mem.data.remove::<bool>(capture_id()));
        self.ctx.request_repaint();
    }
}

pub fn is_pointer_captured(ctx: &Context) -> bool {
    ctx.memory(|mem| mem.data.get_temp::<bool>(capture_id()))
        .unwrap_or(false)
}

/// Page-wide drag effects for this frame.
pub(super) fn apply_pointer_capture(ui: &mut Ui) {
    if !is_pointer_captured(ui.ctx()) {
        return;
    }
    ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
    ui.style_mut().interaction.selectable_labels = false;
}
