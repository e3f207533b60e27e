//! Header rendering for the users table: sortable titles plus a drag handle on
//! the trailing edge of every cell.

use egui::{
    Color32, Context, CursorIcon, Label, Rect, RichText, Sense, Ui, WidgetInfo, WidgetType, pos2,
};
use egui_extras::TableRow;
use roster_business::{ColumnResizer, SortDirection, SortKey, SortState};

use super::columns::{COLUMNS, RESIZE_HANDLE_WIDTH, effective_width};
use crate::widgets::users::capture::EguiPointerCapture;

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Renders every header cell; returns the column whose title was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: SortState,
    resizer: &mut ColumnResizer,
) -> Option<SortKey> {
    let mut clicked = None;
    for (index, column) in COLUMNS.iter().enumerate() {
        header.col(|ui| {
            let direction = sort.direction_for(column.key);
            if render_header_cell(ui, column.title, direction) {
                clicked = Some(column.key);
            }
            render_resize_handle(ui, index, resizer);
        });
    }
    clicked
}

/// Title with the direction glyph appended while the column is sorted.
pub fn header_label(title: &str, direction: SortDirection) -> String {
    match direction {
        SortDirection::None => title.to_owned(),
        direction => format!("{title} {}", direction.glyph()),
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, title: &str, direction: SortDirection) -> bool {
    ui.painter()
        .rect_filled(ui.max_rect(), 0.0, HEADER_BG_COLOR);
    ui.add(
        Label::new(RichText::new(header_label(title, direction)).strong())
            .selectable(false)
            .sense(Sense::click()),
    )
    .on_hover_cursor(CursorIcon::PointingHand)
    .clicked()
}

#[inline]
fn render_resize_handle(ui: &mut Ui, index: usize, resizer: &mut ColumnResizer) {
    let cell = ui.max_rect();
    let handle_rect = Rect::from_min_max(
        pos2(cell.right() - RESIZE_HANDLE_WIDTH, cell.top()),
        cell.right_bottom(),
    );
    let response = ui.interact(
        handle_rect,
        ui.id().with(("resize_handle", index)),
        Sense::drag(),
    );
    response.widget_info(|| {
        WidgetInfo::labeled(
            WidgetType::Other,
            true,
            format!("Resize {}", COLUMNS[index].title),
        )
    });

    if response.drag_started() {
        // Measure from where the button went down.
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(origin) = origin {
            let width = effective_width(resizer, index);
            resizer.pointer_down(
                index,
                origin.x,
                width,
                Box::new(EguiPointerCapture::new(ui.ctx().clone())),
            );
        }
    }

    let active = response.hovered() || resizer.dragging_column() == Some(index);
    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
    }
    let stroke = if active {
        ui.visuals().widgets.active.bg_stroke
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    ui.painter()
        .vline(handle_rect.right(), handle_rect.y_range(), stroke);
}

/// Feeds the pointer to an active drag for the whole frame, wherever it is, and
/// ends the drag once the primary button is up.
pub fn track_column_drag(ctx: &Context, resizer: &mut ColumnResizer) {
    if !resizer.is_dragging() {
        return;
    }
    let (position, released) = ctx.input(|i| (i.pointer.latest_pos(), !i.pointer.primary_down()));
    if let Some(position) = position {
        resizer.pointer_move(position.x);
    }
    if released {
        resizer.pointer_up();
    }
}
