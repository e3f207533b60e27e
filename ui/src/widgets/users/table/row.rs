//! Row rendering for the users table.

use egui::{Label, Stroke, Ui};
use egui_extras::TableRow;
use roster_business::UserRecord;

/// Renders one user; returns `true` when the row was clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) -> bool {
    let cells = [
        user.full_name(),
        user.age.to_string(),
        user.gender.clone(),
        user.phone.clone(),
        user.display_address(),
    ];
    for text in cells {
        row.col(|ui| {
            render_text_cell(ui, text);
            draw_cell_bottom_border(ui);
        });
    }
    row.response().clicked()
}

/// Cell labels ignore the pointer so clicks land on the row.
#[inline]
fn render_text_cell(ui: &mut Ui, text: String) {
    ui.add(Label::new(text).selectable(false).truncate());
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
