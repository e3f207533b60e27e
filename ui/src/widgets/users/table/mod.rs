//! The users table, split into:
//! - `columns`: column titles, default widths and the egui column list
//! - `header`: sortable header cells with their resize handles
//! - `row`: one row per displayed user

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Color32, Frame, Layout, Margin, Sense, Stroke, Ui};
use egui_extras::TableBuilder;
use roster_business::{ColumnResizer, Roster, SortKey, UserRecord};

use columns::{COLUMNS, HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::{render_table_header, track_column_drag};
use row::render_user_row;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Draws the displayed rows and routes header, handle and row clicks back into
/// the roster and resizer.
pub fn users_table(roster: &mut Roster, resizer: &mut ColumnResizer, ui: &mut Ui) {
    resizer.attach(roster.rows().generation(), COLUMNS.len());
    let sort_state = roster.rows().sort_state();

    let mut sort_clicked: Option<SortKey> = None;
    let mut selected: Option<UserRecord> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("users_table")
                .striped(true)
                .resizable(false)
                .sense(Sense::click())
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns(resizer) {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    sort_clicked = render_table_header(&mut header, sort_state, resizer);
                })
                .body(|body| {
                    let users = roster.rows().displayed();
                    body.rows(ROW_HEIGHT, users.len(), |mut row| {
                        let user = &users[row.index()];
                        if render_user_row(&mut row, user) {
                            selected = Some(user.clone());
                        }
                    });
                });
        });

    track_column_drag(ui.ctx(), resizer);

    if let Some(key) = sort_clicked {
        roster.sort(key);
    }
    if let Some(user) = selected {
        roster.select(user);
    }
}
