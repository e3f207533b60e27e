use egui::{Color32, Ui};

use super::capture::apply_pointer_capture;
use super::details::user_details;
use super::search::search_bar;
use super::table::users_table;
use crate::state::State;

/// Renders the whole roster page and applies any fetches that finished since the
/// last frame.
pub fn users_page(state: &mut State, ui: &mut Ui) {
    state.roster.poll();
    state.ensure_started(ui.ctx());
    apply_pointer_capture(ui);

    ui.heading("Users");
    ui.add_space(4.0);

    search_bar(&mut state.roster, &mut state.search_input, ui);

    if state.roster.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
    }

    if let Some(message) = state.roster.rows().error_message() {
        ui.colored_label(Color32::RED, message);
    }

    ui.add_space(8.0);
    users_table(&mut state.roster, &mut state.resizer, ui);

    user_details(&mut state.roster, ui.ctx());
}
