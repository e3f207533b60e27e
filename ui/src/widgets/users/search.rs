use egui::{TextEdit, Ui};
use roster_business::Roster;

/// Single-line search box. Every edit goes to the roster, blank or not.
pub fn search_bar(roster: &mut Roster, input: &mut String, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let label = ui.label("Search:");
        let response = ui
            .add(
                TextEdit::singleline(input)
                    .hint_text("Name, age, gender, phone or city")
                    .desired_width(320.0),
            )
            .labelled_by(label.id);
        if response.changed() {
            roster.search(input);
        }
    });
}
