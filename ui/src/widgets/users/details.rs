//! Overlay with the full record of the clicked row.

use egui::{Align2, Context, Id, RichText, Ui, Window};
use roster_business::Roster;

pub fn user_details(roster: &mut Roster, ctx: &Context) {
    let Some(user) = roster.selected() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    Window::new(RichText::new(user.full_name()).strong())
        .id(Id::new("user_details"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            detail_line(ui, "Age", user.age.to_string());
            detail_line(ui, "Gender", user.gender.clone());
            detail_line(ui, "Address", user.display_address());
            detail_line(ui, "Height", format!("{} cm", user.height));
            detail_line(ui, "Weight", format!("{} kg", user.weight));
            detail_line(ui, "Phone", user.phone.clone());
            detail_line(ui, "Email", user.email.clone());

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        roster.close_details();
    }
}

fn detail_line(ui: &mut Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.strong(format!("{label}:"));
        ui.label(value);
    });
}
