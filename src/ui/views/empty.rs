use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_empty(ctx: &Context) {
    centered_panel(ctx, 400.0, |ui| {
        ui.heading("No content loaded");
    });
}
