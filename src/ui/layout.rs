use crate::app::TrainerApp;
use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut TrainerApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let mut selected = None;
            for (idx, section) in app.sections.iter().enumerate() {
                let active = idx == app.current_section;
                if ui.selectable_label(active, &section.title).clicked() {
                    selected = Some(idx);
                }
            }
            if let Some(idx) = selected {
                app.select_section(idx);
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(app: &TrainerApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if !app.message.is_empty() {
                ui.label(&app.message);
            }
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado horizontalmente con scroll, de anchura máxima `max_width`.
pub fn centered_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        let w = ui.available_width().min(max_width);
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}
