use crate::app::{SectionState, TrainerApp};
use crate::session::Action;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use crate::view_models::{ItemInfo, ProgressInfo, SummaryRow};
use egui::{Context, Grid, ProgressBar};

pub fn ui_catalog(app: &mut TrainerApp, ctx: &Context) {
    // Copiamos lo que hace falta pintar para poder despachar después
    let (title, infos, progress, rows): (String, Vec<ItemInfo>, ProgressInfo, Vec<SummaryRow>) =
        match app.current() {
            Some(section) => match &section.state {
                SectionState::Interactive(session) => (
                    section.title.clone(),
                    session.item_infos(),
                    session.progress_info(),
                    session.summary_rows(),
                ),
                SectionState::Quiz(_) => return,
            },
            None => return,
        };

    let mut action = None;
    centered_panel(ctx, 520.0, |ui| {
        let width = ui.available_width();
        ui.heading(&title);
        ui.add_space(10.0);
        ui.add(ProgressBar::new(progress.ratio as f32).text(progress.label()));
        ui.add_space(16.0);

        for info in &infos {
            if big_list_button(ui, info.label(), width, 36.0, true) {
                action = Some(Action::Open(info.id.clone()));
            }
            ui.add_space(6.0);
        }

        if rows.iter().any(|r| r.attempts > 0) {
            ui.add_space(12.0);
            ui.collapsing("Attempts this session", |ui| {
                Grid::new("session_summary_grid")
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("#");
                        ui.label("Item");
                        ui.label("Attempts");
                        ui.label("Wrong");
                        ui.label("Status");
                        ui.end_row();
                        for row in &rows {
                            ui.label(row.number.to_string());
                            ui.label(&row.title);
                            ui.label(row.attempts.to_string());
                            ui.label(row.fails.to_string());
                            ui.label(if row.done { "✅" } else { "-" });
                            ui.end_row();
                        }
                    });
            });
        }

        ui.add_space(16.0);
        if ui.button("🔄 Clear progress for this section").clicked() {
            action = Some(Action::Reset);
        }
    });

    if let Some(action) = action {
        app.dispatch(action);
    }
}
