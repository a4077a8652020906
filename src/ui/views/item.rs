use crate::app::{SectionState, TrainerApp};
use crate::judge::Verdict;
use crate::model::{CatalogItem, Classification, ItemBody};
use crate::session::Action;
use crate::ui::helpers::{CORRECT, classification_color, option_button, tier_color, tier_label};
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Ui};

/// Lo necesario para pintar el ítem abierto sin mantener el préstamo de la sesión.
struct OpenItemView {
    item: CatalogItem,
    feedback_visible: bool,
    verdict: Option<Verdict>,
    steps_done: Vec<bool>,
    steps_complete: bool,
    completed: bool,
}

fn snapshot(app: &TrainerApp) -> Option<OpenItemView> {
    let SectionState::Interactive(session) = &app.current()?.state else {
        return None;
    };
    let item = session.open_item()?.clone();
    let steps_done = (0..item.steps().map_or(0, |s| s.len()))
        .map(|i| session.is_step_done(i))
        .collect();
    Some(OpenItemView {
        feedback_visible: session.selection().feedback_visible,
        verdict: session.current_verdict(),
        steps_complete: session.steps_complete(),
        completed: session.is_completed(&item.id),
        steps_done,
        item,
    })
}

pub fn ui_item(app: &mut TrainerApp, ctx: &Context) {
    let Some(view) = snapshot(app) else {
        return;
    };

    let mut action = None;
    centered_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        if let Some(topic) = &view.item.topic {
            ui.label(RichText::new(topic).small());
        }
        ui.horizontal(|ui| {
            ui.heading(&view.item.title);
            if view.completed {
                ui.colored_label(CORRECT, "✅");
            }
        });
        if !view.item.prompt.is_empty() {
            ui.add_space(6.0);
            ui.label(&view.item.prompt);
        }
        ui.add_space(12.0);

        match &view.item.body {
            ItemBody::Checklist { steps } => {
                for (i, step) in steps.iter().enumerate() {
                    let mut done = view.steps_done[i];
                    if ui.checkbox(&mut done, &step.description).changed() {
                        action = Some(Action::ToggleStep(i));
                    }
                }
                ui.add_space(12.0);
                let commit = Button::new("Mark activity complete");
                if ui
                    .add_enabled(view.steps_complete, commit)
                    .on_disabled_hover_text("Tick every step first")
                    .clicked()
                {
                    action = Some(Action::Commit(view.item.id.clone()));
                }
            }
            _ => {
                for i in 0..view.item.option_count() {
                    let text = view.item.option_text(i).unwrap_or_default();
                    let highlight = view
                        .verdict
                        .as_ref()
                        .filter(|v| v.chosen == i)
                        .map(|v| classification_color(v.classification));
                    if option_button(ui, text, width, !view.feedback_visible, highlight) {
                        action = Some(Action::Choose {
                            item: view.item.id.clone(),
                            index: i,
                        });
                    }
                    ui.add_space(4.0);
                }
                if let Some(verdict) = &view.verdict {
                    ui.add_space(10.0);
                    verdict_panel(ui, &view.item, verdict);
                }
            }
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if view.feedback_visible && ui.button("⟲ Try again").clicked() {
                action = Some(Action::Open(view.item.id.clone()));
            }
            if ui.button("Back to list").clicked() {
                action = Some(Action::Close);
            }
        });
    });

    if let Some(action) = action {
        app.dispatch(action);
    }
}

fn verdict_panel(ui: &mut Ui, item: &CatalogItem, verdict: &Verdict) {
    let color = classification_color(verdict.classification);
    match verdict.classification {
        Classification::Correct => {
            ui.colored_label(color, "✅ Correct");
        }
        Classification::Incorrect => {
            ui.colored_label(color, "❌ Not quite");
        }
        Classification::Tiered(tier) => {
            ui.colored_label(color, tier_label(tier));
        }
    }
    ui.label(&verdict.feedback);

    if verdict.classification == Classification::Incorrect {
        if let Some(text) = verdict.correct_index.and_then(|i| item.option_text(i)) {
            ui.label(format!("Best answer: {text}"));
        }
    }

    // Comparativa de todas las respuestas (ítems por niveles)
    if !verdict.ranking.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new("How each reply lands").strong());
        for ranked in &verdict.ranking {
            ui.group(|ui| {
                ui.colored_label(tier_color(ranked.tier), tier_label(ranked.tier));
                ui.label(RichText::new(&ranked.text).italics());
                ui.label(&ranked.feedback);
            });
        }
    }

    if let Some(explanation) = &verdict.explanation {
        ui.add_space(8.0);
        ui.label(RichText::new(explanation).weak());
    }
}
