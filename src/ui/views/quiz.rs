use crate::app::{SectionState, TrainerApp};
use crate::model::CatalogItem;
use crate::quiz::{ReviewFilter, SectionQuiz};
use crate::ui::helpers::{CORRECT, INCORRECT};
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

enum QuizAction {
    Select(usize),
    Previous,
    Next,
    GoTo(usize),
    ToggleFlag,
    NextFlagged,
    Submit,
    Restart,
}

fn current_quiz(app: &TrainerApp) -> Option<&SectionQuiz> {
    match &app.current()?.state {
        SectionState::Quiz(quiz) => Some(quiz),
        SectionState::Interactive(_) => None,
    }
}

fn apply(app: &mut TrainerApp, action: QuizAction) {
    match action {
        QuizAction::Select(i) => {
            app.with_quiz(|q| q.select_answer(i));
        }
        QuizAction::Previous => {
            app.with_quiz(|q| Ok(q.previous()));
        }
        QuizAction::Next => {
            app.with_quiz(|q| Ok(q.next()));
        }
        QuizAction::GoTo(i) => {
            app.with_quiz(|q| q.go_to(i));
        }
        QuizAction::ToggleFlag => {
            app.with_quiz(|q| q.toggle_flag());
        }
        QuizAction::NextFlagged => {
            app.with_quiz(|q| Ok(q.next_flagged()));
        }
        QuizAction::Submit => {
            app.with_quiz(|q| q.submit());
        }
        QuizAction::Restart => {
            app.with_quiz(|q| {
                q.restart();
                Ok(())
            });
        }
    }
}

pub fn ui_quiz(app: &mut TrainerApp, ctx: &Context) {
    let Some(quiz) = current_quiz(app) else {
        return;
    };
    let title = app.current().map(|s| s.title.clone()).unwrap_or_default();
    let Some(item): Option<CatalogItem> = quiz.current().cloned() else {
        // quiz vacío: solo se puede enviar
        let mut submit = false;
        centered_panel(ctx, 400.0, |ui| {
            ui.heading(&title);
            ui.label("This quiz has no questions.");
            submit = ui.button("Finish").clicked();
        });
        if submit {
            apply(app, QuizAction::Submit);
        }
        return;
    };
    let position = quiz.position();
    let total = quiz.len();
    let chosen = quiz.answer(position);
    let answered: Vec<bool> = (0..total).map(|i| quiz.answer(i).is_some()).collect();
    let flagged: Vec<bool> = (0..total).map(|i| quiz.is_flagged(i)).collect();
    let stats = quiz.stats();

    let mut action = None;
    centered_panel(ctx, 600.0, |ui| {
        let width = ui.available_width();
        ui.heading(&title);
        ui.label(format!("Question {} of {}", position + 1, total));
        ui.add_space(8.0);

        // Navegación directa por número de pregunta
        ui.horizontal_wrapped(|ui| {
            for (i, done) in answered.iter().enumerate() {
                let mut label = (i + 1).to_string();
                if *done {
                    label.push_str(" ●");
                }
                if flagged[i] {
                    label.push_str(" 🚩");
                }
                if ui.selectable_label(i == position, label).clicked() {
                    action = Some(QuizAction::GoTo(i));
                }
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&item.title).strong());
            let flag = if flagged[position] { "🚩 Unflag" } else { "🏳 Flag" };
            if ui.button(flag).clicked() {
                action = Some(QuizAction::ToggleFlag);
            }
        });
        ui.add_space(8.0);
        for i in 0..item.option_count() {
            let text = item.option_text(i).unwrap_or_default();
            let button = Button::new(text)
                .selected(chosen == Some(i))
                .min_size(egui::vec2(width, 32.0));
            if ui.add(button).clicked() {
                action = Some(QuizAction::Select(i));
            }
            ui.add_space(4.0);
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(position > 0, Button::new("◀ Previous")).clicked() {
                action = Some(QuizAction::Previous);
            }
            if position + 1 < total {
                if ui.button("Next ▶").clicked() {
                    action = Some(QuizAction::Next);
                }
            } else if ui.button("Submit answers").clicked() {
                action = Some(QuizAction::Submit);
            }
            if ui
                .add_enabled(stats.flagged > 0, Button::new("Next flagged 🚩"))
                .clicked()
            {
                action = Some(QuizAction::NextFlagged);
            }
        });
        ui.label(RichText::new(stats.label()).weak());
    });

    if let Some(action) = action {
        apply(app, action);
    }
}

pub fn ui_quiz_results(app: &mut TrainerApp, ctx: &Context) {
    let Some(quiz) = current_quiz(app) else {
        return;
    };
    let filter = app.review_filter;
    let (Ok(score), Ok(rows)) = (quiz.score(), quiz.review_rows_filtered(filter)) else {
        return;
    };

    let mut restart = false;
    let mut new_filter = None;
    centered_panel(ctx, 600.0, |ui| {
        ui.heading("Quiz results");
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "{}/{} ({:.0}%)",
                score.correct, score.total, score.percentage
            ))
            .size(28.0)
            .strong(),
        );
        ui.label(score.band.message());
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            for f in ReviewFilter::ALL {
                if ui.selectable_label(f == filter, f.label()).clicked() {
                    new_filter = Some(f);
                }
            }
        });
        ui.add_space(8.0);
        if rows.is_empty() {
            ui.label(RichText::new("No questions match this filter.").weak());
        }

        for row in &rows {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                let (mark, color) = if row.is_correct {
                    ("✅", CORRECT)
                } else {
                    ("❌", INCORRECT)
                };
                let flag = if row.flagged { " 🚩" } else { "" };
                ui.colored_label(
                    color,
                    format!("{mark} {}. {}{flag}", row.number, row.question),
                );
                ui.label(format!(
                    "Your answer: {}",
                    row.answer.as_deref().unwrap_or("not answered")
                ));
                if !row.is_correct {
                    ui.label(format!("Correct answer: {}", row.correct_answer));
                }
                if let Some(explanation) = &row.explanation {
                    ui.label(RichText::new(explanation).weak());
                }
            });
        }

        ui.add_space(16.0);
        restart = ui.button("⟲ Retake quiz").clicked();
    });

    if let Some(f) = new_filter {
        app.review_filter = f;
    }
    if restart {
        app.review_filter = ReviewFilter::All;
        apply(app, QuizAction::Restart);
    }
}
