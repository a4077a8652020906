mod helpers;
pub mod layout;
pub mod views;

use crate::app::{SectionState, TrainerApp};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

enum View {
    Catalog,
    Item,
    Quiz,
    QuizResults,
    Empty,
}

impl App for TrainerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PESTAÑAS DE SECCIÓN
        top_panel(self, ctx);

        // MENSAJES Y TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        let view = match self.current().map(|s| &s.state) {
            Some(SectionState::Interactive(session)) if session.selection().open_item.is_some() => {
                View::Item
            }
            Some(SectionState::Interactive(_)) => View::Catalog,
            Some(SectionState::Quiz(quiz)) if quiz.is_submitted() => View::QuizResults,
            Some(SectionState::Quiz(_)) => View::Quiz,
            None => View::Empty,
        };

        // Dispatch por vista
        match view {
            View::Catalog => views::catalog::ui_catalog(self, ctx),
            View::Item => views::item::ui_item(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::QuizResults => views::quiz::ui_quiz_results(self, ctx),
            View::Empty => views::empty::ui_empty(ctx),
        }
    }
}
