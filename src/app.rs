use crate::data::{Section, SectionMode};
use crate::error::{CatalogError, EngineError};
use crate::quiz::{ReviewFilter, SectionQuiz};
use crate::session::{Action, Outcome, Session};

/// Estado vivo de una sección de contenido.
#[derive(Debug, Clone)]
pub enum SectionState {
    Interactive(Session),
    Quiz(SectionQuiz),
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub title: String,
    pub state: SectionState,
}

/// Aplicación de escritorio: una sesión por sección, todo en memoria.
pub struct TrainerApp {
    pub sections: Vec<SectionView>,
    pub current_section: usize,
    pub message: String,
    pub review_filter: ReviewFilter,
}

impl TrainerApp {
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let sections = sections
            .into_iter()
            .map(|section| -> Result<SectionView, CatalogError> {
                let state = match section.mode {
                    SectionMode::Interactive => SectionState::Interactive(Session::new(section.catalog)),
                    SectionMode::Quiz => SectionState::Quiz(SectionQuiz::new(section.catalog)?),
                };
                Ok(SectionView {
                    title: section.title,
                    state,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            sections,
            current_section: 0,
            message: String::new(),
            review_filter: ReviewFilter::All,
        })
    }

    pub fn select_section(&mut self, idx: usize) {
        if idx < self.sections.len() {
            self.current_section = idx;
            self.message.clear();
            self.review_filter = ReviewFilter::All;
        }
    }

    pub fn current(&self) -> Option<&SectionView> {
        self.sections.get(self.current_section)
    }

    pub fn current_mut(&mut self) -> Option<&mut SectionView> {
        self.sections.get_mut(self.current_section)
    }

    /// Despacha una acción en la sesión de la sección actual y deja el
    /// resultado en `message`.
    pub fn dispatch(&mut self, action: Action) {
        let result = match self.current_mut().map(|s| &mut s.state) {
            Some(SectionState::Interactive(session)) => session.dispatch(action),
            _ => return,
        };
        self.message = match result {
            Ok(Outcome::Committed(_)) => "✅ Activity marked complete".into(),
            Ok(Outcome::Reset) => "🔄 Progress cleared".into(),
            Ok(_) => String::new(),
            Err(e) => format!("⚠ {e}"),
        };
    }

    /// Ejecuta `f` sobre el quiz de la sección actual, si lo es.
    pub fn with_quiz<T>(
        &mut self,
        f: impl FnOnce(&mut SectionQuiz) -> Result<T, EngineError>,
    ) -> Option<T> {
        let quiz = match self.current_mut().map(|s| &mut s.state) {
            Some(SectionState::Quiz(quiz)) => quiz,
            _ => return None,
        };
        match f(quiz) {
            Ok(value) => {
                self.message.clear();
                Some(value)
            }
            Err(e) => {
                log::warn!("quiz action rejected: {e}");
                self.message = format!("⚠ {e}");
                None
            }
        }
    }
}
