use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::judge::Verdict;
use crate::model::ItemId;
use std::collections::{BTreeSet, HashMap, HashSet};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod steps;
pub mod view_models;

pub use progress::progress_ratio;
pub use steps::StepToggle;

/// Qué ítem está abierto y qué se ha respondido en este intento.
/// `chosen_response` y `feedback_visible` solo tienen sentido con un ítem abierto.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub open_item: Option<ItemId>,
    pub chosen_response: Option<usize>,
    pub feedback_visible: bool,
}

/// Contadores de la sesión por ítem (no se guardan en ningún sitio).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub attempts: u32,
    pub fails: u32,
}

/// Acciones del usuario, despachadas de una en una.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Open(ItemId),
    Close,
    Choose { item: ItemId, index: usize },
    ToggleStep(usize),
    Commit(ItemId),
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Opened(ItemId),
    Closed,
    Answered(Verdict),
    StepToggled(StepToggle),
    Committed(ItemId),
    Reset,
}

/// Estado de una vista con catálogo: selección, pasos del ítem abierto
/// y registro de completados de toda la sesión.
///
/// Todas las transiciones validan antes de mutar; si devuelven `Err`
/// el estado no ha cambiado.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    selection: SelectionState,
    completed_steps: BTreeSet<usize>,
    completed_ids: HashSet<ItemId>,
    stats: HashMap<ItemId, ItemStats>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
            completed_steps: BTreeSet::new(),
            completed_ids: HashSet::new(),
            stats: HashMap::new(),
        }
    }

    /// Punto de entrada único: aplica una acción sobre el estado actual.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, EngineError> {
        let result = match action {
            Action::Open(id) => self.open(&id).map(|()| Outcome::Opened(id)),
            Action::Close => {
                self.close();
                Ok(Outcome::Closed)
            }
            Action::Choose { item, index } => self.evaluate(&item, index).map(Outcome::Answered),
            Action::ToggleStep(index) => self.toggle_step(index).map(Outcome::StepToggled),
            Action::Commit(id) => self.commit(&id).map(|()| Outcome::Committed(id)),
            Action::Reset => {
                self.reset();
                Ok(Outcome::Reset)
            }
        };
        if let Err(e) = &result {
            log::warn!("rejected action: {e}");
        }
        result
    }

    /// Limpia todo lo que depende del ítem abierto.
    fn clear_transient(&mut self) {
        self.selection.chosen_response = None;
        self.selection.feedback_visible = false;
        self.completed_steps.clear();
    }

    /// Devuelve el id abierto si coincide con `id`.
    fn require_open(&self, id: &ItemId) -> Result<(), EngineError> {
        match &self.selection.open_item {
            None => Err(EngineError::NothingOpen),
            Some(open) if open == id => Ok(()),
            Some(_) => Err(EngineError::NotOpen {
                requested: id.clone(),
            }),
        }
    }
}
