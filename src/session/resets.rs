use super::*;

impl Session {
    /// Descarta todo el estado de la sesión, como si la vista se montara de nuevo.
    /// El catálogo no cambia.
    pub fn reset(&mut self) {
        self.selection = SelectionState::default();
        self.completed_steps.clear();
        self.completed_ids.clear();
        self.stats.clear();
        log::info!("session reset");
    }
}
