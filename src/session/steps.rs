use super::*;

/// Resultado de marcar/desmarcar un paso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepToggle {
    pub index: usize,
    pub done: bool,
    pub all_done: bool,
}

impl Session {
    /// Marca o desmarca un paso del checklist abierto. Reversible sin límite.
    pub fn toggle_step(&mut self, index: usize) -> Result<StepToggle, EngineError> {
        let total = self.open_step_count()?;
        if index >= total {
            return Err(EngineError::StepOutOfRange { index, len: total });
        }

        let done = if self.completed_steps.remove(&index) {
            false
        } else {
            self.completed_steps.insert(index);
            true
        };
        let all_done = self.completed_steps.len() == total;
        log::debug!("step {index} -> {done} ({}/{total})", self.completed_steps.len());
        Ok(StepToggle {
            index,
            done,
            all_done,
        })
    }

    /// Todos los pasos del ítem abierto están marcados.
    pub fn steps_complete(&self) -> bool {
        self.open_step_count()
            .map(|total| self.completed_steps.len() == total)
            .unwrap_or(false)
    }

    pub fn is_step_done(&self, index: usize) -> bool {
        self.completed_steps.contains(&index)
    }

    /// Número de pasos del ítem abierto, si es un checklist.
    pub(crate) fn open_step_count(&self) -> Result<usize, EngineError> {
        let id = self
            .selection
            .open_item
            .as_ref()
            .ok_or(EngineError::NothingOpen)?;
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| EngineError::UnknownItem(id.clone()))?;
        item.steps()
            .map(|steps| steps.len())
            .ok_or_else(|| EngineError::NotChecklistItem(id.clone()))
    }
}
