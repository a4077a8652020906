use super::*;
use crate::judge::judge_response;
use crate::model::Classification;

impl Session {
    /// Evalúa la respuesta `index` sobre el ítem abierto.
    ///
    /// Es de un solo uso por apertura: con el feedback visible cualquier otra
    /// respuesta se rechaza hasta que el ítem se vuelva a abrir.
    pub fn evaluate(&mut self, id: &ItemId, index: usize) -> Result<Verdict, EngineError> {
        self.require_open(id)?;
        if self.selection.feedback_visible {
            return Err(EngineError::AlreadyAnswered(id.clone()));
        }
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| EngineError::UnknownItem(id.clone()))?;
        let verdict = judge_response(item, index)?;

        self.selection.chosen_response = Some(index);
        self.selection.feedback_visible = true;

        let stats = self.stats.entry(id.clone()).or_default();
        stats.attempts += 1;
        if verdict.classification == Classification::Incorrect {
            stats.fails += 1;
        }

        if verdict.completes_item() && self.completed_ids.insert(id.clone()) {
            log::info!("item {id} answered correctly");
        }
        Ok(verdict)
    }

    /// Veredicto de la respuesta ya dada en este intento, para pintarlo.
    pub fn current_verdict(&self) -> Option<Verdict> {
        let id = self.selection.open_item.as_ref()?;
        let index = self.selection.chosen_response?;
        let item = self.catalog.get(id)?;
        judge_response(item, index).ok()
    }
}
