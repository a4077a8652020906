use super::*;

impl Session {
    /// Abre un ítem. Si ya estaba abierto, vuelve a empezar el intento
    /// (se borra la respuesta y los pasos marcados).
    pub fn open(&mut self, id: &ItemId) -> Result<(), EngineError> {
        if !self.catalog.contains(id) {
            return Err(EngineError::UnknownItem(id.clone()));
        }
        self.clear_transient();
        self.selection.open_item = Some(id.clone());
        log::debug!("opened item {id}");
        Ok(())
    }

    /// Vuelve a la vista de catálogo. No toca el registro de completados.
    pub fn close(&mut self) {
        if let Some(id) = self.selection.open_item.take() {
            log::debug!("closed item {id}");
        }
        self.clear_transient();
    }

    pub fn is_open(&self, id: &ItemId) -> bool {
        self.selection.open_item.as_ref() == Some(id)
    }
}
