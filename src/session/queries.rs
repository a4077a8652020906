use super::*;
use crate::model::CatalogItem;

impl Session {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Pasos marcados del ítem abierto.
    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    /// Ítem abierto, si lo hay.
    pub fn open_item(&self) -> Option<&CatalogItem> {
        self.selection
            .open_item
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn stats(&self, id: &ItemId) -> ItemStats {
        self.stats.get(id).copied().unwrap_or_default()
    }
}
