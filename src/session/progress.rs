use super::*;
use crate::view_models::ProgressInfo;

/// Fracción de ítems del catálogo presentes en `completed`, en [0, 1].
/// Un catálogo vacío da 0.
pub fn progress_ratio(catalog: &Catalog, completed: &HashSet<ItemId>) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let done = catalog.ids().filter(|id| completed.contains(*id)).count();
    done as f64 / catalog.len() as f64
}

impl Session {
    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(&self.catalog, &self.completed_ids)
    }

    pub fn progress_info(&self) -> ProgressInfo {
        ProgressInfo {
            completed: self.completed_count(),
            total: self.catalog.len(),
            ratio: self.progress_ratio(),
        }
    }
}
