use super::*;
pub use crate::view_models::{ItemInfo, SummaryRow};

impl Session {
    pub fn item_infos(&self) -> Vec<ItemInfo> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(idx, item)| ItemInfo {
                idx,
                id: item.id.clone(),
                title: item.title.clone(),
                kind: item.kind(),
                completed: self.is_completed(&item.id),
                attempts: self.stats(&item.id).attempts,
            })
            .collect()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let stats = self.stats(&item.id);
                SummaryRow {
                    number: i + 1,
                    title: item.title.clone(),
                    attempts: stats.attempts,
                    fails: stats.fails,
                    done: self.is_completed(&item.id),
                }
            })
            .collect()
    }
}
