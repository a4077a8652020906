use super::*;

impl Session {
    /// Confirma un checklist terminado: lo añade al registro y vuelve al catálogo.
    /// Solo se acepta con todos los pasos marcados.
    pub fn commit(&mut self, id: &ItemId) -> Result<(), EngineError> {
        self.require_open(id)?;
        let total = self.open_step_count()?;
        let done = self.completed_steps.len();
        if done != total {
            return Err(EngineError::StepsIncomplete { done, total });
        }

        if self.completed_ids.insert(id.clone()) {
            log::info!("activity {id} marked complete");
        }
        self.stats.entry(id.clone()).or_default().attempts += 1;
        self.close();
        Ok(())
    }

    pub fn is_completed(&self, id: &ItemId) -> bool {
        self.completed_ids.contains(id)
    }

    /// Ids completados, en orden de catálogo.
    pub fn completed_ids(&self) -> Vec<&ItemId> {
        self.catalog
            .ids()
            .filter(|id| self.completed_ids.contains(*id))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_ids().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogItem;

    fn session() -> Session {
        Session::new(
            Catalog::new(vec![CatalogItem::checklist(0, 3), CatalogItem::graded(1, 0, 2)])
                .expect("valid"),
        )
    }

    #[test]
    fn commit_is_gated_on_every_step() {
        let mut s = session();
        s.open(&ItemId::Index(0)).expect("open");
        assert_eq!(
            s.commit(&ItemId::Index(0)),
            Err(EngineError::StepsIncomplete { done: 0, total: 3 })
        );
        s.toggle_step(0).expect("toggle");
        s.toggle_step(1).expect("toggle");
        s.toggle_step(2).expect("toggle");
        s.toggle_step(1).expect("untoggle");
        assert_eq!(
            s.commit(&ItemId::Index(0)),
            Err(EngineError::StepsIncomplete { done: 2, total: 3 })
        );
        assert!(s.is_open(&ItemId::Index(0)));
        assert!(!s.is_completed(&ItemId::Index(0)));
    }

    #[test]
    fn commit_requires_the_item_to_be_open() {
        let mut s = session();
        assert_eq!(s.commit(&ItemId::Index(0)), Err(EngineError::NothingOpen));
        s.open(&ItemId::Index(1)).expect("open");
        assert_eq!(
            s.commit(&ItemId::Index(0)),
            Err(EngineError::NotOpen { requested: ItemId::Index(0) })
        );
        assert_eq!(
            s.commit(&ItemId::Index(1)),
            Err(EngineError::NotChecklistItem(ItemId::Index(1)))
        );
    }

    #[test]
    fn committed_activity_survives_reopen_and_untoggle() {
        let mut s = session();
        s.open(&ItemId::Index(0)).expect("open");
        for i in 0..3 {
            s.toggle_step(i).expect("toggle");
        }
        s.commit(&ItemId::Index(0)).expect("commit");
        assert_eq!(s.selection().open_item, None);

        s.open(&ItemId::Index(0)).expect("reopen");
        assert!(s.completed_steps().is_empty());
        s.toggle_step(0).expect("toggle");
        s.toggle_step(0).expect("untoggle");
        assert!(s.is_completed(&ItemId::Index(0)));
        assert_eq!(s.completed_ids(), vec![&ItemId::Index(0)]);
    }
}
