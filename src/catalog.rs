use crate::error::CatalogError;
use crate::model::{CatalogItem, ItemBody, ItemId};
use std::collections::HashSet;

/// Colección ordenada e inmutable de ítems evaluables.
/// El orden de inserción es el orden de presentación.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Valida y construye el catálogo. Falla al primer ítem mal formado.
    /// Los ids se comparan por su forma visible: `3` y `"3"` chocan.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.to_string()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            validate_item(item)?;
        }
        log::debug!("catalog loaded with {} items", items.len());
        Ok(Self { items })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_yaml::from_str(yaml)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }
}

fn validate_item(item: &CatalogItem) -> Result<(), CatalogError> {
    match &item.body {
        ItemBody::Graded { options } => {
            if options.is_empty() {
                return Err(CatalogError::EmptyOptions(item.id.clone()));
            }
            match options.iter().filter(|o| o.correct).count() {
                0 => Err(CatalogError::NoCorrectOption(item.id.clone())),
                1 => Ok(()),
                count => Err(CatalogError::MultipleCorrectOptions {
                    id: item.id.clone(),
                    count,
                }),
            }
        }
        ItemBody::Tiered { options } if options.is_empty() => {
            Err(CatalogError::EmptyOptions(item.id.clone()))
        }
        ItemBody::Checklist { steps } if steps.is_empty() => {
            Err(CatalogError::EmptySteps(item.id.clone()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradedOption, Tier};

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            CatalogItem::graded(1, 0, 2),
            CatalogItem::checklist(1, 3),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ItemId::Index(1))));
    }

    #[test]
    fn numeric_and_string_ids_with_same_text_collide() {
        let yaml = r#"
- id: 3
  title: Numbered
  kind: checklist
  steps: [Isolate]
- id: "3"
  title: Keyed
  kind: checklist
  steps: [Isolate]
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ItemId::Key(ref k)) if k == "3"));

        let catalog = Catalog::from_yaml(&yaml.replace("\"3\"", "rcd-3")).expect("valid");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_empty_option_and_step_lists() {
        let err = Catalog::new(vec![CatalogItem::tiered(0, &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyOptions(_)));

        let err = Catalog::new(vec![CatalogItem::checklist(0, 0)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySteps(_)));

        let mut item = CatalogItem::graded(0, 0, 1);
        item.body = ItemBody::Graded { options: vec![] };
        assert!(matches!(
            Catalog::new(vec![item]).unwrap_err(),
            CatalogError::EmptyOptions(_)
        ));
    }

    #[test]
    fn graded_items_need_exactly_one_correct_option() {
        let mut none_correct = CatalogItem::graded(0, 0, 2);
        if let ItemBody::Graded { options } = &mut none_correct.body {
            options[0].correct = false;
        }
        assert!(matches!(
            Catalog::new(vec![none_correct]).unwrap_err(),
            CatalogError::NoCorrectOption(_)
        ));

        let mut two_correct = CatalogItem::graded(0, 0, 3);
        if let ItemBody::Graded { options } = &mut two_correct.body {
            options.push(GradedOption {
                text: "Also right".into(),
                feedback: String::new(),
                correct: true,
            });
        }
        assert!(matches!(
            Catalog::new(vec![two_correct]).unwrap_err(),
            CatalogError::MultipleCorrectOptions { count: 2, .. }
        ));
    }

    #[test]
    fn tiered_items_may_share_a_tier() {
        let catalog =
            Catalog::new(vec![CatalogItem::tiered(0, &[Tier::Low, Tier::Low, Tier::High])])
                .expect("valid");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn keeps_authoring_order_and_looks_up_by_id() {
        let catalog = Catalog::new(vec![
            CatalogItem::graded(7, 0, 2),
            CatalogItem::graded(3, 1, 2),
        ])
        .expect("valid");
        let ids: Vec<_> = catalog.ids().cloned().collect();
        assert_eq!(ids, vec![ItemId::Index(7), ItemId::Index(3)]);
        assert_eq!(catalog.position(&ItemId::Index(3)), Some(1));
        assert!(!catalog.contains(&ItemId::Index(4)));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_yaml("[]").expect("valid");
        assert!(catalog.is_empty());
    }

    #[test]
    fn parse_errors_surface_as_catalog_errors() {
        let err = Catalog::from_yaml("- id: 1\n  title: x\n  kind: nonsense\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
