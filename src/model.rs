use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador estable de un ítem dentro de su catálogo.
/// En el YAML puede venir como número (`id: 3`) o como texto (`id: rcd-trip`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Index(u64),
    Key(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Index(n) => write!(f, "{n}"),
            ItemId::Key(k) => f.write_str(k),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Index(n)
    }
}

impl From<&str> for ItemId {
    fn from(k: &str) -> Self {
        ItemId::Key(k.to_string())
    }
}

impl From<String> for ItemId {
    fn from(k: String) -> Self {
        ItemId::Key(k)
    }
}

/// Nivel de calidad de una respuesta en ítems sin respuesta única.
/// El orden de declaración es el orden de ranking (High primero).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Medium,
    Low,
}

/// Clasificación de la respuesta elegida. La UI decide colores/estilos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Correct,
    Incorrect,
    Tiered(Tier),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradedOption {
    pub text: String,
    pub feedback: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TieredOption {
    pub text: String,
    pub feedback: String,
    pub tier: Tier,
}

/// Paso de una actividad tipo checklist. Su estado (hecho / no hecho)
/// no vive aquí: lo lleva la sesión por posición.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Step {
    pub description: String,
}

impl From<&str> for Step {
    fn from(description: &str) -> Self {
        Step {
            description: description.to_string(),
        }
    }
}

/// Variante de ítem: nunca mezcla opciones y pasos.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemBody {
    Graded { options: Vec<GradedOption> },
    Tiered { options: Vec<TieredOption> },
    Checklist { steps: Vec<Step> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Graded,
    Tiered,
    Checklist,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub body: ItemBody,
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self.body {
            ItemBody::Graded { .. } => ItemKind::Graded,
            ItemBody::Tiered { .. } => ItemKind::Tiered,
            ItemBody::Checklist { .. } => ItemKind::Checklist,
        }
    }

    /// Número de opciones elegibles; 0 para checklists.
    pub fn option_count(&self) -> usize {
        match &self.body {
            ItemBody::Graded { options } => options.len(),
            ItemBody::Tiered { options } => options.len(),
            ItemBody::Checklist { .. } => 0,
        }
    }

    pub fn steps(&self) -> Option<&[Step]> {
        match &self.body {
            ItemBody::Checklist { steps } => Some(steps),
            _ => None,
        }
    }

    /// Índice de la opción canónicamente correcta (solo ítems graded).
    pub fn correct_index(&self) -> Option<usize> {
        match &self.body {
            ItemBody::Graded { options } => options.iter().position(|o| o.correct),
            _ => None,
        }
    }

    /// Texto de la opción `index`, sea cual sea la variante.
    pub fn option_text(&self, index: usize) -> Option<&str> {
        match &self.body {
            ItemBody::Graded { options } => options.get(index).map(|o| o.text.as_str()),
            ItemBody::Tiered { options } => options.get(index).map(|o| o.text.as_str()),
            ItemBody::Checklist { .. } => None,
        }
    }
}

// Constructores cortos para tests y contenido generado en código
#[cfg(test)]
impl CatalogItem {
    pub fn graded(id: u64, correct: usize, n: usize) -> Self {
        let options = (0..n)
            .map(|i| GradedOption {
                text: format!("Option {i}"),
                feedback: format!("Feedback {i}"),
                correct: i == correct,
            })
            .collect();
        CatalogItem {
            id: ItemId::Index(id),
            title: "Scenario".into(),
            prompt: String::new(),
            topic: None,
            explanation: None,
            body: ItemBody::Graded { options },
        }
    }

    pub fn tiered(id: u64, tiers: &[Tier]) -> Self {
        let options = tiers
            .iter()
            .enumerate()
            .map(|(i, tier)| TieredOption {
                text: format!("Reply {i}"),
                feedback: format!("Feedback {i}"),
                tier: *tier,
            })
            .collect();
        CatalogItem {
            id: ItemId::Index(id),
            title: "Conversation".into(),
            prompt: String::new(),
            topic: None,
            explanation: None,
            body: ItemBody::Tiered { options },
        }
    }

    pub fn checklist(id: u64, n: usize) -> Self {
        let steps = (0..n).map(|i| Step::from(format!("Step {i}").as_str())).collect();
        CatalogItem {
            id: ItemId::Index(id),
            title: "Activity".into(),
            prompt: String::new(),
            topic: None,
            explanation: None,
            body: ItemBody::Checklist { steps },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_yaml_accepts_numeric_and_text_ids() {
        let yaml = r#"
- id: 3
  title: Tripping RCD
  kind: graded
  options:
    - text: Reset it
      feedback: Find the cause first.
    - text: Isolate and test
      feedback: Correct.
      correct: true
- id: calm-client
  title: Upset client
  kind: tiered
  options:
    - text: Listen first
      feedback: Builds trust.
      tier: high
"#;
        let items: Vec<CatalogItem> = serde_yaml::from_str(yaml).expect("yaml ok");
        assert_eq!(items[0].id, ItemId::Index(3));
        assert_eq!(items[0].correct_index(), Some(1));
        assert_eq!(items[1].id, ItemId::from("calm-client"));
        assert_eq!(items[1].kind(), ItemKind::Tiered);
    }

    #[test]
    fn checklist_steps_are_plain_strings() {
        let yaml = r#"
id: safe-isolation
title: Safe isolation
kind: checklist
steps:
  - Identify the circuit
  - Lock off
"#;
        let item: CatalogItem = serde_yaml::from_str(yaml).expect("yaml ok");
        let steps = item.steps().expect("checklist");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].description, "Lock off");
        assert_eq!(item.option_count(), 0);
    }

    #[test]
    fn tier_order_ranks_high_first() {
        let mut tiers = vec![Tier::Low, Tier::High, Tier::Medium];
        tiers.sort();
        assert_eq!(tiers, vec![Tier::High, Tier::Medium, Tier::Low]);
    }
}
