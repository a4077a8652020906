// src/data.rs

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::CatalogItem;
use serde::Deserialize;

/// Cómo se presenta una sección: ítems sueltos o quiz de final de sección.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SectionMode {
    #[default]
    Interactive,
    Quiz,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub mode: SectionMode,
    pub catalog: Catalog,
}

#[derive(Deserialize)]
struct ContentBundle {
    sections: Vec<SectionSpec>,
}

#[derive(Deserialize)]
struct SectionSpec {
    title: String,
    #[serde(default)]
    mode: SectionMode,
    items: Vec<CatalogItem>,
}

/// Parsea un bundle YAML y valida cada catálogo.
pub fn read_sections(yaml: &str) -> Result<Vec<Section>, CatalogError> {
    let bundle: ContentBundle = serde_yaml::from_str(yaml)?;
    bundle
        .sections
        .into_iter()
        .map(|spec| -> Result<Section, CatalogError> {
            Ok(Section {
                title: spec.title,
                mode: spec.mode,
                catalog: Catalog::new(spec.items)?,
            })
        })
        .collect()
}

/// Carga el contenido de demo embebido en el binario
pub fn read_sections_embedded() -> Result<Vec<Section>, CatalogError> {
    read_sections(include_str!("data/content.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;

    #[test]
    fn embedded_content_is_valid() {
        let sections = read_sections_embedded().expect("embedded content parses");
        assert!(!sections.is_empty());
        assert!(sections.iter().any(|s| s.mode == SectionMode::Quiz));
        for section in sections.iter().filter(|s| s.mode == SectionMode::Quiz) {
            assert!(section.catalog.iter().all(|i| i.kind() == ItemKind::Graded));
        }
    }

    #[test]
    fn mode_defaults_to_interactive() {
        let yaml = r#"
sections:
  - title: Activities
    items:
      - id: 1
        title: Prove dead
        kind: checklist
        steps: [Prove the tester, Test the circuit, Re-prove the tester]
"#;
        let sections = read_sections(yaml).expect("valid");
        assert_eq!(sections[0].mode, SectionMode::Interactive);
        assert_eq!(sections[0].catalog.len(), 1);
    }

    #[test]
    fn invalid_section_fails_the_whole_bundle() {
        let yaml = r#"
sections:
  - title: Broken
    items:
      - id: 1
        title: No answer
        kind: graded
        options:
          - text: A
            feedback: nope
"#;
        assert!(matches!(
            read_sections(yaml),
            Err(CatalogError::NoCorrectOption(_))
        ));
    }
}
