//! Evaluación de respuestas: función pura de (ítem, índice de respuesta).

use crate::error::EngineError;
use crate::model::{CatalogItem, Classification, ItemBody, ItemId, Tier};

/// Feedback de una opción, para la comparativa de ítems por niveles.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedFeedback {
    pub index: usize,
    pub text: String,
    pub feedback: String,
    pub tier: Tier,
}

/// Resultado de evaluar una respuesta.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub item: ItemId,
    pub chosen: usize,
    pub classification: Classification,
    pub feedback: String,
    /// Solo ítems graded: la opción canónica, para mostrarla tras fallar.
    pub correct_index: Option<usize>,
    pub explanation: Option<String>,
    /// Solo ítems por niveles: todas las opciones, de mejor a peor.
    pub ranking: Vec<RankedFeedback>,
}

impl Verdict {
    /// Si esta respuesta cumple el predicado de completado del ítem.
    pub fn completes_item(&self) -> bool {
        self.classification == Classification::Correct
    }
}

pub fn judge_response(item: &CatalogItem, index: usize) -> Result<Verdict, EngineError> {
    match &item.body {
        ItemBody::Graded { options } => {
            let chosen = options.get(index).ok_or(EngineError::OptionOutOfRange {
                index,
                len: options.len(),
            })?;
            let classification = if chosen.correct {
                Classification::Correct
            } else {
                Classification::Incorrect
            };
            Ok(Verdict {
                item: item.id.clone(),
                chosen: index,
                classification,
                feedback: chosen.feedback.clone(),
                correct_index: item.correct_index(),
                explanation: item.explanation.clone(),
                ranking: Vec::new(),
            })
        }
        ItemBody::Tiered { options } => {
            let chosen = options.get(index).ok_or(EngineError::OptionOutOfRange {
                index,
                len: options.len(),
            })?;
            let mut ranking: Vec<RankedFeedback> = options
                .iter()
                .enumerate()
                .map(|(i, o)| RankedFeedback {
                    index: i,
                    text: o.text.clone(),
                    feedback: o.feedback.clone(),
                    tier: o.tier,
                })
                .collect();
            // sort estable: empates quedan en orden de catálogo
            ranking.sort_by_key(|r| r.tier);
            Ok(Verdict {
                item: item.id.clone(),
                chosen: index,
                classification: Classification::Tiered(chosen.tier),
                feedback: chosen.feedback.clone(),
                correct_index: None,
                explanation: item.explanation.clone(),
                ranking,
            })
        }
        ItemBody::Checklist { .. } => Err(EngineError::NotChoiceItem(item.id.clone())),
    }
}
