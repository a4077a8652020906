use crate::model::ItemId;
use thiserror::Error;

/// Errores de carga de contenido. Se detectan al construir el catálogo,
/// nunca en mitad de una interacción.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse content: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),
    #[error("item `{0}` has no response options")]
    EmptyOptions(ItemId),
    #[error("checklist `{0}` has no steps")]
    EmptySteps(ItemId),
    #[error("graded item `{0}` has no correct option")]
    NoCorrectOption(ItemId),
    #[error("graded item `{id}` has {count} correct options, expected one")]
    MultipleCorrectOptions { id: ItemId, count: usize },
    #[error("quiz item `{0}` is not a graded question")]
    NotGraded(ItemId),
}

/// Operación rechazada por precondición. El estado queda intacto.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no item `{0}` in this catalog")]
    UnknownItem(ItemId),
    #[error("no item is open")]
    NothingOpen,
    #[error("item `{requested}` is not the open item")]
    NotOpen { requested: ItemId },
    #[error("option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("step {index} out of range ({len} steps)")]
    StepOutOfRange { index: usize, len: usize },
    #[error("item `{0}` was already answered in this attempt")]
    AlreadyAnswered(ItemId),
    #[error("item `{0}` has no response options")]
    NotChoiceItem(ItemId),
    #[error("item `{0}` is not a checklist")]
    NotChecklistItem(ItemId),
    #[error("only {done} of {total} steps are done")]
    StepsIncomplete { done: usize, total: usize },
    #[error("the quiz has already been submitted")]
    QuizSubmitted,
    #[error("the quiz has not been submitted yet")]
    QuizNotSubmitted,
}
