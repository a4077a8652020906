//! Quiz de final de sección: preguntas graded recorridas en orden, con
//! respuestas modificables hasta enviar y puntuación por bandas.

use crate::catalog::Catalog;
use crate::error::{CatalogError, EngineError};
use crate::model::{CatalogItem, ItemKind};
use crate::view_models::{QuizReviewRow, QuizStats};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsReview,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreBand::Excellent
        } else if percentage >= 60.0 {
            ScoreBand::Good
        } else if percentage >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsReview
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub band: ScoreBand,
}

/// Estado de una pregunta frente a su respuesta correcta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionStatus {
    Correct,
    Incorrect,
    Unanswered,
}

/// Filtro de la pantalla de revisión.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    #[default]
    All,
    Correct,
    Incorrect,
    Unanswered,
    Flagged,
}

impl ReviewFilter {
    pub const ALL: [ReviewFilter; 5] = [
        ReviewFilter::All,
        ReviewFilter::Correct,
        ReviewFilter::Incorrect,
        ReviewFilter::Unanswered,
        ReviewFilter::Flagged,
    ];

    pub fn matches(&self, row: &QuizReviewRow) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Correct => row.status == QuestionStatus::Correct,
            ReviewFilter::Incorrect => row.status == QuestionStatus::Incorrect,
            ReviewFilter::Unanswered => row.status == QuestionStatus::Unanswered,
            ReviewFilter::Flagged => row.flagged,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionQuiz {
    catalog: Catalog,
    current: usize,
    answers: Vec<Option<usize>>,
    flagged: BTreeSet<usize>, // posiciones marcadas para revisar
    submitted: bool,
}

impl SectionQuiz {
    /// Solo admite ítems graded: cada pregunta necesita una respuesta correcta.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        if let Some(item) = catalog.iter().find(|i| i.kind() != ItemKind::Graded) {
            return Err(CatalogError::NotGraded(item.id.clone()));
        }
        let answers = vec![None; catalog.len()];
        Ok(Self {
            catalog,
            current: 0,
            answers,
            flagged: BTreeSet::new(),
            submitted: false,
        })
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&CatalogItem> {
        self.catalog.items().get(self.current)
    }

    pub fn answer(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_flagged(&self, position: usize) -> bool {
        self.flagged.contains(&position)
    }

    /// Marca o desmarca la pregunta actual. Devuelve si queda marcada.
    pub fn toggle_flag(&mut self) -> Result<bool, EngineError> {
        if self.submitted {
            return Err(EngineError::QuizSubmitted);
        }
        if self.current().is_none() {
            return Err(EngineError::NothingOpen);
        }
        let flagged = if self.flagged.remove(&self.current) {
            false
        } else {
            self.flagged.insert(self.current);
            true
        };
        log::debug!("quiz question {} flagged={flagged}", self.current + 1);
        Ok(flagged)
    }

    /// Salta a la siguiente pregunta marcada, volviendo a la primera al
    /// final. `None` si no hay ninguna marcada.
    pub fn next_flagged(&mut self) -> Option<usize> {
        let target = self
            .flagged
            .range(self.current + 1..)
            .next()
            .or_else(|| self.flagged.iter().next())
            .copied()?;
        self.current = target;
        Some(target)
    }

    pub fn question_status(&self, position: usize) -> Option<QuestionStatus> {
        let item = self.catalog.items().get(position)?;
        Some(match self.answer(position) {
            None => QuestionStatus::Unanswered,
            Some(a) if Some(a) == item.correct_index() => QuestionStatus::Correct,
            Some(_) => QuestionStatus::Incorrect,
        })
    }

    pub fn stats(&self) -> QuizStats {
        let answered = self.answered_count();
        QuizStats {
            answered,
            unanswered: self.len() - answered,
            flagged: self.flagged.len(),
        }
    }

    /// Elige (o cambia) la respuesta de la pregunta actual.
    pub fn select_answer(&mut self, index: usize) -> Result<(), EngineError> {
        if self.submitted {
            return Err(EngineError::QuizSubmitted);
        }
        let item = self.current().ok_or(EngineError::NothingOpen)?;
        let len = item.option_count();
        if index >= len {
            return Err(EngineError::OptionOutOfRange { index, len });
        }
        self.answers[self.current] = Some(index);
        Ok(())
    }

    /// Avanza; devuelve false si ya estaba en la última.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, position: usize) -> Result<(), EngineError> {
        if position >= self.len() {
            return Err(EngineError::OptionOutOfRange {
                index: position,
                len: self.len(),
            });
        }
        self.current = position;
        Ok(())
    }

    /// Cierra el quiz; a partir de aquí las respuestas no cambian.
    pub fn submit(&mut self) -> Result<QuizScore, EngineError> {
        if self.submitted {
            return Err(EngineError::QuizSubmitted);
        }
        self.submitted = true;
        let score = self.tally();
        log::info!(
            "quiz submitted: {}/{} ({:.0}%)",
            score.correct,
            score.total,
            score.percentage
        );
        Ok(score)
    }

    pub fn score(&self) -> Result<QuizScore, EngineError> {
        if !self.submitted {
            return Err(EngineError::QuizNotSubmitted);
        }
        Ok(self.tally())
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.catalog.len()];
        self.flagged.clear();
        self.submitted = false;
    }

    pub fn review_rows(&self) -> Result<Vec<QuizReviewRow>, EngineError> {
        if !self.submitted {
            return Err(EngineError::QuizNotSubmitted);
        }
        Ok(self
            .catalog
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let chosen = self.answer(i);
                let correct = item.correct_index();
                let status = self
                    .question_status(i)
                    .unwrap_or(QuestionStatus::Unanswered);
                QuizReviewRow {
                    number: i + 1,
                    question: item.title.clone(),
                    answer: chosen.and_then(|a| item.option_text(a)).map(str::to_string),
                    correct_answer: correct
                        .and_then(|c| item.option_text(c))
                        .unwrap_or_default()
                        .to_string(),
                    is_correct: status == QuestionStatus::Correct,
                    status,
                    flagged: self.is_flagged(i),
                    explanation: item.explanation.clone(),
                }
            })
            .collect())
    }

    pub fn review_rows_filtered(
        &self,
        filter: ReviewFilter,
    ) -> Result<Vec<QuizReviewRow>, EngineError> {
        let mut rows = self.review_rows()?;
        rows.retain(|row| filter.matches(row));
        Ok(rows)
    }

    fn tally(&self) -> QuizScore {
        let total = self.catalog.len();
        let correct = self
            .catalog
            .iter()
            .zip(&self.answers)
            .filter(|(item, answer)| answer.is_some() && **answer == item.correct_index())
            .count();
        let percentage = if total == 0 {
            0.0
        } else {
            correct as f64 * 100.0 / total as f64
        };
        QuizScore {
            correct,
            total,
            percentage,
            band: ScoreBand::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn quiz(correct: &[usize]) -> SectionQuiz {
        let items = correct
            .iter()
            .enumerate()
            .map(|(i, c)| CatalogItem::graded(i as u64, *c, 4))
            .collect();
        SectionQuiz::new(Catalog::new(items).expect("valid")).expect("graded only")
    }

    #[test]
    fn bands_follow_percentage_thresholds() {
        assert_eq!(ScoreBand::from_percentage(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percentage(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_percentage(39.0), ScoreBand::NeedsReview);
    }

    #[test]
    fn answers_can_change_until_submit() {
        let mut q = quiz(&[1, 0, 3, 2, 2]);
        q.select_answer(0).expect("answer");
        q.select_answer(1).expect("change");
        assert_eq!(q.answer(0), Some(1));
        assert!(q.next());
        q.select_answer(0).expect("answer");
        assert!(q.next());
        q.select_answer(1).expect("wrong");
        q.go_to(4).expect("jump");
        q.select_answer(2).expect("answer");
        assert!(!q.next());
        assert_eq!(q.answered_count(), 4);

        let score = q.submit().expect("submit");
        assert_eq!(score.correct, 3);
        assert_eq!(score.total, 5);
        assert_eq!(score.band, ScoreBand::Good);
        assert_eq!(q.select_answer(0), Err(EngineError::QuizSubmitted));
        assert_eq!(q.submit(), Err(EngineError::QuizSubmitted));
        assert_eq!(q.score(), Ok(score));
    }

    #[test]
    fn review_rows_need_a_submitted_quiz() {
        let mut q = quiz(&[2, 1]);
        assert_eq!(q.review_rows(), Err(EngineError::QuizNotSubmitted));
        q.select_answer(2).expect("answer");
        q.submit().expect("submit");
        let rows = q.review_rows().expect("rows");
        assert!(rows[0].is_correct);
        assert_eq!(rows[0].answer.as_deref(), Some("Option 2"));
        assert!(!rows[1].is_correct);
        assert_eq!(rows[1].answer, None);
        assert_eq!(rows[1].correct_answer, "Option 1");
    }

    #[test]
    fn restart_clears_answers_and_position() {
        let mut q = quiz(&[0, 0]);
        q.select_answer(0).expect("answer");
        q.next();
        q.submit().expect("submit");
        q.restart();
        assert_eq!(q.position(), 0);
        assert_eq!(q.answered_count(), 0);
        assert!(!q.is_submitted());
        assert!(!q.previous());
    }

    #[test]
    fn rejects_non_graded_items_and_bad_indices() {
        let cat = Catalog::new(vec![CatalogItem::graded(0, 0, 2), CatalogItem::checklist(1, 2)])
            .expect("valid");
        assert!(matches!(
            SectionQuiz::new(cat),
            Err(CatalogError::NotGraded(ItemId::Index(1)))
        ));

        let mut q = quiz(&[0]);
        assert_eq!(
            q.select_answer(4),
            Err(EngineError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert!(q.go_to(1).is_err());
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let mut q = SectionQuiz::new(Catalog::default()).expect("empty ok");
        assert_eq!(q.select_answer(0), Err(EngineError::NothingOpen));
        let score = q.submit().expect("submit");
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.band, ScoreBand::NeedsReview);
    }

    #[test]
    fn flags_toggle_on_the_current_question() {
        let mut q = quiz(&[0, 1, 2]);
        assert_eq!(q.toggle_flag(), Ok(true));
        assert!(q.is_flagged(0));
        assert_eq!(q.toggle_flag(), Ok(false));
        assert!(!q.is_flagged(0));

        q.go_to(2).expect("jump");
        assert_eq!(q.toggle_flag(), Ok(true));
        assert_eq!(q.stats().flagged, 1);
        q.submit().expect("submit");
        assert_eq!(q.toggle_flag(), Err(EngineError::QuizSubmitted));
        assert!(q.is_flagged(2));
    }

    #[test]
    fn next_flagged_wraps_to_the_first() {
        let mut q = quiz(&[0, 0, 0, 0, 0]);
        assert_eq!(q.next_flagged(), None);
        assert_eq!(q.position(), 0);

        q.go_to(1).expect("jump");
        q.toggle_flag().expect("flag");
        q.go_to(3).expect("jump");
        q.toggle_flag().expect("flag");

        q.go_to(0).expect("jump");
        assert_eq!(q.next_flagged(), Some(1));
        assert_eq!(q.next_flagged(), Some(3));
        assert_eq!(q.next_flagged(), Some(1));
        q.go_to(4).expect("jump");
        assert_eq!(q.next_flagged(), Some(1));
    }

    #[test]
    fn stats_count_answered_unanswered_and_flagged() {
        let mut q = quiz(&[0, 1, 2, 3]);
        q.select_answer(0).expect("answer");
        q.toggle_flag().expect("flag");
        q.next();
        q.select_answer(3).expect("answer");
        assert_eq!(
            q.stats(),
            QuizStats {
                answered: 2,
                unanswered: 2,
                flagged: 1
            }
        );
    }

    #[test]
    fn review_filters_select_by_status_and_flag() {
        // 0 correcta, 1 incorrecta y marcada, 2 sin responder
        let mut q = quiz(&[0, 1, 2]);
        q.select_answer(0).expect("answer");
        q.next();
        q.select_answer(0).expect("answer");
        q.toggle_flag().expect("flag");
        assert_eq!(
            q.review_rows_filtered(ReviewFilter::All),
            Err(EngineError::QuizNotSubmitted)
        );
        q.submit().expect("submit");

        let numbers = |filter| -> Vec<usize> {
            q.review_rows_filtered(filter)
                .expect("rows")
                .iter()
                .map(|r| r.number)
                .collect()
        };
        assert_eq!(numbers(ReviewFilter::All), vec![1, 2, 3]);
        assert_eq!(numbers(ReviewFilter::Correct), vec![1]);
        assert_eq!(numbers(ReviewFilter::Incorrect), vec![2]);
        assert_eq!(numbers(ReviewFilter::Unanswered), vec![3]);
        assert_eq!(numbers(ReviewFilter::Flagged), vec![2]);
        assert_eq!(q.question_status(2), Some(QuestionStatus::Unanswered));
        assert_eq!(q.question_status(3), None);
    }

    #[test]
    fn restart_clears_flags() {
        let mut q = quiz(&[0, 0]);
        q.toggle_flag().expect("flag");
        q.submit().expect("submit");
        q.restart();
        assert!(!q.is_flagged(0));
        assert_eq!(q.stats().flagged, 0);
        assert_eq!(q.next_flagged(), None);
    }
}
