// src/view_models.rs

use crate::model::{ItemId, ItemKind};
use crate::quiz::{QuestionStatus, ReviewFilter, ScoreBand};

#[derive(Clone, Debug)]
pub struct ItemInfo {
    pub idx: usize, // posición 0-based en el catálogo
    pub id: ItemId,
    pub title: String,
    pub kind: ItemKind,
    pub completed: bool,
    pub attempts: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub number: usize, // 1-based
    pub title: String,
    pub attempts: u32,
    pub fails: u32,
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressInfo {
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizReviewRow {
    pub number: usize,
    pub question: String,
    pub answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub status: QuestionStatus,
    pub flagged: bool,
    pub explanation: Option<String>,
}

/// Resumen de respuestas y marcas durante el quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizStats {
    pub answered: usize,
    pub unanswered: usize,
    pub flagged: usize,
}

impl ItemInfo {
    pub fn label(&self) -> String {
        let icon = match self.kind {
            ItemKind::Graded => "❓",
            ItemKind::Tiered => "💬",
            ItemKind::Checklist => "📋",
        };
        if self.completed {
            format!("{icon} {} ✅", self.title)
        } else if self.attempts > 0 && self.kind != ItemKind::Tiered {
            format!("{icon} {} ({} tries)", self.title, self.attempts)
        } else {
            format!("{icon} {}", self.title)
        }
    }
}

impl ProgressInfo {
    pub fn label(&self) -> String {
        format!(
            "{} / {} completed ({:.0}%)",
            self.completed,
            self.total,
            self.ratio * 100.0
        )
    }
}

impl QuizStats {
    pub fn label(&self) -> String {
        format!(
            "{} answered · {} unanswered · {} flagged",
            self.answered, self.unanswered, self.flagged
        )
    }
}

impl ReviewFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewFilter::All => "All",
            ReviewFilter::Correct => "Correct",
            ReviewFilter::Incorrect => "Incorrect",
            ReviewFilter::Unanswered => "Unanswered",
            ReviewFilter::Flagged => "🚩 Flagged",
        }
    }
}

impl ScoreBand {
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! You have a strong understanding of this section.",
            ScoreBand::Good => "Good work! You have a solid grasp of the basics with room for improvement.",
            ScoreBand::Fair => "Fair effort. Consider reviewing the material to strengthen your understanding.",
            ScoreBand::NeedsReview => "You may need to review the content more thoroughly before proceeding.",
        }
    }
}
