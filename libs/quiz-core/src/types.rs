//! Core types for the quiz engine.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// A labeled study item. The title is the canonical answer in quiz mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
}

impl StudyItem {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: image.into(),
        }
    }
}

/// Outcome of judging one submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Canonical answer for feedback, original case.
    pub correct_answer: String,
    /// Number of user keywords that fuzzily matched a title keyword.
    pub keyword_matches: usize,
    /// Whole-string similarity between 0.0 and 1.0.
    pub overall_similarity: f64,
}

/// Three-tier classification of a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    /// Classify with the default cut-offs (80 and 60).
    pub fn from_percentage(percentage: u32) -> Self {
        Self::classify(percentage, &QuizSettings::default())
    }

    /// Classify with configured cut-offs.
    pub fn classify(percentage: u32, settings: &QuizSettings) -> Self {
        if percentage >= settings.high_band {
            Self::High
        } else if percentage >= settings.medium_band {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Caller-facing sentence for the results screen.
    pub fn commentary(&self) -> &'static str {
        match self {
            Self::High => "Excellent! You have great knowledge of these images.",
            Self::Medium => "Good job! Keep studying to improve.",
            Self::Low => "You might need more practice with these images.",
        }
    }
}

/// Final score of a finished quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: Band,
}

impl QuizResults {
    pub fn new(score: usize, total: usize, settings: &QuizSettings) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            band: Band::classify(percentage, settings),
        }
    }
}

/// `round(100 * score / total)`, zero for an empty total.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Judge and results policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Words shorter than this (in characters) are not keywords.
    pub min_keyword_len: usize,
    /// A keyword matches when its similarity is strictly above this.
    pub keyword_similarity: f64,
    /// Upper bound on the number of keyword matches required.
    pub max_keyword_threshold: usize,
    /// Whole answers at or above this similarity are correct.
    pub overall_similarity: f64,
    pub high_band: u32,
    pub medium_band: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            min_keyword_len: 3,
            keyword_similarity: 0.7,
            max_keyword_threshold: 2,
            overall_similarity: 0.6,
            high_band: 80,
            medium_band: 60,
        }
    }
}

impl QuizSettings {
    /// Reject thresholds that cannot describe a similarity or a band order.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("keyword_similarity", self.keyword_similarity),
            ("overall_similarity", self.overall_similarity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(QuizError::InvalidSettings(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        if self.medium_band > self.high_band {
            return Err(QuizError::InvalidSettings(format!(
                "medium_band ({}) exceeds high_band ({})",
                self.medium_band, self.high_band
            )));
        }
        Ok(())
    }
}
