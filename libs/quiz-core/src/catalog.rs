//! Validated, ordered collection of study items.

use crate::error::{ParseError, QuizError, Result};
use crate::types::StudyItem;
use serde::Serialize;
use tracing::warn;

/// Ordered study items. Every title is non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<StudyItem>,
}

impl Catalog {
    /// Validate records at the load boundary.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MalformedItem` for the first record without a title.
    pub fn new(items: Vec<StudyItem>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            if item.title.trim().is_empty() {
                warn!(index, "rejecting catalog record without a title");
                return Err(QuizError::MalformedItem {
                    index,
                    reason: "missing title".to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Load a JSON array of `{title, content, image}` records.
    pub fn from_json(json: &str) -> std::result::Result<Self, ParseError> {
        let items: Vec<StudyItem> = serde_json::from_str(json)?;
        Ok(Self::new(items)?)
    }

    /// Load the line-oriented `Title:` / `Image:` / `Content:` format.
    pub fn from_text(text: &str) -> std::result::Result<Self, ParseError> {
        let items = crate::parser::parse(text)?;
        Ok(Self::new(items)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StudyItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudyItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[StudyItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StudyItem;
    type IntoIter = std::slice::Iter<'a, StudyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
