//! Linear browsing over a catalog, independent of any quiz session.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::types::StudyItem;

/// Position within a catalog in browse mode.
#[derive(Debug, Clone)]
pub struct BrowseCursor<'a> {
    catalog: &'a Catalog,
    position: usize,
}

impl<'a> BrowseCursor<'a> {
    /// Start at the first item.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCatalog` when there is nothing to show.
    pub fn new(catalog: &'a Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            position: 0,
        })
    }

    pub fn current(&self) -> &'a StudyItem {
        &self.catalog.items()[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// The "previous" control is disabled here.
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    /// The "next" control is disabled here.
    pub fn at_end(&self) -> bool {
        self.position == self.catalog.len() - 1
    }

    /// Step forward; returns false when already on the last item.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Step back; returns false when already on the first item.
    pub fn previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn go_to(&mut self, position: usize) -> Result<()> {
        if position >= self.catalog.len() {
            return Err(QuizError::PositionOutOfRange {
                position,
                len: self.catalog.len(),
            });
        }
        self.position = position;
        Ok(())
    }
}
