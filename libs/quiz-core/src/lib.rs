//! Quiz engine for labeled visual study items.
//!
//! Provides:
//! - Fuzzy answer judging (Levenshtein similarity plus keyword matching)
//! - Fisher-Yates question ordering with an injectable random source
//! - The quiz session state machine and its observers
//! - Catalog loading (JSON and plain text) and a browse-mode cursor

pub mod browse;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod types;

pub use browse::BrowseCursor;
pub use catalog::Catalog;
pub use error::{ParseError, QuizError, Result};
pub use matching::{judge, judge_with, levenshtein_distance, similarity};
pub use session::{QuizSession, QuizState, SessionObserver};
pub use shuffle::{shuffle, shuffle_in_place, RandomSource};
pub use types::{percentage, Band, QuizResults, QuizSettings, StudyItem, Verdict};
