//! Text rendering for browse and quiz screens.

use std::io::{self, Write};

use quiz_core::{BrowseCursor, QuizResults, QuizState, StudyItem, Verdict};

pub fn study_item<W: Write>(out: &mut W, cursor: &BrowseCursor<'_>) -> io::Result<()> {
    let item = cursor.current();
    writeln!(out)?;
    writeln!(out, "[{}/{}] {}", cursor.position() + 1, cursor.len(), item.title)?;
    if !item.content.is_empty() {
        writeln!(out, "{}", item.content)?;
    }
    if !item.image.is_empty() {
        writeln!(out, "Image: {}", item.image)?;
    }

    let previous = if cursor.at_start() { "-" } else { "p: previous" };
    let next = if cursor.at_end() { "-" } else { "n: next" };
    writeln!(out, "{previous} | {next} | <number>: jump | q: quit")
}

pub fn question<W: Write>(
    out: &mut W,
    (number, total): (usize, usize),
    score: usize,
    item: &StudyItem,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {number} of {total} | Score: {score}")?;
    if item.image.is_empty() {
        writeln!(out, "Image: (none)")?;
    } else {
        writeln!(out, "Image: {}", item.image)?;
    }
    writeln!(out, "What is the title of this image?")
}

pub fn feedback<W: Write>(
    out: &mut W,
    answer: &str,
    verdict: &Verdict,
    last_question: bool,
) -> io::Result<()> {
    if verdict.is_correct {
        writeln!(out, "Correct!")?;
        writeln!(out, "The full answer is: {}", verdict.correct_answer)?;
    } else {
        writeln!(out, "Incorrect")?;
        writeln!(out, "The correct answer is: {}", verdict.correct_answer)?;
        writeln!(out, "Your answer was: {answer}")?;
    }
    let next = if last_question { "See Results" } else { "Next Question" };
    writeln!(out, "[Enter] {next}")
}

pub fn results<W: Write>(out: &mut W, results: &QuizResults) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Quiz Completed!")?;
    writeln!(
        out,
        "Your score: {} out of {} ({}%)",
        results.score, results.total, results.percentage
    )?;
    writeln!(out, "{}", results.band.commentary())?;
    writeln!(out, "r: restart | anything else: quit")
}

/// Render one observed state change.
pub fn state<W: Write>(
    out: &mut W,
    state: &QuizState,
    progress: (usize, usize),
    score: usize,
    item: Option<&StudyItem>,
    last_question: bool,
) -> io::Result<()> {
    match (state, item) {
        (QuizState::Ready { .. }, Some(item)) => question(out, progress, score, item),
        (QuizState::Answered { answer, verdict, .. }, _) => {
            feedback(out, answer, verdict, last_question)
        }
        (QuizState::Finished(summary), _) => results(out, summary),
        (QuizState::Ready { .. }, None) => Ok(()),
    }
}
