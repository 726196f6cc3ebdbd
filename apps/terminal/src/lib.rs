//! Line-oriented terminal front end for the quiz engine.

pub mod config;
pub mod render;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use quiz_core::{BrowseCursor, Catalog, QuizSession, QuizState, RandomSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Mode};

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let catalog = cli.load_catalog()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match cli.mode {
        Mode::Browse => browse(&catalog, stdin.lock(), &mut stdout),
        Mode::Quiz => {
            let settings = cli.load_settings()?;
            let mut session = QuizSession::start_with_settings(&catalog, settings)
                .context("starting quiz")?;
            quiz(&mut session, stdin.lock(), &mut stdout)
        }
    }
}

/// Browse the catalog until `q` or end of input.
pub fn browse<R: BufRead, W: Write>(catalog: &Catalog, input: R, out: &mut W) -> Result<()> {
    let mut cursor = match BrowseCursor::new(catalog) {
        Ok(cursor) => cursor,
        Err(err) => {
            writeln!(out, "No study materials available.")?;
            tracing::warn!(%err, "nothing to browse");
            return Ok(());
        }
    };

    render::study_item(out, &cursor)?;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        let moved = match command {
            "q" => break,
            "n" | "" => cursor.next(),
            "p" => cursor.previous(),
            other => match other.parse::<usize>() {
                Ok(number) if number > 0 => cursor.go_to(number - 1).is_ok(),
                _ => false,
            },
        };
        if moved {
            render::study_item(out, &cursor)?;
        } else {
            writeln!(out, "(no move)")?;
        }
    }
    Ok(())
}

/// Drive a quiz session from input lines, rendering every state it enters.
pub fn quiz<S, R, W>(session: &mut QuizSession<S>, input: R, out: &mut W) -> Result<()>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    let events: Rc<RefCell<VecDeque<QuizState>>> = Rc::default();
    let sink = Rc::clone(&events);
    session.subscribe(move |state: &QuizState| sink.borrow_mut().push_back(state.clone()));

    let mut lines = input.lines();
    loop {
        loop {
            let Some(state) = events.borrow_mut().pop_front() else {
                break;
            };
            render::state(
                out,
                &state,
                session.progress(),
                session.score(),
                session.current_item(),
                session.is_last_question(),
            )?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match session.state() {
            QuizState::Ready { .. } => {
                session.submit(&line)?;
            }
            QuizState::Answered { .. } => {
                session.advance()?;
            }
            QuizState::Finished(_) => {
                if line.trim().eq_ignore_ascii_case("r") {
                    session.restart()?;
                } else {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use io::Cursor;
    use pretty_assertions::assert_eq;
    use quiz_core::StudyItem;

    struct InOrder;

    impl RandomSource for InOrder {
        fn next_index(&mut self, upper: usize) -> usize {
            upper
        }
    }

    fn catalog(titles: &[&str]) -> Catalog {
        Catalog::new(titles.iter().map(|t| StudyItem::new(*t, "", "")).collect()).unwrap()
    }

    #[test]
    fn quiz_runs_to_results() {
        let catalog = catalog(&["bruxism", "fluoride varnish", "ionic toothbrush"]);
        let mut session = QuizSession::start_with_rng(&catalog, InOrder).unwrap();
        let input = Cursor::new("helmet\n\nvarnish\n\nionic toothbrush\n\nq\n");
        let mut out = Vec::new();

        quiz(&mut session, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Question 1 of 3 | Score: 0"));
        assert!(text.contains("Your answer was: helmet"));
        assert!(text.contains("Question 3 of 3 | Score: 1"));
        assert!(text.contains("Your score: 2 out of 3 (67%)"));
        assert_eq!(session.results().map(|r| r.score), Some(2));
    }

    #[test]
    fn quiz_restarts_on_request() {
        let catalog = catalog(&["bruxism"]);
        let mut session = QuizSession::start_with_rng(&catalog, InOrder).unwrap();
        let input = Cursor::new("bruxism\n\nr\n");
        let mut out = Vec::new();

        quiz(&mut session, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Question 1 of 1 | Score: 0").count(), 2);
        assert_eq!(session.state(), &QuizState::Ready { position: 0 });
    }

    #[test]
    fn browse_moves_and_jumps() {
        let catalog = catalog(&["a", "b", "c"]);
        let input = Cursor::new("n\np\np\n3\nq\nn\n");
        let mut out = Vec::new();

        browse(&catalog, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("[1/3] a").count(), 2);
        assert_eq!(text.matches("(no move)").count(), 1);
        assert!(text.contains("[3/3] c"));
    }

    #[test]
    fn browse_empty_catalog() {
        let mut out = Vec::new();
        browse(&Catalog::default(), Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No study materials available.\n");
    }
}
