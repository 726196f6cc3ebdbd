//! Command-line and environment configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quiz_core::{Catalog, QuizSettings};

/// Which screen the app drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Step through the catalog in order
    Browse,
    /// Answer shuffled questions and get a score
    Quiz,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "quiz-terminal",
    version,
    about = "Study and self-test over a catalog of labeled images"
)]
pub struct Cli {
    /// Screen to open
    #[arg(value_enum, default_value = "quiz")]
    pub mode: Mode,

    /// Catalog file (.json, or the Title:/Image:/Content: text format)
    #[arg(long, env = "CATALOG_PATH", default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// JSON file overriding the judge and results settings
    #[arg(long, env = "QUIZ_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl Cli {
    pub fn load_settings(&self) -> Result<QuizSettings> {
        let Some(path) = &self.settings else {
            return Ok(QuizSettings::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: QuizSettings = serde_json::from_str(&raw)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        load_catalog(&self.catalog)
    }
}

/// `.json` files use the JSON loader; anything else the text format.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog from {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let loaded = if is_json {
        Catalog::from_json(&raw)
    } else {
        Catalog::from_text(&raw)
    };
    let catalog = loaded.with_context(|| format!("loading catalog {}", path.display()))?;

    tracing::info!(path = %path.display(), items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_to_quiz_and_catalog_json() {
        let cli = Cli::try_parse_from(["quiz-terminal"]).unwrap();
        assert_eq!(cli.mode, Mode::Quiz);
        assert_eq!(cli.catalog, PathBuf::from("catalog.json"));
        assert!(cli.settings.is_none());
        assert_eq!(cli.load_settings().unwrap(), QuizSettings::default());
    }

    #[test]
    fn reads_mode_and_paths_from_arguments() {
        let cli = Cli::try_parse_from([
            "quiz-terminal",
            "browse",
            "--catalog",
            "data/items.txt",
            "--settings",
            "quiz.json",
        ])
        .unwrap();
        assert_eq!(cli.mode, Mode::Browse);
        assert_eq!(cli.catalog, PathBuf::from("data/items.txt"));
        assert_eq!(cli.settings, Some(PathBuf::from("quiz.json")));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Cli::try_parse_from(["quiz-terminal", "exam"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn help_prints_usage_instead_of_failing_on_mode() {
        let err = Cli::try_parse_from(["quiz-terminal", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--catalog"));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let err = load_catalog(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let cli =
            Cli::try_parse_from(["quiz-terminal", "--settings", "does/not/exist.json"]).unwrap();
        assert!(cli.load_settings().is_err());
    }
}
