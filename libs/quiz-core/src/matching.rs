//! Answer matching for quiz mode (Levenshtein distance).

use crate::types::{QuizSettings, Verdict};
use tracing::trace;

/// Edit distance in characters: the fewest single-character insertions,
/// deletions and substitutions turning `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let source: Vec<char> = a.chars().collect();
    let target: Vec<char> = b.chars().collect();

    if source.is_empty() || target.is_empty() {
        return source.len().max(target.len());
    }

    // `above` is row i-1 of the table, `row` is row i being filled.
    let mut above: Vec<usize> = (0..=target.len()).collect();
    let mut row = vec![0; target.len() + 1];

    for (i, &s) in source.iter().enumerate() {
        row[0] = i + 1;
        for (j, &t) in target.iter().enumerate() {
            let cost = usize::from(s != t);
            // d[i-1][j] + 1, d[i][j-1] + 1, d[i-1][j-1] + cost
            row[j + 1] = (above[j + 1] + 1).min(row[j] + 1).min(above[j] + cost);
        }
        std::mem::swap(&mut above, &mut row);
    }

    above[target.len()]
}

/// Normalized similarity (0.0 to 1.0) based on Levenshtein distance.
///
/// An empty string never matches anything, not even another empty string.
/// Case folding is left to the caller.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// Judge a free-text answer against the canonical title using default settings.
pub fn judge(user_answer: &str, correct_answer: &str) -> Verdict {
    judge_with(user_answer, correct_answer, &QuizSettings::default())
}

/// Judge a free-text answer against the canonical title.
///
/// The answer is correct when enough of its keywords fuzzily match title
/// keywords, or when the whole answer is close enough to the whole title.
/// A title keyword may be matched by several user keywords.
pub fn judge_with(user_answer: &str, correct_answer: &str, settings: &QuizSettings) -> Verdict {
    let user = user_answer.trim().to_lowercase();
    let correct = correct_answer.trim().to_lowercase();

    let user_words: Vec<&str> = user.split_whitespace().collect();
    let correct_words: Vec<&str> = correct.split_whitespace().collect();

    let is_keyword = |word: &&str| word.chars().count() >= settings.min_keyword_len;
    let correct_keywords: Vec<&str> = correct_words.iter().copied().filter(is_keyword).collect();

    let keyword_matches = user_words
        .iter()
        .copied()
        .filter(is_keyword)
        .filter(|user_word| {
            correct_keywords.iter().any(|correct_word| {
                let score = similarity(user_word, correct_word);
                let matched = score > settings.keyword_similarity;
                if matched {
                    trace!(%user_word, %correct_word, score, "keyword matched");
                }
                matched
            })
        })
        .count();

    let required = keyword_threshold(correct_words.len(), settings.max_keyword_threshold);
    let overall_similarity = similarity(&user, &correct);
    let is_correct =
        keyword_matches >= required || overall_similarity >= settings.overall_similarity;

    Verdict {
        is_correct,
        correct_answer: correct_answer.trim().to_string(),
        keyword_matches,
        overall_similarity,
    }
}

/// Keyword matches required for a title of `word_count` words.
///
/// Half the title's words, capped at `max`. A title with at least one word
/// needs at least one match; an empty title needs none.
fn keyword_threshold(word_count: usize, max: usize) -> usize {
    let at_least = usize::from(word_count > 0);
    (word_count / 2).max(at_least).min(max)
}
