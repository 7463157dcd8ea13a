//! Lexicon-based headline polarity.
//!
//! Every word found in the embedded lexicon contributes its polarity in
//! `[-1, 1]`; the headline's polarity is the mean of those contributions.
//! Two modifiers adjust a contribution:
//!
//! - an intensifier right before the word scales it (`sangat bagus` > `bagus`)
//! - a negator within the two preceding words flips and halves it
//!   (`tidak aman` is mildly negative)
//!
//! Headlines with no lexicon word score `0.0` and are neutral.

use crate::models::Sentiment;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

static LEXICON_SOURCE: &str = include_str!("lexicon.tsv");

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| parse_lexicon(LEXICON_SOURCE));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").expect("static regex"));

const NEGATORS: &[&str] = &[
    "not", "no", "never", "tidak", "bukan", "belum", "tak", "jangan", "tanpa",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("sangat", 1.3),
    ("amat", 1.3),
    ("sungguh", 1.3),
    ("paling", 1.5),
    ("makin", 1.2),
    ("semakin", 1.2),
];

const NEGATION_FACTOR: f64 = -0.5;

/// Parse `word<TAB>score` lines; `#` starts a comment line.
fn parse_lexicon(source: &'static str) -> HashMap<&'static str, f64> {
    let mut lexicon = HashMap::new();
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((word, score)) = line.split_once('\t') else {
            warn!(%line, "Skipping malformed lexicon line");
            continue;
        };
        match score.trim().parse::<f64>() {
            Ok(score) => {
                lexicon.insert(word.trim(), score.clamp(-1.0, 1.0));
            }
            Err(e) => warn!(%line, error = %e, "Skipping lexicon line with bad score"),
        }
    }
    lexicon
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

/// Polarity of `text` in `[-1, 1]`.
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

    let scores: Vec<f64> = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            let mut score = *LEXICON.get(token)?;
            if let Some(factor) = i.checked_sub(1).and_then(|p| intensity(tokens[p])) {
                score *= factor;
            }
            if tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| NEGATORS.contains(t))
            {
                score *= NEGATION_FACTOR;
            }
            Some(score)
        })
        .collect();

    if scores.is_empty() {
        return 0.0;
    }
    (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
}

/// Bucket a polarity score: above zero is positive, below is negative.
pub fn classify(polarity: f64) -> Sentiment {
    if polarity > 0.0 {
        Sentiment::Positive
    } else if polarity < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn analyze_sentiment(text: &str) -> Sentiment {
    classify(polarity(text))
}
