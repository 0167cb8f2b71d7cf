use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;
use crate::models::pronunciation::{PronunciationScore, PronunciationVerdict};

const MAX_FEEDBACK_ITEMS: usize = 3;

lazy_static! {
    static ref IGNORED_PUNCTUATION: Regex = Regex::new(r"[¿¡.,!?]").unwrap();
}

fn normalize(text: &str) -> Vec<String> {
    IGNORED_PUNCTUATION
        .replace_all(&text.to_lowercase(), "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Compares a recognised transcript against the target phrase word by word,
/// position for position.
pub fn score_pronunciation(target: &str, transcript: &str) -> Result<PronunciationScore, ApiError> {
    let target_words = normalize(target);
    if target_words.is_empty() {
        return Err(ApiError::validation(
            "Target phrase must contain at least one word",
        ));
    }
    let spoken_words = normalize(transcript);

    let mut matched_words = 0;
    let mut feedback = Vec::new();

    for (i, word) in target_words.iter().enumerate() {
        match spoken_words.get(i) {
            Some(spoken) if spoken == word => matched_words += 1,
            Some(spoken) => feedback.push(format!("\"{}\" should be \"{}\"", spoken, word)),
            None => feedback.push(format!("Missing word: \"{}\"", word)),
        }
    }
    feedback.truncate(MAX_FEEDBACK_ITEMS);

    let total_words = target_words.len();
    let score = ((matched_words as f64 / total_words as f64) * 100.0).round() as u32;

    Ok(PronunciationScore {
        score,
        matched_words,
        total_words,
        feedback,
        verdict: PronunciationVerdict::from_score(score),
    })
}
