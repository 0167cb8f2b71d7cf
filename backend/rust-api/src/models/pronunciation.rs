use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScorePronunciationRequest {
    /// Phrase the learner was asked to say.
    #[validate(length(min = 1, message = "Target phrase must not be empty"))]
    pub target: String,
    /// What speech recognition heard.
    pub transcript: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PronunciationVerdict {
    Excellent,
    Good,
    KeepPracticing,
}

impl PronunciationVerdict {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => PronunciationVerdict::Excellent,
            50..=79 => PronunciationVerdict::Good,
            _ => PronunciationVerdict::KeepPracticing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PronunciationVerdict::Excellent => "excellent",
            PronunciationVerdict::Good => "good",
            PronunciationVerdict::KeepPracticing => "keepPracticing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationScore {
    /// Percentage of target words spoken in the right position, 0..=100.
    pub score: u32,
    pub matched_words: usize,
    pub total_words: usize,
    pub feedback: Vec<String>,
    pub verdict: PronunciationVerdict,
}
