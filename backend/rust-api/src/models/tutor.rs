use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::language::TargetLanguage;

/// Body of `POST /functions/v1/tutor`.
///
/// Setting fields stay as raw strings so that unknown values degrade to a
/// default instead of rejecting the request. Only the message and the shape of
/// the history are validated.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TutoringRequest {
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
    #[serde(default)]
    pub user_level: Option<String>,
    #[serde(default)]
    pub coach_style: Option<String>,
    #[serde(default)]
    pub explain_in_english: Option<bool>,
    #[serde(default)]
    pub target_language: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Message must not be empty".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutoringReply {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TutorMode {
    Coach,
    /// Anything other than `coach` is free conversation.
    #[default]
    Free,
}

impl TutorMode {
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("coach") => TutorMode::Coach,
            _ => TutorMode::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TutorMode::Coach => "coach",
            TutorMode::Free => "free",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topic {
    #[default]
    General,
    Travel,
    Food,
    Introductions,
    Shopping,
    Daily,
}

impl Topic {
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("travel") => Topic::Travel,
            Some("food") => Topic::Food,
            Some("introductions") => Topic::Introductions,
            Some("shopping") => Topic::Shopping,
            Some("daily") => Topic::Daily,
            _ => Topic::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl UserLevel {
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("intermediate") => UserLevel::Intermediate,
            Some("advanced") => UserLevel::Advanced,
            _ => UserLevel::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserLevel::Beginner => "beginner",
            UserLevel::Intermediate => "intermediate",
            UserLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoachStyle {
    #[default]
    Gentle,
    Strict,
}

impl CoachStyle {
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("strict") => CoachStyle::Strict,
            _ => CoachStyle::Gentle,
        }
    }
}

/// Fully resolved tutoring settings. Every field has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorSettings {
    pub mode: TutorMode,
    pub topic: Topic,
    pub user_level: UserLevel,
    pub coach_style: CoachStyle,
    pub explain_in_english: bool,
    pub target_language: TargetLanguage,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            mode: TutorMode::default(),
            topic: Topic::default(),
            user_level: UserLevel::default(),
            coach_style: CoachStyle::default(),
            explain_in_english: true,
            target_language: TargetLanguage::default(),
        }
    }
}

impl TutoringRequest {
    pub fn settings(&self) -> TutorSettings {
        TutorSettings {
            mode: TutorMode::resolve(self.mode.as_deref()),
            topic: Topic::resolve(self.topic.as_deref()),
            user_level: UserLevel::resolve(self.user_level.as_deref()),
            coach_style: CoachStyle::resolve(self.coach_style.as_deref()),
            explain_in_english: self.explain_in_english.unwrap_or(true),
            target_language: self
                .target_language
                .as_deref()
                .map(TargetLanguage::resolve)
                .unwrap_or_default(),
        }
    }
}
