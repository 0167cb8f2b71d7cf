pub mod language;
pub mod pronunciation;
pub mod tutor;

pub use language::{LanguageConfig, TargetLanguage};
pub use tutor::{HistoryEntry, HistoryRole, TutoringReply, TutoringRequest, TutorSettings};
