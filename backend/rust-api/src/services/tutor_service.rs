use std::sync::Arc;
use std::time::Instant;

use validator::Validate;

use crate::error::ApiError;
use crate::metrics::{GATEWAY_REQUEST_DURATION_SECONDS, TUTOR_REQUESTS_TOTAL};
use crate::models::tutor::{HistoryEntry, TutoringReply, TutoringRequest, TutorSettings};
use crate::services::completion_gateway::{
    CompletionGateway, CompletionMessage, CompletionRole, CredentialProvider, GatewayError,
};
use crate::services::prompt_composer::compose_system_prompt;

/// Only the most recent history entries are forwarded upstream.
pub const HISTORY_LIMIT: usize = 10;

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

pub struct TutorService {
    gateway: Arc<dyn CompletionGateway>,
    credentials: Arc<dyn CredentialProvider>,
}

impl TutorService {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub async fn reply(&self, req: &TutoringRequest) -> Result<TutoringReply, ApiError> {
        let settings = req.settings();
        let result = self.reply_with(req, &settings).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.status_hint(),
        };
        TUTOR_REQUESTS_TOTAL
            .with_label_values(&[settings.mode.as_str(), outcome])
            .inc();

        result
    }

    async fn reply_with(
        &self,
        req: &TutoringRequest,
        settings: &TutorSettings,
    ) -> Result<TutoringReply, ApiError> {
        let api_key = self.credentials.api_key().ok_or(ApiError::Config)?;

        req.validate()
            .map_err(|e| ApiError::validation(format!("Validation error: {}", e)))?;

        tracing::info!(
            "Tutoring request: mode={}, language={}, level={}, history={}",
            settings.mode.as_str(),
            settings.target_language.id(),
            settings.user_level.as_str(),
            req.conversation_history.len()
        );

        let system_prompt = compose_system_prompt(settings);
        let messages = build_messages(&system_prompt, &req.conversation_history, &req.message);

        let start = Instant::now();
        let result = self.gateway.complete(&api_key, &messages).await;
        let gateway_outcome = if result.is_ok() { "ok" } else { "error" };
        GATEWAY_REQUEST_DURATION_SECONDS
            .with_label_values(&[gateway_outcome])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(Some(reply)) => Ok(TutoringReply { reply }),
            Ok(None) => {
                tracing::warn!("AI gateway response had no reply text, using fallback");
                Ok(TutoringReply {
                    reply: FALLBACK_REPLY.to_string(),
                })
            }
            Err(e) => Err(map_gateway_error(e)),
        }
    }
}

/// `[system] + last HISTORY_LIMIT history entries + [user message]`.
pub fn build_messages(
    system_prompt: &str,
    history: &[HistoryEntry],
    message: &str,
) -> Vec<CompletionMessage> {
    let recent = &history[history.len().saturating_sub(HISTORY_LIMIT)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(CompletionMessage::new(CompletionRole::System, system_prompt));
    messages.extend(
        recent
            .iter()
            .map(|entry| CompletionMessage::new(entry.role.into(), entry.content.clone())),
    );
    messages.push(CompletionMessage::new(CompletionRole::User, message));
    messages
}

fn map_gateway_error(err: GatewayError) -> ApiError {
    match err {
        GatewayError::RateLimited => ApiError::RateLimited,
        GatewayError::UsageLimitReached => ApiError::UsageLimitReached,
        GatewayError::Status { status, body } => ApiError::Upstream { status, body },
        GatewayError::Transport(e) => {
            ApiError::Unknown(anyhow::Error::new(e).context("Failed to call AI gateway"))
        }
    }
}
