use std::sync::Arc;

use crate::config::Config;
use crate::services::completion_gateway::{
    CompletionGateway, CredentialProvider, HttpCompletionGateway, StaticCredential,
};

pub struct AppState {
    pub config: Config,
    pub gateway: Arc<dyn CompletionGateway>,
    pub credentials: Arc<dyn CredentialProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let gateway = HttpCompletionGateway::new(&config.gateway)?;
        let credentials = StaticCredential::new(config.gateway.api_key.clone());

        tracing::info!(
            "AI gateway client ready: url={}, model={}, credential={}",
            config.gateway.url,
            config.gateway.model,
            if credentials.api_key().is_some() {
                "configured"
            } else {
                "missing"
            }
        );

        Ok(Self::with_collaborators(
            config,
            Arc::new(gateway),
            Arc::new(credentials),
        ))
    }

    /// Builds state around an explicit gateway and credential source.
    pub fn with_collaborators(
        config: Config,
        gateway: Arc<dyn CompletionGateway>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            config,
            gateway,
            credentials,
        }
    }
}

pub mod completion_gateway;
pub mod prompt_composer;
pub mod pronunciation_service;
pub mod tutor_service;
