use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::core::relay::TranscriptionRelay;
use crate::core::stt::{AssemblyAIClient, STTProvider, TranscriptionProvider};

/// Shared application state.
///
/// Immutable after startup; every request borrows it through `Arc`.
pub struct AppState {
    pub config: ServerConfig,
    pub relay: TranscriptionRelay,
}

impl AppState {
    /// Build the state and the configured provider client.
    pub async fn new(config: ServerConfig) -> Result<Arc<Self>, String> {
        let provider: Arc<dyn TranscriptionProvider> = match config.stt_provider {
            STTProvider::AssemblyAI => {
                let client = AssemblyAIClient::new(config.assemblyai_config())?;
                info!(
                    region = client.config().region.as_str(),
                    base_url = client.config().api_base_url(),
                    "Using AssemblyAI endpoint"
                );
                Arc::new(client)
            }
        };

        info!(
            provider = provider.provider_name(),
            upload_attempts = config.retry_max_attempts,
            "Transcription provider ready"
        );

        Ok(Self::with_provider(config, provider))
    }

    /// Build the state around an existing provider.
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn TranscriptionProvider>) -> Arc<Self> {
        let relay = TranscriptionRelay::new(provider, config.retry_policy());
        Arc::new(Self { config, relay })
    }
}
