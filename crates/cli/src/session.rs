//! Per-invocation session state.
//!
//! A `Session` bundles everything a command needs (configuration, model
//! client, interaction log and the optional dataset) and is passed to the
//! handlers explicitly.

use salesdesk_core::{AppConfig, AppError, AppResult};
use salesdesk_dataset::{context_snippet, Dataset};
use salesdesk_llm::{create_client, is_supported_model, LlmClient, ProviderType};
use salesdesk_memory::{LogEntry, LogStore};
use salesdesk_prompt::{load_persona, PromptAgent};
use std::path::Path;
use std::sync::Arc;

pub struct Session {
    config: AppConfig,
    client: Arc<dyn LlmClient>,
    store: LogStore,
    dataset: Option<Dataset>,
}

impl Session {
    /// Open a session for `config`.
    ///
    /// Fails with `AppError::Credential` before anything else is touched when
    /// the provider needs an API key and none is configured.
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let api_key = config.resolve_api_key(&config.provider);
        let client = create_client(
            &config.provider,
            config.endpoint(&config.provider),
            api_key.as_deref(),
        )?;

        check_model(&config)?;

        let store = LogStore::open(&config.memory_path())?;

        tracing::debug!(
            provider = client.provider_name(),
            model = %config.model,
            "Session opened"
        );

        Ok(Self::from_parts(config, client, store))
    }

    /// Assemble a session from already-built parts.
    pub fn from_parts(config: AppConfig, client: Arc<dyn LlmClient>, store: LogStore) -> Self {
        Self {
            config,
            client,
            store,
            dataset: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Load a spreadsheet or CSV file, replacing any dataset loaded before.
    pub fn load_dataset(&mut self, path: &Path) -> AppResult<&Dataset> {
        let dataset = self.dataset.insert(Dataset::load(path)?);
        Ok(&*dataset)
    }

    /// Preview of the loaded dataset, or `None` without one.
    pub fn context(&self, rows: Option<usize>) -> Option<String> {
        context_snippet(self.dataset(), rows.unwrap_or(self.config.preview_rows))
    }

    /// Build the agent for a persona ID using the session's model.
    pub fn agent(&self, persona_id: &str) -> AppResult<PromptAgent> {
        let persona = load_persona(&self.config.workspace, persona_id)?;
        Ok(PromptAgent::new(
            persona,
            self.config.model.clone(),
            Arc::clone(&self.client),
        ))
    }

    /// Run `agent` on `query` and log the completed interaction.
    ///
    /// Nothing is written when the remote call fails.
    pub async fn ask(
        &self,
        agent: &PromptAgent,
        query: &str,
        context: Option<&str>,
    ) -> AppResult<LogEntry> {
        let response = agent.run(query, context).await?;
        self.store.save(agent.name(), query, &response)
    }
}

fn check_model(config: &AppConfig) -> AppResult<()> {
    if ProviderType::parse(&config.provider) == Some(ProviderType::Gemini)
        && !is_supported_model(&config.model)
    {
        return Err(AppError::Config(format!(
            "Unsupported Gemini model '{}'. Choose one of: {}",
            config.model,
            salesdesk_llm::SUPPORTED_GEMINI_MODELS.join(", ")
        )));
    }
    Ok(())
}
