//! Persona-bound agent dispatching prompts to a remote model.

use crate::builder::build_prompt;
use crate::types::Persona;
use salesdesk_core::AppResult;
use salesdesk_llm::{LlmClient, LlmRequest};
use std::sync::Arc;

/// A persona paired with a model and the client that reaches it.
///
/// Every [`run`](PromptAgent::run) is independent; the agent holds no
/// per-call state.
#[derive(Clone)]
pub struct PromptAgent {
    persona: Persona,
    model: String,
    client: Arc<dyn LlmClient>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl PromptAgent {
    pub fn new(persona: Persona, model: impl Into<String>, client: Arc<dyn LlmClient>) -> Self {
        Self {
            persona,
            model: model.into(),
            client,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Cap the response length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Display name recorded alongside each interaction.
    pub fn name(&self) -> &str {
        &self.persona.name
    }

    /// Ask the model `query`, with optional supporting `context`.
    ///
    /// Returns the model's text verbatim. Any failure of the remote call is
    /// returned unchanged.
    pub async fn run(&self, query: &str, context: Option<&str>) -> AppResult<String> {
        let prompt = build_prompt(&self.persona, query, context)?;

        let mut request = LlmRequest::new(prompt, &self.model);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        tracing::info!(
            agent = %self.persona.name,
            provider = self.client.provider_name(),
            model = %self.model,
            "Running agent"
        );

        let response = self.client.complete(&request).await?;

        tracing::debug!(
            "Token usage - Prompt: {}, Completion: {}, Total: {}",
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );

        Ok(response.content)
    }
}
