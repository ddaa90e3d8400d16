//! Listing commands: available personas and model choices.

use clap::Args;
use salesdesk_core::{config::AppConfig, AppResult};
use salesdesk_llm::{DEFAULT_GEMINI_MODEL, SUPPORTED_GEMINI_MODELS};
use salesdesk_prompt::{list_personas, load_persona};

/// List available personas
#[derive(Args, Debug)]
pub struct PersonasCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PersonasCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing personas command");

        let personas = list_personas(&config.workspace)?
            .iter()
            .map(|id| load_persona(&config.workspace, id))
            .collect::<AppResult<Vec<_>>>()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&personas)?);
        } else {
            for persona in personas {
                println!("{:<16} {} ({})", persona.id, persona.name, persona.role);
            }
        }

        Ok(())
    }
}

/// List the Gemini models that can be selected with --model
#[derive(Args, Debug)]
pub struct ModelsCommand {}

impl ModelsCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        for model in SUPPORTED_GEMINI_MODELS {
            let mut tags = Vec::new();
            if model == DEFAULT_GEMINI_MODEL {
                tags.push("default");
            }
            if model == config.model {
                tags.push("selected");
            }

            if tags.is_empty() {
                println!("{}", model);
            } else {
                println!("{} ({})", model, tags.join(", "));
            }
        }
        Ok(())
    }
}
