//! Persona command handlers.
//!
//! Sends a query (plus the dataset preview, if any) to one persona, prints
//! the answer and logs the interaction.

use crate::session::Session;
use clap::Args;
use salesdesk_core::{AppError, AppResult};
use salesdesk_memory::LogEntry;
use std::path::PathBuf;

/// Input shared by every persona command
#[derive(Args, Debug, Clone)]
pub struct PersonaArgs {
    /// The query for the agent (may be empty)
    pub query: Option<String>,

    /// Read the query from a file
    #[arg(short, long, conflicts_with = "query")]
    pub file: Option<PathBuf>,

    /// Spreadsheet or CSV whose first rows are sent as context
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Number of dataset rows sent as context
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: Option<u32>,

    /// Maximum tokens in response
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Temperature for response generation (0.0-2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Output the logged interaction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run any persona by ID, including ones defined in .salesdesk/personas/
#[derive(Args, Debug)]
pub struct AskCommand {
    /// Persona ID (see `salesdesk personas`)
    #[arg(long)]
    pub persona: String,

    #[command(flatten)]
    pub args: PersonaArgs,
}

impl AskCommand {
    pub async fn execute(&self, session: &mut Session) -> AppResult<()> {
        self.args.execute(&self.persona, session).await
    }
}

impl PersonaArgs {
    /// Execute the persona action for `persona_id`.
    pub async fn execute(&self, persona_id: &str, session: &mut Session) -> AppResult<()> {
        tracing::info!("Executing {} persona command", persona_id);
        tracing::debug!("Persona options: {:?}", self);

        let query = self.get_query()?;

        if let Some(ref path) = self.dataset {
            session.load_dataset(path)?;
        }
        let context = session.context(self.rows.map(|r| r as usize));

        let mut agent = session.agent(persona_id)?;
        if let Some(max_tokens) = self.max_tokens {
            agent = agent.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::Config(format!(
                    "Temperature must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
            agent = agent.with_temperature(temperature);
        }

        let entry = session.ask(&agent, &query, context.as_deref()).await?;

        self.render(&entry)
    }

    fn render(&self, entry: &LogEntry) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(entry)?);
        } else {
            println!("{}", entry.response);
        }
        Ok(())
    }

    /// Query from the positional argument or file; absent means empty.
    fn get_query(&self) -> AppResult<String> {
        if let Some(ref query) = self.query {
            return Ok(query.clone());
        }

        match self.file {
            Some(ref path) => std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read query file {:?}: {}", path, e))
            }),
            None => {
                tracing::debug!("No query given; sending an empty query");
                Ok(String::new())
            }
        }
    }
}
