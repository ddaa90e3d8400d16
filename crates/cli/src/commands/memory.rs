//! Memory command handler.
//!
//! Shows the most recent logged interactions.

use crate::session::Session;
use clap::Args;
use salesdesk_core::AppResult;
use salesdesk_memory::LogEntry;

/// Show recent agent interactions
#[derive(Args, Debug)]
pub struct MemoryCommand {
    /// Number of interactions to show
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl MemoryCommand {
    pub async fn execute(&self, session: &Session) -> AppResult<()> {
        tracing::info!("Executing memory command");

        let entries = session.store().fetch_recent(self.limit as usize)?;
        tracing::debug!("Fetched {} interactions", entries.len());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("No interactions recorded yet.");
        } else {
            print!("{}", format_entries(&entries));
        }

        Ok(())
    }
}

fn format_entries(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{} | {}\nQuery: {}\nResponse: {}\n---\n",
                e.timestamp, e.agent_name, e.query, e.response
            )
        })
        .collect()
}
