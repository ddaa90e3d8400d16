//! Preview command handler.

use crate::session::Session;
use clap::Args;
use salesdesk_core::AppResult;
use std::path::PathBuf;

/// Show the dataset preview the agents would receive
#[derive(Args, Debug)]
pub struct PreviewCommand {
    /// Spreadsheet or CSV file
    pub dataset: PathBuf,

    /// Number of rows to show
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: Option<u32>,
}

impl PreviewCommand {
    pub async fn execute(&self, session: &mut Session) -> AppResult<()> {
        tracing::info!("Executing preview command for {:?}", self.dataset);

        let total = session.load_dataset(&self.dataset)?.len();

        if let Some(preview) = session.context(self.rows.map(|r| r as usize)) {
            println!("Dataset Preview ({} rows total)", total);
            println!("{}", preview);
        }

        Ok(())
    }
}
