//! Salesdesk CLI
//!
//! Main entry point for the salesdesk command-line tool.
//! Three sales personas (prospecting, insights, communication) answer queries
//! over an optional spreadsheet, and every answer is kept in a local log.

mod commands;
mod session;

use clap::{Parser, Subcommand};
use commands::{
    AskCommand, MemoryCommand, ModelsCommand, PersonaArgs, PersonasCommand, PreviewCommand,
};
use salesdesk_core::{config::AppConfig, logging, AppResult};
use session::Session;
use std::path::PathBuf;

/// Salesdesk - sales assistant agents backed by Gemini
#[derive(Parser, Debug)]
#[command(name = "salesdesk")]
#[command(about = "Sales assistant agents with a local interaction log", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "SALESDESK_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "SALESDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// LLM provider (gemini, ollama)
    #[arg(short, long, global = true, env = "SALESDESK_PROVIDER")]
    provider: Option<String>,

    /// Model identifier (see `salesdesk models`)
    #[arg(short, long, global = true, env = "SALESDESK_MODEL")]
    model: Option<String>,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long, global = true, env = "SALESDESK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to the interaction log database
    #[arg(long, global = true, env = "SALESDESK_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask the Prospecting Agent to identify potential leads
    Prospect(PersonaArgs),

    /// Ask the Insights Agent to analyze prospects
    Insights(PersonaArgs),

    /// Ask the Communication Agent to draft outreach
    Communicate(PersonaArgs),

    /// Ask any persona by ID
    Ask(AskCommand),

    /// Show recent agent interactions
    Memory(MemoryCommand),

    /// Preview a dataset as the agents see it
    Preview(PreviewCommand),

    /// List available personas
    Personas(PersonasCommand),

    /// List selectable Gemini models
    Models(ModelsCommand),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Prospect(_) => "prospect",
            Commands::Insights(_) => "insights",
            Commands::Communicate(_) => "communicate",
            Commands::Ask(_) => "ask",
            Commands::Memory(_) => "memory",
            Commands::Preview(_) => "preview",
            Commands::Personas(_) => "personas",
            Commands::Models(_) => "models",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load_from(cli.workspace, cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.provider,
        cli.model,
        cli.api_key,
        cli.db,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Salesdesk CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    let _span = tracing::info_span!("command", name = cli.command.name()).entered();

    let result = run(cli.command, config).await;

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

async fn run(command: Commands, config: AppConfig) -> AppResult<()> {
    config.validate()?;

    match command {
        // Listing commands work without a credential
        Commands::Personas(cmd) => cmd.execute(&config).await,
        Commands::Models(cmd) => cmd.execute(&config).await,
        command => {
            let mut session = Session::open(config)?;
            run_in_session(command, &mut session).await
        }
    }
}

async fn run_in_session(command: Commands, session: &mut Session) -> AppResult<()> {
    match command {
        Commands::Prospect(args) => args.execute("prospecting", session).await,
        Commands::Insights(args) => args.execute("insights", session).await,
        Commands::Communicate(args) => args.execute("communication", session).await,
        Commands::Ask(cmd) => cmd.execute(session).await,
        Commands::Memory(cmd) => cmd.execute(session).await,
        Commands::Preview(cmd) => cmd.execute(session).await,
        Commands::Personas(cmd) => cmd.execute(session.config()).await,
        Commands::Models(cmd) => cmd.execute(session.config()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use salesdesk_core::AppError;
    use tempfile::TempDir;

    fn config_in(workspace: &std::path::Path) -> AppConfig {
        AppConfig {
            workspace: workspace.to_path_buf(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_persona_command() {
        let cli = Cli::try_parse_from([
            "salesdesk",
            "communicate",
            "Write an intro to Acme",
            "--dataset",
            "leads.xlsx",
            "--rows",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Communicate(args) => {
                assert_eq!(args.query.as_deref(), Some("Write an intro to Acme"));
                assert_eq!(args.dataset, Some(PathBuf::from("leads.xlsx")));
                assert_eq!(args.rows, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rows_must_be_positive() {
        assert!(Cli::try_parse_from(["salesdesk", "preview", "leads.csv", "--rows", "0"]).is_err());
    }

    #[tokio::test]
    async fn test_listing_commands_leave_workspace_untouched() {
        let temp = TempDir::new().unwrap();

        let cli = Cli::try_parse_from(["salesdesk", "models"]).unwrap();
        run(cli.command, config_in(temp.path())).await.unwrap();

        let cli = Cli::try_parse_from(["salesdesk", "personas"]).unwrap();
        run(cli.command, config_in(temp.path())).await.unwrap();

        assert!(!temp.path().join(".salesdesk").exists());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(temp.path());
        config.provider = "openai".to_string();

        let cli = Cli::try_parse_from(["salesdesk", "models"]).unwrap();
        let result = run(cli.command, config).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_memory_limit_default() {
        let cli = Cli::try_parse_from(["salesdesk", "memory"]).unwrap();
        match cli.command {
            Commands::Memory(cmd) => assert_eq!(cmd.limit, 5),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
