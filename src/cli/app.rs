//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::todos::TodoOp;
use super::{launches, pages, session, todos, tui};
use crate::graphql::GraphqlClient;
use crate::storage::{Config, TokenStore};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(author, version, about = "Terminal starter app: todos, SpaceX launches over GraphQL and a demo session")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: `default_format` from the config, else text]
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Defaults to the interactive UI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive UI
    Tui {
        /// Starting page (home, todos, launches, about)
        #[arg(long, short, default_value = "home")]
        route: String,
    },

    /// List recent SpaceX launches
    Launches {
        /// Number of launches (defaults to the configured limit)
        #[arg(long, short)]
        limit: Option<u32>,
    },

    /// Show a single launch
    Launch {
        /// Launch ID
        id: String,
    },

    /// List rockets
    Rockets,

    /// Run a scripted todo session and print the result
    ///
    /// Examples:
    ///   launchpad todos "add:Buy milk" "add:Walk the dog" toggle:1
    ///   launchpad todos "add:Buy milk" toggle:1 filter:completed
    Todos {
        /// Ops: add:TEXT, toggle:N, delete:N, filter:all|active|completed, clear
        #[arg(required = true)]
        ops: Vec<TodoOp>,
    },

    /// Check todo text against the form rules
    Validate {
        /// Text to validate
        text: String,
    },

    /// Store an API token sent as a bearer token
    Login {
        /// Token value
        #[arg(long, env = "LAUNCHPAD_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Remove the stored token
    Logout,

    /// Show whether a token is stored
    Token,

    /// About this starter
    About,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = Config::config_dir()?;
    let config = Config::load()?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Launchpad starting");
    output.verbose_ctx("config", &format!("Config directory: {}", config_dir.display()));
    let tokens = TokenStore::new(&config_dir);

    let command = cli.command.unwrap_or(Commands::Tui {
        route: "home".to_string(),
    });

    match command {
        Commands::Tui { route } => tui::run(&output, &route, &config, tokens)?,

        Commands::Launches { limit } => {
            let client = client(&output, &config, tokens)?;
            launches::list(&output, &client, limit.unwrap_or(config.launches_limit))?
        }
        Commands::Launch { id } => {
            let client = client(&output, &config, tokens)?;
            launches::show(&output, &client, &id)?
        }
        Commands::Rockets => {
            let client = client(&output, &config, tokens)?;
            launches::rockets(&output, &client)?
        }

        Commands::Todos { ops } => todos::run(&output, &ops)?,
        Commands::Validate { text } => todos::validate(&output, &text)?,

        Commands::Login { token } => session::login(&output, &tokens, &token)?,
        Commands::Logout => session::logout(&output, &tokens)?,
        Commands::Token => session::show(&output, &tokens)?,

        Commands::About => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "title": pages::ABOUT_TITLE,
                    "version": env!("CARGO_PKG_VERSION"),
                    "technologies": pages::TECHNOLOGIES
                        .iter()
                        .map(|t| serde_json::json!({ "name": t.name, "description": t.description }))
                        .collect::<Vec<_>>(),
                }));
            } else {
                print!("{}", pages::about_text());
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// GraphQL client for the configured endpoint, sending the stored token
fn client(output: &Output, config: &Config, tokens: TokenStore) -> Result<GraphqlClient> {
    output.verbose_ctx("graphql", &format!("Endpoint: {}", config.graphql_endpoint));
    Ok(GraphqlClient::new(config.graphql_endpoint.clone())?.with_token_store(tokens))
}
