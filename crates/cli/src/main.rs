//! Roster CLI - Work with the user directory from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List every user
//! roster list
//!
//! # Create, patch and delete users
//! roster create --name Carol --email carol@example.com
//! roster update 2 --name Bobby
//! roster delete 1
//!
//! # Interactive editor against another server
//! roster --endpoint http://10.0.0.5:4000/graphql shell
//! ```
//!
//! # Commands
//!
//! - `list` - Print all users
//! - `create` - Create a user
//! - `update` - Patch a user's name and/or email
//! - `delete` - Delete a user
//! - `shell` - Interactive focus-sync editor

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{ArgGroup, Parser, Subcommand};
use roster_cli::commands::{records, shell};
use roster_cli::{ClientConfig, DirectoryClient, Session};
use roster_core::UserId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Roster user directory client")]
struct Cli {
    /// GraphQL endpoint (overrides `ROSTER_ENDPOINT`)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Create a user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Update a user's name and/or email
    #[command(group(ArgGroup::new("fields").required(true).multiple(true).args(["name", "email"])))]
    Update {
        /// User ID
        id: String,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
    /// Start the interactive editor
    Shell,
}

#[allow(clippy::print_stderr)]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "roster_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env(cli.endpoint.as_deref())?;
    tracing::debug!(endpoint = %config.endpoint, "Using directory endpoint");
    let directory = DirectoryClient::new(config.endpoint);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::List => records::list(&directory, &mut stdout).await?,
        Commands::Create { name, email } => {
            records::create(&directory, &name, &email, &mut stdout).await?;
        }
        Commands::Update { id, name, email } => {
            records::update(&directory, &UserId::new(id), name, email, &mut stdout).await?;
        }
        Commands::Delete { id } => {
            records::delete(&directory, &UserId::new(id), &mut stdout).await?;
        }
        Commands::Shell => {
            let mut session = Session::new(directory);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&mut session, input, &mut stdout).await?;
        }
    }
    stdout.flush()?;
    Ok(())
}
