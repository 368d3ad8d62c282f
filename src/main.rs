use clap::{Parser, Subcommand};
use codeql_action::logging::ActionsLogger;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "codeql-runner")]
#[command(about = "Prepare CodeQL analysis runs for GitHub code scanning")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a CodeQL run outside of GitHub Actions
    Init {
        /// URL of the GitHub instance (github.com or GitHub Enterprise Server)
        #[arg(long)]
        github_url: Option<String>,
        /// GitHub token. Prefer --github-auth-stdin or GITHUB_TOKEN
        #[arg(long)]
        github_auth: Option<String>,
        /// Read the GitHub token from standard input
        #[arg(long)]
        github_auth_stdin: bool,
        /// Memory for CodeQL in MB
        #[arg(long, allow_hyphen_values = true)]
        ram: Option<String>,
        /// Threads for CodeQL; negative values leave that many cores free
        #[arg(long, allow_hyphen_values = true)]
        threads: Option<String>,
        /// Include code snippets in SARIF output
        #[arg(long)]
        add_snippets: bool,
        /// YAML config file
        #[arg(long)]
        config_file: Option<PathBuf>,
    },
    /// Initialize a CodeQL run inside a GitHub Actions step
    ActionInit,
    /// Print the CodeQL flags for this machine
    Flags {
        /// Memory for CodeQL in MB
        #[arg(long, allow_hyphen_values = true)]
        ram: Option<String>,
        /// Threads for CodeQL; negative values leave that many cores free
        #[arg(long, allow_hyphen_values = true)]
        threads: Option<String>,
        /// Include code snippets in SARIF output
        #[arg(long)]
        add_snippets: bool,
        /// YAML config file
        #[arg(long)]
        config_file: Option<PathBuf>,
        /// Print all flags as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries flags and workflow commands
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let actions_mode = matches!(cli.command, Commands::ActionInit);

    let result = match cli.command {
        Commands::Init {
            github_url,
            github_auth,
            github_auth_stdin,
            ram,
            threads,
            add_snippets,
            config_file,
        } => {
            cli::init::run(cli::init::InitOptions {
                github_url,
                github_auth,
                github_auth_stdin,
                flags: cli::FlagOptions {
                    ram,
                    threads,
                    add_snippets,
                    config_file,
                },
            })
            .await
        }
        Commands::ActionInit => cli::action_init::run().await,
        Commands::Flags {
            ram,
            threads,
            add_snippets,
            config_file,
            json,
        } => cli::flags::run(
            cli::FlagOptions {
                ram,
                threads,
                add_snippets,
                config_file,
            },
            json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if actions_mode {
                println!("{}", ActionsLogger::error_command(&e.to_string()));
            }
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}
