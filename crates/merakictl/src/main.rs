use std::io::IsTerminal;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use merakictl_core::Config;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::MerakiCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let loaded = match &cli.config_file {
        Some(config_file) => {
            let path = std::path::PathBuf::from(config_file);
            debug!("Loading config from explicit path: {:?}", path);
            Config::load_from_path(&path).map(|config| (config, Some(path)))
        }
        None => {
            debug!("Loading config from default location");
            Config::load().map(|config| (config, None))
        }
    };
    let (config, config_path) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            MerakiCtlError::from(e).print_diagnostic();
            std::process::exit(1);
        }
    };
    let mut conn_mgr = ConnectionManager::with_config_path(config, config_path);

    if let Err(e) = execute_command(&cli, &mut conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "merakictl=warn,merakictl_core=warn",
            1 => "merakictl=info,merakictl_core=info",
            2 => "merakictl=debug,merakictl_core=debug",
            _ => "merakictl=trace,merakictl_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout carries command output only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(
    cli: &Cli,
    conn_mgr: &mut ConnectionManager,
) -> Result<(), MerakiCtlError> {
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::Version => {
            debug!("Showing version information");
            match cli.output {
                cli::OutputFormat::Json | cli::OutputFormat::Yaml => {
                    let output_data = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "name": env!("CARGO_PKG_NAME"),
                    });
                    output::print_output(
                        &output_data,
                        cli.output.resolve(output::OutputFormat::Json),
                        None,
                    )?;
                }
                _ => {
                    println!("merakictl {}", env!("CARGO_PKG_VERSION"));
                }
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            debug!("Generating completions for {:?}", shell);
            generate_completions(*shell);
            Ok(())
        }
        Commands::Profile(profile_cmd) => {
            debug!("Executing profile command");
            commands::profile::handle_profile_command(
                profile_cmd,
                conn_mgr,
                cli.output,
                cli.query.as_deref(),
            )
        }
        Commands::Operations(operations_cmd) => commands::operations::handle_operations_command(
            operations_cmd,
            cli.output,
            cli.query.as_deref(),
        ),
        Commands::Call(args) => {
            commands::call::handle_call(
                args,
                conn_mgr,
                cli.profile.as_deref(),
                cli.output,
                cli.query.as_deref(),
            )
            .await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

fn generate_completions(shell: cli::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut out = std::io::stdout();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut out),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut out),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut out),
        cli::Shell::PowerShell => generate(shells::PowerShell, &mut cmd, name, &mut out),
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut out),
    }
}

/// One-line description of a command for the log, without credentials
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Call(args) => format!(
            "call {} ({} argument(s), {} param(s))",
            args.operation,
            args.arguments.len(),
            args.params.len()
        ),
        Commands::Operations(_) => "operations".to_string(),
        Commands::Profile(cli::ProfileCommands::Set { name, .. }) => {
            format!("profile set {} --api-key <redacted>", name)
        }
        Commands::Profile(_) => "profile".to_string(),
        Commands::Version => "version".to_string(),
        Commands::Completions { shell } => format!("completions {:?}", shell),
    }
}
