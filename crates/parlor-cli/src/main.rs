//! Parlor CLI - Command-line interface for the Parlor chatbot service.

use clap::Parser;
use parlor_cli::commands;
use parlor_cli::repl;
use parlor_cli::{Cli, Command, Config, Formatter};
use parlor_client::ParlorClient;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> parlor_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override server if specified
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Some(Command::Extract(args)) => {
            // Offline: no server involved
            commands::execute_extract(args, &config, &formatter)?;
        }
        None | Some(Command::Repl) => {
            let client = ParlorClient::new(&config.server_url);
            repl::run_repl(&client, &formatter).await?;
        }
        Some(Command::Chat(args)) => {
            let client = ParlorClient::new(&config.server_url);
            commands::execute_chat(args, &client, &formatter).await?;
        }
        Some(Command::Leads(args)) => {
            let client = ParlorClient::new(&config.server_url);
            commands::execute_leads(args, &client, &formatter).await?;
        }
    }

    Ok(())
}
