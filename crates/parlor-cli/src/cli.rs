//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Parlor CLI - Drive the agency chatbot and inspect what it captures.
#[derive(Debug, Parser)]
#[command(name = "parlor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Server URL (e.g., http://localhost:8080)
    #[arg(long, global = true, env = "PARLOR_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare text / ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the action extractor over a raw LLM reply, offline
    Extract(ExtractArgs),

    /// Send a single message to the chatbot
    Chat(ChatArgs),

    /// List leads captured by the server
    Leads(LeadsArgs),

    /// Enter an interactive chat session
    Repl,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Raw reply text to extract from (omit to use --file or --stdin)
    pub text: Option<String>,

    /// Read the reply text from a file
    #[arg(short = 'F', long)]
    pub file: Option<String>,

    /// Read the reply text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Booking link to scrub (defaults to the configured one)
    #[arg(long)]
    pub booking_link: Option<String>,
}

/// Arguments for the chat command.
#[derive(Debug, Parser)]
pub struct ChatArgs {
    /// The message to send
    pub message: String,
}

/// Arguments for the leads command.
#[derive(Debug, Parser)]
pub struct LeadsArgs {
    /// Filter by capture surface (chatbot, contact_form, quote_request, job_application)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_without_command() {
        let cli = Cli::parse_from(["parlor"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from(["parlor", "extract", "some reply text"]);
        match cli.command {
            Some(Command::Extract(args)) => {
                assert_eq!(args.text.as_deref(), Some("some reply text"));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_chat_command() {
        let cli = Cli::parse_from(["parlor", "chat", "hello there"]);
        match cli.command {
            Some(Command::Chat(args)) => assert_eq!(args.message, "hello there"),
            _ => panic!("Expected Chat command"),
        }
    }

    #[test]
    fn test_leads_command_with_filters() {
        let cli = Cli::parse_from(["parlor", "leads", "--source", "chatbot", "--limit", "5"]);
        match cli.command {
            Some(Command::Leads(args)) => {
                assert_eq!(args.source.as_deref(), Some("chatbot"));
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected Leads command"),
        }
    }

    #[test]
    fn test_global_server_flag() {
        let cli = Cli::parse_from(["parlor", "--server", "http://example.com:9000", "repl"]);
        assert_eq!(cli.server.as_deref(), Some("http://example.com:9000"));
    }
}
