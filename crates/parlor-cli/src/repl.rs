//! Interactive chat session against a running server.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use parlor_client::{HistoryTurn, ParlorClient};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive chat loop.
///
/// Each line is sent as a visitor message with the session's history; the
/// reply (and any surfaced actions) is printed and appended to history.
pub async fn run_repl(client: &ParlorClient, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Parlor chat - connected to {} - type 'exit' to quit, 'reset' to start over",
            client.base_url()
        ))
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut conversation: Vec<HistoryTurn> = Vec::new();

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match line {
                    "exit" | "quit" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "reset" => {
                        conversation.clear();
                        println!("{}", formatter.info("Conversation cleared"));
                        continue;
                    }
                    _ => {}
                }

                match client.chat(line, &conversation).await {
                    Ok(response) => {
                        match formatter.format_chat(&response) {
                            Ok(formatted) => println!("bot> {}", formatted),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                        conversation.push(HistoryTurn::user(line));
                        conversation.push(HistoryTurn::assistant(response.reply));
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| CliError::Config("No data directory on this platform".to_string()))?;
    let dir = base.join("parlor");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}
