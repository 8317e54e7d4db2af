//! Offline action extraction over a raw LLM reply.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use parlor_extractor::{ActionExtractor, ExtractorConfig};
use std::io::Read;

/// Run the extractor over text from an argument, a file, or stdin.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;

    let booking_link = args
        .booking_link
        .unwrap_or_else(|| config.booking_link.clone());

    let extractor = ActionExtractor::new(ExtractorConfig::with_booking_link(booking_link));
    let extracted = extractor.extract(&text);

    println!("{}", formatter.format_extraction(&extracted)?);
    Ok(())
}

fn read_input(args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(std::fs::read_to_string(path)?);
    }
    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Err(CliError::InvalidInput(
        "Provide reply text as an argument, or use --file / --stdin".to_string(),
    ))
}
