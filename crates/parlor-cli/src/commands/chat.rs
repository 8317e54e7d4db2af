//! One-shot chat against a running server.

use crate::cli::ChatArgs;
use crate::error::Result;
use crate::output::Formatter;
use parlor_client::ParlorClient;

/// Send a single message and print the response.
pub async fn execute_chat(
    args: ChatArgs,
    client: &ParlorClient,
    formatter: &Formatter,
) -> Result<()> {
    let response = client.chat(&args.message, &[]).await?;
    println!("{}", formatter.format_chat(&response)?);
    Ok(())
}
