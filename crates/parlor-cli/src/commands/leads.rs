//! Captured-leads listing.

use crate::cli::LeadsArgs;
use crate::error::Result;
use crate::output::Formatter;
use parlor_client::ParlorClient;

/// List leads captured by the server.
pub async fn execute_leads(
    args: LeadsArgs,
    client: &ParlorClient,
    formatter: &Formatter,
) -> Result<()> {
    let leads = client
        .list_leads(args.source.as_deref(), args.limit)
        .await?;
    println!("{}", formatter.format_leads(&leads)?);
    Ok(())
}
