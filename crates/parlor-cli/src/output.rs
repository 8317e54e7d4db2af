//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use parlor_client::{ChatResponse, LeadRecord};
use parlor_extractor::ExtractedReply;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an offline extraction result.
    pub fn format_extraction(&self, extracted: &ExtractedReply) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let actions = extracted.actions.as_ref().map(|a| {
                    serde_json::json!({
                        "create_lead": a.create_lead.as_ref().map(|lead| serde_json::json!({
                            "name": lead.name,
                            "email": lead.email,
                            "phone": lead.phone,
                            "company": lead.company,
                            "budget": lead.budget,
                            "message": lead.message,
                        })),
                        "recommend_services": a.recommend_services,
                        "book_meeting": a.book_meeting,
                    })
                });
                let value = serde_json::json!({
                    "reply_text": extracted.reply_text,
                    "actions": actions,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(extracted.reply_text.clone()),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&extracted.reply_text);
                out.push('\n');

                if let Some(actions) = &extracted.actions {
                    let mut builder = Builder::default();
                    builder.push_record(["ACTION", "DETAILS"]);

                    if let Some(lead) = &actions.create_lead {
                        builder.push_record([
                            "create_lead".to_string(),
                            format!(
                                "name={} email={} phone={} company={} budget={}",
                                lead.name, lead.email, lead.phone, lead.company, lead.budget
                            ),
                        ]);
                    }
                    if let Some(slugs) = &actions.recommend_services {
                        builder
                            .push_record(["recommend_services".to_string(), slugs.join(", ")]);
                    }
                    if actions.book_meeting {
                        builder.push_record(["book_meeting".to_string(), "yes".to_string()]);
                    }

                    let mut table = builder.build();
                    table
                        .with(Style::rounded())
                        .with(Modify::new(Rows::first()).with(Alignment::center()));
                    out.push('\n');
                    out.push_str(&table.to_string());
                } else {
                    out.push('\n');
                    out.push_str(&self.info("No actions detected"));
                }

                Ok(out)
            }
        }
    }

    /// Format a chat response from the server.
    pub fn format_chat(&self, response: &ChatResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "reply": response.reply,
                    "recommended_services": response.recommended_services,
                    "show_book_meeting": response.show_book_meeting,
                    "lead_id": response.lead_id,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(response.reply.clone()),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&response.reply);

                if !response.recommended_services.is_empty() {
                    out.push('\n');
                    out.push_str(&self.info(&format!(
                        "Recommended services: {}",
                        response.recommended_services.join(", ")
                    )));
                }
                if response.show_book_meeting {
                    out.push('\n');
                    out.push_str(&self.info("The visitor would see the booking call to action"));
                }
                if let Some(lead_id) = &response.lead_id {
                    out.push('\n');
                    out.push_str(&self.success(&format!("Lead captured: {}", lead_id)));
                }

                Ok(out)
            }
        }
    }

    /// Format a leads listing.
    pub fn format_leads(&self, leads: &[LeadRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = leads
                    .iter()
                    .map(|l| {
                        serde_json::json!({
                            "id": l.id,
                            "source": l.source,
                            "name": l.name,
                            "email": l.email,
                            "phone": l.phone,
                            "company": l.company,
                            "budget": l.budget,
                            "message": l.message,
                            "created_at": l.created_at,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(leads
                .iter()
                .map(|l| l.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if leads.is_empty() {
                    return Ok(self.info("No leads captured yet"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "SOURCE", "NAME", "EMAIL", "COMPANY", "BUDGET"]);
                for lead in leads {
                    builder.push_record([
                        lead.id.as_str(),
                        lead.source.as_str(),
                        lead.name.as_str(),
                        lead.email.as_str(),
                        lead.company.as_str(),
                        lead.budget.as_str(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Informational message.
    pub fn info(&self, message: &str) -> String {
        if self.color_enabled {
            message.cyan().to_string()
        } else {
            message.to_string()
        }
    }

    /// Success message.
    pub fn success(&self, message: &str) -> String {
        if self.color_enabled {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    /// Error message.
    pub fn error(&self, message: &str) -> String {
        if self.color_enabled {
            format!("Error: {}", message).red().to_string()
        } else {
            format!("Error: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::{ActionSet, ChatAction};

    fn extraction_with_actions() -> ExtractedReply {
        let mut actions = ActionSet::default();
        actions.record(ChatAction::RecommendServices(vec![
            "seo".to_string(),
            "web-dev".to_string(),
        ]));
        actions.record(ChatAction::BookMeeting);
        ExtractedReply {
            reply_text: "Take a look:".to_string(),
            actions: actions.into_option(),
        }
    }

    #[test]
    fn test_extraction_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let out = formatter
            .format_extraction(&extraction_with_actions())
            .unwrap();
        assert_eq!(out, "Take a look:");
    }

    #[test]
    fn test_extraction_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let out = formatter
            .format_extraction(&extraction_with_actions())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["reply_text"], "Take a look:");
        assert_eq!(value["actions"]["book_meeting"], true);
        assert_eq!(value["actions"]["recommend_services"][0], "seo");
    }

    #[test]
    fn test_extraction_table_format_mentions_actions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter
            .format_extraction(&extraction_with_actions())
            .unwrap();
        assert!(out.contains("Take a look:"));
        assert!(out.contains("recommend_services"));
        assert!(out.contains("book_meeting"));
    }

    #[test]
    fn test_leads_table_empty() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter.format_leads(&[]).unwrap();
        assert!(out.contains("No leads captured yet"));
    }

    #[test]
    fn test_no_color_passthrough() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("plain"), "plain");
        assert_eq!(formatter.error("bad"), "Error: bad");
    }
}
