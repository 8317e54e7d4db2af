//! End-to-end tests for the Action Extractor

#[cfg(test)]
mod tests {
    use crate::{ActionExtractor, ExtractorConfig};

    fn extractor() -> ActionExtractor {
        ActionExtractor::new(ExtractorConfig::default())
    }

    #[test]
    fn test_recommendation_block_is_extracted() {
        let input =
            "Here are our services:\n{\"action\": \"recommend_services\", \"services\": [\"seo\", \"web-dev\"]}";
        let reply = extractor().extract(input);

        assert_eq!(reply.reply_text, "Here are our services:");
        assert_eq!(
            reply.recommended_services(),
            ["seo".to_string(), "web-dev".to_string()]
        );
        assert!(!reply.show_book_meeting());
        assert!(reply.lead().is_none());
    }

    #[test]
    fn test_inline_lead_block_is_extracted() {
        let input = "Thanks! {\"action\":\"create_lead\",\"lead\":{\"name\":\"Jane\",\"email\":\"jane@x.com\"}} We'll reach out soon.";
        let reply = extractor().extract(input);

        assert!(reply.reply_text.contains("Thanks!"));
        assert!(reply.reply_text.contains("We'll reach out soon."));
        assert!(!reply.reply_text.contains("create_lead"));
        assert!(!reply.reply_text.contains('{'));

        let draft = reply.lead().unwrap();
        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.email, "jane@x.com");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.company, "");
        assert_eq!(draft.budget, "");
        assert_eq!(draft.message, "");
    }

    #[test]
    fn test_plain_reply_passes_through() {
        let input = "We build websites, brands, and campaigns. What are you working on?";
        let reply = extractor().extract(input);

        assert_eq!(reply.reply_text, input);
        assert!(reply.actions.is_none());
    }

    #[test]
    fn test_booking_link_forces_meeting_action() {
        let input = "You can grab a slot here: https://calendly.com/parlor-agency/intro-call";
        let reply = extractor().extract(input);

        assert!(reply.show_book_meeting());
        assert!(!reply.reply_text.contains("calendly.com"));
        assert!(!reply.reply_text.to_lowercase().contains("here:"));
        assert_eq!(reply.reply_text, "You can grab a slot");
    }

    #[test]
    fn test_unknown_action_is_removed_but_not_recorded() {
        let input = "Hmm. {\"action\": \"unknown_thing\"} Done.";
        let reply = extractor().extract(input);

        assert_eq!(reply.reply_text, "Hmm. Done.");
        assert!(reply.actions.is_none());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let inputs = [
            "Here are our services:\n{\"action\": \"recommend_services\", \"services\": [\"seo\"]}",
            "Thanks! {\"action\":\"create_lead\",\"lead\":{\"name\":\"Jane\"}} Bye.",
            "Book here: https://calendly.com/parlor-agency/intro-call",
            "Nothing special at all.",
        ];

        let extractor = extractor();
        for input in inputs {
            let first = extractor.extract(input);
            let second = extractor.extract(&first.reply_text);
            assert_eq!(
                first.reply_text, second.reply_text,
                "cleaning not idempotent for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_reply_is_never_empty() {
        // A reply that is nothing but an action would clean to the empty
        // string; the extractor falls back to the original text.
        let input = "{\"action\": \"book_meeting\"}";
        let reply = extractor().extract(input);

        assert_eq!(reply.reply_text, input);
        assert!(reply.show_book_meeting());
    }

    #[test]
    fn test_last_recommendation_wins() {
        let input = "First:\n{\"action\": \"recommend_services\", \"services\": [\"seo\"]}\nThen:\n{\"action\": \"recommend_services\", \"services\": [\"branding\", \"web-dev\"]}";
        let reply = extractor().extract(input);

        assert_eq!(
            reply.recommended_services(),
            ["branding".to_string(), "web-dev".to_string()]
        );
    }

    #[test]
    fn test_last_lead_wins() {
        let input = "{\"action\":\"create_lead\",\"lead\":{\"name\":\"Jane\"}} wait {\"action\":\"create_lead\",\"lead\":{\"name\":\"Joan\"}} done";
        let reply = extractor().extract(input);

        assert_eq!(reply.lead().unwrap().name, "Joan");
        assert_eq!(reply.reply_text, "wait done");
    }

    #[test]
    fn test_action_json_inside_quoted_string_is_ignored() {
        // The brace opens inside a double-quoted string, so the scanner
        // never treats it as structure.
        let input = "Our bot replies with \"{\\\"action\\\": \\\"book_meeting\\\"}\" under the hood.";
        let reply = extractor().extract(input);

        assert!(reply.actions.is_none());
        assert_eq!(reply.reply_text, input);
    }

    #[test]
    fn test_malformed_candidate_is_left_in_place() {
        let input = "Broken {\"action\": book_meeting} stays, valid {\"action\": \"book_meeting\"} goes.";
        let reply = extractor().extract(input);

        assert!(reply.reply_text.contains("Broken {\"action\": book_meeting} stays"));
        assert!(reply.reply_text.contains("valid goes."));
        assert!(reply.show_book_meeting());
    }

    #[test]
    fn test_all_three_kinds_in_one_reply() {
        let input = "Great fit!\n{\"action\": \"recommend_services\", \"services\": [\"seo\"]}\n{\"action\":\"create_lead\",\"lead\":{\"email\":\"a@b.co\"}}\n{\"action\": \"book_meeting\"}\nTalk soon.";
        let reply = extractor().extract(input);

        let actions = reply.actions.clone().unwrap();
        assert_eq!(actions.recommend_services.unwrap(), vec!["seo"]);
        assert_eq!(actions.create_lead.unwrap().email, "a@b.co");
        assert!(actions.book_meeting);
        assert_eq!(reply.reply_text, "Great fit!\n\nTalk soon.");
    }

    #[test]
    fn test_custom_booking_link() {
        let extractor =
            ActionExtractor::new(ExtractorConfig::with_booking_link("https://cal.example.com/x"));
        let reply = extractor.extract("Schedule at https://cal.example.com/x today.");

        assert!(reply.show_book_meeting());
        assert!(!reply.reply_text.contains("cal.example.com"));
    }
}
