mod rules;

use rules::Rule;

/// The listing a chat is about — the only context the canned replies need.
pub struct Listing {
    pub name: String,
    pub price_per_week: Option<f64>,
}

/// Canned-reply generator simulating the listing owner's side of the chat.
///
/// Holds the ordered rule table; rules are evaluated top to bottom and the
/// first rule with any matching pattern wins, even if a later rule would
/// also match. Order is part of the contract.
pub struct Responder {
    rules: Vec<Rule>,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rules: rules::canonical_rules(),
        }
    }

    /// Reply to an inbound message, or `None` when no rule matches —
    /// the responder stays silent rather than apologizing.
    pub fn reply_to(&self, message: &str, listing: &Listing) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(|rule| rule.reply(listing))
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced_listing() -> Listing {
        Listing {
            name: "Ulotki przy ladzie".to_string(),
            price_per_week: Some(80.0),
        }
    }

    fn barter_listing() -> Listing {
        Listing {
            name: "Witryna od ulicy".to_string(),
            price_per_week: None,
        }
    }

    #[test]
    fn price_inquiry_quotes_the_weekly_price() {
        let responder = Responder::new();
        let reply = responder
            .reply_to("ile to kosztuje?", &priced_listing())
            .unwrap();

        assert!(reply.contains("80"));
        assert!(reply.contains("Ulotki przy ladzie"));
    }

    #[test]
    fn price_rule_wins_over_greeting() {
        // "hej, jaka cena?" matches both the price patterns and the greeting
        // patterns; the price rule sits earlier in the table and must win.
        let responder = Responder::new();
        let reply = responder
            .reply_to("hej, jaka cena?", &priced_listing())
            .unwrap();

        assert!(reply.starts_with("Cena za"));
    }

    #[test]
    fn price_inquiry_on_barter_listing_mentions_barter_not_a_price() {
        let responder = Responder::new();
        let reply = responder
            .reply_to("jaka cena?", &barter_listing())
            .unwrap();

        assert!(reply.contains("barteru"));
        assert!(!reply.contains("80"));
        assert!(!reply.contains("zł"));
    }

    #[test]
    fn discount_request_offers_a_rebate_on_priced_listings() {
        let responder = Responder::new();
        let reply = responder
            .reply_to("da się mniej?", &priced_listing())
            .unwrap();

        assert!(reply.contains("rabat"));
        assert!(reply.contains("80"));
    }

    #[test]
    fn greeting_mentions_the_listing() {
        let responder = Responder::new();
        let reply = responder.reply_to("hej", &priced_listing()).unwrap();

        assert!(reply.contains("Ulotki przy ladzie"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let responder = Responder::new();
        assert!(responder.reply_to("ILE TO KOSZTUJE", &priced_listing()).is_some());
        assert!(responder.reply_to("GDZIE SIĘ ZNAJDUJE?", &priced_listing()).is_some());
    }

    #[test]
    fn unmatched_text_is_silent() {
        let responder = Responder::new();
        assert!(responder.reply_to("asdkjasd", &priced_listing()).is_none());
    }
}
