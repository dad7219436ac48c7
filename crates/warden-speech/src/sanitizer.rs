//! Output sanitization rules.
//!
//! Every rendered speech or card payload is scrubbed before it leaves the
//! skill: markup-reserved characters are rewritten, structural punctuation
//! from list rendering is stripped, and resource identifiers (instance ids,
//! IPv4 addresses) are redacted to generic phrases.
//!
//! The rules run in a fixed order; later rules never re-match text produced
//! by earlier ones, so the pipeline is idempotent on its own output.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered rewrite rules applied to every outbound text surface.
static SCRUB_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Markup-reserved ampersand becomes the spoken word.
        (Regex::new("&").unwrap(), "and"),
        // Structural punctuation left over from rendered collections.
        (Regex::new(r#"[\[\]"]"#).unwrap(), ""),
        // Instance identifiers.
        (Regex::new(r"instance i-\w+").unwrap(), "instance"),
        (Regex::new(r"against i-\w+").unwrap(), "against an EC2 instance"),
        // IPv4-shaped tokens.
        (Regex::new(r"[0-9]+(?:\.[0-9]+){3}").unwrap(), "IP host"),
    ]
});

/// Applies the full rule pipeline to one text surface.
pub fn scrub(input: &str) -> String {
    SCRUB_RULES
        .iter()
        .fold(input.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_instance_ids_and_addresses() {
        let input = "instance i-0abc123 against i-0abc123 at 10.0.0.5";
        assert_eq!(scrub(input), "instance against an EC2 instance at IP host");
    }

    #[test]
    fn rewrites_ampersands_and_strips_collection_punctuation() {
        let input = r#"["Recon & probe", "Port sweep"]"#;
        assert_eq!(scrub(input), "Recon and probe, Port sweep");
    }

    #[test]
    fn idempotent_on_already_clean_text() {
        let clean = "instance against an EC2 instance at IP host";
        assert_eq!(scrub(clean), clean);

        let once = scrub("Unusual traffic against i-00fa3 from 192.168.1.20");
        assert_eq!(scrub(&once), once);
    }

    #[test]
    fn leaves_ssml_markup_intact() {
        let input = "<speak>Findings for Oregon region <break time='.5s'/></speak>";
        assert_eq!(scrub(input), input);
    }

    #[test]
    fn bare_instance_word_is_not_redacted() {
        assert_eq!(scrub("an EC2 instance was involved"), "an EC2 instance was involved");
    }
}
