//! SSML markup helpers.

use regex::Regex;
use std::sync::LazyLock;

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Wraps a speech body in the `<speak>` envelope.
pub fn speak(body: &str) -> String {
    format!("<speak>{body}</speak>")
}

/// An SSML pause, e.g. `pause(".5s")`.
pub fn pause(time: &str) -> String {
    format!("<break time='{time}'/>")
}

/// Strips all markup tags, leaving the plain display text.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markup_removes_all_tags() {
        let ssml = speak(&format!("Welcome. {}Say help.", pause(".3s")));
        assert_eq!(strip_markup(&ssml), "Welcome. Say help.");
    }

    #[test]
    fn strip_markup_is_identity_on_plain_text() {
        assert_eq!(strip_markup("3 High severity findings"), "3 High severity findings");
    }
}
