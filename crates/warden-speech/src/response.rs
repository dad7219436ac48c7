//! Two-surface speech response assembly.

use crate::sanitizer::scrub;
use crate::ssml::strip_markup;
use warden_types::turn::{
    Card, CardImage, OutputSpeech, Reprompt, SessionAttributes, SpeechletResponse, TurnResponse,
};

/// Builds the outbound turn envelope from handler results.
///
/// Pure and deterministic: the sanitizer runs once over each speech surface,
/// the card text is derived from the sanitized speech by stripping markup,
/// and an absent reprompt stays absent (the conversation ends on user
/// silence rather than reusing earlier prompt text).
#[derive(Debug, Clone, Default)]
pub struct SpeechResponseBuilder {
    card_image: Option<CardImage>,
}

impl SpeechResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches card image URLs to every card this builder produces.
    pub fn with_card_image(card_image: Option<CardImage>) -> Self {
        Self { card_image }
    }

    /// Assembles one outbound turn.
    pub fn build_turn(
        &self,
        title: &str,
        speech_ssml: &str,
        reprompt_ssml: Option<&str>,
        end_session: bool,
        attributes: SessionAttributes,
    ) -> TurnResponse {
        let speech = scrub(speech_ssml);
        let card_text = strip_markup(&speech);

        TurnResponse {
            version: "1.0".to_string(),
            session_attributes: attributes,
            response: SpeechletResponse {
                output_speech: OutputSpeech::ssml(speech),
                card: Card {
                    kind: "Standard".to_string(),
                    title: title.to_string(),
                    text: card_text,
                    image: self.card_image.clone(),
                },
                reprompt: reprompt_ssml.map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(scrub(text)),
                }),
                should_end_session: end_session,
            },
        }
    }
}
