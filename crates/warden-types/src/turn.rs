//! Voice-platform turn envelope.
//!
//! One turn is one request/response exchange with the voice platform: the
//! platform posts a JSON request describing the user's utterance and session,
//! and the skill answers with a speech envelope carrying SSML speech, plain
//! card text, an optional reprompt, and a session-termination flag.
//!
//! Field names follow the platform's wire format (camelCase), mapped with
//! serde renames.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound request type string for a skill launch without an intent.
pub const LAUNCH_REQUEST: &str = "LaunchRequest";
/// Inbound request type string for an intent invocation.
pub const INTENT_REQUEST: &str = "IntentRequest";
/// Inbound request type string for a user-initiated session end.
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// One inbound turn from the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    #[serde(default = "envelope_version")]
    pub version: String,
    pub session: Session,
    pub request: RequestEnvelope,
}

/// Per-conversation session information supplied by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// True on the first turn of a conversation.
    #[serde(default)]
    pub new: bool,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Opaque attributes the platform carries forward between turns. This is
    /// the only cross-turn state the skill has.
    #[serde(default)]
    pub attributes: SessionAttributes,
}

/// Session attributes carried by the platform between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAttributes {
    /// The last region the user selected, as the spoken alias they used.
    #[serde(rename = "selectedRegion", skip_serializing_if = "Option::is_none")]
    pub selected_region: Option<String>,
}

/// The request half of an inbound turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Request type: `LaunchRequest`, `IntentRequest`, or
    /// `SessionEndedRequest`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// Present only on `IntentRequest` turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentEnvelope>,
}

/// A named intent with its slot values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentEnvelope {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl IntentEnvelope {
    /// Returns the value of a slot, treating an empty value as absent.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

/// One filled (or unfilled) slot of an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One outbound turn returned to the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub version: String,
    #[serde(rename = "sessionAttributes")]
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

/// The speech half of an outbound turn: what is spoken, what is displayed,
/// whether the session continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechletResponse {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
    pub card: Card,
    /// Absent means "do not reprompt": the session ends if the user stays
    /// silent or is not understood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

/// SSML speech output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: impl Into<String>) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: text.into(),
        }
    }
}

/// The visual companion card: markup-free text plus an optional image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
}

/// Card image URLs, when the skill is configured with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    #[serde(rename = "smallImageUrl", skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(rename = "largeImageUrl", skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

/// Reprompt speech played after user silence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

fn envelope_version() -> String {
    "1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_turn_parses_platform_wire_format() {
        let json = r#"{
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "session-1234",
                "attributes": {"selectedRegion": "Oregon"}
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "request-5678",
                "intent": {
                    "name": "ListStats",
                    "slots": {
                        "selectedRegion": {"name": "selectedRegion", "value": "Oregon"}
                    }
                }
            }
        }"#;

        let turn: TurnRequest = serde_json::from_str(json).unwrap();
        assert!(turn.session.new);
        assert_eq!(turn.session.attributes.selected_region.as_deref(), Some("Oregon"));
        assert_eq!(turn.request.kind, INTENT_REQUEST);
        let intent = turn.request.intent.unwrap();
        assert_eq!(intent.name, "ListStats");
        assert_eq!(intent.slot_value("selectedRegion"), Some("Oregon"));
    }

    #[test]
    fn missing_and_empty_slots_read_as_absent() {
        let json = r#"{
            "session": {"sessionId": "s"},
            "request": {
                "type": "IntentRequest",
                "requestId": "r",
                "intent": {"name": "ListFindings", "slots": {"severity": {"name": "severity", "value": "  "}}}
            }
        }"#;

        let turn: TurnRequest = serde_json::from_str(json).unwrap();
        let intent = turn.request.intent.unwrap();
        assert_eq!(intent.slot_value("severity"), None);
        assert_eq!(intent.slot_value("selectedRegion"), None);
    }

    #[test]
    fn absent_reprompt_is_omitted_from_the_envelope() {
        let response = TurnResponse {
            version: "1.0".to_string(),
            session_attributes: SessionAttributes::default(),
            response: SpeechletResponse {
                output_speech: OutputSpeech::ssml("<speak>Goodbye.</speak>"),
                card: Card {
                    kind: "Standard".to_string(),
                    title: "Session Ended".to_string(),
                    text: "Goodbye.".to_string(),
                    image: None,
                },
                reprompt: None,
                should_end_session: true,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["response"].get("reprompt").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
    }
}
