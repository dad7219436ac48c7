//! Turn dispatch.
//!
//! One voice-platform turn moves through a small state machine: a new
//! session fires a telemetry notification, then the request routes by type —
//! launch requests to the welcome handler, intent requests by intent name,
//! session-ended requests to a notification with no response envelope.
//!
//! Intent names form a closed set. A name outside it is a contract violation
//! by the platform and is fatal for the turn: the error propagates to the
//! webhook layer instead of being rephrased as speech.

use crate::handlers;
use crate::AppState;
use thiserror::Error;
use warden_detect::DetectError;
use warden_types::turn::{
    TurnRequest, TurnResponse, INTENT_REQUEST, LAUNCH_REQUEST, SESSION_ENDED_REQUEST,
};

/// The closed set of intents the skill understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    FlashBriefing,
    SetRegion,
    ListFindings,
    ListStats,
    Cancel,
    Stop,
    Help,
}

impl IntentKind {
    /// Maps a platform intent name to its kind.
    ///
    /// Returns `None` for names outside the interaction model.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FlashBriefing" => Some(Self::FlashBriefing),
            "SetRegion" => Some(Self::SetRegion),
            "ListFindings" => Some(Self::ListFindings),
            "ListStats" => Some(Self::ListStats),
            "AMAZON.CancelIntent" => Some(Self::Cancel),
            "AMAZON.StopIntent" => Some(Self::Stop),
            "AMAZON.HelpIntent" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Failures that abort a turn.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unrecognized request type: {0}")]
    UnknownRequestKind(String),

    #[error("intent request without an intent payload")]
    MissingIntent,

    #[error("unrecognized intent: {0}")]
    UnknownIntent(String),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Routes one inbound turn to its handler.
///
/// Returns `Ok(None)` for a session-ended request, which takes no response
/// envelope.
pub async fn dispatch_turn(
    state: &AppState,
    turn: TurnRequest,
) -> Result<Option<TurnResponse>, DispatchError> {
    if turn.session.new {
        on_session_started(&turn);
    }

    match turn.request.kind.as_str() {
        LAUNCH_REQUEST => Ok(Some(handlers::welcome(state, &turn))),
        INTENT_REQUEST => {
            let intent = turn
                .request
                .intent
                .as_ref()
                .ok_or(DispatchError::MissingIntent)?;
            let kind = IntentKind::from_name(&intent.name)
                .ok_or_else(|| DispatchError::UnknownIntent(intent.name.clone()))?;

            let response = match kind {
                IntentKind::FlashBriefing => handlers::flash_briefing(state, &turn).await?,
                IntentKind::SetRegion => handlers::set_region(state, &turn, intent),
                IntentKind::ListFindings => handlers::list_findings(state, &turn, intent).await?,
                IntentKind::ListStats => handlers::list_stats(state, &turn, intent).await?,
                IntentKind::Cancel | IntentKind::Stop => handlers::end_session(state),
                IntentKind::Help => handlers::help(state, &turn),
            };
            Ok(Some(response))
        }
        SESSION_ENDED_REQUEST => {
            on_session_ended(&turn);
            Ok(None)
        }
        other => Err(DispatchError::UnknownRequestKind(other.to_string())),
    }
}

/// Telemetry hook fired on the first turn of a session. No state mutation.
fn on_session_started(turn: &TurnRequest) {
    tracing::info!(
        session_id = %turn.session.session_id,
        request_id = %turn.request.request_id,
        "session started"
    );
}

/// Telemetry hook fired when the user ends the session.
fn on_session_ended(turn: &TurnRequest) {
    tracing::info!(
        session_id = %turn.session.session_id,
        request_id = %turn.request.request_id,
        "session ended"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_names_map_to_the_closed_set() {
        assert_eq!(IntentKind::from_name("FlashBriefing"), Some(IntentKind::FlashBriefing));
        assert_eq!(IntentKind::from_name("SetRegion"), Some(IntentKind::SetRegion));
        assert_eq!(IntentKind::from_name("ListFindings"), Some(IntentKind::ListFindings));
        assert_eq!(IntentKind::from_name("ListStats"), Some(IntentKind::ListStats));
        assert_eq!(IntentKind::from_name("AMAZON.CancelIntent"), Some(IntentKind::Cancel));
        assert_eq!(IntentKind::from_name("AMAZON.StopIntent"), Some(IntentKind::Stop));
        assert_eq!(IntentKind::from_name("AMAZON.HelpIntent"), Some(IntentKind::Help));
    }

    #[test]
    fn unknown_intent_names_do_not_resolve() {
        assert_eq!(IntentKind::from_name("AMAZON.YesIntent"), None);
        assert_eq!(IntentKind::from_name(""), None);
        assert_eq!(IntentKind::from_name("flashbriefing"), None);
    }
}
