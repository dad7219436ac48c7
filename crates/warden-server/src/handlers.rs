//! Per-intent handlers.
//!
//! Each handler turns one intent into a speech envelope. Region-scoped
//! handlers resolve the spoken region first — from the turn's slot, falling
//! back to the session's last selected region — and short-circuit to a
//! clarification prompt on an unresolvable region without touching the
//! aggregator. Failures the user can fix are always phrased as speech;
//! raw error text never reaches a surface.

use crate::AppState;
use warden_detect::DetectError;
use warden_speech::render;
use warden_speech::ssml::{pause, speak};
use warden_types::turn::{IntentEnvelope, SessionAttributes, TurnRequest, TurnResponse};
use warden_types::{minimum_severity, Region};

/// Handles a launch request: the user opened the skill without an intent.
pub fn welcome(state: &AppState, turn: &TurnRequest) -> TurnResponse {
    let speech = speak(&format!(
        "Welcome to Warden. {} To get started, you can get global GuardDuty finding \
         statistics by saying, get flash briefing. For additional information, you can say, Help.",
        pause(".5s")
    ));

    state.speech.build_turn(
        "Warden Welcome",
        &speech,
        Some(&standard_reprompt()),
        false,
        turn.session.attributes.clone(),
    )
}

/// Handles the flash-briefing intent: global and per-region statistics
/// across the configured briefing regions.
pub async fn flash_briefing(
    state: &AppState,
    turn: &TurnRequest,
) -> Result<TurnResponse, DetectError> {
    let briefing =
        warden_briefing::briefing(state.detector.as_ref(), &state.skill.briefing_regions).await?;

    let speech = if briefing.global.is_empty() {
        speak(&format!(
            "There are no current GuardDuty findings for the selected AWS regions. {} You can \
             generate samples in the console and GuardDuty will populate your current list with \
             one sample finding for each supported type.",
            pause(".2s")
        ))
    } else {
        speak(&format!(
            "Here is your GuardDuty flash briefing. {}Globally, there are, {} findings. \
             {}Here are the regional finding statistics: {}.",
            pause(".3s"),
            render::global_tally(&briefing.global),
            pause(".5s"),
            render::region_blocks(&briefing.regions)
        ))
    };

    Ok(state.speech.build_turn(
        "Warden Flash Briefing",
        &speech,
        Some(&standard_reprompt()),
        false,
        turn.session.attributes.clone(),
    ))
}

/// Handles the set-region intent: remembers the region for later turns.
pub fn set_region(state: &AppState, turn: &TurnRequest, intent: &IntentEnvelope) -> TurnResponse {
    let Some(region) = intent.slot_value("selectedRegion").and_then(Region::from_alias) else {
        return unknown_region(state, "Warden Set Region", turn.session.attributes.clone());
    };

    let speech = speak(&format!(
        "Okay, I will use the {} region. {}You can now say, get statistics, or, \
         get high severity findings.",
        region.spoken_name(),
        pause(".3s")
    ));

    state.speech.build_turn(
        "Warden Set Region",
        &speech,
        Some(&standard_reprompt()),
        false,
        remember_region(region),
    )
}

/// Handles the list-findings intent: finding details for one region at or
/// above a spoken severity floor.
pub async fn list_findings(
    state: &AppState,
    turn: &TurnRequest,
    intent: &IntentEnvelope,
) -> Result<TurnResponse, DetectError> {
    let Some(region) = requested_region(turn, intent) else {
        return Ok(unknown_region(
            state,
            "Warden Finding Details",
            turn.session.attributes.clone(),
        ));
    };

    // A missing or unrecognized severity slot widens the query to floor 0.
    let floor = minimum_severity(intent.slot_value("severity"));
    let details = warden_briefing::finding_details(
        state.detector.as_ref(),
        region,
        floor,
        state.skill.max_results,
    )
    .await?;

    let speech = if details.is_empty() {
        speak(&format!(
            "There are no current GuardDuty findings for, {}, with minimum severity {}.",
            region.spoken_name(),
            floor as i64
        ))
    } else {
        speak(&format!(
            "Here are up to {} GuardDuty findings for, {}, with minimum severity {}. {} {}",
            state.skill.max_results,
            region.spoken_name(),
            floor as i64,
            pause(".5s"),
            render::findings(&details)
        ))
    };

    let reprompt = speak(&format!(
        "Are you still there? {} You can get GuardDuty finding details by saying for example, \
         get high severity findings for Oregon. You can also get global statistics by saying, \
         {}get flash briefing. For additional information, you can say, Help.",
        pause(".3s"),
        pause(".2s")
    ));

    Ok(state.speech.build_turn(
        "Warden Finding Details",
        &speech,
        Some(&reprompt),
        false,
        remember_region(region),
    ))
}

/// Handles the list-stats intent: count-by-severity statistics for one
/// region.
pub async fn list_stats(
    state: &AppState,
    turn: &TurnRequest,
    intent: &IntentEnvelope,
) -> Result<TurnResponse, DetectError> {
    let Some(region) = requested_region(turn, intent) else {
        return Ok(unknown_region(
            state,
            "Warden Finding Statistics",
            turn.session.attributes.clone(),
        ));
    };

    let stats = warden_briefing::region_statistics(state.detector.as_ref(), region).await?;

    let speech = if stats.is_empty() {
        speak(&format!(
            "There are no current findings in {}. {} You can generate samples in the console \
             and GuardDuty will populate your current list with one sample finding for each \
             supported type.",
            region.spoken_name(),
            pause(".2s")
        ))
    } else {
        speak(&format!(
            "In {}, there are currently, {} findings. {}",
            region.spoken_name(),
            render::region_stats(&stats),
            pause("1s")
        ))
    };

    let reprompt = speak(&format!(
        "Are you still there? {} You can get GuardDuty finding details by saying, get high \
         severity findings for Virginia. Or you can get global statistics by saying, {}get \
         flash briefing. For additional information, you can say, Help.",
        pause(".3s"),
        pause(".2s")
    ));

    Ok(state.speech.build_turn(
        "Warden Finding Statistics",
        &speech,
        Some(&reprompt),
        false,
        remember_region(region),
    ))
}

/// Handles the help intent.
pub fn help(state: &AppState, turn: &TurnRequest) -> TurnResponse {
    let speech = speak(&format!(
        "Welcome to Warden. {}Amazon GuardDuty is a managed threat detection service that \
         continuously monitors for malicious or unauthorized behavior to help you protect your \
         AWS accounts and workloads. {}GuardDuty generates findings when it detects unexpected \
         and potentially malicious activity in your AWS environment. {}To get started, you can \
         get global GuardDuty finding statistics by saying, get flash briefing. I am currently \
         configured to return flash briefing information for the following AWS regions: {}. \
         You can also get finding statistics for a region by saying for example, get statistics \
         for Oregon. You can get GuardDuty finding details by saying for example, get high \
         severity findings for California. I am currently configured to return up to {} findings \
         in a response. Each GuardDuty finding has an assigned severity value that can help you \
         determine your response to a potential security issue. The severity value falls within \
         the 0.1 to 8.9 range. High severity findings fall within the 7.0 to 8.9 range, medium \
         severity falls within the 4.0 to 6.9 range and low severity falls within the 0.1 to \
         3.9 range. You can generate samples in the console and GuardDuty will populate your \
         current list with one sample finding for each supported type. Finally, make sure \
         GuardDuty is enabled in the AWS regions you would like me to access.",
        pause(".3s"),
        pause(".3s"),
        pause(".3s"),
        render::region_list(&state.skill.briefing_regions),
        state.skill.max_results
    ));

    let reprompt = speak(
        "Are you still there? To get started, you can say, get statistics for Virginia. You can \
         also get global statistics by saying, get flash briefing. For additional information, \
         you can say, Help.",
    );

    state.speech.build_turn(
        "Warden Help",
        &speech,
        Some(&reprompt),
        false,
        turn.session.attributes.clone(),
    )
}

/// Handles cancel/stop: ends the session with no speech and no reprompt.
pub fn end_session(state: &AppState) -> TurnResponse {
    state
        .speech
        .build_turn("Session Ended", "", None, true, SessionAttributes::default())
}

/// Resolves the region a region-scoped intent targets.
///
/// The turn's slot wins; the session's last selected region is the fallback.
/// Returns `None` when neither resolves to a supported region.
fn requested_region(turn: &TurnRequest, intent: &IntentEnvelope) -> Option<Region> {
    intent
        .slot_value("selectedRegion")
        .or(turn.session.attributes.selected_region.as_deref())
        .and_then(Region::from_alias)
}

/// Session attributes remembering the last selected region.
fn remember_region(region: Region) -> SessionAttributes {
    SessionAttributes {
        selected_region: Some(region.spoken_name().to_string()),
    }
}

/// Clarification response for an unresolvable region. Never queries the
/// aggregator.
fn unknown_region(state: &AppState, title: &str, attributes: SessionAttributes) -> TurnResponse {
    let speech = speak(
        "I'm not sure which AWS region you would like me to access. Please confirm the selected \
         region is valid and GuardDuty is enabled.",
    );
    let reprompt = speak("Please confirm the selected region is valid and GuardDuty is enabled.");

    state
        .speech
        .build_turn(title, &speech, Some(&reprompt), false, attributes)
}

/// Reprompt shared by the welcome, briefing, and set-region handlers.
fn standard_reprompt() -> String {
    speak(&format!(
        "Are you still there? {} For regional statistics, you can say for example, get \
         statistics for Virginia. Or, get high severity findings for Oregon. You can also get \
         global statistics by saying, {}get flash briefing. For additional information, you can \
         say, Help.",
        pause(".3s"),
        pause(".2s")
    ))
}
