//! HTTP endpoints
//!
//! Webhook surface for the telephony provider plus clip serving and
//! health probes.

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use call_agent_agent::TurnInput;
use call_agent_config::constants::{GREETING_GATHER_TIMEOUT_SECS, NO_INPUT_GOODBYE};
use call_agent_telephony::{CallRequest, Gather, TurnRequest, VoiceResponse};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        // Telephony webhooks
        .route("/voice", post(voice))
        .route("/turn", post(turn))
        // Synthesized clips fetched by the telephony provider
        .route("/audio/:id", get(serve_audio))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness text for manual checks
async fn home() -> &'static str {
    "AI voice agent is running."
}

/// Health probe
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// First-turn greeting webhook.
///
/// Not a turn-director invocation: the greeting is a fixed document that
/// speaks, gathers with the shorter first-turn timeout, and falls through
/// to the no-input goodbye when the caller stays silent.
async fn voice(State(state): State<AppState>, Form(request): Form<CallRequest>) -> Response {
    let server = &state.settings.server;
    let xml = VoiceResponse::new()
        .gather(
            Gather::speech(GREETING_GATHER_TIMEOUT_SECS, "/turn")
                .say(&server.greeting, &server.say_voice),
        )
        .say(NO_INPUT_GOODBYE, &server.say_voice)
        .render();

    tracing::info!(
        call_sid = request.call_sid.as_deref().unwrap_or("-"),
        from = request.from.as_deref().unwrap_or("-"),
        call_status = request.call_status.as_deref().unwrap_or("-"),
        "greeting a new call"
    );
    twiml(xml)
}

/// Turn webhook: one utterance in, one TwiML directive out.
async fn turn(State(state): State<AppState>, Form(request): Form<TurnRequest>) -> Response {
    let call_sid = request.call_sid.clone();
    tracing::info!(
        call_sid = call_sid.as_deref().unwrap_or("-"),
        has_speech = request.speech_result.is_some(),
        "turn webhook hit"
    );

    let outcome = state
        .director
        .run_turn(TurnInput::new(call_sid, request.speech_result))
        .await;

    let xml =
        VoiceResponse::from_outcome(&outcome, &state.settings.server.say_voice, "/turn").render();
    twiml(xml)
}

/// Serve a synthesized MP3 clip
async fn serve_audio(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.clips.get(&id) {
        Some(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn twiml(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
