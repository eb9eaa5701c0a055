//! Webhook integration tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`, using
//! fake backends so no network is involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use bytes::Bytes;
use http_body_util::BodyExt;
use tower::ServiceExt;

use call_agent_agent::TurnDirector;
use call_agent_config::Settings;
use call_agent_core::{RenderOutcome, ReplyGenerator, ReplyOutcome, SpeechRenderer};
use call_agent_recorder::NullInteractionLog;
use call_agent_server::{create_router, AppState};
use call_agent_synthesis::ClipStore;

struct CannedReplies(ReplyOutcome);

#[async_trait]
impl ReplyGenerator for CannedReplies {
    async fn reply_to(&self, _utterance: &str) -> ReplyOutcome {
        self.0.clone()
    }
}

struct SpeechDown;

#[async_trait]
impl SpeechRenderer for SpeechDown {
    async fn render(&self, _text: &str) -> RenderOutcome {
        RenderOutcome::Unavailable
    }
}

fn test_state(reply: ReplyOutcome) -> AppState {
    let director = Arc::new(TurnDirector::new(
        Arc::new(CannedReplies(reply)),
        Arc::new(SpeechDown),
        Arc::new(NullInteractionLog),
    ));
    AppState::new(Settings::default(), director, Arc::new(ClipStore::new()))
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_reports_liveness() {
    let app = create_router(test_state(ReplyOutcome::Generated("hi".into())));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "AI voice agent is running.");
}

#[tokio::test]
async fn voice_webhook_greets_with_first_turn_timeout() {
    let app = create_router(test_state(ReplyOutcome::Generated("unused".into())));
    let response = app.oneshot(form_request("/voice", "CallSid=CA1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    let xml = body_text(response).await;
    assert!(xml.contains("timeout=\"10\""));
    assert!(xml.contains("action=\"/turn\""));
    assert!(xml.contains("How can I help you today?"));
    assert!(xml.contains("I didn't catch that. Goodbye."));
    assert!(!xml.contains("<Hangup/>"), "greeting never hangs up explicitly");
}

#[tokio::test]
async fn turn_webhook_continues_with_fifteen_second_gather() {
    let app = create_router(test_state(ReplyOutcome::Generated(
        "We're open 9 to 5, anything else?".into(),
    )));
    let response = app
        .oneshot(form_request(
            "/turn",
            "CallSid=CA1&SpeechResult=What%20hours%20are%20you%20open%3F",
        ))
        .await
        .unwrap();

    let xml = body_text(response).await;
    assert!(xml.contains("We're open 9 to 5, anything else?</Say>"));
    assert!(xml.contains("timeout=\"15\""));
    assert!(!xml.contains("Can I help you with anything else?"));
}

#[tokio::test]
async fn turn_webhook_hangs_up_on_termination_phrase() {
    let app = create_router(test_state(ReplyOutcome::Generated("Glad I could help.".into())));
    let response = app
        .oneshot(form_request("/turn", "CallSid=CA1&SpeechResult=No%20thank%20you"))
        .await
        .unwrap();

    let xml = body_text(response).await;
    assert!(xml.contains("You're welcome. Goodbye!"));
    assert!(xml.ends_with("<Hangup/></Response>"));
}

#[tokio::test]
async fn turn_webhook_without_speech_says_goodbye() {
    let app = create_router(test_state(ReplyOutcome::Generated("unused".into())));
    let response = app.oneshot(form_request("/turn", "CallSid=CA1")).await.unwrap();

    let xml = body_text(response).await;
    assert!(xml.contains("I didn't catch that. Goodbye."));
    assert!(xml.ends_with("<Hangup/></Response>"));
}

#[tokio::test]
async fn audio_route_serves_stored_clips() {
    let state = test_state(ReplyOutcome::Generated("unused".into()));
    let id = state.clips.insert(Bytes::from_static(b"mpeg-bytes"));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/audio/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "audio/mpeg");
    assert_eq!(body_text(response).await, "mpeg-bytes");
}

#[tokio::test]
async fn unknown_clip_is_not_found() {
    let app = create_router(test_state(ReplyOutcome::Generated("unused".into())));
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/audio/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
