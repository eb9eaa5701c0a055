//! Telephony provider integration (Twilio-shaped)
//!
//! Webhook form types for inbound callbacks and a TwiML voice-response
//! builder for the outbound side. This crate is pure data and markup; it
//! performs no network I/O.

pub mod request;
pub mod twiml;

pub use request::{CallRequest, TurnRequest};
pub use twiml::{Gather, VoiceResponse};
