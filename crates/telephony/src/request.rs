//! Inbound webhook form types
//!
//! Twilio posts `application/x-www-form-urlencoded` bodies with PascalCase
//! field names. Only the fields the agent consumes are modeled; unknown
//! fields are ignored by serde.

use serde::Deserialize;

/// Form posted when a call first connects (the greeting webhook)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallRequest {
    /// Unique identifier for the call
    pub call_sid: Option<String>,
    /// The phone number that initiated the call
    pub from: Option<String>,
    /// Call status, e.g. "ringing" or "in-progress"
    pub call_status: Option<String>,
}

/// Form posted after speech gathering (the turn webhook)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TurnRequest {
    /// The call SID
    pub call_sid: Option<String>,
    /// The transcribed speech; absent when no speech was detected
    pub speech_result: Option<String>,
    /// Transcription confidence (0.0 to 1.0)
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_form_parses_pascal_case_fields() {
        let form = "CallSid=CA123&SpeechResult=What%20hours%20are%20you%20open%3F&Confidence=0.92";
        let request: TurnRequest = serde_urlencoded::from_str(form).unwrap();
        assert_eq!(request.call_sid.as_deref(), Some("CA123"));
        assert_eq!(request.speech_result.as_deref(), Some("What hours are you open?"));
        assert_eq!(request.confidence, Some(0.92));
    }

    #[test]
    fn call_form_parses_caller_and_status() {
        let form = "CallSid=CA123&From=%2B15551234567&CallStatus=ringing";
        let request: CallRequest = serde_urlencoded::from_str(form).unwrap();
        assert_eq!(request.call_sid.as_deref(), Some("CA123"));
        assert_eq!(request.from.as_deref(), Some("+15551234567"));
        assert_eq!(request.call_status.as_deref(), Some("ringing"));
    }

    #[test]
    fn missing_speech_result_is_none() {
        let request: TurnRequest = serde_urlencoded::from_str("CallSid=CA123").unwrap();
        assert!(request.speech_result.is_none());
    }
}
