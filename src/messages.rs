//! Response types for the Bing Speech REST API.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

// ============================================================================
// Recognition
// ============================================================================

/// Parsed result of a voice recognition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRecognitionResponse {
    /// Response format version (e.g. "3.0").
    pub version: String,
    /// Overall recognition status and best transcript.
    pub header: RecognitionHeader,
    /// Ordered recognition candidates.
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

impl VoiceRecognitionResponse {
    /// Returns true if the service reported a successful recognition.
    pub fn is_success(&self) -> bool {
        self.header.status == "success"
    }

    /// Returns the best transcript, if the header carries one.
    pub fn transcript(&self) -> Option<&str> {
        self.header.name.as_deref()
    }
}

/// Header block of a recognition response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionHeader {
    /// "success" or "error".
    pub status: String,
    /// Recognition scenario (e.g. "ulm").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    /// Display-form transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lexical-form transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexical: Option<String>,
    /// Request id and confidence flags.
    pub properties: HeaderProperties,
}

/// Properties of the recognition header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderProperties {
    /// Request id echoed by the service.
    pub requestid: String,
    /// Confidence flags.
    #[serde(flatten)]
    pub confidence: ConfidenceFlags,
}

/// A single recognition candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Recognition scenario.
    pub scenario: String,
    /// Display-form transcript.
    pub name: String,
    /// Lexical-form transcript.
    pub lexical: String,
    /// Confidence score, as sent by the service (e.g. "0.96075").
    pub confidence: String,
    /// Confidence flags.
    #[serde(default)]
    pub properties: ConfidenceFlags,
}

impl RecognitionResult {
    /// Parses the confidence score.
    pub fn confidence_score(&self) -> Option<f32> {
        self.confidence.parse().ok()
    }
}

/// Flags the service attaches to a result. Each is present with value "1"
/// when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFlags {
    /// No speech was detected.
    #[serde(rename = "NOSPEECH", default, skip_serializing_if = "Option::is_none")]
    pub no_speech: Option<String>,
    /// The audio matched no known phrase.
    #[serde(rename = "FALSERECO", default, skip_serializing_if = "Option::is_none")]
    pub false_reco: Option<String>,
    /// High confidence result.
    #[serde(rename = "HIGHCONF", default, skip_serializing_if = "Option::is_none")]
    pub high_conf: Option<String>,
    /// Medium confidence result.
    #[serde(rename = "MIDCONF", default, skip_serializing_if = "Option::is_none")]
    pub mid_conf: Option<String>,
    /// Low confidence result.
    #[serde(rename = "LOWCONF", default, skip_serializing_if = "Option::is_none")]
    pub low_conf: Option<String>,
}

// ============================================================================
// Synthesis
// ============================================================================

/// Synthesized audio, exactly as returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSynthesisResponse {
    /// Raw audio bytes in the requested output format.
    pub wave: Bytes,
}

impl VoiceSynthesisResponse {
    /// Wraps a raw audio buffer.
    pub fn new(wave: Bytes) -> Self {
        Self { wave }
    }
}
