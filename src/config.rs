//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::tts::AudioOutputFormat;
use crate::{RECOGNIZE_ENDPOINT, SYNTHESIZE_ENDPOINT, TOKEN_ENDPOINT};

/// Timeout for token issuance requests.
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for recognition and synthesis requests.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How long an issued token is reused. The service honours tokens for ten
/// minutes; renewal happens a minute early.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(9 * 60);

/// User-Agent sent with synthesis requests.
pub const DEFAULT_USER_AGENT: &str = "bingspeech-api-client";

/// Configuration for the speech client.
#[derive(Clone)]
pub struct SpeechConfig {
    /// Subscription key exchanged for bearer tokens.
    pub subscription_key: String,
    /// Token issuance URL.
    pub token_endpoint: String,
    /// Speech-to-text URL.
    pub recognize_endpoint: String,
    /// Text-to-speech URL.
    pub synthesize_endpoint: String,
    /// Timeout for token issuance (default: 5s).
    pub token_timeout: Duration,
    /// Timeout for recognition and synthesis (default: 15s).
    pub request_timeout: Duration,
    /// How long an issued token is reused (default: 9 minutes).
    pub token_lifetime: Duration,
    /// Synthesized audio format (default: riff-8khz-8bit-mono-mulaw).
    pub output_format: AudioOutputFormat,
    /// User-Agent for synthesis requests.
    pub user_agent: String,
}

impl SpeechConfig {
    /// Creates a configuration for the public endpoints with default timeouts.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
            recognize_endpoint: RECOGNIZE_ENDPOINT.to_string(),
            synthesize_endpoint: SYNTHESIZE_ENDPOINT.to_string(),
            token_timeout: DEFAULT_TOKEN_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            token_lifetime: DEFAULT_TOKEN_LIFETIME,
            output_format: AudioOutputFormat::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Points all three endpoints at other hosts, keeping the service paths.
    ///
    /// `auth_base` and `speech_base` are scheme plus authority, e.g.
    /// `http://127.0.0.1:8080`.
    pub fn with_base_urls(mut self, auth_base: &str, speech_base: &str) -> Self {
        let auth_base = auth_base.trim_end_matches('/');
        let speech_base = speech_base.trim_end_matches('/');
        self.token_endpoint = format!("{}/sts/v1.0/issueToken", auth_base);
        self.recognize_endpoint = format!("{}/recognize", speech_base);
        self.synthesize_endpoint = format!("{}/synthesize", speech_base);
        self
    }

    /// Sets how long an issued token is reused.
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Sets the synthesized audio format.
    pub fn with_output_format(mut self, format: AudioOutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

impl fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("subscription_key", &"<redacted>")
            .field("token_endpoint", &self.token_endpoint)
            .field("recognize_endpoint", &self.recognize_endpoint)
            .field("synthesize_endpoint", &self.synthesize_endpoint)
            .field("token_timeout", &self.token_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("token_lifetime", &self.token_lifetime)
            .field("output_format", &self.output_format)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
