//! Speech client for the Bing Speech REST API.

use std::time::Instant;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::config::SpeechConfig;
use crate::error::{Cause, Error};
use crate::http::HttpTransport;
use crate::messages::{VoiceRecognitionResponse, VoiceSynthesisResponse};
use crate::stt::{RecognitionRequest, RECOGNITION_CONTENT_TYPE};
use crate::token::TokenState;
use crate::tts::{SynthesisRequest, SEARCH_CLIENT_ID};
use crate::{DEFAULT_GENDER, DEFAULT_LOCALE};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const SEARCH_APP_ID_HEADER: &str = "X-Search-AppId";
const SEARCH_CLIENT_ID_HEADER: &str = "X-Search-ClientID";

/// Client for speech recognition and synthesis.
///
/// Holds the subscription key and a cached bearer token that is renewed
/// when it expires. All methods take `&self`; share an instance with `Arc`.
pub struct SpeechClient {
    config: SpeechConfig,
    http: HttpTransport,
    token: RwLock<TokenState>,
    session_id: String,
}

impl SpeechClient {
    /// Creates a client for the public endpoints.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self::with_config(SpeechConfig::new(subscription_key))
    }

    /// Creates a client with the given configuration.
    pub fn with_config(config: SpeechConfig) -> Self {
        Self {
            config,
            http: HttpTransport::new(),
            token: RwLock::new(TokenState::empty()),
            session_id: uuid::Uuid::new_v4().to_string()[..8].to_string(),
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    /// Returns a snapshot of the cached token state.
    pub async fn token_state(&self) -> TokenState {
        self.token.read().await.clone()
    }

    /// Recognizes speech in a 16kHz PCM WAV buffer using the default locale.
    pub async fn recognize(&self, audio: &[u8]) -> Result<VoiceRecognitionResponse, Error> {
        self.recognize_with_locale(audio, DEFAULT_LOCALE).await
    }

    /// Recognizes speech in a 16kHz PCM WAV buffer.
    ///
    /// The audio is sent verbatim; its structure is not checked.
    pub async fn recognize_with_locale(
        &self,
        audio: &[u8],
        locale: &str,
    ) -> Result<VoiceRecognitionResponse, Error> {
        let token = self.ensure_token().await?;
        let request = RecognitionRequest::new(locale);

        debug!(
            session_id = %self.session_id,
            locale = %locale,
            request_id = %request.request_id,
            len = audio.len(),
            "Sending recognition request"
        );

        let builder = self
            .http
            .post(&self.config.recognize_endpoint)
            .query(&request.query())
            .header(AUTHORIZATION, bearer(&token))
            .header(CONTENT_TYPE, RECOGNITION_CONTENT_TYPE)
            .header(CONTENT_LENGTH, audio.len())
            .body(Bytes::copy_from_slice(audio));

        let body = self
            .http
            .send(builder, self.config.request_timeout)
            .await
            .map_err(Error::Recognition)?;

        let response: VoiceRecognitionResponse = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Failed to parse recognition response");
            Error::Recognition(Cause::Json(e))
        })?;

        info!(
            session_id = %self.session_id,
            status = %response.header.status,
            results = response.results.len(),
            "Recognition complete"
        );
        Ok(response)
    }

    /// Synthesizes speech with the default locale and gender.
    pub async fn synthesize(&self, text: &str) -> Result<VoiceSynthesisResponse, Error> {
        self.synthesize_with_voice(text, DEFAULT_LOCALE, DEFAULT_GENDER)
            .await
    }

    /// Synthesizes speech with the voice font for `locale` and `gender`.
    ///
    /// Fails before any network call if no voice font matches.
    pub async fn synthesize_with_voice(
        &self,
        text: &str,
        locale: &str,
        gender: &str,
    ) -> Result<VoiceSynthesisResponse, Error> {
        let request = SynthesisRequest::build(text, locale, gender).map_err(|cause| {
            error!(locale = %locale, gender = %gender, "No voice font");
            Error::Synthesis(cause)
        })?;

        let token = self.ensure_token().await?;

        debug!(
            session_id = %self.session_id,
            voice = %request.voice,
            len = request.ssml.len(),
            "Sending synthesis request"
        );

        let builder = self
            .http
            .post(&self.config.synthesize_endpoint)
            .header(AUTHORIZATION, bearer(&token))
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, self.config.output_format.as_str())
            .header(SEARCH_APP_ID_HEADER, SEARCH_CLIENT_ID)
            .header(SEARCH_CLIENT_ID_HEADER, SEARCH_CLIENT_ID)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .body(request.ssml);

        let wave = self
            .http
            .send(builder, self.config.request_timeout)
            .await
            .map_err(Error::Synthesis)?;

        info!(session_id = %self.session_id, len = wave.len(), "Synthesis complete");
        Ok(VoiceSynthesisResponse::new(wave))
    }

    /// Returns a valid bearer token, issuing a new one if the cached one is
    /// missing or expired.
    ///
    /// The lock is not held while issuing, so concurrent callers that find
    /// the cache expired may each issue a token. The last one written wins.
    async fn ensure_token(&self) -> Result<String, Error> {
        if let Some(token) = self.token.read().await.lookup(Instant::now()) {
            debug!(session_id = %self.session_id, "Reusing cached token");
            return Ok(token.to_string());
        }

        let token = self.issue_token().await?;
        *self.token.write().await =
            TokenState::renewed(token.clone(), Instant::now(), self.config.token_lifetime);
        Ok(token)
    }

    async fn issue_token(&self) -> Result<String, Error> {
        info!(session_id = %self.session_id, "Issuing token");

        let builder = self
            .http
            .post(&self.config.token_endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, self.config.subscription_key.as_str())
            .header(CONTENT_LENGTH, "0")
            .body(Bytes::new());

        let body = self
            .http
            .send(builder, self.config.token_timeout)
            .await
            .map_err(Error::Auth)?;

        let token = String::from_utf8_lossy(&body).trim().to_string();
        if token.is_empty() {
            error!(session_id = %self.session_id, "Token endpoint returned an empty body");
            return Err(Error::Auth(Cause::EmptyToken));
        }
        info!(session_id = %self.session_id, "Token issued");
        Ok(token)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
