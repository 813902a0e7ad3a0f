//! Rust client library for the Bing Speech recognition (STT) and synthesis
//! (TTS) REST APIs.
//!
//! The client exchanges a subscription key for a short-lived bearer token,
//! caches it, and renews it a minute before the service would expire it.
//!
//! # Example
//!
//! ```no_run
//! use rust_bingspeech::SpeechClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rust_bingspeech::Error> {
//!     let key = std::env::var("MICROSOFT_BING_SPEECH_KEY").expect("MICROSOFT_BING_SPEECH_KEY not set");
//!     let client = SpeechClient::new(key);
//!
//!     let wave = std::fs::read("example.wav").expect("example.wav");
//!     let recognized = client.recognize(&wave).await?;
//!     println!("Heard: {:?}", recognized.transcript());
//!
//!     let spoken = client.synthesize_with_voice("こんにちは", "ja-jp", "female").await?;
//!     println!("Received {} bytes of audio", spoken.wave.len());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod http;
mod messages;
mod stt;
mod token;
mod tts;
mod voices;

pub use client::SpeechClient;
pub use config::{
    SpeechConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TOKEN_LIFETIME, DEFAULT_TOKEN_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use error::{Cause, Error};
pub use messages::*;
pub use stt::{RecognitionRequest, RECOGNITION_APP_ID, RECOGNITION_CONTENT_TYPE};
pub use token::TokenState;
pub use tts::{needs_numeric_references, transform_text, AudioOutputFormat, SynthesisRequest};
pub use voices::{voice_font, voice_fonts};

/// Default token issuance endpoint.
pub const TOKEN_ENDPOINT: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";

/// Default speech-to-text endpoint.
pub const RECOGNIZE_ENDPOINT: &str = "https://speech.platform.bing.com/recognize";

/// Default text-to-speech endpoint.
pub const SYNTHESIZE_ENDPOINT: &str = "https://speech.platform.bing.com/synthesize";

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Voice gender used when none is given.
pub const DEFAULT_GENDER: &str = "female";
