//! Request building for the synthesis endpoint.

use std::fmt;

use crate::error::Cause;
use crate::voices::voice_font;

/// Locales whose text must be sent as numeric character references.
const NUMERIC_REFERENCE_LOCALES: [&str; 4] = ["zh-cn", "zh-hk", "zh-tw", "ja-jp"];

/// Client identifier sent in `X-Search-AppId` and `X-Search-ClientID`.
pub(crate) const SEARCH_CLIENT_ID: &str = "00000000000000000000000000000000";

/// Audio formats the synthesis endpoint can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioOutputFormat {
    /// Headerless 8kHz 8-bit mono mu-law.
    Raw8Khz8BitMonoMulaw,
    /// Headerless 16kHz 16-bit mono PCM.
    Raw16Khz16BitMonoPcm,
    /// RIFF (WAV) 8kHz 8-bit mono mu-law.
    #[default]
    Riff8Khz8BitMonoMulaw,
    /// RIFF (WAV) 16kHz 16-bit mono PCM.
    Riff16Khz16BitMonoPcm,
}

impl AudioOutputFormat {
    /// Value of the `X-Microsoft-OutputFormat` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioOutputFormat::Raw8Khz8BitMonoMulaw => "raw-8khz-8bit-mono-mulaw",
            AudioOutputFormat::Raw16Khz16BitMonoPcm => "raw-16khz-16bit-mono-pcm",
            AudioOutputFormat::Riff8Khz8BitMonoMulaw => "riff-8khz-8bit-mono-mulaw",
            AudioOutputFormat::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
        }
    }
}

impl fmt::Display for AudioOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved synthesis request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Resolved voice font name.
    pub voice: &'static str,
    /// SSML document posted as the body.
    pub ssml: String,
}

impl SynthesisRequest {
    /// Resolves the voice font and builds the SSML body.
    ///
    /// Fails without touching the network when no voice font exists for the
    /// locale and gender.
    pub fn build(text: &str, locale: &str, gender: &str) -> Result<Self, Cause> {
        let voice = voice_font(locale, gender).ok_or_else(|| Cause::VoiceFontNotFound {
            locale: locale.to_string(),
            gender: gender.to_string(),
        })?;

        let body = if needs_numeric_references(locale) {
            to_numeric_references(text)
        } else {
            escape_xml(text)
        };

        let ssml = format!(
            "<speak version='1.0' xml:lang='{locale}'><voice name='{voice}' xml:lang='{locale}' xml:gender='{gender}'>{body}</voice></speak>",
            locale = locale,
            voice = voice,
            gender = capitalize(gender),
            body = body,
        );

        Ok(Self { voice, ssml })
    }
}

/// Returns true for the CJK locales that need numeric character references.
pub fn needs_numeric_references(locale: &str) -> bool {
    let locale = locale.to_lowercase();
    NUMERIC_REFERENCE_LOCALES.contains(&locale.as_str())
}

/// Applies the locale-dependent text transformation.
///
/// CJK locales get every character replaced by a decimal numeric character
/// reference; all other locales get the text back unchanged.
///
/// [`SynthesisRequest::build`] additionally XML-escapes `& < > " '` for
/// non-CJK locales when embedding the text, so SSML fragments in the input
/// are spoken literally rather than interpreted as markup.
///
/// ```
/// use rust_bingspeech::transform_text;
///
/// assert_eq!(transform_text("あ", "ja-jp"), "&#12354;");
/// assert_eq!(transform_text("hello", "en-us"), "hello");
/// ```
pub fn transform_text(text: &str, locale: &str) -> String {
    if needs_numeric_references(locale) {
        to_numeric_references(text)
    } else {
        text.to_string()
    }
}

fn to_numeric_references(text: &str) -> String {
    text.chars().map(|c| format!("&#{};", c as u32)).collect()
}

/// Escapes XML markup characters.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
