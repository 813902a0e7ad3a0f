//! Request building for the recognition endpoint.

use uuid::Uuid;

/// Application id the recognition endpoint expects for the `ulm` scenario.
pub const RECOGNITION_APP_ID: &str = "D4D52672-91D7-4C74-8AD8-42B1D98141A5";

/// Content type of uploaded audio: 16kHz PCM WAV.
pub const RECOGNITION_CONTENT_TYPE: &str = "audio/wav; codec=\"audio/pcm\"; samplerate=16000";

/// Query parameters of one recognition request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionRequest {
    /// Recognition locale, e.g. "en-us".
    pub locale: String,
    /// Per-request id. Any value is accepted by the service.
    pub request_id: String,
    /// Per-instance id. Any value is accepted by the service.
    pub instance_id: String,
}

impl RecognitionRequest {
    /// Creates a request for `locale` with fresh request and instance ids.
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            request_id: Uuid::new_v4().to_string(),
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Returns the query string parameters in the order they are sent.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("scenarios", "ulm"),
            ("appid", RECOGNITION_APP_ID),
            ("locale", self.locale.as_str()),
            ("device.os", "-"),
            ("version", "3.0"),
            ("format", "json"),
            ("requestid", self.request_id.as_str()),
            ("instanceid", self.instance_id.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parameters() {
        let request = RecognitionRequest::new("fr-fr");
        let query = request.query();
        assert_eq!(query.len(), 8);
        assert_eq!(query[0], ("scenarios", "ulm"));
        assert_eq!(query[1], ("appid", "D4D52672-91D7-4C74-8AD8-42B1D98141A5"));
        assert_eq!(query[2], ("locale", "fr-fr"));
        assert_eq!(query[3], ("device.os", "-"));
        assert_eq!(query[4], ("version", "3.0"));
        assert_eq!(query[5], ("format", "json"));
        assert_eq!(query[6].0, "requestid");
        assert_eq!(query[7].0, "instanceid");
    }

    #[test]
    fn test_ids_are_uuids() {
        let request = RecognitionRequest::new("en-us");
        assert!(Uuid::parse_str(&request.request_id).is_ok());
        assert!(Uuid::parse_str(&request.instance_id).is_ok());
        assert_ne!(request.request_id, request.instance_id);
    }

    #[test]
    fn test_ids_are_fresh_per_request() {
        let a = RecognitionRequest::new("en-us");
        let b = RecognitionRequest::new("en-us");
        assert_ne!(a.request_id, b.request_id);
    }
}
