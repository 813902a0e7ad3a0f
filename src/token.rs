//! Bearer token cache state.
//!
//! The state is a plain value. Deciding whether a token can be reused and
//! computing the state that follows an issuance are pure functions of the
//! state and the current instant, so the client only has to hold a lock long
//! enough to read or replace it.

use std::fmt;
use std::time::{Duration, Instant};

/// Cached bearer token and the instant it stops being reused.
#[derive(Clone, Default)]
pub struct TokenState {
    token: Option<String>,
    expires_at: Option<Instant>,
}

impl TokenState {
    /// Creates an empty state holding no token.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the cached token if `now` is strictly before its expiration.
    pub fn lookup(&self, now: Instant) -> Option<&str> {
        match (&self.token, self.expires_at) {
            (Some(token), Some(expires_at)) if now < expires_at => Some(token.as_str()),
            _ => None,
        }
    }

    /// Returns the state after a token was issued at `now`.
    pub fn renewed(token: String, now: Instant, lifetime: Duration) -> Self {
        Self {
            token: Some(token),
            expires_at: Some(now + lifetime),
        }
    }

    /// Returns the expiration instant of the cached token, if any.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME: Duration = Duration::from_secs(9 * 60);

    #[test]
    fn test_empty_state_has_no_token() {
        let state = TokenState::empty();
        assert_eq!(state.lookup(Instant::now()), None);
        assert_eq!(state.expires_at(), None);
    }

    #[test]
    fn test_token_reused_before_expiry() {
        let now = Instant::now();
        let state = TokenState::renewed("abc".to_string(), now, LIFETIME);
        assert_eq!(state.lookup(now), Some("abc"));
        assert_eq!(state.lookup(now + Duration::from_secs(8 * 60)), Some("abc"));
    }

    #[test]
    fn test_token_expires_at_exact_instant() {
        let now = Instant::now();
        let state = TokenState::renewed("abc".to_string(), now, LIFETIME);
        assert_eq!(state.expires_at(), Some(now + LIFETIME));
        assert_eq!(state.lookup(now + LIFETIME), None);
        assert_eq!(state.lookup(now + LIFETIME + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_zero_lifetime_never_reused() {
        let now = Instant::now();
        let state = TokenState::renewed("abc".to_string(), now, Duration::ZERO);
        assert_eq!(state.lookup(now), None);
    }

    #[test]
    fn test_renewal_overwrites_previous_token() {
        let now = Instant::now();
        let first = TokenState::renewed("first".to_string(), now, LIFETIME);
        let later = now + LIFETIME;
        assert_eq!(first.lookup(later), None);

        let second = TokenState::renewed("second".to_string(), later, LIFETIME);
        assert_eq!(second.lookup(later), Some("second"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let state = TokenState::renewed("secret-token".to_string(), Instant::now(), LIFETIME);
        let debug = format!("{:?}", state);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
