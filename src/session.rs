//! Explicit caller session with an expiry.
//!
//! Write operations take a `&Session` instead of reading identity from
//! ambient state. Expiry is a pure function of `now`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An authenticated user's session.
///
/// # Example
///
/// ```
/// use gradebook_engine::session::Session;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let issued = Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap();
/// let session = Session::new("teacher_01", issued, Duration::minutes(60));
///
/// let now = issued + Duration::minutes(45);
/// assert_eq!(session.time_remaining(now), Duration::minutes(15));
/// assert!(!session.is_expired(now));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user_id: String,
    /// When the session was issued.
    pub issued_at: DateTime<Utc>,
    /// How long the session stays valid.
    #[serde(with = "ttl_seconds")]
    pub ttl: Duration,
}

impl Session {
    /// Creates a session.
    pub fn new(user_id: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            user_id: user_id.into(),
            issued_at,
            ttl,
        }
    }

    /// Returns when the session stops being valid. A lifetime reaching past
    /// the representable range never expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns the time left before expiry, never negative.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        let remaining = self.expires_at() - now;
        if remaining < Duration::zero() {
            Duration::zero()
        } else {
            remaining
        }
    }

    /// Returns true once `now` reaches the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Fails with `SessionExpired` if the session is no longer valid.
    pub fn ensure_active(&self, now: DateTime<Utc>) -> EngineResult<()> {
        if self.is_expired(now) {
            return Err(EngineError::SessionExpired {
                user_id: self.user_id.clone(),
            });
        }
        Ok(())
    }
}

mod ttl_seconds {
    use chrono::Duration;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ttl.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = i64::deserialize(deserializer)?;
        Duration::try_seconds(seconds)
            .ok_or_else(|| D::Error::custom(format!("ttl of {} seconds is out of range", seconds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issued() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap()
    }

    fn session() -> Session {
        Session::new("teacher_01", issued(), Duration::minutes(30))
    }

    #[test]
    fn test_time_remaining_counts_down() {
        let s = session();
        assert_eq!(s.time_remaining(issued()), Duration::minutes(30));
        assert_eq!(
            s.time_remaining(issued() + Duration::minutes(10)),
            Duration::minutes(20)
        );
    }

    #[test]
    fn test_time_remaining_is_clamped_at_zero() {
        let s = session();
        assert_eq!(
            s.time_remaining(issued() + Duration::hours(2)),
            Duration::zero()
        );
    }

    #[test]
    fn test_expires_exactly_at_ttl() {
        let s = session();
        assert!(!s.is_expired(issued() + Duration::minutes(30) - Duration::seconds(1)));
        assert!(s.is_expired(issued() + Duration::minutes(30)));
    }

    #[test]
    fn test_ensure_active_rejects_expired_session() {
        let s = session();
        let result = s.ensure_active(issued() + Duration::hours(1));

        match result {
            Err(EngineError::SessionExpired { user_id }) => assert_eq!(user_id, "teacher_01"),
            other => panic!("Expected SessionExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_ttl_serializes_as_seconds() {
        let json = serde_json::to_value(session()).unwrap();
        assert_eq!(json["ttl"], 1800);

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session());
    }

    #[test]
    fn test_out_of_range_ttl_fails_to_deserialize() {
        let json = serde_json::json!({
            "user_id": "teacher_01",
            "issued_at": "2025-09-01T08:00:00Z",
            "ttl": i64::MAX
        });

        let result: Result<Session, _> = serde_json::from_value(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_lifetime_past_calendar_end_never_expires() {
        let s = Session::new("teacher_01", issued(), Duration::MAX);
        assert_eq!(s.expires_at(), DateTime::<Utc>::MAX_UTC);
        assert!(!s.is_expired(issued() + Duration::days(365 * 100)));
    }
}
