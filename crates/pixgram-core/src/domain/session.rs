use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Server-side login session, addressed by an opaque token kept in a cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub account_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `account_id` lasting `ttl`.
    pub fn start(account_id: Uuid, ttl: TimeDelta) -> Self {
        Self {
            id: new_token(),
            account_id,
            expires_at: Utc::now() + ttl,
        }
    }
}

/// Two random v4 UUIDs, hex encoded.
fn new_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_opaque() {
        let account = Uuid::new_v4();
        let a = Session::start(account, TimeDelta::hours(1));
        let b = Session::start(account, TimeDelta::hours(1));

        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 64);
        assert!(!a.id.contains(&account.simple().to_string()));
    }

    #[test]
    fn test_expiry_follows_ttl() {
        let before = Utc::now();
        let session = Session::start(Uuid::new_v4(), TimeDelta::hours(1));

        assert!(session.expires_at >= before + TimeDelta::hours(1));
        assert!(session.expires_at <= Utc::now() + TimeDelta::hours(1));
    }
}
