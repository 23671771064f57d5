use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub id: u64,
}

/// At most one identity is active at a time. Logging in never checks the
/// secret against anything stored; any non-empty pair mints a fresh
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    pub fn new(current: Option<Identity>) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Refuses empty fields and leaves the session untouched; otherwise
    /// installs a new identity under the supplied id.
    pub fn login(&mut self, handle: &str, secret: &str, id: u64) -> bool {
        if handle.is_empty() || secret.is_empty() {
            return false;
        }
        self.current = Some(Identity {
            username: handle.to_string(),
            id,
        });
        true
    }

    pub fn logout(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_pair_logs_in() {
        let mut session = Session::default();
        assert!(session.login("a", "b", 1));
        let identity = session.current().expect("logged in");
        assert_eq!(identity.username, "a");
        assert_eq!(identity.id, 1);
    }

    #[test]
    fn empty_fields_are_refused() {
        let mut session = Session::default();
        assert!(!session.login("", "b", 1));
        assert!(!session.login("a", "", 1));
        assert!(session.current().is_none());
    }

    #[test]
    fn logout_clears_the_identity() {
        let mut session = Session::default();
        session.login("a", "b", 1);
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn relogin_replaces_the_identity() {
        let mut session = Session::default();
        session.login("a", "b", 1);
        assert!(session.login("c", "d", 2));
        let identity = session.current().expect("logged in");
        assert_eq!(identity.username, "c");
        assert_eq!(identity.id, 2);
    }

    #[test]
    fn identity_round_trips_with_wire_names() {
        let identity = Identity {
            username: "alex".to_string(),
            id: 42,
        };
        let json = serde_json::to_string(&identity).expect("serialize");
        assert_eq!(json, r#"{"username":"alex","id":42}"#);
        let restored: Identity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, identity);
    }
}
