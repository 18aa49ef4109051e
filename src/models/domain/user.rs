use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::models::domain::role::{deserialize_lenient_role, Role};

/// The `user` object returned alongside a token on login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_role")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Profile {
    pub fn new(name: &str, role: Role) -> Self {
        Profile {
            id: None,
            name: name.to_string(),
            email: None,
            role: Some(role),
            department: None,
        }
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }
}

/// Locally cached identity of the current actor.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: SecretString,
    pub profile: Profile,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: SecretString, profile: Profile) -> Self {
        Session {
            token,
            profile,
            logged_in_at: Utc::now(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.expose_secret().is_empty()
    }

    /// The actor's role, only while a non-empty token backs it.
    pub fn role(&self) -> Option<Role> {
        if self.has_token() {
            self.profile.role
        } else {
            None
        }
    }
}

/// On-disk shape of a [`Session`]; the token is only exposed here.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct StoredSession {
    pub token: String,
    pub user: Profile,
    pub logged_in_at: DateTime<Utc>,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        StoredSession {
            token: session.token.expose_secret().to_string(),
            user: session.profile.clone(),
            logged_in_at: session.logged_in_at,
        }
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session {
            token: SecretString::from(stored.token),
            profile: stored.user,
            logged_in_at: stored.logged_in_at,
        }
    }
}
