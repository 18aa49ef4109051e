use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    auth::session_store::SessionStore,
    errors::AppResult,
    models::domain::{Profile, Role, Session},
};

/// Outcome of an authorization check. Navigation is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Admit,
    RedirectToLogin,
    RedirectToRole(Role),
}

/// Role-scoped areas of the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Admin,
    Teacher,
    Student,
}

impl Area {
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Area::Admin => &[Role::Admin],
            Area::Teacher => &[Role::Teacher, Role::Admin],
            Area::Student => &[Role::Student],
        }
    }
}

/// Pure authorization rule over an optional session.
pub fn decide(session: Option<&Session>, requested: &[Role]) -> Decision {
    let Some(session) = session.filter(|s| s.has_token()) else {
        return Decision::RedirectToLogin;
    };

    match session.role() {
        Some(role) if requested.contains(&role) => Decision::Admit,
        Some(role) => Decision::RedirectToRole(role),
        None => Decision::RedirectToLogin,
    }
}

pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current session, if any. A store that cannot be read counts as logged out.
    pub fn session(&self) -> Option<Session> {
        match self.store.load() {
            Ok(session) => session.filter(|s| s.has_token()),
            Err(e) => {
                log::warn!("Could not read session, treating as logged out: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.session().and_then(|s| s.role())
    }

    pub fn profile(&self) -> Option<Profile> {
        self.session().map(|s| s.profile)
    }

    pub fn authorize(&self, requested: &[Role]) -> Decision {
        decide(self.session().as_ref(), requested)
    }

    pub fn authorize_area(&self, area: Area) -> Decision {
        self.authorize(area.allowed_roles())
    }

    pub fn login(&self, token: SecretString, profile: Profile) -> AppResult<Session> {
        let session = Session::new(token, profile);
        self.store.save(&session)?;
        log::info!(
            "Logged in as {} ({})",
            session.profile.name,
            session
                .role()
                .map(|r| r.as_str())
                .unwrap_or("no role")
        );
        Ok(session)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()?;
        log::info!("Local session cleared");
        Ok(())
    }
}
