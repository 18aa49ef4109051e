use std::sync::Arc;

use secrecy::SecretString;
use validator::Validate;

use crate::{
    api::AuthApi,
    auth::{home_for, Route, SessionGuard},
    errors::{AppError, AppResult},
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
};

/// Login, registration and logout on top of the session guard.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    guard: Arc<SessionGuard>,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, guard: Arc<SessionGuard>) -> Self {
        Self { api, guard }
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Logs in and returns the route for the user's role.
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<Route> {
        credentials.validate()?;
        let response = self.api.login(credentials).await?;
        self.establish(response)
    }

    pub async fn register(&self, account: &RegisterRequest) -> AppResult<Route> {
        account.validate()?;
        let response = self.api.register(account).await?;
        self.establish(response)
    }

    /// The local session is cleared even when the server call fails.
    pub async fn logout(&self) -> AppResult<()> {
        if self.guard.is_authenticated() {
            if let Err(e) = self.api.logout().await {
                log::warn!("Server logout failed, clearing local session anyway: {}", e);
            }
        }
        self.guard.logout()
    }

    fn establish(&self, response: AuthResponse) -> AppResult<Route> {
        if response.token.is_empty() {
            return Err(AppError::Unauthorized("No token received".to_string()));
        }
        let Some(role) = response.user.role else {
            log::error!("Rejecting session for {}: unknown role", response.user.name);
            return Err(AppError::Unauthorized("Invalid user role".to_string()));
        };

        self.guard
            .login(SecretString::from(response.token), response.user)?;
        Ok(home_for(role))
    }
}
