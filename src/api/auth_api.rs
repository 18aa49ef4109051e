use async_trait::async_trait;

use crate::{
    api::client::ApiClient,
    errors::{AppError, AppResult},
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> AppResult<AuthResponse>;
    async fn register(&self, account: &RegisterRequest) -> AppResult<AuthResponse>;
    async fn logout(&self) -> AppResult<()>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> AppResult<AuthResponse> {
        self.post("/auth/login", credentials)
            .await
            .map_err(|e| match e {
                AppError::Unauthorized(msg) | AppError::ValidationRejected(msg) => {
                    AppError::InvalidCredentials(msg)
                }
                other => other,
            })
    }

    async fn register(&self, account: &RegisterRequest) -> AppResult<AuthResponse> {
        self.post("/auth/register", account).await
    }

    async fn logout(&self) -> AppResult<()> {
        self.post_empty("/auth/logout").await
    }
}
