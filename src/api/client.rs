use std::{sync::Arc, time::Duration};

use reqwest::{header::AUTHORIZATION, Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    auth::SessionStore,
    config::Config,
    errors::{AppError, AppResult},
    models::dto::response::ApiErrorBody,
};

/// HTTP client for the quiz API.
///
/// Attaches the stored credential to every request and turns error
/// responses into [`AppError`]s carrying the server's `msg`. A 401 is reported
/// to the caller as `Unauthorized`; the session is left untouched.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    sessions: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, sessions: Arc<dyn SessionStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base().to_string(),
            sessions,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let token = self.sessions.load()?.map(|s| s.token);

        log::debug!(
            "API request: {} {} (token attached: {})",
            method,
            url,
            token.is_some()
        );

        let mut builder = self.http.request(method, &url);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, token.expose_secret());
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            log::error!("API request failed before a response: {}", e);
            AppError::NetworkError(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let msg = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|b| b.msg)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        log::error!(
            "API error: status={} url={} msg={}",
            status.as_u16(),
            url,
            msg
        );
        if status == StatusCode::UNAUTHORIZED {
            log::error!("Authentication error - token may be invalid");
        }

        Err(error_for_status(status, msg))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let url = response.url().to_string();
        response.json::<T>().await.map_err(|e| {
            log::error!("Malformed response from {}: {}", url, e);
            AppError::InternalError(format!("Malformed response from {}: {}", url, e))
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path)?.json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST without a body whose response content is ignored.
    pub(crate) async fn post_empty(&self, path: &str) -> AppResult<()> {
        self.send(self.request(Method::POST, path)?).await?;
        Ok(())
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(self.request(Method::DELETE, path)?).await?;
        Self::decode(response).await
    }
}

/// Maps a non-success status to the client's error taxonomy.
pub fn error_for_status(status: StatusCode, msg: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(msg),
        StatusCode::NOT_FOUND => AppError::NotFound(msg),
        s if s.is_client_error() => AppError::ValidationRejected(msg),
        _ => AppError::ServerError(msg),
    }
}
