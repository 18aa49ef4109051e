pub mod auth_api;
pub mod client;
pub mod quiz_api;
pub mod user_api;

pub use auth_api::AuthApi;
pub use client::ApiClient;
pub use quiz_api::QuizApi;
pub use user_api::UserApi;

#[cfg(test)]
pub use auth_api::MockAuthApi;
#[cfg(test)]
pub use quiz_api::MockQuizApi;
#[cfg(test)]
pub use user_api::MockUserApi;
