use std::sync::Arc;

use crate::{
    api::ApiClient,
    auth::{FileSessionStore, SessionGuard, SessionStore},
    config::Config,
    errors::AppResult,
    services::{AdminService, AuthService, StudentDashboard, TeacherService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub guard: Arc<SessionGuard>,
    pub api: Arc<ApiClient>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        Self::with_store(config, store)
    }

    /// Same wiring over a caller-supplied session store.
    pub fn with_store(config: Config, store: Arc<dyn SessionStore>) -> AppResult<Self> {
        let api = Arc::new(ApiClient::new(&config, Arc::clone(&store))?);
        let guard = Arc::new(SessionGuard::new(store));

        Ok(Self {
            config: Arc::new(config),
            guard,
            api,
        })
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.api.clone(), Arc::clone(&self.guard))
    }

    pub fn student_dashboard(&self) -> StudentDashboard {
        StudentDashboard::new(self.api.clone())
    }

    pub fn teacher_service(&self) -> TeacherService {
        TeacherService::new(self.api.clone())
    }

    pub fn admin_service(&self) -> AdminService {
        AdminService::new(self.api.clone())
    }
}
