use std::sync::Arc;

use crate::{
    api::QuizApi,
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizResult},
    services::quiz_session::QuizSession,
};

/// Pending-quiz list plus the attempt being taken from it.
pub struct StudentDashboard {
    api: Arc<dyn QuizApi>,
    pending: Vec<Quiz>,
    session: QuizSession,
}

impl StudentDashboard {
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self {
            api,
            pending: Vec::new(),
            session: QuizSession::new(),
        }
    }

    pub fn pending(&self) -> &[Quiz] {
        &self.pending
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub async fn refresh_pending(&mut self) -> AppResult<&[Quiz]> {
        let quizzes = self.api.pending_quizzes().await?;
        log::info!("Loaded {} pending quizzes", quizzes.len());
        self.pending = quizzes;
        Ok(&self.pending)
    }

    pub fn start(&mut self, assignment_id: &str) -> AppResult<()> {
        let quiz = self
            .pending
            .iter()
            .find(|q| q.assignment_id == assignment_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Pending assignment '{}'", assignment_id))
            })?;
        self.session.start(quiz)
    }

    /// Submits the open attempt. A scored quiz leaves the pending list.
    pub async fn submit(&mut self) -> AppResult<QuizResult> {
        let api = Arc::clone(&self.api);
        let result = self.session.submit(&*api).await?;

        if let Some(attempt) = self.session.attempt() {
            let assignment_id = attempt.quiz().assignment_id.clone();
            self.remove_pending(&assignment_id);
        }
        Ok(result)
    }

    pub fn back_to_list(&mut self) {
        if let Some(assignment_id) = self.session.reset() {
            self.remove_pending(&assignment_id);
        }
    }

    fn remove_pending(&mut self, assignment_id: &str) {
        self.pending.retain(|q| q.assignment_id != assignment_id);
    }
}
