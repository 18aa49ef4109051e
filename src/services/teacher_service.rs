use std::sync::Arc;

use validator::Validate;

use crate::{
    api::QuizApi,
    errors::{AppError, AppResult},
    models::dto::{
        request::AssignQuizRequest,
        response::{StudentScore, TeacherQuiz},
    },
    services::quiz_builder::QuizDraft,
};

pub struct TeacherService {
    api: Arc<dyn QuizApi>,
}

impl TeacherService {
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Validates the draft locally before anything is sent.
    pub async fn create_quiz(&self, draft: &QuizDraft) -> AppResult<TeacherQuiz> {
        let request = draft.build()?;
        let response = self.api.create_quiz(&request).await?;
        log::info!(
            "Created quiz '{}' with {} questions",
            response.quiz.title,
            request.questions.len()
        );
        Ok(response.quiz)
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> AppResult<String> {
        if quiz_id.trim().is_empty() {
            return Err(AppError::ValidationError("Quiz id is required".to_string()));
        }
        let response = self.api.delete_quiz(quiz_id).await?;
        log::info!("Deleted quiz {}", quiz_id);
        Ok(response.msg)
    }

    pub async fn assign_quiz(&self, quiz_id: &str, student_id: &str) -> AppResult<String> {
        let request = AssignQuizRequest {
            quiz_id: quiz_id.trim().to_string(),
            student_id: student_id.trim().to_string(),
        };
        request.validate()?;

        let response = self.api.assign_quiz(&request).await?;
        log::info!("Assigned quiz {} to student {}", quiz_id, student_id);
        Ok(response.msg)
    }

    pub async fn results(&self, quiz_id: &str) -> AppResult<Vec<StudentScore>> {
        let scores = self.api.quiz_results(quiz_id).await?;
        log::debug!("Fetched {} results for quiz {}", scores.len(), quiz_id);
        Ok(scores)
    }
}
