use async_trait::async_trait;

use crate::{
    api::client::ApiClient,
    errors::AppResult,
    models::{
        domain::{Quiz, QuizResult},
        dto::{
            request::{AssignQuizRequest, CreateQuizRequest, SubmitQuizRequest},
            response::{CreateQuizResponse, MessageResponse, StudentScore},
        },
    },
};

/// Quiz operations. `submit_quiz` is the scorer a quiz session submits to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn pending_quizzes(&self) -> AppResult<Vec<Quiz>>;
    async fn submit_quiz(&self, submission: &SubmitQuizRequest) -> AppResult<QuizResult>;
    async fn create_quiz(&self, quiz: &CreateQuizRequest) -> AppResult<CreateQuizResponse>;
    async fn delete_quiz(&self, quiz_id: &str) -> AppResult<MessageResponse>;
    async fn assign_quiz(&self, assignment: &AssignQuizRequest) -> AppResult<MessageResponse>;
    async fn quiz_results(&self, quiz_id: &str) -> AppResult<Vec<StudentScore>>;
}

#[async_trait]
impl QuizApi for ApiClient {
    async fn pending_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.get("/quizzes/student/pending").await
    }

    async fn submit_quiz(&self, submission: &SubmitQuizRequest) -> AppResult<QuizResult> {
        self.post("/quizzes/student/submit", submission).await
    }

    async fn create_quiz(&self, quiz: &CreateQuizRequest) -> AppResult<CreateQuizResponse> {
        self.post("/quizzes/create", quiz).await
    }

    async fn delete_quiz(&self, quiz_id: &str) -> AppResult<MessageResponse> {
        self.delete(&format!("/quizzes/delete/{}", urlencoding::encode(quiz_id)))
            .await
    }

    async fn assign_quiz(&self, assignment: &AssignQuizRequest) -> AppResult<MessageResponse> {
        self.post("/quizzes/assign", assignment).await
    }

    async fn quiz_results(&self, quiz_id: &str) -> AppResult<Vec<StudentScore>> {
        self.get(&format!("/quizzes/results/{}", urlencoding::encode(quiz_id)))
            .await
    }
}
