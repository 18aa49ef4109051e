use async_trait::async_trait;

use crate::{
    api::client::ApiClient,
    errors::AppResult,
    models::{
        domain::Department,
        dto::{
            request::AddTeacherRequest,
            response::{AddTeacherResponse, MessageResponse},
        },
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn departments(&self) -> AppResult<Vec<Department>>;
    async fn add_teacher(&self, teacher: &AddTeacherRequest) -> AppResult<AddTeacherResponse>;
    async fn delete_teacher(&self, teacher_id: &str) -> AppResult<MessageResponse>;
}

#[async_trait]
impl UserApi for ApiClient {
    async fn departments(&self) -> AppResult<Vec<Department>> {
        self.get("/departments").await
    }

    async fn add_teacher(&self, teacher: &AddTeacherRequest) -> AppResult<AddTeacherResponse> {
        self.post("/users/teacher/add", teacher).await
    }

    async fn delete_teacher(&self, teacher_id: &str) -> AppResult<MessageResponse> {
        self.delete(&format!(
            "/users/teacher/delete/{}",
            urlencoding::encode(teacher_id)
        ))
        .await
    }
}
