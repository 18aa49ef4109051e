use std::sync::Arc;

use validator::Validate;

use crate::{
    api::UserApi,
    errors::{AppError, AppResult},
    models::{
        domain::Department,
        dto::{request::AddTeacherRequest, response::Teacher},
    },
};

/// Department lookup and the teacher roster managed by admins.
pub struct AdminService {
    api: Arc<dyn UserApi>,
    teachers: Vec<Teacher>,
}

impl AdminService {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            teachers: Vec::new(),
        }
    }

    /// Teachers added during this session.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub async fn departments(&self) -> AppResult<Vec<Department>> {
        self.api.departments().await
    }

    pub async fn add_teacher(&mut self, request: &AddTeacherRequest) -> AppResult<Teacher> {
        request.validate()?;

        let response = self.api.add_teacher(request).await?;
        log::info!("Added teacher {} ({})", response.user.name, response.user.id);
        self.teachers.push(response.user.clone());
        Ok(response.user)
    }

    pub async fn delete_teacher(&mut self, teacher_id: &str) -> AppResult<String> {
        if teacher_id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Teacher id is required".to_string(),
            ));
        }

        let response = self.api.delete_teacher(teacher_id).await?;
        self.teachers.retain(|t| t.id != teacher_id);
        log::info!("Deleted teacher {}", teacher_id);
        Ok(response.msg)
    }
}
