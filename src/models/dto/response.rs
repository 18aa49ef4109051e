use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Profile;

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Teacher {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddTeacherResponse {
    #[serde(default)]
    pub msg: String,
    pub user: Teacher,
}

/// A quiz as its author sees it after creation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeacherQuiz {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<serde_json::Value>,
}

impl TeacherQuiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateQuizResponse {
    #[serde(default)]
    pub msg: String,
    pub quiz: TeacherQuiz,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudentSummary {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// One row of a teacher's results table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentScore {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub student: StudentSummary,
    pub score: f64,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Role;

    #[test]
    fn auth_response_reads_token_and_user() {
        let json = r#"{"token":"abc","user":{"name":"Ada","role":"admin"}}"#;
        let response: AuthResponse = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(response.token, "abc");
        assert_eq!(response.user.role, Some(Role::Admin));
        assert!(!format!("{:?}", response).contains("abc"));
    }

    #[test]
    fn student_score_reads_results_row() {
        let json = r#"{
            "_id": "r1",
            "student": {"name": "Sam", "email": "sam@example.com"},
            "score": 75,
            "completedAt": "2026-03-01T10:00:00Z"
        }"#;
        let row: StudentScore = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(row.student.name, "Sam");
        assert_eq!(row.score, 75.0);
        assert!(row.completed_at.is_some());
    }

    #[test]
    fn teacher_quiz_counts_questions() {
        let json = r#"{"_id":"qz-1","title":"T","questions":[{},{}]}"#;
        let quiz: TeacherQuiz = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.description, "");
    }
}
