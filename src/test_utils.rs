#[cfg(test)]
pub mod fixtures {
    use std::path::PathBuf;

    use secrecy::SecretString;
    use uuid::Uuid;

    use crate::models::domain::{
        OptionKey, Profile, Question, Quiz, QuizOption, QuizResult, ResultDetail, Role, Session,
    };

    /// A question with the four standard options.
    pub fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {}", id),
            options: OptionKey::ALL
                .iter()
                .map(|key| QuizOption {
                    key: *key,
                    text: format!("Option {}", key),
                })
                .collect(),
        }
    }

    /// Quiz `qz-1` for assignment `as-1` with questions `q1..=qn`.
    pub fn quiz_with_questions(n: usize) -> Quiz {
        Quiz {
            assignment_id: "as-1".to_string(),
            quiz_id: "qz-1".to_string(),
            title: "Ownership basics".to_string(),
            description: "Moves and borrows".to_string(),
            questions: (1..=n).map(|i| question(&format!("q{}", i))).collect(),
        }
    }

    pub fn two_question_quiz() -> Quiz {
        quiz_with_questions(2)
    }

    pub fn pending_quiz(assignment_id: &str, quiz_id: &str) -> Quiz {
        Quiz {
            assignment_id: assignment_id.to_string(),
            quiz_id: quiz_id.to_string(),
            ..quiz_with_questions(2)
        }
    }

    /// Score for answering q1 with `c` (wrong, `b` is right) and q2 with `a` (right).
    pub fn two_question_result() -> QuizResult {
        QuizResult {
            score: 50.0,
            correct_count: 1,
            total_questions: 2,
            results: vec![
                ResultDetail {
                    question_id: "q1".to_string(),
                    selected_key: OptionKey::C,
                    is_correct: false,
                    correct_answer: OptionKey::B,
                },
                ResultDetail {
                    question_id: "q2".to_string(),
                    selected_key: OptionKey::A,
                    is_correct: true,
                    correct_answer: OptionKey::A,
                },
            ],
        }
    }

    pub fn session_for(role: Role) -> Session {
        Session::new(
            SecretString::from(format!("token-{}", role)),
            Profile::new(&format!("{} user", role), role),
        )
    }

    /// Fresh path under the system temp dir; the file does not exist yet.
    pub fn temp_session_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("quiz-link-test-{}", Uuid::new_v4()))
            .join("session.json")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Role;

    #[test]
    fn test_fixtures_quiz_is_valid() {
        let quiz = quiz_with_questions(3);
        assert!(quiz.validate().is_ok());
        assert_eq!(quiz.questions[2].id, "q3");
    }

    #[test]
    fn test_fixtures_result_is_consistent() {
        let result = two_question_result();
        assert!(result.inconsistencies(&two_question_quiz()).is_empty());
    }

    #[test]
    fn test_fixtures_session_for_role() {
        let session = session_for(Role::Admin);
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.profile.name, "admin user");
    }
}
