use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Option label of a multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::A => "a",
            OptionKey::B => "b",
            OptionKey::C => "c",
            OptionKey::D => "d",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(OptionKey::A),
            "b" => Ok(OptionKey::B),
            "c" => Ok(OptionKey::C),
            "d" => Ok(OptionKey::D),
            _ => Err(AppError::InvalidOption(format!(
                "'{}' is not one of a, b, c, d",
                s
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub key: OptionKey,
    pub text: String,
}

/// A question as shown to a student. The server withholds the correct answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "questionText")]
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn has_option(&self, key: OptionKey) -> bool {
        self.options.iter().any(|o| o.key == key)
    }

    pub fn option(&self, key: OptionKey) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Checks that the options are exactly a, b, c and d, each once.
    pub fn validate(&self) -> AppResult<()> {
        let keys: HashSet<OptionKey> = self.options.iter().map(|o| o.key).collect();
        if self.options.len() != OptionKey::ALL.len() || keys.len() != OptionKey::ALL.len() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' must have exactly the options a, b, c and d",
                self.id
            )));
        }
        Ok(())
    }
}

/// An assignment-scoped quiz as listed for a student.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub assignment_id: String,
    pub quiz_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.questions.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Quiz '{}' has no questions",
                self.title
            )));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Quiz '{}' repeats question id '{}'",
                    self.title, question.id
                )));
            }
            question.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{question, two_question_quiz};

    #[test]
    fn option_key_parses_case_insensitively() {
        assert_eq!("C".parse::<OptionKey>().unwrap(), OptionKey::C);
        assert_eq!(" b ".parse::<OptionKey>().unwrap(), OptionKey::B);
    }

    #[test]
    fn option_key_rejects_unknown_label() {
        let parsed = "e".parse::<OptionKey>();
        assert!(matches!(parsed, Err(AppError::InvalidOption(_))));
    }

    #[test]
    fn option_key_rejects_unknown_variant_on_the_wire() {
        let parsed = serde_json::from_str::<OptionKey>("\"e\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn quiz_reads_pending_quiz_payload() {
        let json = r#"{
            "assignmentId": "as-1",
            "quizId": "qz-1",
            "title": "Rust basics",
            "description": "Ownership",
            "questions": [{
                "_id": "q1",
                "questionText": "Which keyword moves?",
                "options": [
                    {"key": "a", "text": "let"},
                    {"key": "b", "text": "move"},
                    {"key": "c", "text": "mut"},
                    {"key": "d", "text": "ref"}
                ]
            }]
        }"#;

        let quiz: Quiz = serde_json::from_str(json).expect("quiz should deserialize");

        assert_eq!(quiz.assignment_id, "as-1");
        assert_eq!(quiz.quiz_id, "qz-1");
        assert_eq!(quiz.questions[0].id, "q1");
        assert_eq!(quiz.questions[0].text, "Which keyword moves?");
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn quiz_without_questions_is_invalid() {
        let mut quiz = two_question_quiz();
        quiz.questions.clear();

        assert!(matches!(quiz.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn question_with_duplicate_keys_is_invalid() {
        let mut q = question("q1");
        q.options[3].key = OptionKey::A;

        assert!(q.validate().is_err());
    }

    #[test]
    fn quiz_with_repeated_question_ids_is_invalid() {
        let mut quiz = two_question_quiz();
        quiz.questions[1].id = "q1".to_string();

        assert!(quiz.validate().is_err());
    }
}
