use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{OptionKey, QuizOption},
        dto::request::{CreateQuestionRequest, CreateQuizRequest},
    },
};

/// A question being authored. Edits return a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuestion {
    pub question_text: String,
    #[serde(default)]
    pub options: [String; 4],
    #[serde(default)]
    pub correct_answer: Option<OptionKey>,
}

fn option_slot(key: OptionKey) -> usize {
    match key {
        OptionKey::A => 0,
        OptionKey::B => 1,
        OptionKey::C => 2,
        OptionKey::D => 3,
    }
}

impl DraftQuestion {
    pub fn new(text: &str) -> Self {
        Self {
            question_text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_text(&self, text: &str) -> Self {
        Self {
            question_text: text.to_string(),
            ..self.clone()
        }
    }

    pub fn with_option(&self, key: OptionKey, text: &str) -> Self {
        let mut options = self.options.clone();
        options[option_slot(key)] = text.to_string();
        Self {
            options,
            ..self.clone()
        }
    }

    pub fn with_correct_answer(&self, key: OptionKey) -> Self {
        Self {
            correct_answer: Some(key),
            ..self.clone()
        }
    }

    fn to_request(&self, position: usize) -> AppResult<CreateQuestionRequest> {
        let correct_answer = self.correct_answer.ok_or_else(|| {
            AppError::ValidationError(format!("Question {} has no correct answer", position + 1))
        })?;

        Ok(CreateQuestionRequest {
            question_text: self.question_text.trim().to_string(),
            options: OptionKey::ALL
                .iter()
                .map(|key| QuizOption {
                    key: *key,
                    text: self.options[option_slot(*key)].trim().to_string(),
                })
                .collect(),
            correct_answer,
        })
    }
}

/// Quiz under construction. Questions are replaced wholesale, never edited in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub department_id: String,
    questions: Vec<DraftQuestion>,
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            department_id: String::new(),
            questions: vec![DraftQuestion::default()],
        }
    }
}

impl QuizDraft {
    pub fn new(title: &str, description: &str, department_id: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            department_id: department_id.to_string(),
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[DraftQuestion] {
        &self.questions
    }

    pub fn add_question(&mut self, question: DraftQuestion) {
        self.questions.push(question);
    }

    pub fn replace_question(&mut self, index: usize, question: DraftQuestion) -> AppResult<()> {
        let len = self.questions.len();
        let slot = self
            .questions
            .get_mut(index)
            .ok_or(AppError::IndexOutOfRange { index, len })?;
        *slot = question;
        Ok(())
    }

    /// Replaces question `index` with `edit` applied to it.
    pub fn update_question<F>(&mut self, index: usize, edit: F) -> AppResult<()>
    where
        F: FnOnce(&DraftQuestion) -> DraftQuestion,
    {
        let len = self.questions.len();
        let current = self
            .questions
            .get(index)
            .ok_or(AppError::IndexOutOfRange { index, len })?;
        let updated = edit(current);
        self.questions[index] = updated;
        Ok(())
    }

    /// Removes a question; the last remaining one cannot be removed.
    pub fn remove_question(&mut self, index: usize) -> AppResult<DraftQuestion> {
        let len = self.questions.len();
        if index >= len {
            return Err(AppError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(AppError::ValidationError(
                "A quiz needs at least one question".to_string(),
            ));
        }
        Ok(self.questions.remove(index))
    }

    pub fn build(&self) -> AppResult<CreateQuizRequest> {
        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| q.to_request(i))
            .collect::<AppResult<Vec<_>>>()?;

        let request = CreateQuizRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            department_id: self.department_id.clone(),
            questions,
        };
        request.validate()?;
        Ok(request)
    }
}
