use uuid::Uuid;

use crate::{
    api::QuizApi,
    errors::{AppError, AppResult},
    models::{
        domain::{OptionKey, Question, Quiz, QuizResult},
        dto::request::{AnswerSubmission, SubmitQuizRequest},
    },
};

/// One student's attempt at one quiz.
#[derive(Debug, Clone)]
pub struct Attempt {
    id: Uuid,
    quiz: Quiz,
    current_index: usize,
    // insertion order is kept; it is also the order answers are submitted in
    answers: Vec<(String, OptionKey)>,
    submitting: bool,
}

impl Attempt {
    fn new(quiz: Quiz) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz,
            current_index: 0,
            answers: Vec::new(),
            submitting: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    pub fn answer_for(&self, question_id: &str) -> Option<OptionKey> {
        self.answers
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, key)| *key)
    }

    pub fn answers(&self) -> impl Iterator<Item = (&str, OptionKey)> {
        self.answers.iter().map(|(id, key)| (id.as_str(), *key))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn can_submit(&self) -> bool {
        self.answers.len() == self.quiz.questions.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn record(&mut self, question_id: &str, key: OptionKey) {
        match self.answers.iter_mut().find(|(id, _)| id == question_id) {
            Some(entry) => entry.1 = key,
            None => self.answers.push((question_id.to_string(), key)),
        }
    }

    fn submission(&self) -> SubmitQuizRequest {
        SubmitQuizRequest {
            quiz_id: self.quiz.quiz_id.clone(),
            answers: self
                .answers
                .iter()
                .map(|(question_id, key)| AnswerSubmission {
                    question_id: question_id.clone(),
                    selected_key: *key,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Listing,
    InProgress,
    Reviewing,
}

/// A submission that has been sent (or is about to be) for a given attempt.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    attempt_id: Uuid,
    request: SubmitQuizRequest,
}

impl SubmitTicket {
    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn request(&self) -> &SubmitQuizRequest {
        &self.request
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Applied,
    /// The attempt the response belonged to is gone.
    Discarded,
}

/// Quiz-taking state machine: `Listing -> InProgress -> Reviewing -> Listing`.
#[derive(Debug, Clone, Default)]
pub enum QuizSession {
    #[default]
    Listing,
    InProgress(Attempt),
    Reviewing { attempt: Attempt, result: QuizResult },
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match self {
            QuizSession::Listing => SessionState::Listing,
            QuizSession::InProgress(_) => SessionState::InProgress,
            QuizSession::Reviewing { .. } => SessionState::Reviewing,
        }
    }

    pub fn attempt(&self) -> Option<&Attempt> {
        match self {
            QuizSession::Listing => None,
            QuizSession::InProgress(attempt) | QuizSession::Reviewing { attempt, .. } => {
                Some(attempt)
            }
        }
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            QuizSession::Reviewing { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, QuizSession::InProgress(a) if a.submitting)
    }

    fn in_progress_mut(&mut self, action: &str) -> AppResult<&mut Attempt> {
        match self {
            QuizSession::InProgress(attempt) => Ok(attempt),
            QuizSession::Listing => Err(AppError::InvalidState(format!(
                "Cannot {} without an open quiz",
                action
            ))),
            QuizSession::Reviewing { .. } => Err(AppError::InvalidState(format!(
                "Cannot {} after the quiz was submitted",
                action
            ))),
        }
    }

    pub fn start(&mut self, quiz: Quiz) -> AppResult<()> {
        if !matches!(self, QuizSession::Listing) {
            return Err(AppError::InvalidState(
                "Return to the quiz list before starting another quiz".to_string(),
            ));
        }
        quiz.validate()?;

        log::info!(
            "Starting quiz '{}' (assignment {}, {} questions)",
            quiz.title,
            quiz.assignment_id,
            quiz.question_count()
        );
        *self = QuizSession::InProgress(Attempt::new(quiz));
        Ok(())
    }

    /// Records `key` for any question of the quiz, not only the displayed one.
    pub fn select_answer(&mut self, question_id: &str, key: OptionKey) -> AppResult<()> {
        let attempt = self.in_progress_mut("answer")?;
        if attempt.submitting {
            return Err(AppError::SubmitInFlight);
        }

        let question = attempt
            .quiz
            .question(question_id)
            .ok_or_else(|| AppError::NotFound(format!("Question '{}'", question_id)))?;
        if !question.has_option(key) {
            return Err(AppError::InvalidOption(format!(
                "'{}' is not an option of question '{}'",
                key, question_id
            )));
        }

        attempt.record(question_id, key);
        Ok(())
    }

    pub fn select_current(&mut self, key: OptionKey) -> AppResult<()> {
        let question_id = self
            .in_progress_mut("answer")?
            .current_question()
            .id
            .clone();
        self.select_answer(&question_id, key)
    }

    pub fn next(&mut self) {
        if let QuizSession::InProgress(attempt) = self {
            if attempt.current_index + 1 < attempt.quiz.questions.len() {
                attempt.current_index += 1;
            }
        }
    }

    pub fn previous(&mut self) {
        if let QuizSession::InProgress(attempt) = self {
            attempt.current_index = attempt.current_index.saturating_sub(1);
        }
    }

    pub fn jump_to(&mut self, index: usize) -> AppResult<()> {
        let attempt = self.in_progress_mut("navigate")?;
        let len = attempt.quiz.questions.len();
        if index >= len {
            return Err(AppError::IndexOutOfRange { index, len });
        }
        attempt.current_index = index;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, QuizSession::InProgress(a) if a.can_submit())
    }

    /// Checks local preconditions and marks the attempt as submitting.
    /// Nothing is sent when this fails.
    pub fn begin_submit(&mut self) -> AppResult<SubmitTicket> {
        let attempt = self.in_progress_mut("submit")?;
        if attempt.submitting {
            return Err(AppError::SubmitInFlight);
        }
        if !attempt.can_submit() {
            return Err(AppError::IncompleteAnswers {
                answered: attempt.answered_count(),
                total: attempt.quiz.question_count(),
            });
        }

        attempt.submitting = true;
        Ok(SubmitTicket {
            attempt_id: attempt.id,
            request: attempt.submission(),
        })
    }

    /// Applies the scorer's response if `ticket` still belongs to the open attempt.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: AppResult<QuizResult>,
    ) -> AppResult<SubmitOutcome> {
        match self {
            QuizSession::InProgress(attempt)
                if attempt.id == ticket.attempt_id && attempt.submitting =>
            {
                attempt.submitting = false;
            }
            _ => {
                log::info!(
                    "Discarding submission response for closed attempt {}",
                    ticket.attempt_id
                );
                return Ok(SubmitOutcome::Discarded);
            }
        }

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Quiz submission failed: {}", e);
                return Err(e);
            }
        };

        if let QuizSession::InProgress(attempt) = std::mem::take(self) {
            for problem in result.inconsistencies(&attempt.quiz) {
                log::warn!("Scored result for quiz {}: {}", attempt.quiz.quiz_id, problem);
            }
            log::info!(
                "Quiz {} scored {}% ({}/{})",
                attempt.quiz.quiz_id,
                result.score,
                result.correct_count,
                result.total_questions
            );
            *self = QuizSession::Reviewing { attempt, result };
        }
        Ok(SubmitOutcome::Applied)
    }

    /// Sends the answers to `scorer` once and moves to `Reviewing` on success.
    pub async fn submit(&mut self, scorer: &dyn QuizApi) -> AppResult<QuizResult> {
        let ticket = self.begin_submit()?;
        let outcome = scorer.submit_quiz(ticket.request()).await;

        match self.complete_submit(ticket, outcome)? {
            SubmitOutcome::Applied => self.result().cloned().ok_or_else(|| {
                AppError::InvalidState("Submission applied without a result".to_string())
            }),
            SubmitOutcome::Discarded => Err(AppError::InvalidState(
                "Quiz was closed while submitting".to_string(),
            )),
        }
    }

    /// Discards the session. Returns the assignment id when the discarded
    /// attempt had been scored, so the caller can drop it from its pending list.
    pub fn reset(&mut self) -> Option<String> {
        match std::mem::take(self) {
            QuizSession::Reviewing { attempt, .. } => Some(attempt.quiz.assignment_id),
            _ => None,
        }
    }
}
