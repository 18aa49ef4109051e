use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::{OptionKey, Quiz};

/// Server-scored outcome of one submission.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: f64,
    #[serde(rename = "correctAnswers", alias = "correctCount")]
    pub correct_count: u32,
    pub total_questions: u32,
    pub results: Vec<ResultDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetail {
    pub question_id: String,
    pub selected_key: OptionKey,
    pub is_correct: bool,
    pub correct_answer: OptionKey,
}

impl ResultDetail {
    /// The correct answer, shown only when the student got it wrong.
    pub fn revealed_answer(&self) -> Option<OptionKey> {
        if self.is_correct {
            None
        } else {
            Some(self.correct_answer)
        }
    }
}

impl QuizResult {
    /// Returns a description of each way this result disagrees with itself or
    /// with the quiz it scores. Empty when consistent.
    pub fn inconsistencies(&self, quiz: &Quiz) -> Vec<String> {
        let mut problems = Vec::new();

        let counted = self.results.iter().filter(|r| r.is_correct).count();
        if counted != self.correct_count as usize {
            problems.push(format!(
                "correct count {} does not match {} correct details",
                self.correct_count, counted
            ));
        }

        if self.total_questions as usize != quiz.question_count() {
            problems.push(format!(
                "total questions {} does not match quiz length {}",
                self.total_questions,
                quiz.question_count()
            ));
        }

        if !(0.0..=100.0).contains(&self.score) {
            problems.push(format!("score {} is outside 0-100", self.score));
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{two_question_quiz, two_question_result};

    #[test]
    fn result_reads_scored_payload() {
        let json = r#"{
            "score": 50,
            "correctAnswers": 1,
            "totalQuestions": 2,
            "results": [
                {"questionId": "q1", "selectedKey": "c", "isCorrect": false, "correctAnswer": "b"},
                {"questionId": "q2", "selectedKey": "a", "isCorrect": true, "correctAnswer": "a"}
            ]
        }"#;

        let result: QuizResult = serde_json::from_str(json).expect("result should deserialize");

        assert_eq!(result, two_question_result());
    }

    #[test]
    fn correct_answer_is_revealed_only_for_wrong_answers() {
        let result = two_question_result();

        assert_eq!(result.results[0].revealed_answer(), Some(OptionKey::B));
        assert_eq!(result.results[1].revealed_answer(), None);
    }

    #[test]
    fn consistent_result_reports_nothing() {
        let result = two_question_result();
        assert!(result.inconsistencies(&two_question_quiz()).is_empty());
    }

    #[test]
    fn mismatched_counts_are_reported() {
        let mut result = two_question_result();
        result.correct_count = 2;
        result.total_questions = 3;

        let problems = result.inconsistencies(&two_question_quiz());
        assert_eq!(problems.len(), 2);
    }
}
