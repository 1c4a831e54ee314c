//! Session State — one respondent working through one question set.
//!
//! The question sequence is fixed at construction; answers accumulate
//! until every question has one. Backward navigation may overwrite a
//! previous answer but never duplicates or reorders the set. Sessions are
//! never reused across role descriptions — a rejected or finished role
//! means a fresh session.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Question, QuestionSet, QuestionSource, RoleDescription};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question '{0}' is not part of this session")]
    UnknownQuestion(String),

    #[error("value {value} is not valid for question '{id}'")]
    InvalidValue { id: String, value: u8 },
}

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    role: RoleDescription,
    source: QuestionSource,
    questions: Vec<Question>,
    answers: HashMap<String, u8>,
    cursor: usize,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(role: RoleDescription, set: QuestionSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            source: set.source,
            questions: set.questions,
            answers: HashMap::new(),
            cursor: 0,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> &RoleDescription {
        &self.role
    }

    pub fn source(&self) -> QuestionSource {
        self.source
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<String, u8> {
        &self.answers
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Zero-based position of the question currently in front of the
    /// respondent.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Records an answer for a question in this session's set.
    ///
    /// Validation happens here, at the boundary: the question must exist
    /// and the value must be acceptable for its type. Re-answering a
    /// question overwrites the previous value (last write wins).
    pub fn record_answer(&mut self, question_id: &str, value: u8) -> Result<(), AnswerError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;

        if !question.accepts_value(value) {
            return Err(AnswerError::InvalidValue {
                id: question_id.to_string(),
                value,
            });
        }

        self.answers.insert(question_id.to_string(), value);
        Ok(())
    }

    /// Moves forward one question; saturates at the last question.
    pub fn advance(&mut self) -> Option<&Question> {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Moves back one question; saturates at the first question.
    pub fn retreat(&mut self) -> Option<&Question> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Complete once every question in the set has a recorded answer.
    /// Overwrites cannot un-complete a session.
    pub fn is_complete(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChoiceOption, Dimension, QuestionType};

    fn scale(id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("scale question {id}"),
            kind: QuestionType::Scale,
            dimension: Dimension::Creativity,
            tags: vec![],
            options: vec![],
            min_label: None,
            max_label: None,
        }
    }

    fn choice(id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("choice question {id}"),
            kind: QuestionType::MultipleChoice,
            dimension: Dimension::Emotions,
            tags: vec![],
            options: vec![
                ChoiceOption {
                    label: "low".to_string(),
                    value: 30,
                },
                ChoiceOption {
                    label: "high".to_string(),
                    value: 70,
                },
            ],
            min_label: None,
            max_label: None,
        }
    }

    fn session(questions: Vec<Question>) -> Session {
        Session::new(
            RoleDescription {
                title: "Nurse".to_string(),
                industry: "Healthcare".to_string(),
                experience_level: "mid".to_string(),
            },
            QuestionSet {
                source: QuestionSource::Catalog,
                questions,
            },
        )
    }

    #[test]
    fn test_record_answer_rejects_unknown_question() {
        let mut s = session(vec![scale("q1")]);
        assert_eq!(
            s.record_answer("nope", 50),
            Err(AnswerError::UnknownQuestion("nope".to_string()))
        );
        assert!(s.answers().is_empty());
    }

    #[test]
    fn test_record_answer_rejects_out_of_range_scale_value() {
        let mut s = session(vec![scale("q1")]);
        assert!(s.record_answer("q1", 101).is_err());
        assert!(s.record_answer("q1", 100).is_ok());
    }

    #[test]
    fn test_record_answer_rejects_unlisted_choice_value() {
        let mut s = session(vec![choice("q1")]);
        assert!(s.record_answer("q1", 50).is_err());
        assert!(s.record_answer("q1", 70).is_ok());
    }

    #[test]
    fn test_overwrite_keeps_set_intact() {
        let mut s = session(vec![scale("q1"), scale("q2")]);
        s.record_answer("q1", 25).unwrap();
        s.record_answer("q1", 75).unwrap();
        assert_eq!(s.answers()["q1"], 75);
        assert_eq!(s.questions().len(), 2);
        assert_eq!(s.questions()[0].id, "q1");
    }

    #[test]
    fn test_completeness_forward_order() {
        let mut s = session(vec![scale("q1"), scale("q2"), choice("q3")]);
        assert!(!s.is_complete());
        s.record_answer("q1", 0).unwrap();
        s.advance();
        assert!(!s.is_complete());
        s.record_answer("q2", 50).unwrap();
        s.advance();
        assert!(!s.is_complete());
        s.record_answer("q3", 70).unwrap();
        assert!(s.is_complete());
    }

    #[test]
    fn test_completeness_backward_navigation_with_overwrite() {
        let mut s = session(vec![scale("q1"), scale("q2")]);
        s.record_answer("q1", 100).unwrap();
        s.advance();
        s.record_answer("q2", 0).unwrap();
        assert!(s.is_complete());
        // Going back and changing an answer keeps the session complete.
        s.retreat();
        s.record_answer("q1", 50).unwrap();
        assert!(s.is_complete());
        assert_eq!(s.answers()["q1"], 50);
    }

    #[test]
    fn test_cursor_saturates_at_both_ends() {
        let mut s = session(vec![scale("q1"), scale("q2")]);
        s.retreat();
        assert_eq!(s.cursor(), 0);
        s.advance();
        s.advance();
        s.advance();
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.current().unwrap().id, "q2");
    }

    #[test]
    fn test_empty_set_is_vacuously_complete() {
        let s = session(vec![]);
        assert!(s.is_complete());
        assert!(s.current().is_none());
    }
}
