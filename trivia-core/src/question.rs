//! Question entity and validated creation input

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A persisted trivia question. Serializes to the wire "formatted" shape
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for creating a question.
///
/// Construction rejects missing and falsy fields (empty strings, zero
/// category or difficulty) so the storage layer only ever sees usable rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<i32>,
        difficulty: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: require_text("question", question)?,
            answer: require_text("answer", answer)?,
            category: require_nonzero("category", category)?,
            difficulty: require_nonzero("difficulty", difficulty)?,
        })
    }
}

fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

fn require_nonzero(field: &'static str, value: Option<i32>) -> Result<i32, ValidationError> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> (Option<String>, Option<String>, Option<i32>, Option<i32>) {
        (
            Some("What boxer's original name is Cassius Clay?".into()),
            Some("Muhammad Ali".into()),
            Some(4),
            Some(1),
        )
    }

    #[test]
    fn accepts_complete_input() {
        let (q, a, c, d) = full_input();
        let new = NewQuestion::new(q, a, c, d).unwrap();
        assert_eq!(new.answer, "Muhammad Ali");
        assert_eq!(new.category, 4);
    }

    #[test]
    fn rejects_missing_question() {
        let (_, a, c, d) = full_input();
        let err = NewQuestion::new(None, a, c, d).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "question" });
    }

    #[test]
    fn rejects_empty_answer() {
        let (q, _, c, d) = full_input();
        let err = NewQuestion::new(q, Some(String::new()), c, d).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "answer" });
    }

    #[test]
    fn rejects_zero_category() {
        let (q, a, _, d) = full_input();
        let err = NewQuestion::new(q, a, Some(0), d).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "category" });
    }

    #[test]
    fn rejects_missing_difficulty() {
        let (q, a, c, _) = full_input();
        let err = NewQuestion::new(q, a, c, None).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "difficulty" });
    }

    #[test]
    fn formatted_shape_field_names() {
        let question = Question {
            id: 9,
            question: "La Giaconda is better known as what?".into(),
            answer: "Mona Lisa".into(),
            category: 2,
            difficulty: 3,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "question": "La Giaconda is better known as what?",
                "answer": "Mona Lisa",
                "category": 2,
                "difficulty": 3,
            })
        );
    }
}
