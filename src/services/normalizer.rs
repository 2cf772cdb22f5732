use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizOption, QuizQuestion},
};

pub const DEFAULT_QUIZ_NAME: &str = "Тест без названия";
pub const DEFAULT_QUESTION_TEXT: &str = "Вопрос без текста";
pub const DEFAULT_OPTION_TEXT: &str = "Вариант без текста";

/// What to do when the top-level `questions` key is absent or not an
/// array. The generation endpoint rejects such payloads; the render
/// endpoints treat them as an empty quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingQuestions {
    Reject,
    DefaultEmpty,
}

/// Coerces an arbitrary JSON value into the canonical quiz shape,
/// filling defaults for every missing or malformed field. The only
/// unrecoverable shapes are a non-object top level and, under
/// `Reject`, a missing/non-array `questions` key. Idempotent.
pub fn normalize_quiz(value: Value, missing: MissingQuestions) -> AppResult<Quiz> {
    let Value::Object(map) = value else {
        return Err(AppError::InvalidFormat(
            "quiz payload is not a JSON object".to_string(),
        ));
    };

    let name = match map.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_QUIZ_NAME.to_string(),
    };

    let questions = match map.get("questions") {
        Some(Value::Array(items)) => items.iter().map(normalize_question).collect(),
        _ => match missing {
            MissingQuestions::Reject => {
                return Err(AppError::InvalidFormat(
                    "quiz questions are missing or not a list".to_string(),
                ))
            }
            MissingQuestions::DefaultEmpty => Vec::new(),
        },
    };

    Ok(Quiz { name, questions })
}

fn normalize_question(value: &Value) -> QuizQuestion {
    let question = match value.get("question").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DEFAULT_QUESTION_TEXT.to_string(),
    };

    let options = match value.get("options") {
        Some(Value::Array(items)) => items.iter().map(normalize_option).collect(),
        _ => Vec::new(),
    };

    QuizQuestion { question, options }
}

fn normalize_option(value: &Value) -> QuizOption {
    let answer = match value.get("answer").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => DEFAULT_OPTION_TEXT.to_string(),
    };
    let correct = value.get("correct").and_then(Value::as_bool).unwrap_or(false);

    QuizOption { answer, correct }
}
