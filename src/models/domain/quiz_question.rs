use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
}

/// A single answer choice. `correct` is what the model claims, not a
/// verified fact: exactly-one-correct-per-question is requested in the
/// prompt but never enforced here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub answer: String,
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_with_options_preserves_order() {
        let question = QuizQuestion {
            question: "Which option is second?".to_string(),
            options: vec![
                QuizOption {
                    answer: "first".to_string(),
                    correct: false,
                },
                QuizOption {
                    answer: "second".to_string(),
                    correct: true,
                },
                QuizOption {
                    answer: "third".to_string(),
                    correct: false,
                },
            ],
        };

        assert_eq!(question.options[1].answer, "second");
        assert!(question.options[1].correct);
    }

    #[test]
    fn option_deserializes_from_llm_style_json() {
        let option: QuizOption =
            serde_json::from_str(r#"{"answer": "Вариант 1", "correct": false}"#)
                .expect("option should deserialize");

        assert_eq!(option.answer, "Вариант 1");
        assert!(!option.correct);
    }
}
