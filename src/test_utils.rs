#[cfg(test)]
pub mod fixtures {
    use std::{path::PathBuf, sync::Arc, time::Duration};

    use crate::{
        app_state::AppState,
        config::Config,
        models::domain::{Quiz, QuizOption, QuizQuestion},
        render::pdf::PdfRenderer,
        services::{extractor::PageExtractor, generator::QuizGenerator},
    };

    /// A small valid quiz used across renderer and handler tests.
    pub fn sample_quiz() -> Quiz {
        Quiz {
            name: "Тест по Rust".to_string(),
            questions: vec![
                QuizQuestion {
                    question: "Что делает borrow checker?".to_string(),
                    options: vec![
                        QuizOption {
                            answer: "Проверяет владение".to_string(),
                            correct: true,
                        },
                        QuizOption {
                            answer: "Собирает мусор".to_string(),
                            correct: false,
                        },
                        QuizOption {
                            answer: "Компилирует код".to_string(),
                            correct: false,
                        },
                    ],
                },
                QuizQuestion {
                    question: "What does cargo build do?".to_string(),
                    options: vec![
                        QuizOption {
                            answer: "Compiles the crate".to_string(),
                            correct: true,
                        },
                        QuizOption {
                            answer: "Publishes the crate".to_string(),
                            correct: false,
                        },
                    ],
                },
            ],
        }
    }

    pub fn sample_quiz_json() -> serde_json::Value {
        serde_json::to_value(sample_quiz()).expect("fixture should serialize")
    }

    /// Locates a TTF font on the test machine, preferring ones with
    /// Cyrillic coverage. Tests needing a real font skip when this
    /// returns None.
    pub fn test_font_path() -> Option<PathBuf> {
        let candidates = [
            "fonts/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/Library/Fonts/Arial Unicode.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ];

        candidates
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    /// AppState with a caller-supplied generator and a PDF renderer
    /// backed by a real font when one is available.
    pub fn state_with_generator(generator: impl QuizGenerator + 'static) -> AppState {
        let config = Config::test_config();
        let extractor = PageExtractor::new(Duration::from_secs(2)).expect("client should build");
        let pdf_renderer = match test_font_path() {
            Some(path) => PdfRenderer::from_font_file(path).expect("test font should load"),
            None => PdfRenderer::from_font_bytes(Vec::new()),
        };

        AppState::with_services(
            config,
            Arc::new(generator),
            Arc::new(extractor),
            Arc::new(pdf_renderer),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].options.len(), 3);
        assert!(quiz.questions.iter().all(|q| !q.question.is_empty()));
    }

    #[test]
    fn test_fixtures_sample_quiz_json_shape() {
        let json = sample_quiz_json();
        assert!(json["name"].is_string());
        assert!(json["questions"].is_array());
    }
}
