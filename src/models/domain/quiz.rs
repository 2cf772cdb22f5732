use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// Canonical quiz shape: every field is guaranteed present after
/// normalization, so renderers and clients never see a partial quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub name: String,
    pub questions: Vec<QuizQuestion>,
}
