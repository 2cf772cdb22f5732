use crate::constants::quiz_prompt::QUIZ_SYSTEM_PROMPT_TEMPLATE;

/// System/user message pair sent to the LLM provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    pub system: String,
    pub user: String,
}

/// Question and option counts selected for one input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTier {
    pub num_questions: u32,
    pub num_options: u32,
}

/// Selects a tier from the input length in characters. Thresholds are
/// exact and non-overlapping: <500, 500..1500, >=1500.
pub fn tier_for_length(char_count: usize) -> PromptTier {
    if char_count < 500 {
        PromptTier {
            num_questions: 3,
            num_options: 3,
        }
    } else if char_count < 1500 {
        PromptTier {
            num_questions: 5,
            num_options: 4,
        }
    } else {
        PromptTier {
            num_questions: 10,
            num_options: 5,
        }
    }
}

/// Builds the message pair for the given source text. Pure function,
/// no failure modes.
pub fn build_messages(text: &str) -> PromptMessages {
    let tier = tier_for_length(text.chars().count());
    let system = QUIZ_SYSTEM_PROMPT_TEMPLATE
        .replace("{num_questions}", &tier.num_questions.to_string())
        .replace("{num_options}", &tier.num_options.to_string());

    PromptMessages {
        system,
        user: text.to_string(),
    }
}
