use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// The correct answer is stored as the option text rather than an index, so
/// shuffling the options never invalidates the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    /// Link to study material for this topic.
    #[serde(default)]
    pub resource: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
