use serde::{Deserialize, Serialize};

/// One submitted quiz result, as stored and served by the score store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// How a leaderboard row is labelled next to its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

impl Performance {
    /// Grade a score against the number of questions in the quiz.
    pub fn grade(score: u32, total: u32) -> Self {
        if total > 0 && score >= total {
            return Self::Perfect;
        }

        let percentage = if total > 0 { score * 100 / total } else { 0 };

        match percentage {
            80..=100 => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Excellent => "Excellent!",
            Self::Good => "Good!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}
