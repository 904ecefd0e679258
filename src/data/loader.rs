use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Question;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Error raised while loading a question set.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not a valid JSON question list.
    Parse(serde_json::Error),
    /// The file contained no questions.
    Empty,
    /// Two questions share the same id.
    DuplicateId(u32),
    /// A question offers fewer than [`MIN_OPTIONS`] distinct options.
    TooFewOptions(u32),
    /// A question's correct answer is not one of its options.
    MissingCorrectAnswer(u32),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read question file: {}", e),
            LoadError::Parse(e) => write!(f, "invalid question file: {}", e),
            LoadError::Empty => write!(f, "question file must contain at least one question"),
            LoadError::DuplicateId(id) => write!(f, "question id {} is used more than once", id),
            LoadError::TooFewOptions(id) => write!(
                f,
                "question {} must have at least {} distinct options",
                id, MIN_OPTIONS
            ),
            LoadError::MissingCorrectAnswer(id) => {
                write!(f, "question {} lists a correct answer that is not an option", id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load and validate a question set from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let questions = parse_questions(&json_content)?;
    log::info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse and validate a JSON question list.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate_questions(&questions)?;
    Ok(questions)
}

/// Check the invariants every question set must hold.
pub fn validate_questions(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id) {
            return Err(LoadError::DuplicateId(question.id));
        }

        let distinct: HashSet<&str> = question.options.iter().map(String::as_str).collect();
        if distinct.len() < MIN_OPTIONS || distinct.len() != question.options.len() {
            return Err(LoadError::TooFewOptions(question.id));
        }

        if !question.has_option(&question.correct_answer) {
            return Err(LoadError::MissingCorrectAnswer(question.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::daa_questions;

    #[test]
    fn test_seed_questions_are_valid() {
        let questions = daa_questions();
        assert_eq!(questions.len(), 10);
        assert!(validate_questions(&questions).is_ok());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "prompt": "a", "options": ["x", "y"], "correct_answer": "x"},
            {"id": 1, "prompt": "b", "options": ["x", "y"], "correct_answer": "y"}
        ]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::DuplicateId(1))));
    }

    #[test]
    fn test_correct_answer_must_be_an_option() {
        let json = r#"[{"id": 4, "prompt": "a", "options": ["x", "y"], "correct_answer": "z"}]"#;
        assert!(matches!(
            parse_questions(json),
            Err(LoadError::MissingCorrectAnswer(4))
        ));
    }

    #[test]
    fn test_repeated_options_are_rejected() {
        let json = r#"[{"id": 2, "prompt": "a", "options": ["x", "x"], "correct_answer": "x"}]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::TooFewOptions(2))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "question": "2 + 2?", "options": ["3", "4"], "correctAnswer": "4"}}]"#
        )
        .unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "4");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_questions_from_json("/definitely/not/here.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
