mod loader;
mod seed;

pub use loader::{load_questions_from_json, parse_questions, validate_questions, LoadError};
pub use seed::daa_questions;
