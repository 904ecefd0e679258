//! Quiz session controller.
//!
//! A [`QuizSession`] owns one pass through the question set: the shuffled
//! order, the user's selections, and the submission state. Scoring is a pure
//! function of the selections and the answer key.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// Where the session is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Answers can still be changed.
    Answering,
    /// A score submission is in flight.
    Submitting,
    /// The score was accepted by the store.
    Submitted { score: u32 },
}

/// How an option should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Selected,
    Unselected,
    /// After submission: this is the right answer.
    Correct,
    /// After submission: the user picked this and it is wrong.
    Incorrect,
    /// After submission: neither picked nor correct.
    Neutral,
}

/// A score ready to be sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub name: String,
    pub score: u32,
}

/// One question on the results screen: what was picked and what was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewItem<'a> {
    pub question: &'a Question,
    pub selected: Option<&'a str>,
}

impl ReviewItem<'_> {
    pub fn is_correct(&self) -> bool {
        self.selected.is_some_and(|s| self.question.is_correct(s))
    }

    pub fn correct_answer(&self) -> &str {
        &self.question.correct_answer
    }
}

/// Count the questions whose selection matches the correct option.
pub fn compute_score(selections: &HashMap<u32, String>, questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|question| {
            selections
                .get(&question.id)
                .is_some_and(|selected| question.is_correct(selected))
        })
        .map(|_| 1)
        .sum()
}

/// Shuffle the question order and, independently, each question's options.
pub fn shuffle_questions<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
    questions.shuffle(rng);
    for question in &mut questions {
        question.options.shuffle(rng);
    }
    questions
}

pub struct QuizSession {
    questions: Vec<Question>,
    selections: HashMap<u32, String>,
    status: SubmitStatus,
    error: Option<String>,
    current_index: usize,
    highlighted: usize,
}

impl QuizSession {
    /// Create a session with a fresh random ordering.
    pub fn new(questions: Vec<Question>) -> Self {
        Self::shuffled(questions, &mut rand::thread_rng())
    }

    /// Create a session shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        Self::in_order(shuffle_questions(questions, rng))
    }

    /// Create a session that presents the questions exactly as given.
    pub fn in_order(questions: Vec<Question>) -> Self {
        Self {
            questions,
            selections: HashMap::new(),
            status: SubmitStatus::Answering,
            error: None,
            current_index: 0,
            highlighted: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self, question_id: u32) -> Option<&str> {
        self.selections.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    /// Record the user's choice for a question, replacing any earlier one.
    ///
    /// Returns false when nothing was recorded: the session is no longer
    /// answering, the question is unknown, or it does not offer `option`.
    pub fn select_answer(&mut self, question_id: u32, option: &str) -> bool {
        if self.status != SubmitStatus::Answering {
            return false;
        }

        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            return false;
        };
        if !question.has_option(option) {
            return false;
        }

        self.selections.insert(question_id, option.to_string());
        true
    }

    pub fn compute_score(&self) -> u32 {
        compute_score(&self.selections, &self.questions)
    }

    /// True once every question has a selection and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.status == SubmitStatus::Answering && self.selections.len() == self.questions.len()
    }

    /// Start a submission, returning the score to send.
    pub fn begin_submit(&mut self, name: &str) -> Option<ScoreSubmission> {
        if !self.can_submit() {
            return None;
        }

        self.status = SubmitStatus::Submitting;
        self.error = None;
        Some(ScoreSubmission {
            name: name.to_string(),
            score: self.compute_score(),
        })
    }

    /// Apply the store's answer to an in-flight submission.
    pub fn complete_submit(&mut self, result: Result<(), String>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }

        match result {
            Ok(()) => {
                self.status = SubmitStatus::Submitted {
                    score: self.compute_score(),
                };
            }
            Err(message) => {
                self.status = SubmitStatus::Answering;
                self.error = Some(message);
            }
        }
    }

    /// Clear every answer for another attempt. The question order is kept.
    pub fn retry(&mut self) {
        self.selections.clear();
        self.status = SubmitStatus::Answering;
        self.error = None;
        self.current_index = 0;
        self.highlighted = 0;
    }

    pub fn is_perfect(&self) -> bool {
        !self.questions.is_empty() && self.compute_score() as usize == self.questions.len()
    }

    /// Every question in presentation order with the pick and the answer key.
    pub fn review(&self) -> Vec<ReviewItem<'_>> {
        self.questions
            .iter()
            .map(|question| ReviewItem {
                question,
                selected: self.selection(question.id),
            })
            .collect()
    }

    pub fn feedback(&self) -> &'static str {
        if self.is_perfect() {
            "Perfect score!"
        } else {
            "Keep practicing!"
        }
    }

    /// Classify an option for display.
    pub fn option_mark(&self, question_id: u32, option: &str) -> OptionMark {
        let selected = self.selection(question_id) == Some(option);

        if !matches!(self.status, SubmitStatus::Submitted { .. }) {
            return if selected {
                OptionMark::Selected
            } else {
                OptionMark::Unselected
            };
        }

        let correct = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .is_some_and(|q| q.is_correct(option));

        if correct {
            OptionMark::Correct
        } else if selected {
            OptionMark::Incorrect
        } else {
            OptionMark::Neutral
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted
    }

    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.highlight_current_selection();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.highlight_current_selection();
        }
    }

    pub fn highlight_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    /// Select the highlighted option of the current question.
    pub fn select_highlighted(&mut self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let Some(option) = question.options.get(self.highlighted).cloned() else {
            return false;
        };
        let id = question.id;
        self.select_answer(id, &option)
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    // Move the cursor onto the already chosen option when revisiting.
    fn highlight_current_selection(&mut self) {
        self.highlighted = self
            .current_question()
            .and_then(|q| {
                let selected = self.selections.get(&q.id)?;
                q.options.iter().position(|o| o == selected)
            })
            .unwrap_or(0);
    }
}
