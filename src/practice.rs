//! Per-function practice questions with hints.

use log::debug;

use crate::feedback::Feedback;
use crate::functions::{FunctionId, PracticeQuestion, get_function};

pub const EMPTY_ANSWER: &str = "Please enter an answer before checking.";
pub const CORRECT_ANSWER: &str = "Correct! Well done.";
pub const WRONG_ANSWER: &str =
  "That's not quite right. Try again or check the hint.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
  function: FunctionId,
  index: usize,
  hint_shown: bool,
  feedback: Option<Feedback>,
}

impl PracticeSession {
  pub fn new(function: FunctionId) -> Self {
    Self {
      function,
      index: 0,
      hint_shown: false,
      feedback: None,
    }
  }

  pub fn function(&self) -> FunctionId {
    self.function
  }

  /// Switching functions starts over at the first question.
  pub fn set_function(&mut self, function: FunctionId) {
    *self = Self::new(function);
  }

  pub fn question(&self) -> &'static PracticeQuestion {
    let questions = get_function(self.function).questions;
    &questions[self.index % questions.len()]
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn question_count(&self) -> usize {
    get_function(self.function).questions.len()
  }

  pub fn hint(&self) -> Option<&'static str> {
    self.hint_shown.then(|| self.question().hint)
  }

  pub fn toggle_hint(&mut self) -> bool {
    self.hint_shown = !self.hint_shown;
    self.hint_shown
  }

  pub fn feedback(&self) -> Option<&Feedback> {
    self.feedback.as_ref()
  }

  /// Case-insensitive, whitespace-trimmed comparison. An empty answer gets
  /// a transient notice and leaves the current feedback alone.
  pub fn check(&mut self, answer: &str) -> Feedback {
    let answer = answer.trim();
    if answer.is_empty() {
      return Feedback::error(EMPTY_ANSWER);
    }
    let expected = self.question().answer;
    let feedback = if answer.to_lowercase() == expected.to_lowercase() {
      Feedback::success(CORRECT_ANSWER)
    } else {
      Feedback::error(WRONG_ANSWER)
    };
    debug!(
      "practice {} q{}: {:?}",
      self.function, self.index, feedback.kind
    );
    self.feedback = Some(feedback.clone());
    feedback
  }

  /// Advance to the next question, wrapping around.
  pub fn next_question(&mut self) -> &'static PracticeQuestion {
    self.index = (self.index + 1) % self.question_count();
    self.hint_shown = false;
    self.feedback = None;
    self.question()
  }
}
