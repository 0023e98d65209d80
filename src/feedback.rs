use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
  Success,
  Error,
}

/// Inline message shown under a question or tutorial step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
  pub kind: FeedbackKind,
  pub message: String,
}

impl Feedback {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      kind: FeedbackKind::Success,
      message: message.into(),
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      kind: FeedbackKind::Error,
      message: message.into(),
    }
  }

  pub fn is_success(&self) -> bool {
    self.kind == FeedbackKind::Success
  }
}

impl fmt::Display for Feedback {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}
