//! Guided end-behavior tutorial.
//!
//! Each cycle studies one end of a randomly drawn polynomial and walks the
//! student through four questions:
//!
//! 1. which way x heads at that end (`-∞` or `∞`),
//! 2. which end of the graph that is,
//! 3. which way f(x) heads there,
//! 4. the completed statement `As x → _, f(x) → _`.
//!
//! Wrong answers leave the step unchanged. After three completed cycles the
//! tutorial can be marked complete; from there only a full restart is
//! possible.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ExplorerError;
use crate::feedback::Feedback;
use crate::functions::{Direction, End, TutorialFunction, tutorial_functions};
use crate::graph::EndMarkers;

/// Completed cycles needed before the tutorial can be finished.
pub const REQUIRED_SUCCESSES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TutorialStep {
  SelectXDirection,
  SelectEnd,
  SelectYDirection,
  CompleteEndBehavior,
  ShowSummary,
  Completed,
}

impl fmt::Display for TutorialStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      TutorialStep::SelectXDirection => "SelectXDirection",
      TutorialStep::SelectEnd => "SelectEnd",
      TutorialStep::SelectYDirection => "SelectYDirection",
      TutorialStep::CompleteEndBehavior => "CompleteEndBehavior",
      TutorialStep::ShowSummary => "ShowSummary",
      TutorialStep::Completed => "Completed",
    };
    f.write_str(name)
  }
}

/// Chooses the function index and end studied by a new cycle.
pub trait CyclePicker {
  fn pick(&mut self, function_count: usize) -> (usize, End);
}

/// Uniform choice from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
  rng: R,
}

impl<R: Rng> RandomPicker<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }
}

impl RandomPicker<ChaCha8Rng> {
  pub fn seeded(seed: u64) -> Self {
    Self::new(ChaCha8Rng::seed_from_u64(seed))
  }

  pub fn from_entropy() -> Self {
    Self::new(ChaCha8Rng::from_entropy())
  }
}

impl<R: Rng> CyclePicker for RandomPicker<R> {
  fn pick(&mut self, function_count: usize) -> (usize, End) {
    let index = self.rng.gen_range(0..function_count);
    let end = if self.rng.gen_bool(0.5) {
      End::Left
    } else {
      End::Right
    };
    (index, end)
  }
}

/// Answers recorded so far in the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selections {
  pub x_direction: Option<Direction>,
  pub end: Option<End>,
  pub y_direction: Option<Direction>,
  pub statement_x: Option<Direction>,
  pub statement_fx: Option<Direction>,
}

/// What to do from the summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
  TryAnother,
  Complete,
}

impl FromStr for SummaryAction {
  type Err = ExplorerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "another" | "try another" => Ok(SummaryAction::TryAnother),
      "complete" => Ok(SummaryAction::Complete),
      _ => Err(ExplorerError::InvalidToken(s.to_string())),
    }
  }
}

/// Content of the summary step.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
  pub end: End,
  pub statement: String,
  pub reasons: [String; 2],
  pub can_complete: bool,
}

pub struct Tutorial<P: CyclePicker = RandomPicker<ChaCha8Rng>> {
  picker: P,
  functions: &'static [TutorialFunction],
  function: usize,
  end: End,
  step: TutorialStep,
  selections: Selections,
  correct_choices: Vec<String>,
  feedback: Option<Feedback>,
  is_correct: Option<bool>,
  successes: u32,
}

impl Tutorial {
  pub fn new() -> Self {
    Self::with_picker(RandomPicker::from_entropy())
  }

  pub fn seeded(seed: u64) -> Self {
    Self::with_picker(RandomPicker::seeded(seed))
  }
}

impl Default for Tutorial {
  fn default() -> Self {
    Self::new()
  }
}

impl<P: CyclePicker> Tutorial<P> {
  /// Starts at the first cycle.
  pub fn with_picker(picker: P) -> Self {
    let mut tutorial = Self {
      picker,
      functions: tutorial_functions(),
      function: 0,
      end: End::Left,
      step: TutorialStep::SelectXDirection,
      selections: Selections::default(),
      correct_choices: Vec::new(),
      feedback: None,
      is_correct: None,
      successes: 0,
    };
    tutorial.begin_cycle();
    tutorial
  }

  pub fn step(&self) -> TutorialStep {
    self.step
  }

  pub fn current_function(&self) -> &'static TutorialFunction {
    &self.functions[self.function]
  }

  /// The end studied in this cycle.
  pub fn end(&self) -> End {
    self.end
  }

  pub fn selections(&self) -> Selections {
    self.selections
  }

  pub fn correct_choices(&self) -> &[String] {
    &self.correct_choices
  }

  pub fn feedback(&self) -> Option<&Feedback> {
    self.feedback.as_ref()
  }

  pub fn is_correct(&self) -> Option<bool> {
    self.is_correct
  }

  pub fn successes(&self) -> u32 {
    self.successes
  }

  pub fn can_complete(&self) -> bool {
    self.step == TutorialStep::ShowSummary
      && self.successes >= REQUIRED_SUCCESSES
  }

  /// Question text for the current step.
  pub fn prompt(&self) -> String {
    let x = self.end.x_direction();
    match self.step {
      TutorialStep::SelectXDirection => {
        format!("Which direction is the graph going in for x → {x}?")
      }
      TutorialStep::SelectEnd => {
        format!("Select the end of the graph that represents x → {x}.")
      }
      TutorialStep::SelectYDirection => {
        format!("As x → {x}, which direction is the graph going?")
      }
      TutorialStep::CompleteEndBehavior => {
        "Complete the end behavior statement: As x → _, f(x) → _".to_string()
      }
      TutorialStep::ShowSummary => format!(
        "Great job! Summary of {} end behavior.",
        self.end
      ),
      TutorialStep::Completed => "Tutorial completed!".to_string(),
    }
  }

  pub fn select_x_direction(
    &mut self,
    direction: Direction,
  ) -> Result<bool, ExplorerError> {
    self.expect_step(TutorialStep::SelectXDirection, direction.token())?;
    self.selections.x_direction = Some(direction);
    if direction == self.end.x_direction() {
      self.advance(
        TutorialStep::SelectEnd,
        format!("X approaches {direction}"),
        "Correct! Now select which end of the graph we're examining.",
      );
      Ok(true)
    } else {
      self.reject(format!(
        "Not quite. We're focusing on the {} end of the graph. Try again!",
        self.end.as_str().to_uppercase()
      ));
      Ok(false)
    }
  }

  pub fn select_end(&mut self, end: End) -> Result<bool, ExplorerError> {
    self.expect_step(TutorialStep::SelectEnd, end.as_str())?;
    self.selections.end = Some(end);
    if end == self.end {
      self.advance(
        TutorialStep::SelectYDirection,
        format!("Selected the {end} end"),
        "Correct! Now determine which direction the function values go at \
         this end.",
      );
      Ok(true)
    } else {
      self.reject(format!(
        "Not quite. Look at the {} end of the graph and try again!",
        self.end
      ));
      Ok(false)
    }
  }

  pub fn select_y_direction(
    &mut self,
    direction: Direction,
  ) -> Result<bool, ExplorerError> {
    self.expect_step(TutorialStep::SelectYDirection, direction.token())?;
    self.selections.y_direction = Some(direction);
    if direction == self.current_function().expected(self.end) {
      self.advance(
        TutorialStep::CompleteEndBehavior,
        format!("f(x) approaches {direction}"),
        "Correct! Now complete the end behavior statement.",
      );
      Ok(true)
    } else {
      self.reject(format!(
        "Not quite. Look at the direction the function is heading as x \
         approaches {}.",
        self.end.x_direction()
      ));
      Ok(false)
    }
  }

  /// Both fields must be chosen; each is compared by strict equality.
  pub fn submit_end_behavior(
    &mut self,
    x: Option<Direction>,
    fx: Option<Direction>,
  ) -> Result<bool, ExplorerError> {
    let input = format!(
      "{} / {}",
      x.map_or("_", |d| d.token()),
      fx.map_or("_", |d| d.token())
    );
    self.expect_step(TutorialStep::CompleteEndBehavior, &input)?;
    self.selections.statement_x = x;
    self.selections.statement_fx = fx;
    let (Some(x), Some(fx)) = (x, fx) else {
      self.reject("Please select a value for both x and f(x).".to_string());
      return Ok(false);
    };
    let expected_x = self.end.x_direction();
    let expected_fx = self.current_function().expected(self.end);
    if x == expected_x && fx == expected_fx {
      self.successes += 1;
      let message = format!(
        "Excellent! You've correctly identified the {} end behavior of this \
         function.",
        self.end
      );
      self.advance(
        TutorialStep::ShowSummary,
        format!("Complete end behavior: As x → {x}, f(x) → {fx}"),
        &message,
      );
      Ok(true)
    } else {
      self.reject(
        "That's not quite right. Review your selections and try again."
          .to_string(),
      );
      Ok(false)
    }
  }

  pub fn summary(&self) -> Option<Summary> {
    if self.step != TutorialStep::ShowSummary {
      return None;
    }
    let f = self.current_function();
    Some(Summary {
      end: self.end,
      statement: format!(
        "As x → {}, f(x) → {}",
        self.end.x_direction(),
        f.expected(self.end)
      ),
      reasons: f.explanation(),
      can_complete: self.can_complete(),
    })
  }

  /// "Try another example": a fresh cycle from the summary.
  pub fn try_another(&mut self) -> Result<(), ExplorerError> {
    self.expect_step(TutorialStep::ShowSummary, "try another")?;
    self.begin_cycle();
    Ok(())
  }

  pub fn finish_summary(
    &mut self,
    action: SummaryAction,
  ) -> Result<(), ExplorerError> {
    match action {
      SummaryAction::TryAnother => self.try_another(),
      SummaryAction::Complete => self.complete(),
    }
  }

  pub fn complete(&mut self) -> Result<(), ExplorerError> {
    self.expect_step(TutorialStep::ShowSummary, "complete")?;
    if self.successes < REQUIRED_SUCCESSES {
      return Err(ExplorerError::UnexpectedInput {
        step: format!(
          "{} ({}/{REQUIRED_SUCCESSES} examples)",
          self.step, self.successes
        ),
        input: "complete".to_string(),
      });
    }
    self.step = TutorialStep::Completed;
    self.is_correct = None;
    self.feedback = Some(Feedback::success(
      "Congratulations! You've completed the end behavior tutorial!",
    ));
    debug!("tutorial completed after {} examples", self.successes);
    Ok(())
  }

  /// Full restart from the completed state.
  pub fn restart(&mut self) -> Result<(), ExplorerError> {
    self.expect_step(TutorialStep::Completed, "restart")?;
    self.successes = 0;
    self.begin_cycle();
    Ok(())
  }

  /// Which end markers the tutorial graph shows at this step.
  pub fn end_markers(&self) -> EndMarkers {
    let revealed = self.step >= TutorialStep::SelectEnd;
    let highlight = if self.step >= TutorialStep::SelectYDirection {
      self.selections.end
    } else {
      None
    };
    EndMarkers {
      show_left: self.end == End::Left || revealed,
      show_right: self.end == End::Right || revealed,
      highlight,
    }
  }

  fn begin_cycle(&mut self) {
    let (index, end) = self.picker.pick(self.functions.len());
    self.function = index.min(self.functions.len() - 1);
    self.end = end;
    self.step = TutorialStep::SelectXDirection;
    self.selections = Selections::default();
    self.correct_choices.clear();
    self.feedback = None;
    self.is_correct = None;
    debug!(
      "tutorial cycle: {} ({} end)",
      self.current_function().expression,
      self.end
    );
  }

  fn expect_step(
    &self,
    expected: TutorialStep,
    input: &str,
  ) -> Result<(), ExplorerError> {
    if self.step == expected {
      Ok(())
    } else {
      Err(ExplorerError::UnexpectedInput {
        step: self.step.to_string(),
        input: input.to_string(),
      })
    }
  }

  fn advance(&mut self, next: TutorialStep, choice: String, message: &str) {
    debug!("tutorial {} -> {next}", self.step);
    self.step = next;
    self.correct_choices.push(choice);
    self.is_correct = Some(true);
    self.feedback = Some(Feedback::success(message));
  }

  fn reject(&mut self, message: String) {
    debug!("tutorial {}: wrong answer", self.step);
    self.is_correct = Some(false);
    self.feedback = Some(Feedback::error(message));
  }
}
