// Parent functions and the polynomials used by the end-behavior tutorial
pub mod end_behavior;
pub mod parent;
pub mod tutorial_set;

pub use end_behavior::*;
pub use parent::catalog;
pub use tutorial_set::{TutorialFunction, tutorial_functions};

use std::fmt;
use std::str::FromStr;

use crate::ExplorerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
  Constant,
  Identity,
  Quadratic,
  Cubic,
  SquareRoot,
  Reciprocal,
  AbsoluteValue,
  Exponential,
  Logarithmic,
  Sine,
  Cosine,
  GreatestInteger,
}

impl FunctionId {
  pub const ALL: [FunctionId; 12] = [
    FunctionId::Constant,
    FunctionId::Identity,
    FunctionId::Quadratic,
    FunctionId::Cubic,
    FunctionId::SquareRoot,
    FunctionId::Reciprocal,
    FunctionId::AbsoluteValue,
    FunctionId::Exponential,
    FunctionId::Logarithmic,
    FunctionId::Sine,
    FunctionId::Cosine,
    FunctionId::GreatestInteger,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      FunctionId::Constant => "constant",
      FunctionId::Identity => "identity",
      FunctionId::Quadratic => "quadratic",
      FunctionId::Cubic => "cubic",
      FunctionId::SquareRoot => "square-root",
      FunctionId::Reciprocal => "reciprocal",
      FunctionId::AbsoluteValue => "absolute-value",
      FunctionId::Exponential => "exponential",
      FunctionId::Logarithmic => "logarithmic",
      FunctionId::Sine => "sine",
      FunctionId::Cosine => "cosine",
      FunctionId::GreatestInteger => "greatest-integer",
    }
  }
}

impl fmt::Display for FunctionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FunctionId {
  type Err = ExplorerError;

  /// Accepts `square-root`, `square_root` and `squareRoot` alike.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String = s
      .chars()
      .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
      .flat_map(char::to_lowercase)
      .collect();
    FunctionId::ALL
      .iter()
      .copied()
      .find(|id| id.as_str().replace('-', "") == normalized)
      .ok_or_else(|| ExplorerError::UnknownFunction(s.to_string()))
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeQuestion {
  pub question: &'static str,
  pub answer: &'static str,
  pub hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPointKind {
  Minimum,
  Maximum,
  Inflection,
}

impl KeyPointKind {
  pub fn short_label(&self) -> &'static str {
    match self {
      KeyPointKind::Minimum => "Min",
      KeyPointKind::Maximum => "Max",
      KeyPointKind::Inflection => "Inflection",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoint {
  pub kind: KeyPointKind,
  pub x: f64,
  pub y: f64,
}

impl KeyPoint {
  /// Label such as `Min (0, 0)`.
  pub fn label(&self) -> String {
    format!(
      "{} ({}, {})",
      self.kind.short_label(),
      crate::utils::format_number(self.x),
      crate::utils::format_number(self.y)
    )
  }
}

/// Positions the overlays can actually draw. An empty `x_intercepts`
/// suppresses the x-intercept overlay even when the descriptive text
/// mentions one (e.g. the greatest integer function's `[0, 1)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
  pub x_intercepts: &'static [f64],
  pub y_intercept: Option<f64>,
  pub key_points: &'static [KeyPoint],
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDescriptor {
  pub id: FunctionId,
  pub name: &'static str,
  pub expression: &'static str,
  /// Total over the reals; NaN outside the mathematical domain.
  pub eval: fn(f64) -> f64,
  pub domain: &'static str,
  pub range: &'static str,
  pub x_intercepts: &'static str,
  pub y_intercept: &'static str,
  pub extrema: Option<&'static str>,
  pub increasing: &'static str,
  pub decreasing: &'static str,
  pub end_behavior: EndBehavior,
  pub questions: &'static [PracticeQuestion],
  pub anchors: Anchors,
  /// Pole that sampling must never connect across.
  pub excluded_point: Option<f64>,
  pub sample_count: usize,
}

impl FunctionDescriptor {
  pub fn evaluate(&self, x: f64) -> f64 {
    (self.eval)(x)
  }

  pub fn end_behavior_text(&self) -> String {
    self.end_behavior.describe()
  }

  /// `Name: expression`, as listed by the control panel.
  pub fn title(&self) -> String {
    format!("{}: {}", self.name, self.expression)
  }
}

/// Looks up a catalog entry; every `FunctionId` has exactly one.
pub fn get_function(id: FunctionId) -> &'static FunctionDescriptor {
  let table = catalog();
  table
    .iter()
    .find(|f| f.id == id)
    .unwrap_or(&table[0])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_ids_in_several_spellings() {
    assert_eq!(
      "square-root".parse::<FunctionId>().unwrap(),
      FunctionId::SquareRoot
    );
    assert_eq!(
      "squareRoot".parse::<FunctionId>().unwrap(),
      FunctionId::SquareRoot
    );
    assert_eq!(
      "GREATEST_INTEGER".parse::<FunctionId>().unwrap(),
      FunctionId::GreatestInteger
    );
    assert!("tangent".parse::<FunctionId>().is_err());
  }

  #[test]
  fn every_id_has_a_catalog_entry() {
    for id in FunctionId::ALL {
      assert_eq!(get_function(id).id, id);
    }
    assert_eq!(catalog().len(), FunctionId::ALL.len());
  }

  #[test]
  fn key_point_label() {
    let p = KeyPoint {
      kind: KeyPointKind::Minimum,
      x: 0.0,
      y: 0.0,
    };
    assert_eq!(p.label(), "Min (0, 0)");
  }
}
