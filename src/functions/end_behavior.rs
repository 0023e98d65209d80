use std::fmt;
use std::str::FromStr;

use crate::ExplorerError;
use crate::utils::format_number;

/// Where x heads when describing one end of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approach {
  NegativeInfinity,
  PositiveInfinity,
  /// One-sided approach to a domain boundary, e.g. `0⁺` for `ln(x)`.
  RightOf(f64),
}

impl fmt::Display for Approach {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Approach::NegativeInfinity => f.write_str("-∞"),
      Approach::PositiveInfinity => f.write_str("∞"),
      Approach::RightOf(a) => write!(f, "{}⁺", format_number(*a)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndTarget {
  Finite(f64),
  PositiveInfinity,
  NegativeInfinity,
  Periodic,
}

impl fmt::Display for EndTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EndTarget::Finite(v) => f.write_str(&format_number(*v)),
      EndTarget::PositiveInfinity => f.write_str("∞"),
      EndTarget::NegativeInfinity => f.write_str("-∞"),
      EndTarget::Periodic => f.write_str("oscillates"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
  pub approach: Approach,
  pub target: EndTarget,
}

impl Limit {
  fn sentence(&self) -> String {
    sentence(&self.approach.to_string(), self.target)
  }
}

fn sentence(approach: &str, target: EndTarget) -> String {
  match target {
    EndTarget::Periodic => {
      format!("As x → {approach}, f(x) oscillates without a limit")
    }
    target => format!("As x → {approach}, f(x) → {target}"),
  }
}

/// Left and right end behavior. `None` means the graph has no such end
/// (e.g. `√x` is not defined for negative x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndBehavior {
  pub left: Option<Limit>,
  pub right: Option<Limit>,
}

impl EndBehavior {
  /// Ends at x → -∞ and x → ∞ with the given targets.
  pub const fn both(left: EndTarget, right: EndTarget) -> Self {
    EndBehavior {
      left: Some(Limit {
        approach: Approach::NegativeInfinity,
        target: left,
      }),
      right: Some(Limit {
        approach: Approach::PositiveInfinity,
        target: right,
      }),
    }
  }

  pub fn limit(&self, end: End) -> Option<Limit> {
    match end {
      End::Left => self.left,
      End::Right => self.right,
    }
  }

  /// Display sentence, e.g. `As x → ±∞, f(x) → ∞` or
  /// `As x → ∞, f(x) → ∞; As x → -∞, f(x) → 0`.
  pub fn describe(&self) -> String {
    match (self.left, self.right) {
      (Some(l), Some(r))
        if l.approach == Approach::NegativeInfinity
          && r.approach == Approach::PositiveInfinity
          && l.target == r.target =>
      {
        sentence("±∞", r.target)
      }
      (Some(l), Some(r)) => format!("{}; {}", r.sentence(), l.sentence()),
      (None, Some(r)) => r.sentence(),
      (Some(l), None) => l.sentence(),
      (None, None) => "No end behavior".to_string(),
    }
  }
}

/// Which end of the graph is under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
  Left,
  Right,
}

impl End {
  /// The direction x heads toward at this end.
  pub fn x_direction(&self) -> Direction {
    match self {
      End::Left => Direction::NegativeInfinity,
      End::Right => Direction::PositiveInfinity,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      End::Left => "left",
      End::Right => "right",
    }
  }
}

impl fmt::Display for End {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for End {
  type Err = ExplorerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "left" | "l" => Ok(End::Left),
      "right" | "r" => Ok(End::Right),
      _ => Err(ExplorerError::InvalidToken(s.to_string())),
    }
  }
}

/// The closed set of answer tokens the tutorial accepts: `-∞` and `∞`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  NegativeInfinity,
  PositiveInfinity,
}

impl Direction {
  pub fn token(&self) -> &'static str {
    match self {
      Direction::NegativeInfinity => "-∞",
      Direction::PositiveInfinity => "∞",
    }
  }

  pub fn opposite(&self) -> Direction {
    match self {
      Direction::NegativeInfinity => Direction::PositiveInfinity,
      Direction::PositiveInfinity => Direction::NegativeInfinity,
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.token())
  }
}

impl FromStr for Direction {
  type Err = ExplorerError;

  /// `-inf` and `inf` are accepted as keyboard spellings of the tokens.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "-∞" | "-inf" => Ok(Direction::NegativeInfinity),
      "∞" | "+∞" | "inf" | "+inf" => Ok(Direction::PositiveInfinity),
      other => Err(ExplorerError::InvalidToken(other.to_string())),
    }
  }
}

impl From<Direction> for EndTarget {
  fn from(d: Direction) -> Self {
    match d {
      Direction::NegativeInfinity => EndTarget::NegativeInfinity,
      Direction::PositiveInfinity => EndTarget::PositiveInfinity,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn symmetric_ends_collapse() {
    let eb =
      EndBehavior::both(EndTarget::PositiveInfinity, EndTarget::PositiveInfinity);
    assert_eq!(eb.describe(), "As x → ±∞, f(x) → ∞");
  }

  #[test]
  fn asymmetric_ends_list_right_first() {
    let eb = EndBehavior::both(EndTarget::Finite(0.0), EndTarget::PositiveInfinity);
    assert_eq!(eb.describe(), "As x → ∞, f(x) → ∞; As x → -∞, f(x) → 0");
  }

  #[test]
  fn one_sided_boundary() {
    let eb = EndBehavior {
      left: Some(Limit {
        approach: Approach::RightOf(0.0),
        target: EndTarget::NegativeInfinity,
      }),
      right: Some(Limit {
        approach: Approach::PositiveInfinity,
        target: EndTarget::PositiveInfinity,
      }),
    };
    assert_eq!(eb.describe(), "As x → ∞, f(x) → ∞; As x → 0⁺, f(x) → -∞");
  }

  #[test]
  fn periodic_ends() {
    let eb = EndBehavior::both(EndTarget::Periodic, EndTarget::Periodic);
    assert_eq!(eb.describe(), "As x → ±∞, f(x) oscillates without a limit");
  }

  #[test]
  fn direction_tokens_are_a_closed_set() {
    assert_eq!("-∞".parse::<Direction>().unwrap(), Direction::NegativeInfinity);
    assert_eq!("∞".parse::<Direction>().unwrap(), Direction::PositiveInfinity);
    assert_eq!("inf".parse::<Direction>().unwrap(), Direction::PositiveInfinity);
    assert!("infinity".parse::<Direction>().is_err());
    assert!("".parse::<Direction>().is_err());
  }

  #[test]
  fn end_x_direction() {
    assert_eq!(End::Left.x_direction(), Direction::NegativeInfinity);
    assert_eq!(End::Right.x_direction(), Direction::PositiveInfinity);
    assert_eq!("Right".parse::<End>().unwrap(), End::Right);
  }
}
