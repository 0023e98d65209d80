use super::{Direction, End};

/// A polynomial whose end behavior the tutorial asks about. The expected
/// answers are authored alongside the formula.
#[derive(Debug, Clone, Copy)]
pub struct TutorialFunction {
  pub name: &'static str,
  pub expression: &'static str,
  pub eval: fn(f64) -> f64,
  pub degree: u32,
  pub leading: f64,
  pub left: Direction,
  pub right: Direction,
}

impl TutorialFunction {
  pub fn evaluate(&self, x: f64) -> f64 {
    (self.eval)(x)
  }

  /// Where f(x) heads at the given end.
  pub fn expected(&self, end: End) -> Direction {
    match end {
      End::Left => self.left,
      End::Right => self.right,
    }
  }

  /// One-line reasons shown in the summary step.
  pub fn explanation(&self) -> [String; 2] {
    let parity = if self.degree % 2 == 0 {
      "Even-degree polynomials have the same behavior at both ends"
    } else {
      "Odd-degree polynomials have opposite behavior at each end"
    };
    let sign = if self.leading > 0.0 {
      "Positive leading coefficient means the highest-degree term is \
       positive for large inputs"
    } else {
      "Negative leading coefficient means the highest-degree term is \
       negative for large inputs"
    };
    [parity.to_string(), sign.to_string()]
  }
}

fn cubic_mixed(x: f64) -> f64 {
  x.powi(3) - 2.0 * x.powi(2) + 3.0 * x - 1.0
}

fn negative_quartic(x: f64) -> f64 {
  -x.powi(4) + 3.0 * x.powi(2) - 2.0
}

fn upward_quadratic(x: f64) -> f64 {
  2.0 * x.powi(2) - 4.0 * x + 1.0
}

fn negative_cubic(x: f64) -> f64 {
  -x.powi(3) + 4.0 * x
}

fn quintic(x: f64) -> f64 {
  0.01 * x.powi(5) - 0.5 * x.powi(3) + x
}

static TUTORIAL_FUNCTIONS: [TutorialFunction; 5] = [
  TutorialFunction {
    name: "Cubic Polynomial",
    expression: "f(x) = x³ − 2x² + 3x − 1",
    eval: cubic_mixed,
    degree: 3,
    leading: 1.0,
    left: Direction::NegativeInfinity,
    right: Direction::PositiveInfinity,
  },
  TutorialFunction {
    name: "Quartic Polynomial",
    expression: "f(x) = −x⁴ + 3x² − 2",
    eval: negative_quartic,
    degree: 4,
    leading: -1.0,
    left: Direction::NegativeInfinity,
    right: Direction::NegativeInfinity,
  },
  TutorialFunction {
    name: "Quadratic Polynomial",
    expression: "f(x) = 2x² − 4x + 1",
    eval: upward_quadratic,
    degree: 2,
    leading: 2.0,
    left: Direction::PositiveInfinity,
    right: Direction::PositiveInfinity,
  },
  TutorialFunction {
    name: "Negative Cubic",
    expression: "f(x) = −x³ + 4x",
    eval: negative_cubic,
    degree: 3,
    leading: -1.0,
    left: Direction::PositiveInfinity,
    right: Direction::NegativeInfinity,
  },
  TutorialFunction {
    name: "Quintic Polynomial",
    expression: "f(x) = 0.01x⁵ − 0.5x³ + x",
    eval: quintic,
    degree: 5,
    leading: 0.01,
    left: Direction::NegativeInfinity,
    right: Direction::PositiveInfinity,
  },
];

pub fn tutorial_functions() -> &'static [TutorialFunction] {
  &TUTORIAL_FUNCTIONS
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn authored_answers_follow_degree_and_leading_sign() {
    for f in tutorial_functions() {
      let right = if f.leading > 0.0 {
        Direction::PositiveInfinity
      } else {
        Direction::NegativeInfinity
      };
      let left = if f.degree % 2 == 0 { right } else { right.opposite() };
      assert_eq!(f.expected(End::Right), right, "{}", f.expression);
      assert_eq!(f.expected(End::Left), left, "{}", f.expression);
    }
  }

  #[test]
  fn far_samples_agree_with_authored_answers() {
    for f in tutorial_functions() {
      let sign = |d: Direction| match d {
        Direction::PositiveInfinity => 1.0,
        Direction::NegativeInfinity => -1.0,
      };
      assert!(f.evaluate(1e3).signum() == sign(f.right), "{}", f.expression);
      assert!(f.evaluate(-1e3).signum() == sign(f.left), "{}", f.expression);
    }
  }

  #[test]
  fn explanation_mentions_parity() {
    let cubic = &tutorial_functions()[0];
    assert!(cubic.explanation()[0].starts_with("Odd-degree"));
    let quadratic = &tutorial_functions()[2];
    assert!(quadratic.explanation()[0].starts_with("Even-degree"));
  }
}
