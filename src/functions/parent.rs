use std::f64::consts::PI;

use super::{
  Anchors, Approach, EndBehavior, EndTarget, FunctionDescriptor, FunctionId,
  KeyPoint, KeyPointKind, Limit, PracticeQuestion,
};

const DEFAULT_SAMPLES: usize = 200;
const POLE_SAMPLES: usize = 400;

const ORIGIN: &[f64] = &[0.0];

const MIN_AT_ORIGIN: &[KeyPoint] = &[KeyPoint {
  kind: KeyPointKind::Minimum,
  x: 0.0,
  y: 0.0,
}];

const SINE_ZEROS: &[f64] =
  &[-3.0 * PI, -2.0 * PI, -PI, 0.0, PI, 2.0 * PI, 3.0 * PI];

const COSINE_ZEROS: &[f64] = &[
  -2.5 * PI,
  -1.5 * PI,
  -0.5 * PI,
  0.5 * PI,
  1.5 * PI,
  2.5 * PI,
];

const SINE_EXTREMA: &[KeyPoint] = &[
  KeyPoint { kind: KeyPointKind::Minimum, x: -2.5 * PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: -1.5 * PI, y: 1.0 },
  KeyPoint { kind: KeyPointKind::Minimum, x: -0.5 * PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: 0.5 * PI, y: 1.0 },
  KeyPoint { kind: KeyPointKind::Minimum, x: 1.5 * PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: 2.5 * PI, y: 1.0 },
];

const COSINE_EXTREMA: &[KeyPoint] = &[
  KeyPoint { kind: KeyPointKind::Minimum, x: -3.0 * PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: -2.0 * PI, y: 1.0 },
  KeyPoint { kind: KeyPointKind::Minimum, x: -PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: 0.0, y: 1.0 },
  KeyPoint { kind: KeyPointKind::Minimum, x: PI, y: -1.0 },
  KeyPoint { kind: KeyPointKind::Maximum, x: 2.0 * PI, y: 1.0 },
  KeyPoint { kind: KeyPointKind::Minimum, x: 3.0 * PI, y: -1.0 },
];

fn constant(_x: f64) -> f64 {
  3.0
}

fn identity(x: f64) -> f64 {
  x
}

fn quadratic(x: f64) -> f64 {
  x.powi(2)
}

fn cubic(x: f64) -> f64 {
  x.powi(3)
}

fn square_root(x: f64) -> f64 {
  if x >= 0.0 { x.sqrt() } else { f64::NAN }
}

fn reciprocal(x: f64) -> f64 {
  if x != 0.0 { 1.0 / x } else { f64::NAN }
}

fn absolute_value(x: f64) -> f64 {
  x.abs()
}

fn exponential(x: f64) -> f64 {
  x.exp()
}

fn logarithmic(x: f64) -> f64 {
  if x > 0.0 { x.ln() } else { f64::NAN }
}

fn sine(x: f64) -> f64 {
  x.sin()
}

fn cosine(x: f64) -> f64 {
  x.cos()
}

fn greatest_integer(x: f64) -> f64 {
  x.floor()
}

static CATALOG: [FunctionDescriptor; 12] = [
  FunctionDescriptor {
    id: FunctionId::Constant,
    name: "Constant Function",
    expression: "f(x) = 3",
    eval: constant,
    domain: "(-∞, ∞)",
    range: "{3}",
    x_intercepts: "None",
    y_intercept: "(0, 3)",
    extrema: None,
    increasing: "None",
    decreasing: "None",
    end_behavior: EndBehavior::both(
      EndTarget::Finite(3.0),
      EndTarget::Finite(3.0),
    ),
    questions: &[
      PracticeQuestion {
        question: "What is the domain of this function?",
        answer: "(-∞, ∞)",
        hint: "The constant function is defined for all real numbers.",
      },
      PracticeQuestion {
        question: "Is this function increasing, decreasing, or neither?",
        answer: "neither",
        hint: "Think about how the y-values change as x changes.",
      },
    ],
    anchors: Anchors {
      x_intercepts: &[],
      y_intercept: Some(3.0),
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Identity,
    name: "Identity Function",
    expression: "f(x) = x",
    eval: identity,
    domain: "(-∞, ∞)",
    range: "(-∞, ∞)",
    x_intercepts: "(0, 0)",
    y_intercept: "(0, 0)",
    extrema: None,
    increasing: "(-∞, ∞)",
    decreasing: "None",
    end_behavior: EndBehavior::both(
      EndTarget::NegativeInfinity,
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "What is the slope of this function?",
        answer: "1",
        hint: "The slope measures the rate of change of the function.",
      },
      PracticeQuestion {
        question: "Where does this function cross the x-axis?",
        answer: "0",
        hint: "Find where f(x) = 0.",
      },
    ],
    anchors: Anchors {
      x_intercepts: ORIGIN,
      y_intercept: Some(0.0),
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Quadratic,
    name: "Quadratic Function",
    expression: "f(x) = x²",
    eval: quadratic,
    domain: "(-∞, ∞)",
    range: "[0, ∞)",
    x_intercepts: "(0, 0)",
    y_intercept: "(0, 0)",
    extrema: Some("Minimum at (0, 0)"),
    increasing: "(0, ∞)",
    decreasing: "(-∞, 0)",
    end_behavior: EndBehavior::both(
      EndTarget::PositiveInfinity,
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "What is the vertex of this function?",
        answer: "(0, 0)",
        hint: "The vertex is the point where the parabola reaches its \
               minimum or maximum value.",
      },
      PracticeQuestion {
        question: "Is this function even, odd, or neither?",
        answer: "even",
        hint: "Test if f(-x) = f(x) for even functions.",
      },
    ],
    anchors: Anchors {
      x_intercepts: ORIGIN,
      y_intercept: Some(0.0),
      key_points: MIN_AT_ORIGIN,
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Cubic,
    name: "Cubic Function",
    expression: "f(x) = x³",
    eval: cubic,
    domain: "(-∞, ∞)",
    range: "(-∞, ∞)",
    x_intercepts: "(0, 0)",
    y_intercept: "(0, 0)",
    extrema: Some("Inflection point at (0, 0)"),
    increasing: "(-∞, ∞)",
    decreasing: "None",
    end_behavior: EndBehavior::both(
      EndTarget::NegativeInfinity,
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "What is the inflection point of this function?",
        answer: "(0, 0)",
        hint: "The inflection point is where the concavity changes.",
      },
      PracticeQuestion {
        question: "Is this function even, odd, or neither?",
        answer: "odd",
        hint: "Test if f(-x) = -f(x) for odd functions.",
      },
    ],
    anchors: Anchors {
      x_intercepts: ORIGIN,
      y_intercept: Some(0.0),
      key_points: &[KeyPoint {
        kind: KeyPointKind::Inflection,
        x: 0.0,
        y: 0.0,
      }],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::SquareRoot,
    name: "Square Root Function",
    expression: "f(x) = √x",
    eval: square_root,
    domain: "[0, ∞)",
    range: "[0, ∞)",
    x_intercepts: "(0, 0)",
    y_intercept: "(0, 0)",
    extrema: None,
    increasing: "(0, ∞)",
    decreasing: "None",
    end_behavior: EndBehavior {
      left: None,
      right: Some(Limit {
        approach: Approach::PositiveInfinity,
        target: EndTarget::PositiveInfinity,
      }),
    },
    questions: &[
      PracticeQuestion {
        question: "Why is the domain of this function restricted to [0, ∞)?",
        answer: "We can't take the square root of negative numbers in the \
                 real number system",
        hint: "Think about what values would make the square root undefined \
               for real numbers.",
      },
      PracticeQuestion {
        question: "How does this function behave as x gets very large?",
        answer: "It grows more slowly than the identity function",
        hint: "Compare the growth rate with f(x) = x.",
      },
    ],
    anchors: Anchors {
      x_intercepts: ORIGIN,
      y_intercept: Some(0.0),
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Reciprocal,
    name: "Reciprocal Function",
    expression: "f(x) = 1/x",
    eval: reciprocal,
    domain: "(-∞, 0) ∪ (0, ∞)",
    range: "(-∞, 0) ∪ (0, ∞)",
    x_intercepts: "None",
    y_intercept: "None (undefined at x = 0)",
    extrema: None,
    increasing: "None",
    decreasing: "(-∞, 0), (0, ∞)",
    end_behavior: EndBehavior::both(
      EndTarget::Finite(0.0),
      EndTarget::Finite(0.0),
    ),
    questions: &[
      PracticeQuestion {
        question: "Why is this function undefined at x = 0?",
        answer: "Division by zero is undefined",
        hint: "Think about what happens when you divide by zero.",
      },
      PracticeQuestion {
        question: "What are the horizontal asymptotes of this function?",
        answer: "y = 0",
        hint: "Consider the behavior of the function as x approaches \
               infinity.",
      },
    ],
    anchors: Anchors {
      x_intercepts: &[],
      y_intercept: None,
      key_points: &[],
    },
    excluded_point: Some(0.0),
    sample_count: POLE_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::AbsoluteValue,
    name: "Absolute Value Function",
    expression: "f(x) = |x|",
    eval: absolute_value,
    domain: "(-∞, ∞)",
    range: "[0, ∞)",
    x_intercepts: "(0, 0)",
    y_intercept: "(0, 0)",
    extrema: Some("Minimum at (0, 0)"),
    increasing: "(0, ∞)",
    decreasing: "(-∞, 0)",
    end_behavior: EndBehavior::both(
      EndTarget::PositiveInfinity,
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "Where is the vertex of this function?",
        answer: "(0, 0)",
        hint: "Look for the point where the function changes direction.",
      },
      PracticeQuestion {
        question: "Is this function differentiable at x = 0?",
        answer: "no",
        hint: "Think about the sharp corner at the origin.",
      },
    ],
    anchors: Anchors {
      x_intercepts: ORIGIN,
      y_intercept: Some(0.0),
      key_points: MIN_AT_ORIGIN,
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Exponential,
    name: "Exponential Function",
    expression: "f(x) = eˣ",
    eval: exponential,
    domain: "(-∞, ∞)",
    range: "(0, ∞)",
    x_intercepts: "None",
    y_intercept: "(0, 1)",
    extrema: None,
    increasing: "(-∞, ∞)",
    decreasing: "None",
    end_behavior: EndBehavior::both(
      EndTarget::Finite(0.0),
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "What is the y-intercept of this function?",
        answer: "(0, 1)",
        hint: "Evaluate the function at x = 0.",
      },
      PracticeQuestion {
        question: "What is the horizontal asymptote of this function?",
        answer: "y = 0",
        hint: "Consider what happens as x approaches negative infinity.",
      },
    ],
    anchors: Anchors {
      x_intercepts: &[],
      y_intercept: Some(1.0),
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Logarithmic,
    name: "Logarithmic Function",
    expression: "f(x) = ln(x)",
    eval: logarithmic,
    domain: "(0, ∞)",
    range: "(-∞, ∞)",
    x_intercepts: "(1, 0)",
    y_intercept: "None (undefined at x = 0)",
    extrema: None,
    increasing: "(0, ∞)",
    decreasing: "None",
    end_behavior: EndBehavior {
      left: Some(Limit {
        approach: Approach::RightOf(0.0),
        target: EndTarget::NegativeInfinity,
      }),
      right: Some(Limit {
        approach: Approach::PositiveInfinity,
        target: EndTarget::PositiveInfinity,
      }),
    },
    questions: &[
      PracticeQuestion {
        question: "What is the vertical asymptote of this function?",
        answer: "x = 0",
        hint: "Consider what happens as x approaches zero from the right.",
      },
      PracticeQuestion {
        question: "At what point does this function cross the x-axis?",
        answer: "(1, 0)",
        hint: "Find where f(x) = 0.",
      },
    ],
    anchors: Anchors {
      x_intercepts: &[1.0],
      y_intercept: None,
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Sine,
    name: "Sine Function",
    expression: "f(x) = sin(x)",
    eval: sine,
    domain: "(-∞, ∞)",
    range: "[-1, 1]",
    x_intercepts: "(kπ, 0) for every integer k",
    y_intercept: "(0, 0)",
    extrema: Some(
      "Maximum 1 at x = π/2 + 2kπ; minimum -1 at x = -π/2 + 2kπ",
    ),
    increasing: "(-π/2 + 2kπ, π/2 + 2kπ)",
    decreasing: "(π/2 + 2kπ, 3π/2 + 2kπ)",
    end_behavior: EndBehavior::both(EndTarget::Periodic, EndTarget::Periodic),
    questions: &[
      PracticeQuestion {
        question: "What is the period of this function?",
        answer: "2π",
        hint: "Find the smallest shift that maps the graph onto itself.",
      },
      PracticeQuestion {
        question: "Is this function even, odd, or neither?",
        answer: "odd",
        hint: "Test if f(-x) = -f(x) for odd functions.",
      },
    ],
    anchors: Anchors {
      x_intercepts: SINE_ZEROS,
      y_intercept: Some(0.0),
      key_points: SINE_EXTREMA,
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::Cosine,
    name: "Cosine Function",
    expression: "f(x) = cos(x)",
    eval: cosine,
    domain: "(-∞, ∞)",
    range: "[-1, 1]",
    x_intercepts: "(π/2 + kπ, 0) for every integer k",
    y_intercept: "(0, 1)",
    extrema: Some("Maximum 1 at x = 2kπ; minimum -1 at x = π + 2kπ"),
    increasing: "(π + 2kπ, 2π + 2kπ)",
    decreasing: "(2kπ, π + 2kπ)",
    end_behavior: EndBehavior::both(EndTarget::Periodic, EndTarget::Periodic),
    questions: &[
      PracticeQuestion {
        question: "What is the y-intercept of this function?",
        answer: "(0, 1)",
        hint: "Evaluate the function at x = 0.",
      },
      PracticeQuestion {
        question: "Is this function even, odd, or neither?",
        answer: "even",
        hint: "Test if f(-x) = f(x) for even functions.",
      },
    ],
    anchors: Anchors {
      x_intercepts: COSINE_ZEROS,
      y_intercept: Some(1.0),
      key_points: COSINE_EXTREMA,
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
  FunctionDescriptor {
    id: FunctionId::GreatestInteger,
    name: "Greatest Integer Function",
    expression: "f(x) = ⌊x⌋",
    eval: greatest_integer,
    domain: "(-∞, ∞)",
    range: "ℤ (integers)",
    x_intercepts: "Every x in [0, 1)",
    y_intercept: "(0, 0)",
    extrema: None,
    increasing: "None (step function)",
    decreasing: "None (step function)",
    end_behavior: EndBehavior::both(
      EndTarget::NegativeInfinity,
      EndTarget::PositiveInfinity,
    ),
    questions: &[
      PracticeQuestion {
        question: "Is this function continuous?",
        answer: "no",
        hint: "Consider what happens at integer values.",
      },
      PracticeQuestion {
        question: "What is the value of f(2.75)?",
        answer: "2",
        hint: "The greatest integer function returns the largest integer \
               less than or equal to x.",
      },
    ],
    anchors: Anchors {
      x_intercepts: &[],
      y_intercept: Some(0.0),
      key_points: &[],
    },
    excluded_point: None,
    sample_count: DEFAULT_SAMPLES,
  },
];

pub fn catalog() -> &'static [FunctionDescriptor] {
  &CATALOG
}
