use parentfn::ExplorerError;
use parentfn::functions::{Direction, End, tutorial_functions};
use parentfn::tutorial::{
  CyclePicker, REQUIRED_SUCCESSES, Tutorial, TutorialStep,
};
use pretty_assertions::assert_eq;

/// Always studies the given function and end.
struct Fixed(usize, End);

impl CyclePicker for Fixed {
  fn pick(&mut self, _function_count: usize) -> (usize, End) {
    (self.0, self.1)
  }
}

fn cubic_left() -> Tutorial<Fixed> {
  let t = Tutorial::with_picker(Fixed(0, End::Left));
  assert_eq!(t.current_function().expression, "f(x) = x³ − 2x² + 3x − 1");
  t
}

/// Answers one full cycle correctly.
fn finish_cycle<P: CyclePicker>(t: &mut Tutorial<P>) {
  let end = t.end();
  let fx = t.current_function().expected(end);
  assert!(t.select_x_direction(end.x_direction()).unwrap());
  assert!(t.select_end(end).unwrap());
  assert!(t.select_y_direction(fx).unwrap());
  assert!(
    t.submit_end_behavior(Some(end.x_direction()), Some(fx))
      .unwrap()
  );
  assert_eq!(t.step(), TutorialStep::ShowSummary);
}

mod quiz {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn correct_left_direction_advances() {
    let mut t = cubic_left();
    assert_eq!(t.step(), TutorialStep::SelectXDirection);
    assert!(t.select_x_direction(Direction::NegativeInfinity).unwrap());
    assert_eq!(t.step(), TutorialStep::SelectEnd);
    assert_eq!(t.is_correct(), Some(true));
    assert_eq!(
      t.correct_choices().to_vec(),
      vec!["X approaches -∞".to_string()]
    );
  }

  #[test]
  fn wrong_direction_stays_with_feedback() {
    let mut t = cubic_left();
    assert!(!t.select_x_direction(Direction::PositiveInfinity).unwrap());
    assert_eq!(t.step(), TutorialStep::SelectXDirection);
    assert_eq!(t.is_correct(), Some(false));
    let feedback = t.feedback().expect("corrective feedback");
    assert!(!feedback.is_success());
    assert!(feedback.message.contains("LEFT"));
    assert!(t.correct_choices().is_empty());
  }

  #[test]
  fn wrong_answers_can_be_retried() {
    let mut t = cubic_left();
    for _ in 0..5 {
      t.select_x_direction(Direction::PositiveInfinity).unwrap();
    }
    assert!(t.select_x_direction(Direction::NegativeInfinity).unwrap());
  }

  #[test]
  fn form_uses_strict_token_equality() {
    let mut t = cubic_left();
    t.select_x_direction(Direction::NegativeInfinity).unwrap();
    t.select_end(End::Left).unwrap();
    t.select_y_direction(Direction::NegativeInfinity).unwrap();
    let swapped = t
      .submit_end_behavior(
        Some(Direction::NegativeInfinity),
        Some(Direction::PositiveInfinity),
      )
      .unwrap();
    assert!(!swapped);
    assert_eq!(t.successes(), 0);
    assert!(
      t.submit_end_behavior(
        Some(Direction::NegativeInfinity),
        Some(Direction::NegativeInfinity),
      )
      .unwrap()
    );
    assert_eq!(t.successes(), 1);
  }

  #[test]
  fn out_of_order_input_is_an_error() {
    let mut t = cubic_left();
    let err = t
      .submit_end_behavior(Some(Direction::NegativeInfinity), None)
      .unwrap_err();
    match err {
      ExplorerError::UnexpectedInput { step, .. } => {
        assert_eq!(step, "SelectXDirection")
      }
      other => panic!("unexpected error: {other}"),
    }
    assert!(t.try_another().is_err());
    assert!(t.complete().is_err());
    assert!(t.restart().is_err());
  }

  #[test]
  fn three_cycles_enable_completion_and_restart_resets() {
    let mut t = Tutorial::with_picker(Fixed(3, End::Right));
    for cycle in 1..=REQUIRED_SUCCESSES {
      finish_cycle(&mut t);
      assert_eq!(t.successes(), cycle);
      if cycle < REQUIRED_SUCCESSES {
        assert!(!t.can_complete());
        assert!(t.complete().is_err());
        t.try_another().unwrap();
        assert_eq!(t.step(), TutorialStep::SelectXDirection);
        assert!(t.correct_choices().is_empty());
        assert!(t.feedback().is_none());
      }
    }
    assert!(t.can_complete());
    t.complete().unwrap();
    assert_eq!(t.step(), TutorialStep::Completed);
    assert!(t.try_another().is_err());

    t.restart().unwrap();
    assert_eq!(t.successes(), 0);
    assert_eq!(t.step(), TutorialStep::SelectXDirection);
  }

  #[test]
  fn seeded_runs_draw_the_same_cycles() {
    let mut a = Tutorial::seeded(42);
    let mut b = Tutorial::seeded(42);
    for _ in 0..5 {
      assert_eq!(
        a.current_function().expression,
        b.current_function().expression
      );
      assert_eq!(a.end(), b.end());
      finish_cycle(&mut a);
      finish_cycle(&mut b);
      a.try_another().unwrap();
      b.try_another().unwrap();
    }
  }
}

mod data {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn authored_directions_match_large_inputs() {
    for f in tutorial_functions() {
      for end in [End::Left, End::Right] {
        let x = if end == End::Left { -1e3 } else { 1e3 };
        let y = f.evaluate(x);
        let observed = if y > 0.0 {
          Direction::PositiveInfinity
        } else {
          Direction::NegativeInfinity
        };
        assert_eq!(f.expected(end), observed, "{} at {end}", f.expression);
      }
    }
  }
}
