use parentfn::controls::Overlay;
use parentfn::graph::GraphConfig;
use parentfn::{ControlEvent, Explorer, FunctionId, catalog, get_function};

mod explorer_tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn panel_lists_the_whole_catalog() {
    let e = Explorer::default();
    let labels: Vec<String> = e
      .control_panel()
      .function_options()
      .into_iter()
      .map(|o| o.label)
      .collect();
    assert_eq!(labels.len(), catalog().len());
    assert_eq!(labels[0], "Constant Function: f(x) = 3");
    assert!(labels.contains(&"Quadratic Function: f(x) = x²".to_string()));
  }

  #[test]
  fn select_zoom_and_switch() {
    let mut e = Explorer::new(GraphConfig::default());
    e.apply(ControlEvent::SelectFunction(FunctionId::SquareRoot));
    e.graph_mut().wheel(250.0, 250.0, -1.0);
    let zoomed = e.graph().view();

    e.apply(ControlEvent::SelectFunction(FunctionId::Logarithmic));
    assert_eq!(e.function().id, FunctionId::Logarithmic);
    assert_eq!(e.graph().view(), zoomed);

    e.graph_mut().reset();
    assert_eq!(e.graph().view().zoom(), 1.0);
  }

  #[test]
  fn greatest_integer_draws_no_x_intercept_line() {
    let mut e = Explorer::default();
    e.apply(ControlEvent::SelectFunction(FunctionId::GreatestInteger));
    e.apply(ControlEvent::SetOverlay(Overlay::Intercepts, true));
    let svg = e.render().unwrap();
    assert!(!svg.contains("x-intercept"));
    assert!(svg.contains("y-intercept"));
  }

  #[test]
  fn end_behavior_caption_comes_from_structured_data() {
    let mut e = Explorer::default();
    e.apply(ControlEvent::SelectFunction(FunctionId::Exponential));
    e.apply(ControlEvent::SetOverlay(Overlay::EndBehavior, true));
    let svg = e.render().unwrap();
    let text = get_function(FunctionId::Exponential).end_behavior_text();
    assert!(svg.contains(&format!("End Behavior: {text}")));
  }

  #[test]
  fn practice_follows_the_selected_function() {
    let mut e = Explorer::default();
    e.apply(ControlEvent::SelectFunction(FunctionId::AbsoluteValue));
    let answer = e.practice().question().answer;
    assert!(e.practice_mut().check(answer).is_success());

    e.apply(ControlEvent::SelectFunction(FunctionId::Cubic));
    assert_eq!(e.practice().function(), FunctionId::Cubic);
    assert_eq!(e.practice().feedback(), None);
  }
}
