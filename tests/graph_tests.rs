use parentfn::ExplorerError;
use parentfn::controls::OverlayFlags;
use parentfn::functions::{FunctionId, get_function};
use parentfn::graph::mapper::{MAX_ZOOM, MIN_ZOOM};
use parentfn::graph::{
  CoordinateMapper, GraphConfig, GraphView, HoverState, Sample,
  SampleOptions, ViewState, sample_function, split_into_segments, zoom_at,
};
use proptest::prelude::*;

/// Polylines stroked with the curve color.
fn curve_paths(svg: &str) -> usize {
  svg
    .split("<polyline")
    .skip(1)
    .filter(|el| {
      let el = &el[..el.find("/>").unwrap_or(el.len())];
      el.to_lowercase().contains("#8884d8")
    })
    .count()
}

fn close(a: f64, b: f64) -> bool {
  (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

mod mapper {
  use super::*;

  proptest! {
    #[test]
    fn round_trip(
      zoom in 0.1f64..10.0,
      pan_x in -1e3f64..1e3,
      pan_y in -1e3f64..1e3,
      x in -1e4f64..1e4,
      y in -1e4f64..1e4,
    ) {
      let view = ViewState::new(zoom, pan_x, pan_y);
      let m = CoordinateMapper::new(&view, 500.0, 500.0);
      prop_assert!(close(m.inverse_x(m.forward_x(x)), x));
      prop_assert!(close(m.inverse_y(m.forward_y(y)), y));
    }

    #[test]
    fn zoom_keeps_the_point_under_the_cursor(
      zoom in 0.1f64..10.0,
      new_zoom in 0.1f64..10.0,
      px in 0.0f64..500.0,
      py in 0.0f64..500.0,
    ) {
      let before = ViewState::new(zoom, 1.5, -2.0);
      let after = zoom_at(&before, 500.0, 500.0, px, py, new_zoom);
      let m0 = CoordinateMapper::new(&before, 500.0, 500.0);
      let m1 = CoordinateMapper::new(&after, 500.0, 500.0);
      let (x0, y0) = m0.to_math(px, py);
      let (x1, y1) = m1.to_math(px, py);
      prop_assert!(close(x0, x1));
      prop_assert!(close(y0, y1));
    }

    #[test]
    fn zoom_stays_clamped_after_any_gestures(
      gestures in prop::collection::vec(
        (0.0f64..500.0, 0.0f64..500.0, -3.0f64..3.0),
        0..200,
      ),
    ) {
      let mut g = GraphView::default();
      for (px, py, delta) in gestures {
        g.wheel(px, py, delta);
        let z = g.view().zoom();
        prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&z));
      }
    }
  }

  #[test]
  fn wheel_in_then_out_returns_to_start() {
    let mut g = GraphView::default();
    g.wheel(100.0, 400.0, -1.0);
    assert!(close(g.view().zoom(), 1.1));
    g.wheel(100.0, 400.0, 1.0);
    assert!(close(g.view().zoom(), 1.0));
    let (x, y) = g.view().pan();
    assert!(close(x, 0.0) && close(y, 0.0));
  }

  #[test]
  fn reset_restores_default_view() {
    let mut g = GraphView::default();
    g.drag(30.0, -10.0);
    g.wheel(10.0, 10.0, -1.0);
    g.reset();
    assert_eq!(g.view(), ViewState::default());
  }
}

mod sampling {
  use super::*;

  #[test]
  fn undefined_sample_breaks_the_path() {
    let samples = [
      Sample { x: 0.0, y: Some(0.0) },
      Sample { x: 1.0, y: Some(1.0) },
      Sample { x: 2.0, y: None },
      Sample { x: 3.0, y: Some(3.0) },
      Sample { x: 4.0, y: Some(4.0) },
    ];
    let segments = split_into_segments(&samples);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], vec![(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(segments[1], vec![(3.0, 3.0), (4.0, 4.0)]);
  }

  #[test]
  fn reciprocal_never_connects_across_zero() {
    let f = get_function(FunctionId::Reciprocal);
    let opts = SampleOptions::for_function(f, 1.0);
    let samples = sample_function(f, (-10.0, 10.0), &opts);
    assert_eq!(samples.len(), 401);
    for s in &samples {
      if s.x.abs() < 0.05 {
        assert_eq!(s.y, None, "x = {} should be excluded", s.x);
      } else {
        assert!(s.y.is_some(), "x = {} should be defined", s.x);
      }
    }
    let segments = split_into_segments(&samples);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].iter().all(|&(x, _)| x < 0.0));
    assert!(segments[1].iter().all(|&(x, _)| x > 0.0));
  }

  #[test]
  fn square_root_is_undefined_left_of_zero() {
    let f = get_function(FunctionId::SquareRoot);
    let opts = SampleOptions::for_function(f, 1.0);
    let samples = sample_function(f, (-10.0, 10.0), &opts);
    assert!(samples.iter().filter(|s| s.x < 0.0).all(|s| s.y.is_none()));
    assert!(samples.iter().filter(|s| s.x >= 0.0).all(|s| s.y.is_some()));
  }

  fn in_domain(id: FunctionId, x: f64) -> bool {
    match id {
      FunctionId::SquareRoot => x >= 0.0,
      FunctionId::Reciprocal => x != 0.0,
      FunctionId::Logarithmic => x > 0.0,
      _ => true,
    }
  }

  #[test]
  fn domain_boundaries_are_nan() {
    for x in [0.0, -0.0] {
      assert!(get_function(FunctionId::Reciprocal).evaluate(x).is_nan());
      assert!(get_function(FunctionId::Logarithmic).evaluate(x).is_nan());
    }
    assert!(get_function(FunctionId::SquareRoot).evaluate(-1e-12).is_nan());
    assert_eq!(get_function(FunctionId::SquareRoot).evaluate(0.0), 0.0);
  }

  proptest! {
    #[test]
    fn evaluators_are_nan_exactly_outside_their_domain(x in -500f64..500.0) {
      // 1/x overflows to infinity for subnormal x.
      prop_assume!(x == 0.0 || x.abs() > 1e-300);
      for id in FunctionId::ALL {
        let y = get_function(id).evaluate(x);
        if in_domain(id, x) {
          prop_assert!(y.is_finite(), "{id}({x}) = {y}");
        } else {
          prop_assert!(y.is_nan(), "{id}({x}) = {y}");
        }
      }
    }

    #[test]
    fn logarithm_rejects_non_positive_inputs(x in -1e6f64..=0.0) {
      prop_assert!(get_function(FunctionId::Logarithmic).evaluate(x).is_nan());
    }
  }
}

mod view {
  use super::*;

  #[test]
  fn undersized_canvas_is_an_error_not_a_panic() {
    let f = get_function(FunctionId::Quadratic);
    for size in [0, 10] {
      let g = GraphView::new(GraphConfig {
        size,
        ..GraphConfig::default()
      });
      let err = g.render(f, &OverlayFlags::default()).unwrap_err();
      assert!(matches!(err, ExplorerError::Render(_)), "size {size}: {err}");
    }
  }

  #[test]
  fn hover_reports_the_curve_value() {
    let f = get_function(FunctionId::Identity);
    let mut g = GraphView::default();
    let m = g.mapper();
    let (px, py) = m.to_pixel(1.0, 1.0);
    match g.pointer_move(f, px, py) {
      HoverState::Hovering { x, y } => {
        assert!(close(x, 1.0));
        assert!(close(y, 1.0));
      }
      HoverState::Idle => panic!("expected hover"),
    }
    assert_eq!(g.hover().readout().as_deref(), Some("x: 1.00, f(x): 1.00"));
    g.pointer_leave();
    assert_eq!(g.hover(), HoverState::Idle);
  }

  #[test]
  fn hover_off_the_curve_is_idle() {
    let f = get_function(FunctionId::Identity);
    let mut g = GraphView::default();
    let (px, py) = g.mapper().to_pixel(1.0, 5.0);
    assert_eq!(g.pointer_move(f, px, py), HoverState::Idle);
    assert_eq!(g.pointer_move(f, -5.0, 10.0), HoverState::Idle);
  }

  #[test]
  fn reciprocal_renders_two_polylines() {
    let g = GraphView::default();
    let svg = g
      .render(get_function(FunctionId::Reciprocal), &OverlayFlags::default())
      .unwrap();
    assert!(svg.contains("viewBox=\"0 0 5000 5000\""));
    assert_eq!(curve_paths(&svg), 2);
  }

  #[test]
  fn compact_layout_hides_overlay_labels_but_keeps_captions() {
    let f = get_function(FunctionId::Quadratic);
    let mut g = GraphView::new(GraphConfig {
      size: 300,
      viewport_width: 600,
    });
    let svg = g.render(f, &OverlayFlags::all()).unwrap();
    assert!(!svg.contains("x-intercept"));
    assert!(svg.contains("End Behavior:"));

    g.resize(1200);
    let svg = g.render(f, &OverlayFlags::all()).unwrap();
    assert!(svg.contains("x-intercept"));
    assert!(svg.contains("Min (0, 0)"));
  }
}
