use log::debug;

use super::mapper::{CoordinateMapper, ViewState, ZOOM_STEP, zoom_at};
use super::render::{
  ArrowDirection, AXIS_COLOR, END_BEHAVIOR_COLOR, EXTREMA_COLOR, Mark, Scene,
  TICK_COLOR, TextAnchor, TextLabel, X_INTERCEPT_COLOR, Y_INTERCEPT_COLOR,
  render_svg,
};
use super::sampler::{
  SampleOptions, evaluate_point, sample_function, sample_with,
  split_into_segments, Sample,
};
use super::ticks::{format_tick, tick_positions, tick_step};
use crate::ExplorerError;
use crate::controls::OverlayFlags;
use crate::functions::{
  End, EndTarget, FunctionDescriptor, Limit, TutorialFunction,
};

/// Viewport widths below this use the compact layout.
pub const COMPACT_BREAKPOINT: u32 = 768;
/// Vertical distance in pixels within which the pointer counts as on the
/// curve.
pub const HOVER_TOLERANCE_PX: f64 = 12.0;
const TUTORIAL_SAMPLES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
  /// Side of the square canvas in pixels.
  pub size: u32,
  pub viewport_width: u32,
}

impl Default for GraphConfig {
  fn default() -> Self {
    Self {
      size: 500,
      viewport_width: 1024,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverState {
  Idle,
  Hovering { x: f64, y: f64 },
}

impl HoverState {
  pub fn readout(&self) -> Option<String> {
    match self {
      HoverState::Idle => None,
      HoverState::Hovering { x, y } => Some(format!("x: {x:.2}, f(x): {y:.2}")),
    }
  }
}

/// Which tutorial end markers are drawn, and which one is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndMarkers {
  pub show_left: bool,
  pub show_right: bool,
  pub highlight: Option<End>,
}

/// A graph panel: owns its pan/zoom and hover state. Scenes are derived
/// from that state plus the function and overlay flags passed in.
#[derive(Debug, Clone)]
pub struct GraphView {
  config: GraphConfig,
  view: ViewState,
  hover: HoverState,
}

impl Default for GraphView {
  fn default() -> Self {
    Self::new(GraphConfig::default())
  }
}

impl GraphView {
  pub fn new(config: GraphConfig) -> Self {
    Self {
      config,
      view: ViewState::default(),
      hover: HoverState::Idle,
    }
  }

  pub fn config(&self) -> GraphConfig {
    self.config
  }

  pub fn view(&self) -> ViewState {
    self.view
  }

  pub fn set_view(&mut self, view: ViewState) {
    self.view = view;
  }

  pub fn hover(&self) -> HoverState {
    self.hover
  }

  pub fn is_compact(&self) -> bool {
    self.config.viewport_width < COMPACT_BREAKPOINT
  }

  pub fn mapper(&self) -> CoordinateMapper {
    let size = self.config.size as f64;
    CoordinateMapper::new(&self.view, size, size)
  }

  pub fn resize(&mut self, viewport_width: u32) {
    self.config.viewport_width = viewport_width;
  }

  /// One wheel notch at pixel `(px, py)`; negative `delta_y` zooms in.
  pub fn wheel(&mut self, px: f64, py: f64, delta_y: f64) {
    let factor = if delta_y < 0.0 {
      ZOOM_STEP
    } else if delta_y > 0.0 {
      1.0 / ZOOM_STEP
    } else {
      return;
    };
    self.zoom_to(px, py, self.view.zoom() * factor);
  }

  pub fn zoom_to(&mut self, px: f64, py: f64, zoom: f64) {
    let size = self.config.size as f64;
    self.view = zoom_at(&self.view, size, size, px, py, zoom);
    debug!(
      "zoom {:.3} at ({px:.1}, {py:.1}), pan {:?}",
      self.view.zoom(),
      self.view.pan()
    );
  }

  /// Drag the graph by a pixel delta; content follows the pointer.
  pub fn drag(&mut self, dx: f64, dy: f64) {
    let size = self.config.size as f64;
    let scale = self.view.span() / size;
    self.view = self.view.panned_by(-dx * scale, dy * scale);
    debug!("pan {:?}", self.view.pan());
  }

  pub fn reset(&mut self) {
    self.view = ViewState::default();
    self.hover = HoverState::Idle;
  }

  pub fn pointer_move(
    &mut self,
    f: &FunctionDescriptor,
    px: f64,
    py: f64,
  ) -> HoverState {
    let mapper = self.mapper();
    self.hover = if mapper.contains_pixel(px, py) {
      let x = mapper.inverse_x(px);
      let opts = SampleOptions::for_function(f, self.view.zoom());
      match evaluate_point(f.eval, x, &opts) {
        Some(y) if (mapper.forward_y(y) - py).abs() <= HOVER_TOLERANCE_PX => {
          HoverState::Hovering { x, y }
        }
        _ => HoverState::Idle,
      }
    } else {
      HoverState::Idle
    };
    self.hover
  }

  pub fn pointer_leave(&mut self) {
    self.hover = HoverState::Idle;
  }

  /// Samples of `f` across the visible window. Values far outside the
  /// visible y-range are dropped so the path leaves the canvas cleanly.
  pub fn sample(&self, f: &FunctionDescriptor) -> Vec<Sample> {
    let mapper = self.mapper();
    let (y_lo, y_hi) = mapper.y_interval();
    let margin = self.view.span() / 2.0;
    let opts = SampleOptions::for_function(f, self.view.zoom())
      .with_y_bounds(y_lo - margin, y_hi + margin);
    sample_function(f, mapper.x_interval(), &opts)
  }

  pub fn scene(&self, f: &FunctionDescriptor, overlays: &OverlayFlags) -> Scene {
    let mapper = self.mapper();
    let mut scene = self.axes_scene(&mapper, f.title());

    let segments = split_into_segments(&self.sample(f));
    scene.curve = segments
      .iter()
      .map(|seg| seg.iter().map(|&(x, y)| mapper.to_pixel(x, y)).collect())
      .collect();

    let labels = !self.is_compact();
    let (x_lo, x_hi) = mapper.x_interval();
    let (y_lo, y_hi) = mapper.y_interval();
    let in_x = |v: f64| v >= x_lo && v <= x_hi;
    let in_y = |v: f64| v >= y_lo && v <= y_hi;

    if overlays.intercepts {
      let mut labelled = false;
      for &x in f.anchors.x_intercepts.iter().filter(|&&x| in_x(x)) {
        scene.marks.push(Mark::VerticalGuide {
          x: mapper.forward_x(x),
          color: X_INTERCEPT_COLOR,
          label: (labels && !labelled).then(|| "x-intercept".to_string()),
        });
        labelled = true;
      }
      if let Some(y) = f.anchors.y_intercept.filter(|&y| in_y(y)) {
        scene.marks.push(Mark::HorizontalGuide {
          y: mapper.forward_y(y),
          color: Y_INTERCEPT_COLOR,
          label: labels.then(|| "y-intercept".to_string()),
        });
      }
    }

    if overlays.extrema {
      for p in f.anchors.key_points {
        if in_x(p.x) && in_y(p.y) {
          let (x, y) = mapper.to_pixel(p.x, p.y);
          scene.marks.push(Mark::Point {
            x,
            y,
            color: EXTREMA_COLOR,
            label: labels.then(|| p.label()),
          });
        }
      }
    }

    if overlays.end_behavior {
      let first = scene.curve.first().and_then(|s| s.first()).copied();
      let last = scene.curve.last().and_then(|s| s.last()).copied();
      if let (Some(limit), Some(start)) = (f.end_behavior.left, first) {
        scene.marks.push(end_arrow(limit, start, End::Left));
      }
      if let (Some(limit), Some(end)) = (f.end_behavior.right, last) {
        scene.marks.push(end_arrow(limit, end, End::Right));
      }
    }

    if overlays.domain_range {
      scene.captions.push(format!("Domain: {}", f.domain));
      scene.captions.push(format!("Range: {}", f.range));
    }
    if overlays.end_behavior {
      scene
        .captions
        .push(format!("End Behavior: {}", f.end_behavior_text()));
    }

    scene
  }

  pub fn render(
    &self,
    f: &FunctionDescriptor,
    overlays: &OverlayFlags,
  ) -> Result<String, ExplorerError> {
    render_svg(&self.scene(f, overlays))
  }

  /// Tutorial graph: fixed [-10, 10] window regardless of this view's
  /// pan and zoom, with end markers at x = ±10.
  pub fn tutorial_scene(
    &self,
    tf: &TutorialFunction,
    markers: EndMarkers,
  ) -> Scene {
    let size = self.config.size as f64;
    let mapper = CoordinateMapper::new(&ViewState::default(), size, size);
    let mut scene = self.axes_scene(&mapper, tf.expression.to_string());

    let (y_lo, y_hi) = mapper.y_interval();
    let opts = SampleOptions {
      count: TUTORIAL_SAMPLES,
      excluded_point: None,
      exclusion_tolerance: 0.0,
      y_bounds: Some((y_lo - 5.0, y_hi + 5.0)),
    };
    let samples = sample_with(tf.eval, mapper.x_interval(), &opts);
    scene.curve = split_into_segments(&samples)
      .iter()
      .map(|seg| seg.iter().map(|&(x, y)| mapper.to_pixel(x, y)).collect())
      .collect();

    let ends = [
      (End::Left, markers.show_left, "Left End (x → -∞)", X_INTERCEPT_COLOR),
      (End::Right, markers.show_right, "Right End (x → ∞)", Y_INTERCEPT_COLOR),
    ];
    for (end, shown, label, color) in ends {
      if !shown {
        continue;
      }
      let (x_lo, x_hi) = mapper.x_interval();
      let x = if end == End::Left { x_lo } else { x_hi };
      let y = tf.evaluate(x).clamp(y_lo, y_hi);
      let (px, py) = mapper.to_pixel(x, y);
      scene.marks.push(Mark::EndMarker {
        x: px,
        y: py,
        color,
        highlighted: markers.highlight == Some(end),
        label: label.to_string(),
      });
    }
    scene
  }

  pub fn render_tutorial(
    &self,
    tf: &TutorialFunction,
    markers: EndMarkers,
  ) -> Result<String, ExplorerError> {
    render_svg(&self.tutorial_scene(tf, markers))
  }

  /// Grid, axes, tick marks and tick labels for the mapper's window.
  fn axes_scene(&self, mapper: &CoordinateMapper, title: String) -> Scene {
    let size = self.config.size as f64;
    let (x_lo, x_hi) = mapper.x_interval();
    let (y_lo, y_hi) = mapper.y_interval();
    let step = tick_step(x_hi - x_lo);
    let x_ticks = tick_positions(x_lo, x_hi, step);
    let y_ticks = tick_positions(y_lo, y_hi, step);

    let x_axis = (y_lo <= 0.0 && 0.0 <= y_hi).then(|| mapper.forward_y(0.0));
    let y_axis = (x_lo <= 0.0 && 0.0 <= x_hi).then(|| mapper.forward_x(0.0));
    // Labels ride along the axes, or the nearest edge when an axis is off
    // screen.
    let label_row = x_axis.unwrap_or(size).min(size - 16.0).max(0.0);
    let label_col = y_axis.unwrap_or(0.0).max(24.0).min(size);

    let mut scene = Scene {
      size: self.config.size,
      full_width: self.is_compact(),
      title,
      grid_x: x_ticks.iter().map(|&x| mapper.forward_x(x)).collect(),
      grid_y: y_ticks.iter().map(|&y| mapper.forward_y(y)).collect(),
      x_axis,
      y_axis,
      ..Default::default()
    };

    for &x in &x_ticks {
      let px = mapper.forward_x(x);
      scene
        .tick_marks
        .push(((px, label_row - 4.0), (px, label_row + 4.0)));
      if x != 0.0 {
        scene.tick_labels.push(
          TextLabel::new(px, label_row + 16.0, format_tick(x), TICK_COLOR)
            .anchored(TextAnchor::Middle)
            .sized(10.0),
        );
      }
    }
    for &y in &y_ticks {
      let py = mapper.forward_y(y);
      scene
        .tick_marks
        .push(((label_col - 4.0, py), (label_col + 4.0, py)));
      if y != 0.0 {
        scene.tick_labels.push(
          TextLabel::new(label_col - 8.0, py + 3.0, format_tick(y), TICK_COLOR)
            .anchored(TextAnchor::End)
            .sized(10.0),
        );
      }
    }
    if x_axis.is_some() && y_axis.is_some() {
      scene.tick_labels.push(
        TextLabel::new(label_col - 8.0, label_row + 16.0, "0", AXIS_COLOR)
          .anchored(TextAnchor::End)
          .sized(10.0),
      );
    }
    scene
  }
}

/// Arrowhead at a curve end, pointing where f(x) heads.
fn end_arrow(limit: Limit, at: (f64, f64), end: End) -> Mark {
  let direction = match limit.target {
    EndTarget::PositiveInfinity => ArrowDirection::Up,
    EndTarget::NegativeInfinity => ArrowDirection::Down,
    EndTarget::Finite(_) | EndTarget::Periodic => match end {
      End::Left => ArrowDirection::Left,
      End::Right => ArrowDirection::Right,
    },
  };
  Mark::Arrow {
    x: at.0,
    y: at.1,
    direction,
    color: END_BEHAVIOR_COLOR,
  }
}
