//! Transform between math space and pixel space.
//!
//! The visible window is a square of side `BASE_SPAN / zoom` centered on the
//! pan offset. Pixel y grows downward, so the y mapping is flipped.

pub const BASE_SPAN: f64 = 20.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
/// Zoom factor applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

pub fn clamp_zoom(zoom: f64) -> f64 {
  if zoom.is_finite() {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
  } else {
    1.0
  }
}

/// Zoom factor and pan offset of a graph view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
  zoom: f64,
  pan_x: f64,
  pan_y: f64,
}

impl Default for ViewState {
  fn default() -> Self {
    Self {
      zoom: 1.0,
      pan_x: 0.0,
      pan_y: 0.0,
    }
  }
}

impl ViewState {
  /// Zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`; pan is unconstrained.
  pub fn new(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
    Self {
      zoom: clamp_zoom(zoom),
      pan_x,
      pan_y,
    }
  }

  pub fn zoom(&self) -> f64 {
    self.zoom
  }

  pub fn pan(&self) -> (f64, f64) {
    (self.pan_x, self.pan_y)
  }

  /// Side length of the visible window in math units.
  pub fn span(&self) -> f64 {
    BASE_SPAN / self.zoom
  }

  pub fn panned_by(&self, dx: f64, dy: f64) -> Self {
    Self {
      zoom: self.zoom,
      pan_x: self.pan_x + dx,
      pan_y: self.pan_y + dy,
    }
  }
}

/// Forward and inverse mappings for one view over a `width` × `height`
/// pixel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
  span: f64,
  pan_x: f64,
  pan_y: f64,
  width: f64,
  height: f64,
}

impl CoordinateMapper {
  pub fn new(view: &ViewState, width: f64, height: f64) -> Self {
    Self {
      span: view.span(),
      pan_x: view.pan_x,
      pan_y: view.pan_y,
      width,
      height,
    }
  }

  pub fn width(&self) -> f64 {
    self.width
  }

  pub fn height(&self) -> f64 {
    self.height
  }

  pub fn forward_x(&self, v: f64) -> f64 {
    ((v - self.pan_x) + self.span / 2.0) / self.span * self.width
  }

  pub fn forward_y(&self, v: f64) -> f64 {
    self.height - ((v - self.pan_y) + self.span / 2.0) / self.span * self.height
  }

  pub fn inverse_x(&self, px: f64) -> f64 {
    px / self.width * self.span - self.span / 2.0 + self.pan_x
  }

  pub fn inverse_y(&self, py: f64) -> f64 {
    (self.height - py) / self.height * self.span - self.span / 2.0 + self.pan_y
  }

  pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
    (self.forward_x(x), self.forward_y(y))
  }

  pub fn to_math(&self, px: f64, py: f64) -> (f64, f64) {
    (self.inverse_x(px), self.inverse_y(py))
  }

  pub fn x_interval(&self) -> (f64, f64) {
    (self.pan_x - self.span / 2.0, self.pan_x + self.span / 2.0)
  }

  pub fn y_interval(&self) -> (f64, f64) {
    (self.pan_y - self.span / 2.0, self.pan_y + self.span / 2.0)
  }

  pub fn contains_pixel(&self, px: f64, py: f64) -> bool {
    (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
  }
}

/// Change the zoom so that the math point under pixel `(px, py)` stays
/// under that pixel. The new zoom is clamped first.
pub fn zoom_at(
  view: &ViewState,
  width: f64,
  height: f64,
  px: f64,
  py: f64,
  new_zoom: f64,
) -> ViewState {
  let before = CoordinateMapper::new(view, width, height);
  let (mx, my) = before.to_math(px, py);

  let zoom = clamp_zoom(new_zoom);
  let span = BASE_SPAN / zoom;
  let pan_x = mx + span / 2.0 - px / width * span;
  let pan_y = my + span / 2.0 - (height - py) / height * span;

  ViewState { zoom, pan_x, pan_y }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: f64 = 1e-9;

  fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON * (1.0 + a.abs().max(b.abs()))
  }

  #[test]
  fn default_view_centers_origin() {
    let m = CoordinateMapper::new(&ViewState::default(), 500.0, 500.0);
    assert!(approx_eq(m.forward_x(0.0), 250.0));
    assert!(approx_eq(m.forward_y(0.0), 250.0));
    assert!(approx_eq(m.forward_x(-10.0), 0.0));
    assert!(approx_eq(m.forward_y(10.0), 0.0));
    assert!(approx_eq(m.forward_y(-10.0), 500.0));
    assert_eq!(m.x_interval(), (-10.0, 10.0));
  }

  #[test]
  fn pan_shifts_the_window() {
    let view = ViewState::new(2.0, 3.0, -1.0);
    let m = CoordinateMapper::new(&view, 400.0, 400.0);
    assert!(approx_eq(m.forward_x(3.0), 200.0));
    assert!(approx_eq(m.forward_y(-1.0), 200.0));
    assert_eq!(m.x_interval(), (-2.0, 8.0));
  }

  #[test]
  fn zoom_is_clamped() {
    assert_eq!(ViewState::new(100.0, 0.0, 0.0).zoom(), MAX_ZOOM);
    assert_eq!(ViewState::new(0.0, 0.0, 0.0).zoom(), MIN_ZOOM);
    assert_eq!(ViewState::new(f64::NAN, 0.0, 0.0).zoom(), 1.0);
  }

  #[test]
  fn zoom_at_center_keeps_pan() {
    let view = ViewState::default();
    let zoomed = zoom_at(&view, 500.0, 500.0, 250.0, 250.0, 2.0);
    assert!(approx_eq(zoomed.zoom(), 2.0));
    assert!(approx_eq(zoomed.pan().0, 0.0));
    assert!(approx_eq(zoomed.pan().1, 0.0));
  }

  #[test]
  fn zoom_at_corner_keeps_point_under_cursor() {
    let view = ViewState::new(1.0, 1.5, -2.0);
    let (px, py) = (100.0, 420.0);
    let before = CoordinateMapper::new(&view, 500.0, 500.0).to_math(px, py);
    let zoomed = zoom_at(&view, 500.0, 500.0, px, py, 3.7);
    let after = CoordinateMapper::new(&zoomed, 500.0, 500.0).to_math(px, py);
    assert!(approx_eq(before.0, after.0));
    assert!(approx_eq(before.1, after.1));
  }
}
