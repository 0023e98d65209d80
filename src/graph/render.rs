use plotters::prelude::*;

use crate::ExplorerError;
use crate::utils::html_escape;

/// Internal rendering resolution multiplier for sub-pixel precision.
/// Plotters maps to integer coordinates, so we render at a higher resolution
/// and scale down via SVG viewBox to get smooth curves.
pub(crate) const RESOLUTION_SCALE: u32 = 10;

/// Smallest canvas side, in pixels, that leaves room for tick labels.
pub const MIN_CANVAS_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
  fn to_plotters(self) -> RGBColor {
    RGBColor(self.0, self.1, self.2)
  }

  pub fn to_hex(self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
  }
}

pub const CURVE_COLOR: Rgb = Rgb(0x88, 0x84, 0xd8);
pub const GRID_COLOR: Rgb = Rgb(0xe0, 0xe0, 0xe0);
pub const AXIS_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);
pub const TICK_COLOR: Rgb = Rgb(0x66, 0x66, 0x66);
pub const X_INTERCEPT_COLOR: Rgb = Rgb(0xff, 0x57, 0x22);
pub const Y_INTERCEPT_COLOR: Rgb = Rgb(0x4c, 0xaf, 0x50);
pub const EXTREMA_COLOR: Rgb = Rgb(0x9c, 0x27, 0xb0);
pub const END_BEHAVIOR_COLOR: Rgb = Rgb(0x3f, 0x51, 0xb5);
const CAPTION_FILL: Rgb = Rgb(0xee, 0xf2, 0xff);
const TITLE_COLOR: Rgb = Rgb(0x37, 0x41, 0x51);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
  Start,
  Middle,
  End,
}

impl TextAnchor {
  fn as_svg(&self) -> &'static str {
    match self {
      TextAnchor::Start => "start",
      TextAnchor::Middle => "middle",
      TextAnchor::End => "end",
    }
  }
}

/// Text placed at display-pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
  pub x: f64,
  pub y: f64,
  pub text: String,
  pub anchor: TextAnchor,
  pub color: Rgb,
  pub size: f64,
  pub bold: bool,
}

impl TextLabel {
  pub fn new(x: f64, y: f64, text: impl Into<String>, color: Rgb) -> Self {
    Self {
      x,
      y,
      text: text.into(),
      anchor: TextAnchor::Start,
      color,
      size: 11.0,
      bold: false,
    }
  }

  pub fn anchored(mut self, anchor: TextAnchor) -> Self {
    self.anchor = anchor;
    self
  }

  pub fn sized(mut self, size: f64) -> Self {
    self.size = size;
    self
  }

  pub fn bold(mut self) -> Self {
    self.bold = true;
    self
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
  Up,
  Down,
  Left,
  Right,
}

/// Overlay primitives, all in display pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
  VerticalGuide {
    x: f64,
    color: Rgb,
    label: Option<String>,
  },
  HorizontalGuide {
    y: f64,
    color: Rgb,
    label: Option<String>,
  },
  Point {
    x: f64,
    y: f64,
    color: Rgb,
    label: Option<String>,
  },
  Arrow {
    x: f64,
    y: f64,
    direction: ArrowDirection,
    color: Rgb,
  },
  EndMarker {
    x: f64,
    y: f64,
    color: Rgb,
    highlighted: bool,
    label: String,
  },
}

/// Everything a frame shows, already mapped to display pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
  pub size: u32,
  /// Emit `width="100%"` instead of a fixed size.
  pub full_width: bool,
  pub title: String,
  pub grid_x: Vec<f64>,
  pub grid_y: Vec<f64>,
  /// Pixel y of the x-axis, when y = 0 is visible.
  pub x_axis: Option<f64>,
  /// Pixel x of the y-axis, when x = 0 is visible.
  pub y_axis: Option<f64>,
  pub tick_marks: Vec<((f64, f64), (f64, f64))>,
  pub tick_labels: Vec<TextLabel>,
  pub curve: Vec<Vec<(f64, f64)>>,
  pub marks: Vec<Mark>,
  pub captions: Vec<String>,
}

fn px(v: f64) -> i32 {
  (v * RESOLUTION_SCALE as f64).round() as i32
}

fn pt((x, y): (f64, f64)) -> (i32, i32) {
  (px(x), px(y))
}

fn render_error<E: std::fmt::Display>(e: E) -> ExplorerError {
  ExplorerError::Render(format!("Plot: {e}"))
}

/// Split the segment `from`–`to` into dashes of length `dash` separated by
/// `gap`.
fn dashes(
  from: (f64, f64),
  to: (f64, f64),
  dash: f64,
  gap: f64,
) -> Vec<[(f64, f64); 2]> {
  let (dx, dy) = (to.0 - from.0, to.1 - from.1);
  let len = (dx * dx + dy * dy).sqrt();
  if len == 0.0 {
    return Vec::new();
  }
  let (ux, uy) = (dx / len, dy / len);
  let mut out = Vec::new();
  let mut t = 0.0;
  while t < len {
    let end = (t + dash).min(len);
    out.push([
      (from.0 + ux * t, from.1 + uy * t),
      (from.0 + ux * end, from.1 + uy * end),
    ]);
    t += dash + gap;
  }
  out
}

fn arrow_head(
  x: f64,
  y: f64,
  direction: ArrowDirection,
) -> Vec<(f64, f64)> {
  const LEN: f64 = 12.0;
  const HALF: f64 = 6.0;
  match direction {
    ArrowDirection::Up => vec![(x, y - LEN), (x - HALF, y), (x + HALF, y)],
    ArrowDirection::Down => vec![(x, y + LEN), (x - HALF, y), (x + HALF, y)],
    ArrowDirection::Left => vec![(x - LEN, y), (x, y - HALF), (x, y + HALF)],
    ArrowDirection::Right => vec![(x + LEN, y), (x, y - HALF), (x, y + HALF)],
  }
}

/// Render a scene to SVG using plotters, then inject text labels.
pub fn render_svg(scene: &Scene) -> Result<String, ExplorerError> {
  if scene.size < MIN_CANVAS_SIZE {
    return Err(ExplorerError::Render(format!(
      "canvas size {} is below the minimum of {MIN_CANVAS_SIZE}",
      scene.size
    )));
  }
  let size = scene.size as f64;
  let render_size = scene.size * RESOLUTION_SCALE;
  let s = RESOLUTION_SCALE;
  let mut labels: Vec<TextLabel> = Vec::new();

  let mut buf = String::new();
  {
    let root = SVGBackend::with_string(&mut buf, (render_size, render_size))
      .into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let grid = GRID_COLOR.to_plotters().stroke_width(s);
    for &x in &scene.grid_x {
      root
        .draw(&PathElement::new(vec![pt((x, 0.0)), pt((x, size))], grid))
        .map_err(render_error)?;
    }
    for &y in &scene.grid_y {
      root
        .draw(&PathElement::new(vec![pt((0.0, y)), pt((size, y))], grid))
        .map_err(render_error)?;
    }

    let axis = AXIS_COLOR.to_plotters().stroke_width(s * 3 / 2);
    if let Some(y) = scene.x_axis {
      root
        .draw(&PathElement::new(vec![pt((0.0, y)), pt((size, y))], axis))
        .map_err(render_error)?;
    }
    if let Some(x) = scene.y_axis {
      root
        .draw(&PathElement::new(vec![pt((x, 0.0)), pt((x, size))], axis))
        .map_err(render_error)?;
    }

    let tick = TICK_COLOR.to_plotters().stroke_width(s);
    for &(a, b) in &scene.tick_marks {
      root
        .draw(&PathElement::new(vec![pt(a), pt(b)], tick))
        .map_err(render_error)?;
    }

    let curve = CURVE_COLOR.to_plotters().stroke_width(2 * s);
    for segment in scene.curve.iter().filter(|seg| seg.len() > 1) {
      let points: Vec<(i32, i32)> = segment.iter().copied().map(pt).collect();
      root
        .draw(&PathElement::new(points, curve))
        .map_err(render_error)?;
    }

    for mark in &scene.marks {
      match mark {
        Mark::VerticalGuide { x, color, label } => {
          let style = color.to_plotters().stroke_width(s * 3 / 2);
          for [a, b] in dashes((*x, 0.0), (*x, size), 5.0, 5.0) {
            root
              .draw(&PathElement::new(vec![pt(a), pt(b)], style))
              .map_err(render_error)?;
          }
          if let Some(text) = label {
            labels.push(TextLabel::new(x + 6.0, 16.0, text.clone(), *color));
          }
        }
        Mark::HorizontalGuide { y, color, label } => {
          let style = color.to_plotters().stroke_width(s * 3 / 2);
          for [a, b] in dashes((0.0, *y), (size, *y), 5.0, 5.0) {
            root
              .draw(&PathElement::new(vec![pt(a), pt(b)], style))
              .map_err(render_error)?;
          }
          if let Some(text) = label {
            labels.push(
              TextLabel::new(size - 6.0, y - 6.0, text.clone(), *color)
                .anchored(TextAnchor::End),
            );
          }
        }
        Mark::Point { x, y, color, label } => {
          root
            .draw(&Circle::new(pt((*x, *y)), 5 * s as i32, color.to_plotters().filled()))
            .map_err(render_error)?;
          if let Some(text) = label {
            labels.push(
              TextLabel::new(*x, y + 20.0, text.clone(), *color)
                .anchored(TextAnchor::Middle),
            );
          }
        }
        Mark::Arrow {
          x,
          y,
          direction,
          color,
        } => {
          let head: Vec<(i32, i32)> =
            arrow_head(*x, *y, *direction).into_iter().map(pt).collect();
          root
            .draw(&Polygon::new(head, color.to_plotters().filled()))
            .map_err(render_error)?;
        }
        Mark::EndMarker {
          x,
          y,
          color,
          highlighted,
          label,
        } => {
          let radius = if *highlighted { 8 } else { 6 };
          root
            .draw(&Circle::new(pt((*x, *y)), (radius + 2) * s as i32, WHITE.filled()))
            .map_err(render_error)?;
          root
            .draw(&Circle::new(pt((*x, *y)), radius * s as i32, color.to_plotters().filled()))
            .map_err(render_error)?;
          let (lx, anchor) = if *x < size / 2.0 {
            (x + 12.0, TextAnchor::Start)
          } else {
            (x - 12.0, TextAnchor::End)
          };
          let ly = (y - 12.0).min(size - 6.0).max(14.0);
          let mut text =
            TextLabel::new(lx, ly, label.clone(), *color).anchored(anchor);
          if *highlighted {
            text = text.bold();
          }
          labels.push(text.sized(12.0));
        }
      }
    }

    if !scene.captions.is_empty() {
      let top = size - 8.0 - scene.captions.len() as f64 * 18.0;
      root
        .draw(&Rectangle::new(
          [pt((4.0, top)), pt((size - 4.0, size - 4.0))],
          CAPTION_FILL.to_plotters().filled(),
        ))
        .map_err(render_error)?;
      for (i, caption) in scene.captions.iter().enumerate() {
        let baseline = top + 14.0 + i as f64 * 18.0;
        labels.push(TextLabel::new(12.0, baseline, caption.clone(), TITLE_COLOR).sized(12.0));
      }
    }

    root.present().map_err(render_error)?;
  }

  rewrite_svg_header(&mut buf, scene.size, render_size, scene.full_width);

  let mut text_svg = String::new();
  if !scene.title.is_empty() {
    let title = TextLabel::new(size / 2.0, 20.0, scene.title.clone(), TITLE_COLOR)
      .anchored(TextAnchor::Middle)
      .sized(14.0)
      .bold();
    text_svg.push_str(&text_markup(&title));
  }
  for label in scene.tick_labels.iter().chain(labels.iter()) {
    text_svg.push_str(&text_markup(label));
  }
  if let Some(insert_pos) = buf.rfind("</svg>") {
    buf.insert_str(insert_pos, &text_svg);
  }

  Ok(buf)
}

fn text_markup(label: &TextLabel) -> String {
  let sf = RESOLUTION_SCALE as f64;
  let weight = if label.bold {
    " font-weight=\"bold\""
  } else {
    ""
  };
  format!(
    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" \
     font-family=\"sans-serif\" font-size=\"{:.0}\" \
     fill=\"{}\"{weight}>{}</text>\n",
    label.x * sf,
    label.y * sf,
    label.anchor.as_svg(),
    label.size * sf,
    label.color.to_hex(),
    html_escape(&label.text)
  )
}

fn rewrite_svg_header(
  buf: &mut String,
  svg_size: u32,
  render_size: u32,
  full_width: bool,
) {
  if let Some(pos) = buf.find('>') {
    let new_header = if full_width {
      format!(
        "<svg width=\"100%\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\" xmlns=\"http://www.w3.org/2000/svg\"",
        render_size, render_size,
      )
    } else {
      format!(
        "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\" xmlns=\"http://www.w3.org/2000/svg\"",
        svg_size, svg_size, render_size, render_size,
      )
    };
    buf.replace_range(..pos, &new_header);
  }
}
