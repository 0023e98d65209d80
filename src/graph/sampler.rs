use log::trace;

use crate::functions::FunctionDescriptor;

/// Half-width of the gap kept around an excluded point at zoom 1.
pub const EXCLUSION_TOLERANCE: f64 = 0.05;

/// One evaluated grid point. `y == None` breaks the rendered path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
  pub x: f64,
  pub y: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
  /// Number of intervals; `count + 1` samples are produced.
  pub count: usize,
  pub excluded_point: Option<f64>,
  pub exclusion_tolerance: f64,
  /// Samples outside these y-bounds are dropped (bounded variant).
  pub y_bounds: Option<(f64, f64)>,
}

impl SampleOptions {
  /// Options for a catalog function at the given zoom. The exclusion gap
  /// shrinks as the view zooms in so it stays about the same on screen.
  pub fn for_function(f: &FunctionDescriptor, zoom: f64) -> Self {
    Self {
      count: f.sample_count,
      excluded_point: f.excluded_point,
      exclusion_tolerance: EXCLUSION_TOLERANCE / zoom,
      y_bounds: None,
    }
  }

  pub fn with_y_bounds(mut self, lo: f64, hi: f64) -> Self {
    self.y_bounds = Some((lo, hi));
    self
  }
}

/// Evaluate at one point, applying the exclusion and filtering rules.
pub fn evaluate_point<F>(eval: F, x: f64, opts: &SampleOptions) -> Option<f64>
where
  F: Fn(f64) -> f64,
{
  if let Some(p) = opts.excluded_point
    && (x - p).abs() < opts.exclusion_tolerance
  {
    return None;
  }
  let y = eval(x);
  if !y.is_finite() {
    return None;
  }
  match opts.y_bounds {
    Some((lo, hi)) if y < lo || y > hi => None,
    _ => Some(y),
  }
}

/// Sample `eval` at `count + 1` evenly spaced points across `interval`.
pub fn sample_with<F>(
  eval: F,
  interval: (f64, f64),
  opts: &SampleOptions,
) -> Vec<Sample>
where
  F: Fn(f64) -> f64,
{
  let (lo, hi) = interval;
  let count = opts.count.max(1);
  let step = (hi - lo) / count as f64;
  let samples: Vec<Sample> = (0..=count)
    .map(|i| {
      let x = if i == count { hi } else { lo + step * i as f64 };
      Sample {
        x,
        y: evaluate_point(&eval, x, opts),
      }
    })
    .collect();
  trace!(
    "sampled {} points over [{lo}, {hi}], {} undefined",
    samples.len(),
    samples.iter().filter(|s| s.y.is_none()).count()
  );
  samples
}

pub fn sample_function(
  f: &FunctionDescriptor,
  interval: (f64, f64),
  opts: &SampleOptions,
) -> Vec<Sample> {
  sample_with(f.eval, interval, opts)
}

/// Split samples into contiguous defined runs, breaking at every undefined
/// sample. Never bridges a gap.
pub fn split_into_segments(samples: &[Sample]) -> Vec<Vec<(f64, f64)>> {
  let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
  let mut current: Vec<(f64, f64)> = Vec::new();

  for sample in samples {
    match sample.y {
      Some(y) => current.push((sample.x, y)),
      None if !current.is_empty() => {
        segments.push(std::mem::take(&mut current));
      }
      None => {}
    }
  }
  if !current.is_empty() {
    segments.push(current);
  }
  segments
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::functions::{FunctionId, get_function};

  fn opts(count: usize) -> SampleOptions {
    SampleOptions {
      count,
      excluded_point: None,
      exclusion_tolerance: EXCLUSION_TOLERANCE,
      y_bounds: None,
    }
  }

  #[test]
  fn produces_uniform_grid_including_endpoints() {
    let samples = sample_with(|x| x, (-1.0, 1.0), &opts(4));
    let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
  }

  #[test]
  fn marks_nan_and_infinite_values_undefined() {
    let samples = sample_with(
      |x| if x < 0.0 { f64::NAN } else if x == 0.0 { f64::INFINITY } else { x },
      (-1.0, 1.0),
      &opts(2),
    );
    assert_eq!(samples[0].y, None);
    assert_eq!(samples[1].y, None);
    assert_eq!(samples[2].y, Some(1.0));
  }

  #[test]
  fn bounded_variant_drops_out_of_range_values() {
    let samples =
      sample_with(|x| x * x, (-4.0, 4.0), &opts(8).with_y_bounds(-5.0, 5.0));
    let defined: Vec<f64> = samples.iter().filter_map(|s| s.y).collect();
    assert_eq!(defined, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
  }

  #[test]
  fn exclusion_gap_scales_with_zoom() {
    let f = get_function(FunctionId::Reciprocal);
    assert_eq!(SampleOptions::for_function(f, 1.0).exclusion_tolerance, 0.05);
    assert_eq!(SampleOptions::for_function(f, 10.0).exclusion_tolerance, 0.005);
    assert_eq!(SampleOptions::for_function(f, 0.1).exclusion_tolerance, 0.5);
  }

  #[test]
  fn single_gap_gives_two_segments() {
    let samples = vec![
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
  fn leading_and_repeated_gaps_do_not_create_empty_segments() {
    let samples = vec![
      Sample { x: 0.0, y: None },
      Sample { x: 1.0, y: Some(1.0) },
      Sample { x: 2.0, y: None },
      Sample { x: 3.0, y: None },
      Sample { x: 4.0, y: Some(4.0) },
      Sample { x: 5.0, y: None },
    ];
    let segments = split_into_segments(&samples);
    assert_eq!(segments, vec![vec![(1.0, 1.0)], vec![(4.0, 4.0)]]);
  }
}
