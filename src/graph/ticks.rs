/// Allowed tick steps, smallest first.
pub const TICK_LADDER: [f64; 7] = [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0];
/// Upper bound on tick intervals across the visible span.
pub const MAX_TICK_INTERVALS: f64 = 10.0;

/// Smallest ladder step that keeps the tick count at or below
/// `MAX_TICK_INTERVALS`, falling back to the largest step when zoomed far out.
pub fn tick_step(span: f64) -> f64 {
  TICK_LADDER
    .iter()
    .copied()
    .find(|step| span / step <= MAX_TICK_INTERVALS + 1e-9)
    .unwrap_or(TICK_LADDER[TICK_LADDER.len() - 1])
}

/// Multiples of `step` within `[min, max]`. The tick at zero is exactly 0.0
/// so labels never read "-0".
pub fn tick_positions(min: f64, max: f64, step: f64) -> Vec<f64> {
  if step.is_nan()
    || step <= 0.0
    || !min.is_finite()
    || !max.is_finite()
    || min > max
  {
    return Vec::new();
  }
  let first = (min / step - 1e-9).ceil() as i64;
  let last = (max / step + 1e-9).floor() as i64;
  (first..=last)
    .map(|k| {
      let v = k as f64 * step;
      if k == 0 || v.abs() < step * 1e-9 { 0.0 } else { v }
    })
    .collect()
}

/// Format a tick value, dropping the trailing ".0" for integers.
pub fn format_tick(v: f64) -> String {
  if (v - v.round()).abs() < 1e-9 {
    let r = v.round() as i64;
    format!("{r}")
  } else {
    format!("{v:.1}")
  }
}
