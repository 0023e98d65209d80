/// Format a value for labels, dropping the trailing ".0" for integers and
/// never producing "-0".
pub fn format_number(v: f64) -> String {
  if (v - v.round()).abs() < 1e-9 {
    let r = v.round();
    if r == 0.0 {
      "0".to_string()
    } else {
      format!("{}", r as i64)
    }
  } else {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
  }
}

pub fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

/// Write to `path`, or to stdout with a trailing newline when there is none.
pub fn write_output(
  path: Option<&std::path::Path>,
  contents: &str,
) -> crate::Result<()> {
  use std::io::Write;

  match path {
    Some(p) => std::fs::write(p, contents)?,
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(contents.as_bytes())?;
      stdout.write_all(b"\n")?;
    }
  }
  Ok(())
}
