use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use parentfn::functions::{Direction, End};
use parentfn::graph::{GraphConfig, GraphView, MIN_CANVAS_SIZE, ViewState};
use parentfn::practice::PracticeSession;
use parentfn::tutorial::{SummaryAction, Tutorial, TutorialStep};
use parentfn::utils::write_output;
use parentfn::{
  ExplorerError, FunctionId, OverlayFlags, catalog, get_function,
};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the parent functions in the catalog
  List,
  /// Show the properties of one function
  Info {
    /// Function id, e.g. `quadratic` or `square-root`
    id: FunctionId,
    /// Print as JSON
    #[arg(long)]
    json: bool,
  },
  /// Render a function graph as SVG
  Plot {
    id: FunctionId,
    #[arg(long)]
    intercepts: bool,
    #[arg(long)]
    extrema: bool,
    #[arg(long)]
    domain_range: bool,
    #[arg(long)]
    end_behavior: bool,
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,
    /// Canvas side in pixels
    #[arg(
      long,
      default_value_t = 500,
      value_parser = clap::value_parser!(u32).range(MIN_CANVAS_SIZE as i64..),
    )]
    size: u32,
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Answer practice questions about a function
  Practice { id: FunctionId },
  /// Interactive end-behavior tutorial
  Tutorial {
    #[arg(long)]
    seed: Option<u64>,
    /// Write the tutorial graph for each step into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  match cli.command {
    Commands::List => {
      for f in catalog() {
        println!("{:<18} {}", f.id, f.title());
      }
    }
    Commands::Info { id, json } => print_info(id, json),
    Commands::Plot {
      id,
      intercepts,
      extrema,
      domain_range,
      end_behavior,
      zoom,
      pan_x,
      pan_y,
      size,
      output,
    } => {
      let mut graph = GraphView::new(GraphConfig {
        size,
        ..GraphConfig::default()
      });
      graph.set_view(ViewState::new(zoom, pan_x, pan_y));
      let overlays = OverlayFlags {
        intercepts,
        extrema,
        domain_range,
        end_behavior,
      };
      let svg = graph.render(get_function(id), &overlays)?;
      write_output(output.as_deref(), &svg)
        .context("could not write SVG output")?;
      if let Some(path) = output {
        info!("wrote {}", path.display());
      }
    }
    Commands::Practice { id } => run_practice(id)?,
    Commands::Tutorial { seed, svg_dir } => {
      let tutorial = match seed {
        Some(seed) => Tutorial::seeded(seed),
        None => Tutorial::new(),
      };
      run_tutorial(tutorial, svg_dir.as_deref())?;
    }
  }

  Ok(())
}

fn print_info(id: FunctionId, as_json: bool) {
  let f = get_function(id);
  if as_json {
    let value = json!({
      "id": f.id.as_str(),
      "name": f.name,
      "expression": f.expression,
      "domain": f.domain,
      "range": f.range,
      "xIntercepts": f.x_intercepts,
      "yIntercept": f.y_intercept,
      "extrema": f.extrema,
      "increasing": f.increasing,
      "decreasing": f.decreasing,
      "endBehavior": f.end_behavior_text(),
    });
    println!("{value:#}");
    return;
  }
  println!("{}", f.title());
  println!("  Domain:         {}", f.domain);
  println!("  Range:          {}", f.range);
  println!("  x-intercepts:   {}", f.x_intercepts);
  println!("  y-intercept:    {}", f.y_intercept);
  if let Some(extrema) = f.extrema {
    println!("  Extrema:        {extrema}");
  }
  println!("  Increasing:     {}", f.increasing);
  println!("  Decreasing:     {}", f.decreasing);
  println!("  End behavior:   {}", f.end_behavior_text());
}

fn prompt(text: &str) -> Result<Option<String>> {
  print!("{text}");
  io::stdout().flush()?;
  let mut line = String::new();
  if io::stdin().lock().read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim().to_string()))
}

fn run_practice(id: FunctionId) -> Result<()> {
  let mut session = PracticeSession::new(id);
  println!("{}", get_function(id).title());
  println!("Commands: :hint, :next, :quit");
  loop {
    println!(
      "\nQ{}/{}: {}",
      session.index() + 1,
      session.question_count(),
      session.question().question
    );
    let Some(line) = prompt("> ")? else {
      return Ok(());
    };
    match line.as_str() {
      ":quit" | ":q" => return Ok(()),
      ":next" => {
        session.next_question();
      }
      ":hint" => match (session.toggle_hint(), session.hint()) {
        (true, Some(hint)) => println!("Hint: {hint}"),
        _ => println!("Hint hidden."),
      },
      answer => println!("{}", session.check(answer)),
    }
  }
}

fn run_tutorial(mut tutorial: Tutorial, svg_dir: Option<&Path>) -> Result<()> {
  println!("End behavior tutorial. Type :quit to leave.");
  let graph = GraphView::default();
  let mut frame = 0;
  loop {
    if let Some(dir) = svg_dir {
      let svg = graph
        .render_tutorial(tutorial.current_function(), tutorial.end_markers())?;
      let path = dir.join(format!("step-{frame:03}.svg"));
      write_output(Some(&path), &svg)
        .with_context(|| format!("could not write {}", path.display()))?;
      frame += 1;
    }

    println!("\n{}", tutorial.current_function().expression);
    println!("{}", tutorial.prompt());
    if let Some(summary) = tutorial.summary() {
      println!("  {}", summary.statement);
      for reason in &summary.reasons {
        println!("  - {reason}");
      }
    }

    let hint = match tutorial.step() {
      TutorialStep::SelectXDirection | TutorialStep::SelectYDirection => {
        "[-inf | inf]"
      }
      TutorialStep::SelectEnd => "[left | right]",
      TutorialStep::CompleteEndBehavior => "[x f(x), e.g. -inf inf]",
      TutorialStep::ShowSummary if tutorial.can_complete() => {
        "[another | complete]"
      }
      TutorialStep::ShowSummary => "[another]",
      TutorialStep::Completed => "[restart]",
    };
    let Some(line) = prompt(&format!("{hint} > "))? else {
      return Ok(());
    };
    if line == ":quit" || line == ":q" {
      return Ok(());
    }

    let outcome = answer_step(&mut tutorial, &line);
    match outcome {
      Ok(()) => {
        if let Some(feedback) = tutorial.feedback() {
          println!("{feedback}");
        }
      }
      Err(e) => println!("{e}"),
    }
  }
}

fn answer_step(tutorial: &mut Tutorial, line: &str) -> parentfn::Result<()> {
  match tutorial.step() {
    TutorialStep::SelectXDirection => {
      tutorial.select_x_direction(line.parse::<Direction>()?)?;
    }
    TutorialStep::SelectEnd => {
      tutorial.select_end(line.parse::<End>()?)?;
    }
    TutorialStep::SelectYDirection => {
      tutorial.select_y_direction(line.parse::<Direction>()?)?;
    }
    TutorialStep::CompleteEndBehavior => {
      let mut fields = line.split_whitespace();
      let x = fields.next().map(str::parse::<Direction>).transpose()?;
      let fx = fields.next().map(str::parse::<Direction>).transpose()?;
      tutorial.submit_end_behavior(x, fx)?;
    }
    TutorialStep::ShowSummary => {
      tutorial.finish_summary(line.parse::<SummaryAction>()?)?;
    }
    TutorialStep::Completed => match line {
      "restart" => tutorial.restart()?,
      other => return Err(ExplorerError::InvalidToken(other.to_string())),
    },
  }
  Ok(())
}
