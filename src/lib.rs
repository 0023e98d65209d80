use thiserror::Error;

pub mod controls;
pub mod explorer;
pub mod feedback;
pub mod functions;
pub mod graph;
pub mod practice;
pub mod tutorial;
pub mod utils;

pub use controls::{ControlEvent, ControlPanel, Overlay, OverlayFlags};
pub use explorer::Explorer;
pub use functions::{FunctionDescriptor, FunctionId, catalog, get_function};
pub use graph::view::GraphView;
pub use tutorial::{Tutorial, TutorialStep};

#[derive(Error, Debug)]
pub enum ExplorerError {
  #[error("Unknown function: {0}")]
  UnknownFunction(String),
  #[error("Unexpected input for step {step}: {input}")]
  UnexpectedInput { step: String, input: String },
  #[error("Render error: {0}")]
  Render(String),
  #[error("Invalid answer token: {0}")]
  InvalidToken(String),
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
