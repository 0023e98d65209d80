// Plotting pipeline: mapper -> sampler -> scene -> SVG
pub mod mapper;
pub mod render;
pub mod sampler;
pub mod ticks;
pub mod view;

pub use mapper::{CoordinateMapper, ViewState, zoom_at};
pub use render::{MIN_CANVAS_SIZE, Mark, Scene, render_svg};
pub use sampler::{Sample, SampleOptions, sample_function, split_into_segments};
pub use view::{EndMarkers, GraphConfig, GraphView, HoverState};
