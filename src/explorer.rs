//! Top-level page state: the selected function, overlay switches, the graph
//! panel and the practice card. Control events flow in through
//! [`Explorer::apply`]; everything else is derived on demand.

use log::{debug, info};

use crate::ExplorerError;
use crate::controls::{ControlEvent, ControlPanel, OverlayFlags};
use crate::functions::{FunctionDescriptor, FunctionId, get_function};
use crate::graph::{GraphConfig, GraphView};
use crate::practice::PracticeSession;

pub const DEFAULT_FUNCTION: FunctionId = FunctionId::Quadratic;

#[derive(Debug, Clone)]
pub struct Explorer {
  selected: FunctionId,
  overlays: OverlayFlags,
  graph: GraphView,
  practice: PracticeSession,
}

impl Default for Explorer {
  fn default() -> Self {
    Self::new(GraphConfig::default())
  }
}

impl Explorer {
  pub fn new(config: GraphConfig) -> Self {
    Self {
      selected: DEFAULT_FUNCTION,
      overlays: OverlayFlags::default(),
      graph: GraphView::new(config),
      practice: PracticeSession::new(DEFAULT_FUNCTION),
    }
  }

  pub fn selected(&self) -> FunctionId {
    self.selected
  }

  pub fn function(&self) -> &'static FunctionDescriptor {
    get_function(self.selected)
  }

  pub fn overlays(&self) -> OverlayFlags {
    self.overlays
  }

  /// Pan and zoom survive a function switch; practice starts over.
  pub fn apply(&mut self, event: ControlEvent) {
    debug!("control event: {event:?}");
    match event {
      ControlEvent::SelectFunction(id) => {
        if id != self.selected {
          info!("selected {id}");
          self.selected = id;
          self.practice.set_function(id);
          self.graph.pointer_leave();
        }
      }
      ControlEvent::SetOverlay(overlay, on) => self.overlays.set(overlay, on),
    }
  }

  /// Snapshot of the current selection for the control panel.
  pub fn control_panel(&self) -> ControlPanel {
    ControlPanel::new(self.selected, self.overlays)
  }

  pub fn graph(&self) -> &GraphView {
    &self.graph
  }

  pub fn graph_mut(&mut self) -> &mut GraphView {
    &mut self.graph
  }

  pub fn practice(&self) -> &PracticeSession {
    &self.practice
  }

  pub fn practice_mut(&mut self) -> &mut PracticeSession {
    &mut self.practice
  }

  pub fn render(&self) -> Result<String, ExplorerError> {
    self.graph.render(self.function(), &self.overlays)
  }
}
