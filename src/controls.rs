//! Function picker and overlay switches.
//!
//! The panel holds no state of its own; it lists choices from a snapshot and
//! turns user picks into [`ControlEvent`]s for the owner to apply.

use crate::functions::{FunctionId, catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
  Intercepts,
  Extrema,
  DomainRange,
  EndBehavior,
}

impl Overlay {
  pub const ALL: [Overlay; 4] = [
    Overlay::Intercepts,
    Overlay::Extrema,
    Overlay::DomainRange,
    Overlay::EndBehavior,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      Overlay::Intercepts => "Show Intercepts",
      Overlay::Extrema => "Show Extrema",
      Overlay::DomainRange => "Show Domain & Range",
      Overlay::EndBehavior => "Show End Behavior",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayFlags {
  pub intercepts: bool,
  pub extrema: bool,
  pub domain_range: bool,
  pub end_behavior: bool,
}

impl OverlayFlags {
  pub fn all() -> Self {
    Self {
      intercepts: true,
      extrema: true,
      domain_range: true,
      end_behavior: true,
    }
  }

  pub fn get(&self, overlay: Overlay) -> bool {
    match overlay {
      Overlay::Intercepts => self.intercepts,
      Overlay::Extrema => self.extrema,
      Overlay::DomainRange => self.domain_range,
      Overlay::EndBehavior => self.end_behavior,
    }
  }

  pub fn set(&mut self, overlay: Overlay, on: bool) {
    match overlay {
      Overlay::Intercepts => self.intercepts = on,
      Overlay::Extrema => self.extrema = on,
      Overlay::DomainRange => self.domain_range = on,
      Overlay::EndBehavior => self.end_behavior = on,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
  SelectFunction(FunctionId),
  SetOverlay(Overlay, bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOption {
  pub id: FunctionId,
  pub label: String,
  pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySwitch {
  pub overlay: Overlay,
  pub label: &'static str,
  pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPanel {
  selected: FunctionId,
  overlays: OverlayFlags,
}

impl ControlPanel {
  pub fn new(selected: FunctionId, overlays: OverlayFlags) -> Self {
    Self { selected, overlays }
  }

  /// Dropdown entries, `Name: expression` in catalog order.
  pub fn function_options(&self) -> Vec<FunctionOption> {
    catalog()
      .iter()
      .map(|f| FunctionOption {
        id: f.id,
        label: f.title(),
        selected: f.id == self.selected,
      })
      .collect()
  }

  pub fn switches(&self) -> Vec<OverlaySwitch> {
    Overlay::ALL
      .iter()
      .map(|&overlay| OverlaySwitch {
        overlay,
        label: overlay.label(),
        checked: self.overlays.get(overlay),
      })
      .collect()
  }

  pub fn select(&self, id: FunctionId) -> ControlEvent {
    ControlEvent::SelectFunction(id)
  }

  pub fn set_overlay(&self, overlay: Overlay, on: bool) -> ControlEvent {
    ControlEvent::SetOverlay(overlay, on)
  }

  /// Flip a switch relative to the snapshot.
  pub fn toggle(&self, overlay: Overlay) -> ControlEvent {
    ControlEvent::SetOverlay(overlay, !self.overlays.get(overlay))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_every_function_with_selection() {
    let panel = ControlPanel::new(FunctionId::Cubic, OverlayFlags::default());
    let options = panel.function_options();
    assert_eq!(options.len(), catalog().len());
    let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "Cubic Function: f(x) = x³");
  }

  #[test]
  fn toggle_flips_the_snapshot_value() {
    let mut flags = OverlayFlags::default();
    flags.set(Overlay::Extrema, true);
    let panel = ControlPanel::new(FunctionId::Quadratic, flags);
    assert_eq!(
      panel.toggle(Overlay::Extrema),
      ControlEvent::SetOverlay(Overlay::Extrema, false)
    );
    assert_eq!(
      panel.toggle(Overlay::Intercepts),
      ControlEvent::SetOverlay(Overlay::Intercepts, true)
    );
  }

  #[test]
  fn switches_in_display_order() {
    let panel = ControlPanel::new(FunctionId::Quadratic, OverlayFlags::all());
    let labels: Vec<_> = panel.switches().iter().map(|s| s.label).collect();
    assert_eq!(
      labels,
      vec![
        "Show Intercepts",
        "Show Extrema",
        "Show Domain & Range",
        "Show End Behavior"
      ]
    );
    assert!(panel.switches().iter().all(|s| s.checked));
  }
}
