mod ui;

use plane_plotter::{PlotterSettings, PlotterState};

/// The coordinate plane view. All state lives in `PlotterState`; this type
/// only adds the egui rendering.
pub struct Plotter {
    pub state: PlotterState,
}

impl Plotter {
    pub fn new(settings: PlotterSettings) -> Self {
        Self {
            state: PlotterState::new(settings),
        }
    }
}
