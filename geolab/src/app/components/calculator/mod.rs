mod logic;
mod ui;

use std::collections::{BTreeMap, BTreeSet};

use figure_calc::{CalculatorState, DiagramSettings};

/// The figure calculator view. Keeps one text buffer per parameter so the
/// text fields can be edited freely until they lose focus.
pub struct Calculator {
    pub state: CalculatorState,
    diagram_settings: DiagramSettings,
    input_buffers: BTreeMap<&'static str, String>,
    /// Buffers typed into since they were last synced.
    edited_inputs: BTreeSet<&'static str>,
}

impl Calculator {
    pub fn new(diagram_settings: DiagramSettings) -> Self {
        let mut calculator = Self {
            state: CalculatorState::new(),
            diagram_settings,
            input_buffers: BTreeMap::new(),
            edited_inputs: BTreeSet::new(),
        };
        calculator.sync_inputs();
        calculator
    }
}
