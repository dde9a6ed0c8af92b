use app_core::string_error::ErrorStringExt;
use svg_export::Diagram;

use crate::diagram::DiagramSettings;
use crate::figure::{FigureKind, FigureResult, ParameterDef, Params, REGISTRY};
use crate::format::parse_input;

/// The active figure and its parameter values. Values are always within the
/// bounds of the active figure's parameter definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    active: FigureKind,
    values: Params,
}

impl CalculatorState {
    pub fn new() -> Self {
        let active = REGISTRY[0];
        Self {
            active,
            values: active.default_params(),
        }
    }

    pub fn active(&self) -> FigureKind {
        self.active
    }

    pub fn values(&self) -> &Params {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.active.parameter(key).map(|def| self.values.get(def.key))
    }

    /// Activate the figure registered under `key` and restore the defaults of
    /// all its parameters.
    pub fn select_figure(&mut self, key: &str) -> Result<(), String> {
        let kind = FigureKind::from_key(key).err_to_string(&format!("unknown figure '{key}'"))?;
        log::debug!("selecting figure {:?}", kind);
        self.active = kind;
        self.values = kind.default_params();
        Ok(())
    }

    /// Parse `raw` and store it for parameter `key`. Unparsable or infinite
    /// input falls back to the parameter minimum; anything else is clamped
    /// to the bounds.
    /// Returns the value actually stored.
    pub fn update_parameter(&mut self, key: &str, raw: &str) -> Result<f64, String> {
        let def = self.parameter_def(key)?;
        let value = match parse_input(raw) {
            Some(value) => def.clamp(value),
            None => {
                log::debug!("could not parse '{}' for '{}', using minimum", raw, key);
                def.min
            }
        };
        self.values.set(def.key, value);
        Ok(value)
    }

    /// Store an already numeric value (e.g. from a slider), clamped to the
    /// parameter bounds.
    pub fn set_parameter(&mut self, key: &str, value: f64) -> Result<f64, String> {
        let def = self.parameter_def(key)?;
        let value = if value.is_nan() { def.min } else { def.clamp(value) };
        self.values.set(def.key, value);
        Ok(value)
    }

    pub fn result(&self) -> FigureResult {
        self.active.compute(&self.values)
    }

    pub fn diagram(&self, settings: &DiagramSettings) -> Diagram {
        self.active.diagram(&self.values, settings)
    }

    fn parameter_def(&self, key: &str) -> Result<&'static ParameterDef, String> {
        self.active.parameter(key).err_to_string(&format!(
            "figure '{}' has no parameter '{key}'",
            self.active.key()
        ))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
