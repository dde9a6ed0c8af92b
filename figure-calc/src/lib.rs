#![warn(clippy::all, rust_2018_idioms)]

//! Area and perimeter of simple plane figures, with formula narration and a
//! labeled diagram.

mod diagram;
mod figure;
pub mod format;
mod state;

pub use diagram::DiagramSettings;
pub use figure::{Extra, FigureKind, FigureResult, ParameterDef, Params, REGISTRY, UNIT};
pub use state::CalculatorState;
