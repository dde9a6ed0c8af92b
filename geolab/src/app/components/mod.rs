mod calculator;
mod plotter;

pub use calculator::Calculator;
pub use plotter::Plotter;
