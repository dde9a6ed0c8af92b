#![warn(clippy::all, rust_2018_idioms)]

//! Points and segments on a Cartesian plane drawn onto a pixel canvas.
//!
//! Everything in this crate is independent of any drawing surface: clicks
//! come in as pixel coordinates, and `PlotterState::scene` describes what has
//! to be drawn.

mod geometry;
mod label;
mod scene;
mod state;
mod status;

pub use geometry::{canvas_to_math, format_coord, round1, Coord};
pub use label::label_for;
pub use scene::{Rgba, SceneItem, MIN_GRID_SPACING};
pub use state::{PlotterMode, PlotterSettings, PlotterState, Point, Segment};
pub use status::StatusMessage;
