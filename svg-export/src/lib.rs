#![warn(clippy::all, rust_2018_idioms)]

mod diagram;
pub mod svg;

pub use diagram::{Anchor, Diagram, Shape, Style};
