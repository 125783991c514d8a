//! The tools this demo declares to the model.

mod calculator;

pub use calculator::CalculatorTool;
