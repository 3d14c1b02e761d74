//! Error types for the adapters around the simulation
//!
//! The simulation itself has no failure path; these only surface from
//! configuration loading and the view layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid tuning JSON: {0}")]
    InvalidTuning(#[from] serde_json::Error),
    #[error("Cannot read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tuning value out of range: {0}")]
    TuningOutOfRange(&'static str),
    #[error("No view node with id {0}")]
    MissingNode(String),
    #[error("DOM error: {0}")]
    Dom(String),
}
