//! Core logic including the conversation orchestrator, tool dispatch
//! and the conversation log.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod conversation;
mod orchestrator;
pub mod tool;

pub use orchestrator::{
    Orchestrator, OrchestratorBuilder, RunError, RunOutcome,
};
