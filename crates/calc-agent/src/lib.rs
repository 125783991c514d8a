//! A single round-trip tool-calling demo: a user prompt goes to the
//! model with a declared calculator tool, requested calls run locally,
//! and their results feed a final natural-language answer.

pub mod tools;

pub use calc_agent_core::{
    Orchestrator, OrchestratorBuilder, RunError, RunOutcome,
};
