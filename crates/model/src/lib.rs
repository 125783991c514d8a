//! An abstraction layer for completion endpoints.
//!
//! This crate establishes a small protocol between the conversation
//! orchestrator and the completion endpoint it talks to, so that the
//! orchestrator can run against a hosted model or a local fake without
//! modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
