//! Shared vocabulary for debug clients
//!
//! A debug client and its host agree on two fixed vocabularies:
//! - capability flags a client advertises (debugger, interpreter,
//!   profiler, coverage, completion, unit testing, shell)
//! - the wire-protocol tokens they exchange
//!
//! This crate only defines those constants. Transports, breakpoint
//! handling and stepping logic live in the programs that consume them.

pub mod capabilities;
pub mod protocol;

pub use capabilities::{CapabilityError, ClientCapabilities};
