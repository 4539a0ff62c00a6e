//! Display-only consumers of the token stream.
//!
//! Everything here produces text artifacts from an already-scanned token
//! list and feeds nothing back into the scanner. The codegen stages are a
//! teaching demo, not a real backend.

pub mod codegen;
pub mod graph;
pub mod report;
pub mod semantic;
