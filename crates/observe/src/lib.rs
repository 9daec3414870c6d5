//! Initialization logic for logging that is shared between binaries and test
//! harnesses embedding the auction core.

pub mod tracing;
