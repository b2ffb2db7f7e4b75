//! Minimum-coins challenge: one JSON request on stdin, one JSON response
//! on stdout.
//!
//! The crate splits into a pure solver and the contract layer around it,
//! so the whole exchange can be driven in-memory from tests.

pub mod contract;
pub mod solver;
