//! eventline_core - pure types and functions for the eventline project.
//!
//! Following the Functional Core pattern, nothing in this crate performs I/O.
//! The server and client crates share these types for type-safe API
//! communication.

pub mod event;
pub mod form;
pub mod storage;
