//! eventline_client - CLI client for the eventline API.

pub mod cli;
pub mod client;
pub mod error;
pub mod form;
pub mod output;

pub use client::EventlineClient;
pub use error::{ClientError, Result};
