//! Storage abstraction for events.
//!
//! Defines the repository trait the server's backends implement, the shared
//! error type, and the pure error-to-HTTP-status mapping.

mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::EventRepository;
