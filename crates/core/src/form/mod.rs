//! Edit/create form state machine.
//!
//! The form is an explicit state object owned by whoever owns the modal:
//! every transition, including the reset-on-close side effect, is a method
//! the owner calls rather than an implicit reaction to external state.

mod state;

pub use state::{EventDraft, FormData, FormField, FormPhase, FormState};
