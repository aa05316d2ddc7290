//! Services used by TUI views

pub mod validator;

pub use validator::{FieldError, FormField, MovieFormValidator, error_for};
