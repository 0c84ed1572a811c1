//! Contact form validation and submission.
//!
//! Fields move from `Untouched` to `Valid` or `Invalid` when they lose focus or
//! when the form is submitted, and drop back to `Untouched` as soon as they are
//! edited again.

pub mod form;
pub mod validate;

pub use form::{ContactForm, FieldError, FieldState, SubmitError};
pub use validate::{FieldKind, FieldSpec, ValidationError, validate};
