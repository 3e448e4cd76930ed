//! Common reusable UI components
//!
//! Buttons and form fields shared by the pages.

pub mod button;
pub mod form;

pub use button::{ButtonSize, ButtonVariant, LinkButton, SubmitButton};
pub use form::{FormField, SelectField, TextAreaField};
