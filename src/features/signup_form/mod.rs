//! Signup form
//!
//! Client side of the registration flow: input masks, postal code driven
//! address filling, field validation and submission to `POST /submit`.

pub mod client;
pub mod form;
pub mod masks;

pub use client::{SignupClient, SubmissionOutcome};
pub use form::{AddressLookupOutcome, SignupForm};
pub use masks::{format_birth_date, format_phone, format_tax_id, TaxIdKind};
