//! Registration feature: stores signup form submissions.
//!
//! The password is replaced by its bcrypt hash and the confirmation field is
//! dropped before the document is inserted. No uniqueness is enforced.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/submit` | No | Store a registration |
//! | GET | `/users/all` | Basic (when configured) | List every stored registration |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod rules;
pub mod services;

pub use services::RegistrationService;
