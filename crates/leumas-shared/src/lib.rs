//! # Leumas Shared
//!
//! JSON payload types of the site's REST API and form endpoints.
//! No dependency on the domain crate; the server converts domain records into these.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldErrorMap};
