//! Typed client for the HH recruitment API.
//!
//! Every endpoint is a method on [`HhClient`]; failed calls come back as
//! [`HhError::Api`] carrying the status code and the parsed error payload.

pub mod applicant;
pub mod client;
pub mod common;
pub mod employer;
pub mod error;
pub mod query;
pub mod types;

pub use client::{HhClient, HhConfig};
pub use error::{HhApiError, HhError, HhResult};
