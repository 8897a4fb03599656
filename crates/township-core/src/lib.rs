//! Core types, persistence ports and domain services for the Township backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement the traits in [`store`]; the HTTP layer drives
//! the services in [`services`].

pub mod allotment;
pub mod building;
pub mod citizen;
pub mod error;
pub mod services;
pub mod store;

pub use error::{EntityKind, Error, Result};
