//! Domain layer for the wholesale deal analyzer
//!
//! Contains the deal input model, session access state, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
