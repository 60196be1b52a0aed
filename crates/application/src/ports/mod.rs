//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod inference_port;
mod session_store;

pub use inference_port::{InferencePort, InferenceResult};
pub use session_store::SessionStore;
