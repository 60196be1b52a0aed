//! Application layer - Use cases and orchestration
//!
//! Contains the access gate, the deal prompt template, the analysis service,
//! and the port definitions that infrastructure adapters implement.

pub mod deal_prompt;
pub mod error;
pub mod ports;
pub mod services;

pub use deal_prompt::{SYSTEM_INSTRUCTION, build_prompt};
pub use error::{ApplicationError, DispatchError};
pub use ports::*;
pub use services::*;
