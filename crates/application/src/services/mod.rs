//! Application services - Use case implementations

mod access_gate;
mod deal_analysis_service;

pub use access_gate::{AccessDecision, AccessGate, LoginAttempt, PASSWORD_INCORRECT};
pub use deal_analysis_service::DealAnalysisService;
