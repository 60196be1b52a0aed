//! Domain entities - Objects with identity and lifecycle

mod analysis_result;
mod deal_input;
mod session;

pub use analysis_result::AnalysisResult;
pub use deal_input::DealInput;
pub use session::{AccessState, SessionContext};
