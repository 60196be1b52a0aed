//! Value Objects - Immutable, identity-less domain primitives

mod dollar_amount;
mod session_id;

pub use dollar_amount::DollarAmount;
pub use session_id::SessionId;
