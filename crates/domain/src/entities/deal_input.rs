//! Deal parameters collected from the analyzer form

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::DollarAmount};

const DEFAULT_AFTER_REPAIR_VALUE: u64 = 300_000;
const DEFAULT_ESTIMATED_REPAIRS: u64 = 40_000;
const DEFAULT_ASKING_PRICE: u64 = 150_000;
const DEFAULT_WHOLESALE_FEE: u64 = 10_000;

/// One submission of the deal form.
///
/// Built fresh per submission and dropped once the prompt has been rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealInput {
    /// Estimated market value after repairs (ARV)
    pub after_repair_value: DollarAmount,
    /// Estimated repair cost
    pub estimated_repairs: DollarAmount,
    /// Seller's asking price
    pub asking_price: DollarAmount,
    /// Margin the wholesaler wants to keep
    pub wholesale_fee: DollarAmount,
    /// Free-text notes, passed to the model untouched
    #[serde(default)]
    pub notes: String,
}

impl DealInput {
    /// Create a deal input from already-collected values
    pub fn new(
        after_repair_value: impl Into<DollarAmount>,
        estimated_repairs: impl Into<DollarAmount>,
        asking_price: impl Into<DollarAmount>,
        wholesale_fee: impl Into<DollarAmount>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            after_repair_value: after_repair_value.into(),
            estimated_repairs: estimated_repairs.into(),
            asking_price: asking_price.into(),
            wholesale_fee: wholesale_fee.into(),
            notes: notes.into(),
        }
    }

    /// Build a deal input from raw form strings.
    ///
    /// Amounts are parsed with [`DollarAmount::parse`]; the first unreadable
    /// field is reported.
    pub fn from_form(
        after_repair_value: &str,
        estimated_repairs: &str,
        asking_price: &str,
        wholesale_fee: &str,
        notes: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            after_repair_value: DollarAmount::parse("After Repair Value", after_repair_value)?,
            estimated_repairs: DollarAmount::parse("Estimated Repairs", estimated_repairs)?,
            asking_price: DollarAmount::parse("Seller Asking Price", asking_price)?,
            wholesale_fee: DollarAmount::parse("Your Wholesale Fee", wholesale_fee)?,
            notes: notes.into(),
        })
    }
}

impl Default for DealInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_AFTER_REPAIR_VALUE,
            DEFAULT_ESTIMATED_REPAIRS,
            DEFAULT_ASKING_PRICE,
            DEFAULT_WHOLESALE_FEE,
            String::new(),
        )
    }
}
