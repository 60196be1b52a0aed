//! Non-negative whole-dollar amount

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A whole-dollar amount that is never negative.
///
/// Negative inputs are clamped to zero when collected, mirroring a numeric
/// form field with a minimum of zero. `Display` prints the bare integer with
/// no separators so it can be placed after a `$` in prompt text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DollarAmount(u64);

impl DollarAmount {
    /// Zero dollars
    pub const ZERO: Self = Self(0);

    /// Create an amount from an unsigned value
    pub const fn new(dollars: u64) -> Self {
        Self(dollars)
    }

    /// Create an amount from a signed value, clamping negatives to zero
    pub const fn from_signed(dollars: i64) -> Self {
        if dollars < 0 {
            Self::ZERO
        } else {
            Self(dollars.unsigned_abs())
        }
    }

    /// Parse user input for the named form field.
    ///
    /// Accepts surrounding whitespace, an optional leading `$`, and `,` or `_`
    /// digit grouping. Empty input is zero. Negative numbers are clamped.
    pub fn parse(field: &str, input: &str) -> Result<Self, DomainError> {
        let (mut negative, rest) = strip_minus(input.trim());
        let rest = rest.strip_prefix('$').map_or(rest, str::trim_start);
        let rest = if negative {
            rest
        } else {
            let (after_dollar, rest) = strip_minus(rest);
            negative = after_dollar;
            rest
        };

        let digits: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();
        if digits.is_empty() {
            return if rest.is_empty() && !negative {
                Ok(Self::ZERO)
            } else {
                Err(DomainError::invalid_amount(field, input))
            };
        }

        // Any magnitude clamps, including ones past u64::MAX
        if negative {
            return if digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(Self::ZERO)
            } else {
                Err(DomainError::invalid_amount(field, input))
            };
        }

        digits
            .parse()
            .map(Self)
            .map_err(|_| DomainError::invalid_amount(field, input))
    }

    /// Get the raw dollar value
    pub const fn get(self) -> u64 {
        self.0
    }
}

fn strip_minus(input: &str) -> (bool, &str) {
    input
        .strip_prefix('-')
        .map_or((false, input), |rest| (true, rest.trim_start()))
}

impl fmt::Display for DollarAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DollarAmount {
    fn from(dollars: u64) -> Self {
        Self(dollars)
    }
}
