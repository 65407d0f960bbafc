//! Error types for MIST/SUI unit conversion.

/// Errors raised by the decimal unit converter.
///
/// A negative amount reaching the converter indicates an upstream or caller
/// bug; it is surfaced rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The amount is negative.
    #[error("The number of MISTs cannot be negative: {amount}")]
    Negative {
        /// The offending amount as received
        amount: String,
    },

    /// The amount is not a base-10 number.
    #[error("Invalid MIST amount: {value:?}")]
    Invalid {
        /// The offending value as received
        value: String,
    },
}

impl AmountError {
    /// Create a `Negative` error.
    pub fn negative(amount: impl Into<String>) -> Self {
        AmountError::Negative {
            amount: amount.into(),
        }
    }

    /// Create an `Invalid` error.
    pub fn invalid(value: impl Into<String>) -> Self {
        AmountError::Invalid {
            value: value.into(),
        }
    }
}
