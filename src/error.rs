
//! Errors reported when a string cannot be parsed as a quantity.

use thiserror::Error;

/// Error produced when a quantity string is rejected. Every variant
/// carries the name of the quantity being parsed and the text that was
/// rejected, so callers can report the bad input upward.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseQuantityError {
  /// The input did not split into a value token and a unit token.
  #[error("Invalid {quantity} string '{input}'")]
  MalformedInput {
    quantity: &'static str,
    input: String,
  },
  /// The leading token was not a well-formed decimal number.
  #[error("Invalid number in {quantity} string '{input}'")]
  InvalidNumber {
    quantity: &'static str,
    input: String,
  },
  /// The trailing token did not name any unit of the quantity.
  #[error("Unknown {quantity} unit '{token}'")]
  UnknownUnit {
    quantity: &'static str,
    token: String,
  },
}

impl ParseQuantityError {
  pub(crate) fn malformed_input(quantity: &'static str, input: impl Into<String>) -> Self {
    Self::MalformedInput { quantity, input: input.into() }
  }

  pub(crate) fn invalid_number(quantity: &'static str, input: impl Into<String>) -> Self {
    Self::InvalidNumber { quantity, input: input.into() }
  }

  pub(crate) fn unknown_unit(quantity: &'static str, token: impl Into<String>) -> Self {
    Self::UnknownUnit { quantity, token: token.into() }
  }
}
