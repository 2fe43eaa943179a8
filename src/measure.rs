
//! The generic core shared by every quantity: a canonical scalar value
//! tagged with the unit table of its physical dimension.

use crate::error::ParseQuantityError;
use crate::parsing;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops;
use std::str::FromStr;

/// The unit table of one physical dimension. Implementors are simple
/// fieldless enums listing the named units of the dimension, each with
/// a display symbol and a linear conversion factor to the base unit.
pub trait UnitOfMeasure: Copy + Eq + Debug + 'static {
  /// Name of the physical quantity, as used in error messages.
  const QUANTITY: &'static str;

  /// The unit that canonical values of this quantity are stored in.
  const BASE: Self;

  /// The display symbol for this unit, e.g. `"kg"`.
  fn symbol(self) -> &'static str;

  /// The amount of the base unit that is equal to one of this unit.
  fn factor(self) -> f64;

  /// Resolves a unit token from a parsed string against the table.
  fn resolve(token: &str) -> Option<Self>;
}

/// A quantity of the dimension whose unit table is `U`, stored as a
/// single canonical value in `U::BASE`.
///
/// Quantities are immutable: every operator returns a new value. Two
/// quantities are equal exactly when their canonical values are equal,
/// regardless of the units they were constructed from. Equality and
/// ordering follow IEEE-754, so a NaN-valued quantity is not equal to
/// itself; accordingly the float-backed quantities implement
/// [`PartialEq`] and [`PartialOrd`] but not `Eq` or `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct Measure<U: UnitOfMeasure> {
  canonical: f64,
  _unit: PhantomData<U>,
}

impl<U: UnitOfMeasure> Measure<U> {
  /// The zero quantity.
  pub const ZERO: Self = Self::from_canonical(0.0);
  /// The most negative finite quantity.
  pub const MIN_VALUE: Self = Self::from_canonical(f64::MIN);
  /// The largest finite quantity.
  pub const MAX_VALUE: Self = Self::from_canonical(f64::MAX);
  pub const POSITIVE_INFINITY: Self = Self::from_canonical(f64::INFINITY);
  pub const NEGATIVE_INFINITY: Self = Self::from_canonical(f64::NEG_INFINITY);
  /// A quantity whose canonical value is NaN. Like any NaN, this value
  /// is not equal to itself.
  pub const NAN: Self = Self::from_canonical(f64::NAN);

  pub(crate) const fn from_canonical(canonical: f64) -> Self {
    Self { canonical, _unit: PhantomData }
  }

  /// Constructs a quantity of `amount` units. No validation is
  /// performed on `amount`; NaN and infinities pass through unchanged.
  pub fn of(amount: f64, unit: U) -> Self {
    Self::from_canonical(amount * unit.factor())
  }

  /// Constructs a quantity measured in the base unit of its dimension.
  pub fn of_base(amount: f64) -> Self {
    Self::of(amount, U::BASE)
  }

  /// The canonical value, in `U::BASE`.
  pub fn canonical(self) -> f64 {
    self.canonical
  }

  /// The value converted to the given unit.
  pub fn in_unit(self, unit: U) -> f64 {
    self.canonical / unit.factor()
  }

  /// Parses a quantity from its textual form `"<value> <unit>"`.
  /// Blank input parses as [`Measure::ZERO`].
  pub fn parse(input: &str) -> Result<Self, ParseQuantityError> {
    input.parse()
  }
}

impl<U: UnitOfMeasure> Default for Measure<U> {
  fn default() -> Self {
    Self::ZERO
  }
}

impl<U: UnitOfMeasure> PartialEq for Measure<U> {
  fn eq(&self, other: &Self) -> bool {
    self.canonical == other.canonical
  }
}

impl<U: UnitOfMeasure> PartialOrd for Measure<U> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.canonical.partial_cmp(&other.canonical)
  }
}

impl<U: UnitOfMeasure> ops::Add for Measure<U> {
  type Output = Measure<U>;

  fn add(self, rhs: Self) -> Self::Output {
    Self::from_canonical(self.canonical + rhs.canonical)
  }
}

impl<U: UnitOfMeasure> ops::Sub for Measure<U> {
  type Output = Measure<U>;

  fn sub(self, rhs: Self) -> Self::Output {
    Self::from_canonical(self.canonical - rhs.canonical)
  }
}

impl<U: UnitOfMeasure> ops::Mul<f64> for Measure<U> {
  type Output = Measure<U>;

  fn mul(self, scalar: f64) -> Self::Output {
    Self::from_canonical(self.canonical * scalar)
  }
}

impl<U: UnitOfMeasure> ops::Div<f64> for Measure<U> {
  type Output = Measure<U>;

  fn div(self, scalar: f64) -> Self::Output {
    Self::from_canonical(self.canonical / scalar)
  }
}

impl<U: UnitOfMeasure> ops::Neg for Measure<U> {
  type Output = Measure<U>;

  fn neg(self) -> Self::Output {
    Self::from_canonical(-self.canonical)
  }
}

impl<U: UnitOfMeasure> Zero for Measure<U> {
  fn zero() -> Self {
    Self::ZERO
  }

  fn is_zero(&self) -> bool {
    self.canonical == 0.0
  }
}

impl<U: UnitOfMeasure> Display for Measure<U> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{:.1} {}", self.canonical, U::BASE.symbol())
  }
}

impl<U: UnitOfMeasure> FromStr for Measure<U> {
  type Err = ParseQuantityError;

  fn from_str(input: &str) -> Result<Self, ParseQuantityError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
      return Ok(Self::ZERO);
    }
    let (value, token) = parsing::split_value_unit(trimmed)
      .ok_or_else(|| ParseQuantityError::malformed_input(U::QUANTITY, input))?;
    let amount = value.parse::<f64>()
      .map_err(|_| ParseQuantityError::invalid_number(U::QUANTITY, input))?;
    let unit = U::resolve(token)
      .ok_or_else(|| ParseQuantityError::unknown_unit(U::QUANTITY, token))?;
    Ok(Self::of(amount, unit))
  }
}

impl<U: UnitOfMeasure> Serialize for Measure<U> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: Serializer {
    self.canonical.serialize(serializer)
  }
}

impl<'de, U: UnitOfMeasure> Deserialize<'de> for Measure<U> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: Deserializer<'de> {
    f64::deserialize(deserializer).map(Self::from_canonical)
  }
}

impl<U: UnitOfMeasure> AbsDiffEq for Measure<U> {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
    self.canonical.abs_diff_eq(&other.canonical, epsilon)
  }
}

impl<U: UnitOfMeasure> RelativeEq for Measure<U> {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
    self.canonical.relative_eq(&other.canonical, epsilon, max_relative)
  }
}

impl<U: UnitOfMeasure> UlpsEq for Measure<U> {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
    self.canonical.ulps_eq(&other.canonical, epsilon, max_ulps)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ParseQuantityError;
  use crate::mass::{Mass, MassUnit};
  use approx::assert_relative_eq;

  #[test]
  fn test_equality_is_unit_independent() {
    assert_eq!(Mass::of(1000.0, MassUnit::Milligram), Mass::of(1.0, MassUnit::Gram));
    assert_eq!(Mass::of(1.0, MassUnit::Kilogram), Mass::of(1000.0, MassUnit::Gram));
    assert_ne!(Mass::of(1.0, MassUnit::Kilogram), Mass::of(1.0, MassUnit::Gram));
    assert_eq!(Mass::of_base(5.0), Mass::of(5.0, MassUnit::Gram));
  }

  #[test]
  fn test_nan_is_not_equal_to_itself() {
    assert_ne!(Mass::NAN, Mass::NAN);
    assert_eq!(Mass::NAN.partial_cmp(&Mass::NAN), None);
  }

  #[test]
  fn test_ordering_follows_canonical_value() {
    assert!(Mass::of(4.1, MassUnit::Kilogram) > Mass::of(3.9, MassUnit::Kilogram));
    assert!(Mass::of(-1.2, MassUnit::Gram) < Mass::of(-0.2, MassUnit::Gram));
    assert!(Mass::of(-1.2, MassUnit::Gram) > Mass::of(-2.5, MassUnit::Gram));
    assert!(Mass::of(999.0, MassUnit::Gram) < Mass::of(1.0, MassUnit::Kilogram));
  }

  #[test]
  fn test_arithmetic_identities() {
    let a = Mass::of(78.4, MassUnit::Kilogram);
    let b = Mass::of(12.5, MassUnit::Gram);
    assert_eq!(a + (-a), Mass::ZERO);
    assert_eq!(a - a, Mass::ZERO);
    assert_relative_eq!((a + b) - b, a);
    assert_eq!(a * 1.0, a);
    assert_eq!(a / 1.0, a);
  }

  #[test]
  fn test_scalar_division_by_zero_is_infinite() {
    let a = Mass::of(1.0, MassUnit::Gram);
    assert_eq!(a / 0.0, Mass::POSITIVE_INFINITY);
    assert_eq!((-a) / 0.0, Mass::NEGATIVE_INFINITY);
  }

  #[test]
  fn test_display_uses_base_unit() {
    assert_eq!(Mass::of(2.0, MassUnit::Kilogram).to_string(), "2000.0 g");
    assert_eq!(Mass::ZERO.to_string(), "0.0 g");
  }

  #[test]
  fn test_parse_roundtrips_display() {
    let a = Mass::of(78.4, MassUnit::Kilogram);
    assert_eq!(Mass::parse(&a.to_string()).unwrap(), a);
  }

  #[test]
  fn test_parse_blank_is_zero() {
    assert_eq!(Mass::parse("").unwrap(), Mass::ZERO);
    assert_eq!(Mass::parse("   ").unwrap(), Mass::ZERO);
  }

  #[test]
  fn test_parse_rejects_missing_separator() {
    assert_eq!(
      Mass::parse("100.0"),
      Err(ParseQuantityError::malformed_input("Mass", "100.0")),
    );
    assert_eq!(
      Mass::parse("100.kg"),
      Err(ParseQuantityError::malformed_input("Mass", "100.kg")),
    );
  }

  #[test]
  fn test_parse_rejects_malformed_number() {
    assert_eq!(
      Mass::parse("12.0.5 kg"),
      Err(ParseQuantityError::invalid_number("Mass", "12.0.5 kg")),
    );
  }

  #[test]
  fn test_parse_rejects_unknown_unit() {
    assert_eq!(
      Mass::parse("100 bogus"),
      Err(ParseQuantityError::unknown_unit("Mass", "bogus")),
    );
  }

  #[test]
  fn test_default_is_zero() {
    assert_eq!(Mass::default(), Mass::ZERO);
  }

  #[test]
  fn test_zero_trait() {
    use num::Zero;
    assert!(Mass::zero().is_zero());
    assert!(!Mass::of(1.0, MassUnit::Gram).is_zero());
  }

  #[test]
  fn test_serde_roundtrip_as_bare_number() {
    let a = Mass::of(78.4, MassUnit::Kilogram);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "78400.0");
    assert_eq!(serde_json::from_str::<Mass>(&json).unwrap(), a);
  }
}
