
//! Storage (byte count) quantities. Unlike the other quantities,
//! storage is kept as an integer number of bytes and its unit factors
//! are powers of 1024.

use crate::error::ParseQuantityError;
use crate::parsing;

use num::Zero;
use phf::phf_map;
use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::ops;
use std::str::FromStr;

pub const BYTE_FACTOR: i64 = 1;
pub const KILO_FACTOR: i64 = 1 << 10;
pub const MEGA_FACTOR: i64 = 1 << 20;
pub const GIGA_FACTOR: i64 = 1 << 30;
pub const TERA_FACTOR: i64 = 1 << 40;
pub const PETA_FACTOR: i64 = 1 << 50;
pub const EXA_FACTOR: i64 = 1 << 60;

/// Named units of storage. Factors above an exabyte do not fit a
/// 64-bit byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageUnit {
  Byte,
  KiloByte,
  MegaByte,
  GigaByte,
  TeraByte,
  PetaByte,
  ExaByte,
}

/// All units, smallest first, indexed by [`Storage::to_human`].
const ASCENDING: [StorageUnit; 7] = [
  StorageUnit::Byte,
  StorageUnit::KiloByte,
  StorageUnit::MegaByte,
  StorageUnit::GigaByte,
  StorageUnit::TeraByte,
  StorageUnit::PetaByte,
  StorageUnit::ExaByte,
];

static SYMBOLS: phf::Map<&'static str, StorageUnit> = phf_map! {
  "b" => StorageUnit::Byte,
  "kb" => StorageUnit::KiloByte,
  "mb" => StorageUnit::MegaByte,
  "gb" => StorageUnit::GigaByte,
  "tb" => StorageUnit::TeraByte,
  "pb" => StorageUnit::PetaByte,
  "xb" => StorageUnit::ExaByte,
};

impl StorageUnit {
  /// The display symbol for this unit.
  pub fn symbol(self) -> &'static str {
    match self {
      StorageUnit::Byte => "B",
      StorageUnit::KiloByte => "KB",
      StorageUnit::MegaByte => "MB",
      StorageUnit::GigaByte => "GB",
      StorageUnit::TeraByte => "TB",
      StorageUnit::PetaByte => "PB",
      StorageUnit::ExaByte => "XB",
    }
  }

  /// The number of bytes in one of this unit.
  pub fn factor(self) -> i64 {
    match self {
      StorageUnit::Byte => BYTE_FACTOR,
      StorageUnit::KiloByte => KILO_FACTOR,
      StorageUnit::MegaByte => MEGA_FACTOR,
      StorageUnit::GigaByte => GIGA_FACTOR,
      StorageUnit::TeraByte => TERA_FACTOR,
      StorageUnit::PetaByte => PETA_FACTOR,
      StorageUnit::ExaByte => EXA_FACTOR,
    }
  }

  /// Resolves a unit token from a parsed string against the table.
  pub fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

/// An amount of storage, kept canonically as a whole number of bytes.
///
/// The integer canonical value gives `Storage` the full `Eq`, `Ord`
/// and `Hash` that the float-backed quantities cannot offer. Dividing
/// by a zero integer scalar is an arithmetic fault and panics, per the
/// usual integer-division semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Storage {
  bytes: i64,
}

impl Storage {
  pub const ZERO: Storage = Storage::new(0);
  pub const MIN_VALUE: Storage = Storage::new(i64::MIN);
  pub const MAX_VALUE: Storage = Storage::new(i64::MAX);

  pub const fn new(bytes: i64) -> Storage {
    Storage { bytes }
  }

  /// Constructs a storage amount of `value` units, truncating any
  /// fractional byte count toward zero.
  pub fn of(value: f64, unit: StorageUnit) -> Storage {
    Storage::new((value * unit.factor() as f64) as i64)
  }

  /// The byte count converted to the given unit, truncating.
  pub fn in_unit(self, unit: StorageUnit) -> i64 {
    self.bytes / unit.factor()
  }

  pub fn in_bytes(self) -> i64 {
    self.bytes
  }

  pub fn in_kilobytes(self) -> i64 {
    self.bytes / KILO_FACTOR
  }

  pub fn in_megabytes(self) -> i64 {
    self.bytes / MEGA_FACTOR
  }

  pub fn in_gigabytes(self) -> i64 {
    self.bytes / GIGA_FACTOR
  }

  pub fn in_terabytes(self) -> i64 {
    self.bytes / TERA_FACTOR
  }

  pub fn in_petabytes(self) -> i64 {
    self.bytes / PETA_FACTOR
  }

  pub fn in_exabytes(self) -> i64 {
    self.bytes / EXA_FACTOR
  }

  /// Parses a storage amount from its textual form `"<value> <unit>"`.
  /// Blank input parses as [`Storage::ZERO`].
  pub fn parse(input: &str) -> Result<Storage, ParseQuantityError> {
    input.parse()
  }

  /// Renders the byte count at its most readable scale: the magnitude
  /// is divided by 1024 until it drops to about a thousand, then
  /// reported with one fractional digit.
  pub fn to_human(self) -> String {
    let signum = (self.bytes as f64).signum();
    let mut display = (self.bytes as f64).abs();
    let mut order = 0;

    while display > 1126.0 {
      order += 1;
      display /= KILO_FACTOR as f64;
    }

    format!("{:.1} {}", display * signum, ASCENDING[order].symbol())
  }
}

impl Display for Storage {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} {}", self.bytes, StorageUnit::Byte.symbol())
  }
}

impl FromStr for Storage {
  type Err = ParseQuantityError;

  fn from_str(input: &str) -> Result<Storage, ParseQuantityError> {
    const QUANTITY: &str = "Storage";
    let trimmed = input.trim();
    if trimmed.is_empty() {
      return Ok(Storage::ZERO);
    }
    let (value, token) = parsing::split_value_unit(trimmed)
      .ok_or_else(|| ParseQuantityError::malformed_input(QUANTITY, input))?;
    let amount = value.parse::<f64>()
      .map_err(|_| ParseQuantityError::invalid_number(QUANTITY, input))?;
    let unit = StorageUnit::resolve(token)
      .ok_or_else(|| ParseQuantityError::unknown_unit(QUANTITY, token))?;
    Ok(Storage::of(amount, unit))
  }
}

impl ops::Add for Storage {
  type Output = Storage;

  fn add(self, rhs: Storage) -> Storage {
    Storage::new(self.bytes + rhs.bytes)
  }
}

impl ops::Add<i64> for Storage {
  type Output = Storage;

  fn add(self, rhs: i64) -> Storage {
    Storage::new(self.bytes + rhs)
  }
}

impl ops::Sub for Storage {
  type Output = Storage;

  fn sub(self, rhs: Storage) -> Storage {
    Storage::new(self.bytes - rhs.bytes)
  }
}

impl ops::Sub<i64> for Storage {
  type Output = Storage;

  fn sub(self, rhs: i64) -> Storage {
    Storage::new(self.bytes - rhs)
  }
}

impl ops::Mul<i64> for Storage {
  type Output = Storage;

  fn mul(self, scalar: i64) -> Storage {
    Storage::new(self.bytes * scalar)
  }
}

impl ops::Mul<f64> for Storage {
  type Output = Storage;

  fn mul(self, scalar: f64) -> Storage {
    Storage::new((self.bytes as f64 * scalar) as i64)
  }
}

impl ops::Div<i64> for Storage {
  type Output = Storage;

  fn div(self, scalar: i64) -> Storage {
    Storage::new(self.bytes / scalar)
  }
}

impl ops::Div<f64> for Storage {
  type Output = Storage;

  fn div(self, scalar: f64) -> Storage {
    Storage::new((self.bytes as f64 / scalar) as i64)
  }
}

impl ops::Neg for Storage {
  type Output = Storage;

  fn neg(self) -> Storage {
    Storage::new(-self.bytes)
  }
}

impl Zero for Storage {
  fn zero() -> Storage {
    Storage::ZERO
  }

  fn is_zero(&self) -> bool {
    self.bytes == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_convert_storage_units() {
    assert_eq!(Storage::new(1).in_bytes(), 1);
    assert_eq!(Storage::of(1.0, StorageUnit::KiloByte).in_kilobytes(), 1);
    assert_eq!(Storage::of(1.0, StorageUnit::MegaByte).in_megabytes(), 1);
    assert_eq!(Storage::of(1.0, StorageUnit::GigaByte).in_gigabytes(), 1);

    assert_eq!(Storage::new(1 << 10).in_kilobytes(), 1);
    assert_eq!(Storage::of(1.0, StorageUnit::KiloByte).in_bytes(), 1 << 10);
    assert_eq!(Storage::of(1.0, StorageUnit::MegaByte).in_bytes(), 1 << 20);

    assert_eq!(Storage::of(100.0, StorageUnit::KiloByte).in_bytes(), 102400);
    assert_eq!(Storage::of(100.0, StorageUnit::GigaByte).in_kilobytes(), 100 * 1024 * 1024);
    assert_eq!(Storage::of(100.0, StorageUnit::TeraByte).in_megabytes(), 100 * 1024 * 1024);
    assert_eq!(Storage::of(100.0, StorageUnit::PetaByte).in_gigabytes(), 100 * 1024 * 1024);
    assert_eq!(Storage::of(1.0, StorageUnit::ExaByte).in_terabytes(), 1024 * 1024);
  }

  #[test]
  fn test_conversion_truncates() {
    assert_eq!(Storage::new(1).in_kilobytes(), 0);
    assert_eq!(Storage::new(2047).in_kilobytes(), 1);
    assert_eq!(Storage::of(0.5, StorageUnit::KiloByte).in_bytes(), 512);
  }

  #[test]
  fn test_arithmetic() {
    let one_kb = Storage::of(1.0, StorageUnit::KiloByte);
    assert_eq!(one_kb + one_kb, Storage::new(2048));
    assert_eq!(one_kb + 24, Storage::new(1048));
    assert_eq!(one_kb - Storage::new(24), Storage::new(1000));
    assert_eq!(one_kb * 2, Storage::new(2048));
    assert_eq!(one_kb * 1.5, Storage::new(1536));
    assert_eq!(one_kb / 2, Storage::new(512));
    assert_eq!(one_kb / 2.0, Storage::new(512));
    assert_eq!(-one_kb, Storage::new(-1024));
  }

  #[test]
  #[should_panic]
  fn test_integer_division_by_zero_panics() {
    let _ = Storage::new(1024) / 0;
  }

  #[test]
  fn test_ordering_and_hash_are_available() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Storage::new(1024));
    set.insert(Storage::of(1.0, StorageUnit::KiloByte));
    assert_eq!(set.len(), 1);
    assert!(Storage::new(1) < Storage::of(1.0, StorageUnit::KiloByte));
    assert!(Storage::MIN_VALUE < Storage::ZERO);
    assert!(Storage::ZERO < Storage::MAX_VALUE);
  }

  #[test]
  fn test_parse() {
    assert_eq!(Storage::parse("100 KB").unwrap(), Storage::new(102400));
    assert_eq!(Storage::parse("100 kb").unwrap(), Storage::new(102400));
    assert_eq!(Storage::parse("2 GBs").unwrap(), Storage::of(2.0, StorageUnit::GigaByte));
    assert_eq!(Storage::parse("0.5 KB").unwrap(), Storage::new(512));
    assert_eq!(Storage::parse("").unwrap(), Storage::ZERO);
    assert_eq!(Storage::parse("  ").unwrap(), Storage::ZERO);
  }

  #[test]
  fn test_parse_rejects_superseded_dot_form() {
    assert!(Storage::parse("100.KB").is_err());
    assert!(Storage::parse("100 bottles").is_err());
  }

  #[test]
  fn test_display() {
    assert_eq!(Storage::new(100).to_string(), "100 B");
    assert_eq!(Storage::parse(&Storage::new(102400).to_string()).unwrap(), Storage::new(102400));
  }

  #[test]
  fn test_to_human() {
    assert_eq!(Storage::new(100).to_human(), "100.0 B");
    assert_eq!(Storage::new(1126).to_human(), "1126.0 B");
    assert_eq!(Storage::new(2048).to_human(), "2.0 KB");
    assert_eq!(Storage::of(1.5, StorageUnit::MegaByte).to_human(), "1.5 MB");
    assert_eq!(Storage::new(-2048).to_human(), "-2.0 KB");
    assert_eq!(Storage::ZERO.to_human(), "0.0 B");
  }

  #[test]
  fn test_serde_roundtrip_as_bare_number() {
    let s = Storage::new(102400);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "102400");
    assert_eq!(serde_json::from_str::<Storage>(&json).unwrap(), s);
  }
}
