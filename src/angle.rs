
//! Angle quantities, stored canonically in degrees.

use crate::measure::{Measure, UnitOfMeasure};

use phf::phf_map;

use std::f64::consts::PI;

/// Degrees per radian.
pub const DEGREE_IN_RADIAN: f64 = 180.0 / PI;

/// An angle, stored canonically in degrees.
pub type Angle = Measure<AngleUnit>;

/// Named units of angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
  Degree,
  Radian,
}

static SYMBOLS: phf::Map<&'static str, AngleUnit> = phf_map! {
  "deg" => AngleUnit::Degree,
  "rad" => AngleUnit::Radian,
};

impl UnitOfMeasure for AngleUnit {
  const QUANTITY: &'static str = "Angle";
  const BASE: Self = AngleUnit::Degree;

  fn symbol(self) -> &'static str {
    match self {
      AngleUnit::Degree => "deg",
      AngleUnit::Radian => "rad",
    }
  }

  fn factor(self) -> f64 {
    match self {
      AngleUnit::Degree => 1.0,
      AngleUnit::Radian => DEGREE_IN_RADIAN,
    }
  }

  // Angle symbols do not pluralize; only the exact (case-folded)
  // token resolves.
  fn resolve(token: &str) -> Option<Self> {
    SYMBOLS.get(token.to_lowercase().as_str()).copied()
  }
}

impl Angle {
  pub const DEGREE_0: Angle = Angle::from_canonical(0.0);
  pub const DEGREE_90: Angle = Angle::from_canonical(90.0);
  pub const DEGREE_180: Angle = Angle::from_canonical(180.0);
  pub const DEGREE_270: Angle = Angle::from_canonical(270.0);
  pub const DEGREE_360: Angle = Angle::from_canonical(360.0);

  pub fn in_degrees(self) -> f64 {
    self.in_unit(AngleUnit::Degree)
  }

  pub fn in_radians(self) -> f64 {
    self.in_unit(AngleUnit::Radian)
  }

  /// The angle reduced modulo one full turn. The sign of the result
  /// follows the sign of the angle, as with `%`.
  pub fn wrapped_360(self) -> Angle {
    Angle::from_canonical(self.canonical() % 360.0)
  }

  /// Renders the angle in the requested unit, with one fractional
  /// digit.
  pub fn to_human(self, unit: AngleUnit) -> String {
    format!("{:.1} {}", self.in_unit(unit), unit.symbol())
  }
}
