
//! Area quantities, stored canonically in square meters.

use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

pub const SQUARE_MILLIMETER_IN_SQUARE_METER: f64 = 1.0e-6;
pub const SQUARE_CENTIMETER_IN_SQUARE_METER: f64 = 1.0e-4;
pub const SQUARE_METER_IN_SQUARE_METER: f64 = 1.0;
pub const SQUARE_KILOMETER_IN_SQUARE_METER: f64 = 1.0e6;

/// An area, stored canonically in square meters.
pub type Area = Measure<AreaUnit>;

/// Named units of area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaUnit {
  SquareMillimeter,
  SquareCentimeter,
  SquareMeter,
  SquareKilometer,
}

static SYMBOLS: phf::Map<&'static str, AreaUnit> = phf_map! {
  "mm^2" => AreaUnit::SquareMillimeter,
  "cm^2" => AreaUnit::SquareCentimeter,
  "m^2" => AreaUnit::SquareMeter,
  "km^2" => AreaUnit::SquareKilometer,
};

impl UnitOfMeasure for AreaUnit {
  const QUANTITY: &'static str = "Area";
  const BASE: Self = AreaUnit::SquareMeter;

  fn symbol(self) -> &'static str {
    match self {
      AreaUnit::SquareMillimeter => "mm^2",
      AreaUnit::SquareCentimeter => "cm^2",
      AreaUnit::SquareMeter => "m^2",
      AreaUnit::SquareKilometer => "km^2",
    }
  }

  fn factor(self) -> f64 {
    match self {
      AreaUnit::SquareMillimeter => SQUARE_MILLIMETER_IN_SQUARE_METER,
      AreaUnit::SquareCentimeter => SQUARE_CENTIMETER_IN_SQUARE_METER,
      AreaUnit::SquareMeter => SQUARE_METER_IN_SQUARE_METER,
      AreaUnit::SquareKilometer => SQUARE_KILOMETER_IN_SQUARE_METER,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Area {
  pub fn in_square_millimeters(self) -> f64 {
    self.in_unit(AreaUnit::SquareMillimeter)
  }

  pub fn in_square_centimeters(self) -> f64 {
    self.in_unit(AreaUnit::SquareCentimeter)
  }

  pub fn in_square_meters(self) -> f64 {
    self.in_unit(AreaUnit::SquareMeter)
  }

  pub fn in_square_kilometers(self) -> f64 {
    self.in_unit(AreaUnit::SquareKilometer)
  }

  /// Renders the area at its most readable scale, with one fractional
  /// digit.
  pub fn to_human(self) -> String {
    let m2 = self.canonical();
    let display = m2.abs();

    if display > SQUARE_KILOMETER_IN_SQUARE_METER {
      return format!(
        "{:.1} {}",
        display / SQUARE_KILOMETER_IN_SQUARE_METER * m2.signum(),
        AreaUnit::SquareKilometer.symbol(),
      );
    }

    if display < SQUARE_CENTIMETER_IN_SQUARE_METER {
      format!(
        "{:.1} {}",
        display / SQUARE_MILLIMETER_IN_SQUARE_METER * m2.signum(),
        AreaUnit::SquareMillimeter.symbol(),
      )
    } else if display < SQUARE_METER_IN_SQUARE_METER {
      format!(
        "{:.1} {}",
        display / SQUARE_CENTIMETER_IN_SQUARE_METER * m2.signum(),
        AreaUnit::SquareCentimeter.symbol(),
      )
    } else {
      format!("{:.1} {}", display * m2.signum(), AreaUnit::SquareMeter.symbol())
    }
  }
}
