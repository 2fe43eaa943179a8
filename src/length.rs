
//! Length quantities, stored canonically in meters.

use crate::area::{Area, AreaUnit};
use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

use std::ops;

pub const MILLIMETER_IN_METER: f64 = 1.0 / 1000.0;
pub const CENTIMETER_IN_METER: f64 = 1.0 / 100.0;
pub const METER_IN_METER: f64 = 1.0;
pub const KILOMETER_IN_METER: f64 = 1000.0;

pub const INCH_IN_METER: f64 = 0.0254;
pub const FEET_IN_METER: f64 = 0.3048;
pub const YARD_IN_METER: f64 = 0.9144;
pub const MILE_IN_METER: f64 = 1609.344;

/// A length, stored canonically in meters.
pub type Length = Measure<LengthUnit>;

/// Named units of length, metric and customary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
  Millimeter,
  Centimeter,
  Meter,
  Kilometer,
  Inch,
  Feet,
  Yard,
  Mile,
}

static SYMBOLS: phf::Map<&'static str, LengthUnit> = phf_map! {
  "mm" => LengthUnit::Millimeter,
  "cm" => LengthUnit::Centimeter,
  "m" => LengthUnit::Meter,
  "km" => LengthUnit::Kilometer,
  "inch" => LengthUnit::Inch,
  "feet" => LengthUnit::Feet,
  "yard" => LengthUnit::Yard,
  "mile" => LengthUnit::Mile,
};

impl UnitOfMeasure for LengthUnit {
  const QUANTITY: &'static str = "Length";
  const BASE: Self = LengthUnit::Meter;

  fn symbol(self) -> &'static str {
    match self {
      LengthUnit::Millimeter => "mm",
      LengthUnit::Centimeter => "cm",
      LengthUnit::Meter => "m",
      LengthUnit::Kilometer => "km",
      LengthUnit::Inch => "inch",
      LengthUnit::Feet => "feet",
      LengthUnit::Yard => "yard",
      LengthUnit::Mile => "mile",
    }
  }

  fn factor(self) -> f64 {
    match self {
      LengthUnit::Millimeter => MILLIMETER_IN_METER,
      LengthUnit::Centimeter => CENTIMETER_IN_METER,
      LengthUnit::Meter => METER_IN_METER,
      LengthUnit::Kilometer => KILOMETER_IN_METER,
      LengthUnit::Inch => INCH_IN_METER,
      LengthUnit::Feet => FEET_IN_METER,
      LengthUnit::Yard => YARD_IN_METER,
      LengthUnit::Mile => MILE_IN_METER,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Length {
  pub fn in_millimeters(self) -> f64 {
    self.in_unit(LengthUnit::Millimeter)
  }

  pub fn in_centimeters(self) -> f64 {
    self.in_unit(LengthUnit::Centimeter)
  }

  pub fn in_meters(self) -> f64 {
    self.in_unit(LengthUnit::Meter)
  }

  pub fn in_kilometers(self) -> f64 {
    self.in_unit(LengthUnit::Kilometer)
  }

  pub fn in_inches(self) -> f64 {
    self.in_unit(LengthUnit::Inch)
  }

  pub fn in_feet(self) -> f64 {
    self.in_unit(LengthUnit::Feet)
  }

  pub fn in_yards(self) -> f64 {
    self.in_unit(LengthUnit::Yard)
  }

  pub fn in_miles(self) -> f64 {
    self.in_unit(LengthUnit::Mile)
  }

  /// Renders the length at its most readable metric scale, with one
  /// fractional digit.
  pub fn to_human(self) -> String {
    let meter = self.canonical();
    let display = meter.abs();

    if display > KILOMETER_IN_METER {
      return format!(
        "{:.1} {}",
        display / KILOMETER_IN_METER * meter.signum(),
        LengthUnit::Kilometer.symbol(),
      );
    }

    if display < CENTIMETER_IN_METER {
      format!("{:.1} {}", display / MILLIMETER_IN_METER * meter.signum(), LengthUnit::Millimeter.symbol())
    } else if display < METER_IN_METER {
      format!("{:.1} {}", display / CENTIMETER_IN_METER * meter.signum(), LengthUnit::Centimeter.symbol())
    } else {
      format!("{:.1} {}", display * meter.signum(), LengthUnit::Meter.symbol())
    }
  }
}

/// Two lengths multiply into an area, through their meter values.
impl ops::Mul for Length {
  type Output = Area;

  fn mul(self, rhs: Length) -> Area {
    Area::of(self.in_meters() * rhs.in_meters(), AreaUnit::SquareMeter)
  }
}
