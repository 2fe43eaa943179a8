
//! Volume quantities, stored canonically in liters.

use crate::area::{Area, AreaUnit};
use crate::length::{Length, LengthUnit, FEET_IN_METER, INCH_IN_METER, YARD_IN_METER};
use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

use std::ops;

pub const CC_IN_LITER: f64 = 1.0e-9;
pub const MILLILITER_IN_LITER: f64 = 1.0e-3;
pub const DECILITER_IN_LITER: f64 = 1.0e-2;
pub const LITER_IN_LITER: f64 = 1.0;

pub const CUBIC_CENTIMETER_IN_LITER: f64 = 1.0e-3;
pub const CUBIC_METER_IN_LITER: f64 = 1.0e3;

pub const CUBIC_INCH_IN_LITER: f64 = 1.0e3 * INCH_IN_METER * INCH_IN_METER * INCH_IN_METER;
pub const CUBIC_FOOT_IN_LITER: f64 = 1.0e3 * FEET_IN_METER * FEET_IN_METER * FEET_IN_METER;
pub const CUBIC_YARD_IN_LITER: f64 = 1.0e3 * YARD_IN_METER * YARD_IN_METER * YARD_IN_METER;

pub const GALLON_IN_LITER: f64 = 1.0 / 0.264172;
pub const BARREL_IN_LITER: f64 = 1.0 / 0.006293;
pub const OUNCE_IN_LITER: f64 = 1.0 / 33.814022;

/// A volume, stored canonically in liters.
pub type Volume = Measure<VolumeUnit>;

/// Named units of volume, metric and customary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
  Cc,
  Milliliter,
  Deciliter,
  Liter,
  CubicCentimeter,
  CubicMeter,
  CubicInch,
  CubicFoot,
  CubicYard,
  Gallon,
  Barrel,
  Ounce,
}

static SYMBOLS: phf::Map<&'static str, VolumeUnit> = phf_map! {
  "cc" => VolumeUnit::Cc,
  "ml" => VolumeUnit::Milliliter,
  "dl" => VolumeUnit::Deciliter,
  "l" => VolumeUnit::Liter,
  "cm^3" => VolumeUnit::CubicCentimeter,
  "m^3" => VolumeUnit::CubicMeter,
  "in^3" => VolumeUnit::CubicInch,
  "ft^3" => VolumeUnit::CubicFoot,
  "yd^3" => VolumeUnit::CubicYard,
  "gl" => VolumeUnit::Gallon,
  "barrel" => VolumeUnit::Barrel,
  "oz" => VolumeUnit::Ounce,
};

impl UnitOfMeasure for VolumeUnit {
  const QUANTITY: &'static str = "Volume";
  const BASE: Self = VolumeUnit::Liter;

  fn symbol(self) -> &'static str {
    match self {
      VolumeUnit::Cc => "cc",
      VolumeUnit::Milliliter => "ml",
      VolumeUnit::Deciliter => "dl",
      VolumeUnit::Liter => "l",
      VolumeUnit::CubicCentimeter => "cm^3",
      VolumeUnit::CubicMeter => "m^3",
      VolumeUnit::CubicInch => "in^3",
      VolumeUnit::CubicFoot => "ft^3",
      VolumeUnit::CubicYard => "yd^3",
      VolumeUnit::Gallon => "gl",
      VolumeUnit::Barrel => "barrel",
      VolumeUnit::Ounce => "oz",
    }
  }

  fn factor(self) -> f64 {
    match self {
      VolumeUnit::Cc => CC_IN_LITER,
      VolumeUnit::Milliliter => MILLILITER_IN_LITER,
      VolumeUnit::Deciliter => DECILITER_IN_LITER,
      VolumeUnit::Liter => LITER_IN_LITER,
      VolumeUnit::CubicCentimeter => CUBIC_CENTIMETER_IN_LITER,
      VolumeUnit::CubicMeter => CUBIC_METER_IN_LITER,
      VolumeUnit::CubicInch => CUBIC_INCH_IN_LITER,
      VolumeUnit::CubicFoot => CUBIC_FOOT_IN_LITER,
      VolumeUnit::CubicYard => CUBIC_YARD_IN_LITER,
      VolumeUnit::Gallon => GALLON_IN_LITER,
      VolumeUnit::Barrel => BARREL_IN_LITER,
      VolumeUnit::Ounce => OUNCE_IN_LITER,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Volume {
  pub fn in_cc(self) -> f64 {
    self.in_unit(VolumeUnit::Cc)
  }

  pub fn in_milliliters(self) -> f64 {
    self.in_unit(VolumeUnit::Milliliter)
  }

  pub fn in_deciliters(self) -> f64 {
    self.in_unit(VolumeUnit::Deciliter)
  }

  pub fn in_liters(self) -> f64 {
    self.in_unit(VolumeUnit::Liter)
  }

  pub fn in_cubic_centimeters(self) -> f64 {
    self.in_unit(VolumeUnit::CubicCentimeter)
  }

  pub fn in_cubic_meters(self) -> f64 {
    self.in_unit(VolumeUnit::CubicMeter)
  }

  pub fn in_cubic_inches(self) -> f64 {
    self.in_unit(VolumeUnit::CubicInch)
  }

  pub fn in_cubic_feet(self) -> f64 {
    self.in_unit(VolumeUnit::CubicFoot)
  }

  pub fn in_cubic_yards(self) -> f64 {
    self.in_unit(VolumeUnit::CubicYard)
  }

  pub fn in_gallons(self) -> f64 {
    self.in_unit(VolumeUnit::Gallon)
  }

  pub fn in_barrels(self) -> f64 {
    self.in_unit(VolumeUnit::Barrel)
  }

  pub fn in_ounces(self) -> f64 {
    self.in_unit(VolumeUnit::Ounce)
  }

  /// Renders the volume at its most readable metric scale, with one
  /// fractional digit.
  pub fn to_human(self) -> String {
    let liter = self.canonical();
    let display = liter.abs();

    if display > CUBIC_METER_IN_LITER {
      return format!(
        "{:.1} {}",
        display / CUBIC_METER_IN_LITER * liter.signum(),
        VolumeUnit::CubicMeter.symbol(),
      );
    }

    if display < LITER_IN_LITER {
      format!("{:.1} {}", display / MILLILITER_IN_LITER * liter.signum(), VolumeUnit::Milliliter.symbol())
    } else {
      format!("{:.1} {}", display * liter.signum(), VolumeUnit::Liter.symbol())
    }
  }
}

/// A volume spread over an area leaves a length, through the cubic-
/// and square-meter values.
impl ops::Div<Area> for Volume {
  type Output = Length;

  fn div(self, area: Area) -> Length {
    Length::of(self.in_cubic_meters() / area.in_square_meters(), LengthUnit::Meter)
  }
}

/// A volume spread along a length leaves an area.
impl ops::Div<Length> for Volume {
  type Output = Area;

  fn div(self, length: Length) -> Area {
    Area::of(self.in_cubic_meters() / length.in_meters(), AreaUnit::SquareMeter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  #[test]
  fn test_convert_metric_units() {
    assert_eq!(Volume::of(1.0, VolumeUnit::CubicMeter).in_liters(), 1000.0);
    assert_eq!(Volume::of(1.0, VolumeUnit::Liter).in_milliliters(), 1000.0);
    assert_eq!(Volume::of(2.5, VolumeUnit::Liter).in_deciliters(), 250.0);
    assert_eq!(
      Volume::of(1.0, VolumeUnit::CubicCentimeter),
      Volume::of(1.0, VolumeUnit::Milliliter),
    );
  }

  #[test]
  fn test_convert_customary_units() {
    assert_relative_eq!(Volume::of(1.0, VolumeUnit::Gallon).in_liters(), 3.785_412, max_relative = 1.0e-5);
    assert_relative_eq!(Volume::of(1.0, VolumeUnit::Barrel).in_liters(), 158.906_721, max_relative = 1.0e-5);
    assert_relative_eq!(Volume::of(1.0, VolumeUnit::Ounce).in_milliliters(), 29.573_53, max_relative = 1.0e-5);
    assert_relative_eq!(Volume::of(1.0, VolumeUnit::CubicFoot).in_cubic_inches(), 1728.0, max_relative = 1.0e-12);
    assert_relative_eq!(Volume::of(1.0, VolumeUnit::CubicYard).in_cubic_feet(), 27.0, max_relative = 1.0e-12);
  }

  #[test]
  fn test_roundtrip_through_base() {
    for unit in [
      VolumeUnit::Cc,
      VolumeUnit::Milliliter,
      VolumeUnit::Deciliter,
      VolumeUnit::Liter,
      VolumeUnit::CubicCentimeter,
      VolumeUnit::CubicMeter,
      VolumeUnit::CubicInch,
      VolumeUnit::CubicFoot,
      VolumeUnit::CubicYard,
      VolumeUnit::Gallon,
      VolumeUnit::Barrel,
      VolumeUnit::Ounce,
    ] {
      assert_relative_eq!(Volume::of(0.75, unit).in_unit(unit), 0.75);
    }
  }

  #[test]
  fn test_parse() {
    assert_eq!(Volume::parse("2 l").unwrap(), Volume::of(2.0, VolumeUnit::Liter));
    assert_eq!(Volume::parse("500 ml").unwrap(), Volume::of(500.0, VolumeUnit::Milliliter));
    assert_eq!(Volume::parse("3.5 m^3").unwrap(), Volume::of(3.5, VolumeUnit::CubicMeter));
    assert_eq!(Volume::parse("2 gls").unwrap(), Volume::of(2.0, VolumeUnit::Gallon));
    assert!(Volume::parse("2 liters").is_err());
  }

  #[test]
  fn test_to_human() {
    assert_eq!(Volume::of(500.0, VolumeUnit::Milliliter).to_human(), "500.0 ml");
    assert_eq!(Volume::of(2.5, VolumeUnit::Liter).to_human(), "2.5 l");
    assert_eq!(Volume::of(1500.0, VolumeUnit::Liter).to_human(), "1.5 m^3");
    assert_eq!(Volume::of(-500.0, VolumeUnit::Milliliter).to_human(), "-500.0 ml");
  }

  #[test]
  fn test_volume_divided_by_area_is_length() {
    let volume = Volume::of(12.0, VolumeUnit::CubicMeter);
    let area = Area::of(4.0, AreaUnit::SquareMeter);
    assert_eq!(volume / area, Length::of(3.0, LengthUnit::Meter));
  }

  #[test]
  fn test_volume_divided_by_length_is_area() {
    let volume = Volume::of(12.0, VolumeUnit::CubicMeter);
    let length = Length::of(3.0, LengthUnit::Meter);
    assert_eq!(volume / length, Area::of(4.0, AreaUnit::SquareMeter));
  }
}
