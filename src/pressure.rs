
//! Pressure quantities, stored canonically in pascals.

use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

pub const ATM_IN_PASCAL: f64 = 101325.0;
pub const PASCAL_IN_PASCAL: f64 = 1.0;
pub const HECTOPASCAL_IN_PASCAL: f64 = 100.0;
pub const KILOPASCAL_IN_PASCAL: f64 = 1000.0;
pub const MEGAPASCAL_IN_PASCAL: f64 = 1000.0 * 1000.0;

pub const BAR_IN_PASCAL: f64 = 1.0e5;
pub const DECIBAR_IN_PASCAL: f64 = 1.0e4;
pub const MILLIBAR_IN_PASCAL: f64 = 1.0e2;

pub const PSI_IN_PASCAL: f64 = 6895.757;
pub const TORR_IN_PASCAL: f64 = 1.0 / 122.322;
pub const MMHG_IN_PASCAL: f64 = 1.0 / 122.322;

/// A pressure, stored canonically in pascals.
pub type Pressure = Measure<PressureUnit>;

/// Named units of pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureUnit {
  /// Standard atmosphere, measured at sea level: 101325 Pa.
  Atm,
  /// The SI unit, one newton per square meter.
  Pascal,
  HectoPascal,
  KiloPascal,
  MegaPascal,
  /// 1 bar = 100,000 Pa; meteorology still quotes sea-level pressure
  /// as 1013.25 millibars.
  Bar,
  DeciBar,
  MilliBar,
  /// Pound-force per square inch.
  Psi,
  /// One millimeter of mercury.
  Torr,
  MmHg,
}

static SYMBOLS: phf::Map<&'static str, PressureUnit> = phf_map! {
  "atm" => PressureUnit::Atm,
  "pa" => PressureUnit::Pascal,
  "hpa" => PressureUnit::HectoPascal,
  "kpa" => PressureUnit::KiloPascal,
  "mpa" => PressureUnit::MegaPascal,
  "bar" => PressureUnit::Bar,
  "dbar" => PressureUnit::DeciBar,
  "mbar" => PressureUnit::MilliBar,
  "psi" => PressureUnit::Psi,
  "torr" => PressureUnit::Torr,
  "mmhg" => PressureUnit::MmHg,
};

impl UnitOfMeasure for PressureUnit {
  const QUANTITY: &'static str = "Pressure";
  const BASE: Self = PressureUnit::Pascal;

  fn symbol(self) -> &'static str {
    match self {
      PressureUnit::Atm => "atm",
      PressureUnit::Pascal => "Pa",
      PressureUnit::HectoPascal => "hPa",
      PressureUnit::KiloPascal => "kPa",
      PressureUnit::MegaPascal => "MPa",
      PressureUnit::Bar => "bar",
      PressureUnit::DeciBar => "dbar",
      PressureUnit::MilliBar => "mbar",
      PressureUnit::Psi => "psi",
      PressureUnit::Torr => "torr",
      PressureUnit::MmHg => "mmHg",
    }
  }

  fn factor(self) -> f64 {
    match self {
      PressureUnit::Atm => ATM_IN_PASCAL,
      PressureUnit::Pascal => PASCAL_IN_PASCAL,
      PressureUnit::HectoPascal => HECTOPASCAL_IN_PASCAL,
      PressureUnit::KiloPascal => KILOPASCAL_IN_PASCAL,
      PressureUnit::MegaPascal => MEGAPASCAL_IN_PASCAL,
      PressureUnit::Bar => BAR_IN_PASCAL,
      PressureUnit::DeciBar => DECIBAR_IN_PASCAL,
      PressureUnit::MilliBar => MILLIBAR_IN_PASCAL,
      PressureUnit::Psi => PSI_IN_PASCAL,
      PressureUnit::Torr => TORR_IN_PASCAL,
      PressureUnit::MmHg => MMHG_IN_PASCAL,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Pressure {
  pub fn in_atm(self) -> f64 {
    self.in_unit(PressureUnit::Atm)
  }

  pub fn in_pascals(self) -> f64 {
    self.in_unit(PressureUnit::Pascal)
  }

  pub fn in_hectopascals(self) -> f64 {
    self.in_unit(PressureUnit::HectoPascal)
  }

  pub fn in_kilopascals(self) -> f64 {
    self.in_unit(PressureUnit::KiloPascal)
  }

  pub fn in_megapascals(self) -> f64 {
    self.in_unit(PressureUnit::MegaPascal)
  }

  pub fn in_bars(self) -> f64 {
    self.in_unit(PressureUnit::Bar)
  }

  pub fn in_decibars(self) -> f64 {
    self.in_unit(PressureUnit::DeciBar)
  }

  pub fn in_millibars(self) -> f64 {
    self.in_unit(PressureUnit::MilliBar)
  }

  pub fn in_psi(self) -> f64 {
    self.in_unit(PressureUnit::Psi)
  }

  pub fn in_torr(self) -> f64 {
    self.in_unit(PressureUnit::Torr)
  }

  pub fn in_mmhg(self) -> f64 {
    self.in_unit(PressureUnit::MmHg)
  }

  /// Renders the pressure at its most readable pascal scale, with one
  /// fractional digit.
  pub fn to_human(self) -> String {
    let pascal = self.canonical();
    let display = pascal.abs();

    if display > MEGAPASCAL_IN_PASCAL {
      return format!(
        "{:.1} {}",
        display / MEGAPASCAL_IN_PASCAL * pascal.signum(),
        PressureUnit::MegaPascal.symbol(),
      );
    }

    if display > KILOPASCAL_IN_PASCAL {
      format!("{:.1} {}", display / KILOPASCAL_IN_PASCAL * pascal.signum(), PressureUnit::KiloPascal.symbol())
    } else if display > HECTOPASCAL_IN_PASCAL {
      format!("{:.1} {}", display / HECTOPASCAL_IN_PASCAL * pascal.signum(), PressureUnit::HectoPascal.symbol())
    } else {
      format!("{:.1} {}", display * pascal.signum(), PressureUnit::Pascal.symbol())
    }
  }
}
