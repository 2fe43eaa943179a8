
//! Mass (weight) quantities, stored canonically in grams.

use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

pub const MILLIGRAM_IN_GRAM: f64 = 1.0 / 1000.0;
pub const GRAM_IN_GRAM: f64 = 1.0;
pub const KILOGRAM_IN_GRAM: f64 = 1000.0;
pub const TON_IN_GRAM: f64 = 1000.0 * 1000.0;

/// A mass, stored canonically in grams.
pub type Mass = Measure<MassUnit>;

/// Named units of mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
  Milligram,
  Gram,
  Kilogram,
  Ton,
}

static SYMBOLS: phf::Map<&'static str, MassUnit> = phf_map! {
  "mg" => MassUnit::Milligram,
  "g" => MassUnit::Gram,
  "kg" => MassUnit::Kilogram,
  "ton" => MassUnit::Ton,
};

impl UnitOfMeasure for MassUnit {
  const QUANTITY: &'static str = "Mass";
  const BASE: Self = MassUnit::Gram;

  fn symbol(self) -> &'static str {
    match self {
      MassUnit::Milligram => "mg",
      MassUnit::Gram => "g",
      MassUnit::Kilogram => "kg",
      MassUnit::Ton => "ton",
    }
  }

  fn factor(self) -> f64 {
    match self {
      MassUnit::Milligram => MILLIGRAM_IN_GRAM,
      MassUnit::Gram => GRAM_IN_GRAM,
      MassUnit::Kilogram => KILOGRAM_IN_GRAM,
      MassUnit::Ton => TON_IN_GRAM,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Mass {
  pub fn in_milligrams(self) -> f64 {
    self.in_unit(MassUnit::Milligram)
  }

  pub fn in_grams(self) -> f64 {
    self.in_unit(MassUnit::Gram)
  }

  pub fn in_kilograms(self) -> f64 {
    self.in_unit(MassUnit::Kilogram)
  }

  pub fn in_tons(self) -> f64 {
    self.in_unit(MassUnit::Ton)
  }

  /// Renders the mass at its most readable scale, with one fractional
  /// digit: milligrams below one gram, kilograms above a thousand
  /// grams, tons above a million grams.
  pub fn to_human(self) -> String {
    let gram = self.canonical();
    let display = gram.abs();

    if display > TON_IN_GRAM {
      return format!("{:.1} {}", display / TON_IN_GRAM * gram.signum(), MassUnit::Ton.symbol());
    }

    if display < GRAM_IN_GRAM {
      format!("{:.1} {}", display / MILLIGRAM_IN_GRAM * gram.signum(), MassUnit::Milligram.symbol())
    } else if display > KILOGRAM_IN_GRAM {
      format!("{:.1} {}", display / KILOGRAM_IN_GRAM * gram.signum(), MassUnit::Kilogram.symbol())
    } else {
      format!("{:.1} {}", display * gram.signum(), MassUnit::Gram.symbol())
    }
  }
}
