
//! Time quantities, stored canonically in seconds.

use crate::measure::{Measure, UnitOfMeasure};
use crate::parsing;

use phf::phf_map;

pub const NANOSECOND_IN_SECOND: f64 = 1.0e-9;
pub const MICROSECOND_IN_SECOND: f64 = 1.0e-6;
pub const MILLISECOND_IN_SECOND: f64 = 1.0e-3;
pub const SECOND_IN_SECOND: f64 = 1.0;
pub const MINUTE_IN_SECOND: f64 = 60.0;
pub const HOUR_IN_SECOND: f64 = 60.0 * 60.0;
pub const DAY_IN_SECOND: f64 = 24.0 * 60.0 * 60.0;

/// A duration, stored canonically in seconds.
pub type Time = Measure<TimeUnit>;

/// Named units of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
  Nanosecond,
  Microsecond,
  Millisecond,
  Second,
  Minute,
  Hour,
  Day,
}

/// All units, largest first, as walked by [`Time::to_human`].
const DESCENDING: [TimeUnit; 7] = [
  TimeUnit::Day,
  TimeUnit::Hour,
  TimeUnit::Minute,
  TimeUnit::Second,
  TimeUnit::Millisecond,
  TimeUnit::Microsecond,
  TimeUnit::Nanosecond,
];

static SYMBOLS: phf::Map<&'static str, TimeUnit> = phf_map! {
  "ns" => TimeUnit::Nanosecond,
  "us" => TimeUnit::Microsecond,
  "ms" => TimeUnit::Millisecond,
  "sec" => TimeUnit::Second,
  "min" => TimeUnit::Minute,
  "hr" => TimeUnit::Hour,
  "day" => TimeUnit::Day,
};

impl UnitOfMeasure for TimeUnit {
  const QUANTITY: &'static str = "Time";
  const BASE: Self = TimeUnit::Second;

  fn symbol(self) -> &'static str {
    match self {
      TimeUnit::Nanosecond => "ns",
      TimeUnit::Microsecond => "us",
      TimeUnit::Millisecond => "ms",
      TimeUnit::Second => "sec",
      TimeUnit::Minute => "min",
      TimeUnit::Hour => "hr",
      TimeUnit::Day => "day",
    }
  }

  fn factor(self) -> f64 {
    match self {
      TimeUnit::Nanosecond => NANOSECOND_IN_SECOND,
      TimeUnit::Microsecond => MICROSECOND_IN_SECOND,
      TimeUnit::Millisecond => MILLISECOND_IN_SECOND,
      TimeUnit::Second => SECOND_IN_SECOND,
      TimeUnit::Minute => MINUTE_IN_SECOND,
      TimeUnit::Hour => HOUR_IN_SECOND,
      TimeUnit::Day => DAY_IN_SECOND,
    }
  }

  fn resolve(token: &str) -> Option<Self> {
    parsing::lookup_symbol(&SYMBOLS, token)
  }
}

impl Time {
  pub fn in_nanos(self) -> f64 {
    self.in_unit(TimeUnit::Nanosecond)
  }

  pub fn in_micros(self) -> f64 {
    self.in_unit(TimeUnit::Microsecond)
  }

  pub fn in_millis(self) -> f64 {
    self.in_unit(TimeUnit::Millisecond)
  }

  pub fn in_seconds(self) -> f64 {
    self.in_unit(TimeUnit::Second)
  }

  pub fn in_minutes(self) -> f64 {
    self.in_unit(TimeUnit::Minute)
  }

  pub fn in_hours(self) -> f64 {
    self.in_unit(TimeUnit::Hour)
  }

  pub fn in_days(self) -> f64 {
    self.in_unit(TimeUnit::Day)
  }

  /// Renders the duration in the largest unit that amounts to more
  /// than one, with one fractional digit. Durations with no such unit
  /// (zero, negative, or under a nanosecond) fall back to the plain
  /// seconds form.
  pub fn to_human(self) -> String {
    for unit in DESCENDING {
      let amount = self.in_unit(unit);
      if amount > 1.0 {
        return format!("{:.1} {}", amount, unit.symbol());
      }
    }
    self.to_string()
  }
}
