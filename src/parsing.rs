
//! Shared helpers for parsing quantity strings of the form
//! `"<value> <unit>"`.

use once_cell::sync::Lazy;
use regex::Regex;

static VALUE_UNIT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(\S+)\s+(\S+)$").unwrap());

/// Splits a trimmed quantity string into its value and unit tokens.
/// Returns `None` unless the input consists of exactly two
/// whitespace-separated tokens.
pub(crate) fn split_value_unit(input: &str) -> Option<(&str, &str)> {
  let captures = VALUE_UNIT_RE.captures(input)?;
  let value = captures.get(1)?.as_str();
  let unit = captures.get(2)?.as_str();
  Some((value, unit))
}

/// Case-insensitive unit-symbol lookup, tolerating a trailing plural
/// "s". The exact (case-folded) match wins, so symbols which
/// themselves end in "s" (such as "ms") still resolve; the stripped
/// form is only tried when the exact lookup misses.
pub(crate) fn lookup_symbol<T: Copy>(table: &phf::Map<&'static str, T>, token: &str) -> Option<T> {
  let lower = token.to_lowercase();
  if let Some(unit) = table.get(lower.as_str()) {
    return Some(*unit);
  }
  let singular = lower.strip_suffix('s')?;
  table.get(singular).copied()
}
