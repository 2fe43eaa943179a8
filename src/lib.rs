
//! SI and customary physical-unit value types.
//!
//! Each quantity wraps a single canonical value (grams for mass,
//! meters for length) and converts to its other named units by a
//! stored linear factor. Values are immutable and `Copy`; every
//! operator returns a new value, so they can be shared freely across
//! threads.
//!
//! All quantities speak the same textual format, `"<value> <unit>"`
//! (for example `"78.4 kg"`), through their `Display` and `FromStr`
//! implementations, and render themselves at a human-friendly scale
//! with `to_human`.

pub mod angle;
pub mod area;
pub mod error;
pub mod length;
pub mod mass;
pub mod measure;
mod parsing;
pub mod pressure;
pub mod storage;
pub mod time;
pub mod volume;

pub use angle::{Angle, AngleUnit};
pub use area::{Area, AreaUnit};
pub use error::ParseQuantityError;
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use measure::{Measure, UnitOfMeasure};
pub use pressure::{Pressure, PressureUnit};
pub use storage::{Storage, StorageUnit};
pub use time::{Time, TimeUnit};
pub use volume::{Volume, VolumeUnit};
