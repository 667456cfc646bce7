//! Interval arithmetic on `timestamp(p) with time zone` values.
//!
//! A timestamp with time zone is an instant in UTC epoch milliseconds plus an opaque
//! zone key. Precisions up to milliseconds (`p <= 3`) use the packed short form
//! ([`PackedTimestampTz`]); finer precisions use the long form ([`LongTimestampTz`]),
//! which carries an extra picosecond-of-millisecond fraction.
//!
//! # Key Types
//!
//! - [`IntervalArithmetic`] - `timestamp +/- interval` for both interval kinds
//! - [`TimestampDifference`] - `timestamp - timestamp`, producing a day-to-second interval
//! - [`TimestampTz`] - either representation, dispatched by pattern match
//! - [`OperatorKind`] / [`BoundOperator`] - the registry of scalar operator overloads

pub mod add;
pub mod codec;
pub mod difference;
pub mod dispatch;
pub mod interval;
pub mod precision;
pub mod rounding;
pub mod timestamp;

pub use add::IntervalArithmetic;
pub use codec::{PackedTimestampTz, ZoneKey, pack, unpack};
pub use difference::TimestampDifference;
pub use dispatch::{BoundOperator, OperatorKind, ScalarOperator, SqlType, Value};
pub use interval::{IntervalDayToSecond, IntervalYearToMonth, SignedInterval};
pub use precision::{Precision, Representation};
pub use timestamp::{LongTimestampTz, TimestampTz};

pub const PICOSECONDS_PER_MILLISECOND: i64 = 1_000_000_000;
