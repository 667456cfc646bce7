//! Proleptic ISO-8601 calendar over UTC epoch milliseconds.
//!
//! Calendar fields come from `chrono`'s naive UTC date-time. All instants are
//! signed milliseconds since 1970-01-01T00:00:00Z; instants outside the range
//! `chrono` can represent (about +/- 262,000 years) report
//! [`CalendarError::CalendarOverflow`].

pub mod civil;
pub mod months;


pub use civil::{from_naive_utc, to_naive_utc, utc_epoch_millis};
pub use months::add_months;

pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_MINUTE: i64 = MILLIS_PER_SECOND * 60;
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidArgument(String),
    CalendarOverflow,
}

impl std::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CalendarError::InvalidArgument(desc) => write!(f, "Invalid argument: {desc}"),
            CalendarError::CalendarOverflow => {
                write!(
                    f,
                    "A calendar result must be within the supported date-time range"
                )
            }
        }
    }
}

impl std::error::Error for CalendarError {}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
