//! Registry of the scalar operator overloads over `timestamp(p) with time zone`.
//!
//! Each overload is a tag of [`OperatorKind`]. Overload resolution maps an
//! operator and its two argument types to a [`BoundOperator`], which fixes the
//! input precision `p` (and so the representation) and knows the result type.
//! Invocation is a single match over the tag and the argument values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tstz_common::{Result, error::Error};

use crate::add::IntervalArithmetic;
use crate::difference::TimestampDifference;
use crate::interval::{IntervalDayToSecond, IntervalYearToMonth};
use crate::precision::{Precision, Representation};
use crate::timestamp::TimestampTz;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalarOperator {
    Add,
    Subtract,
}

impl std::fmt::Display for ScalarOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScalarOperator::Add => write!(f, "+"),
            ScalarOperator::Subtract => write!(f, "-"),
        }
    }
}

/// The SQL types taking part in timestamp-with-time-zone arithmetic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SqlType {
    TimestampWithTimeZone(Precision),
    IntervalDayToSecond,
    IntervalYearToMonth,
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SqlType::TimestampWithTimeZone(p) => write!(f, "timestamp({p}) with time zone"),
            SqlType::IntervalDayToSecond => write!(f, "interval day to second"),
            SqlType::IntervalYearToMonth => write!(f, "interval year to month"),
        }
    }
}

/// An argument or result of an operator invocation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    TimestampTz(TimestampTz),
    IntervalDayToSecond(IntervalDayToSecond),
    IntervalYearToMonth(IntervalYearToMonth),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::TimestampTz(ts) => match ts.representation() {
                Representation::Short => "short timestamp with time zone",
                Representation::Long => "long timestamp with time zone",
            },
            Value::IntervalDayToSecond(_) => "interval day to second",
            Value::IntervalYearToMonth(_) => "interval year to month",
        }
    }
}

impl From<TimestampTz> for Value {
    fn from(ts: TimestampTz) -> Value {
        Value::TimestampTz(ts)
    }
}

impl From<IntervalDayToSecond> for Value {
    fn from(interval: IntervalDayToSecond) -> Value {
        Value::IntervalDayToSecond(interval)
    }
}

impl From<IntervalYearToMonth> for Value {
    fn from(interval: IntervalYearToMonth) -> Value {
        Value::IntervalYearToMonth(interval)
    }
}

/// One overload per operator, operand order and interval kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorKind {
    TimestampPlusIntervalDayToSecond,
    IntervalDayToSecondPlusTimestamp,
    TimestampPlusIntervalYearToMonth,
    IntervalYearToMonthPlusTimestamp,
    TimestampMinusIntervalDayToSecond,
    TimestampMinusIntervalYearToMonth,
    TimestampMinusTimestamp,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 7] = [
        OperatorKind::TimestampPlusIntervalDayToSecond,
        OperatorKind::IntervalDayToSecondPlusTimestamp,
        OperatorKind::TimestampPlusIntervalYearToMonth,
        OperatorKind::IntervalYearToMonthPlusTimestamp,
        OperatorKind::TimestampMinusIntervalDayToSecond,
        OperatorKind::TimestampMinusIntervalYearToMonth,
        OperatorKind::TimestampMinusTimestamp,
    ];

    pub fn operator(&self) -> ScalarOperator {
        match self {
            OperatorKind::TimestampPlusIntervalDayToSecond
            | OperatorKind::IntervalDayToSecondPlusTimestamp
            | OperatorKind::TimestampPlusIntervalYearToMonth
            | OperatorKind::IntervalYearToMonthPlusTimestamp => ScalarOperator::Add,
            OperatorKind::TimestampMinusIntervalDayToSecond
            | OperatorKind::TimestampMinusIntervalYearToMonth
            | OperatorKind::TimestampMinusTimestamp => ScalarOperator::Subtract,
        }
    }

    /// Finds the overload of `operator` accepting `(left, right)`.
    ///
    /// Both timestamps of a difference must share the same precision; coercing
    /// them to a common one is the caller's job.
    ///
    /// # Examples
    /// ```rust
    /// # use tstz_arith::{OperatorKind, Precision, ScalarOperator, SqlType};
    /// let bound = OperatorKind::resolve(
    ///     ScalarOperator::Add,
    ///     SqlType::TimestampWithTimeZone(Precision::SECONDS),
    ///     SqlType::IntervalDayToSecond,
    /// )
    /// .unwrap();
    /// assert_eq!(bound.return_type(), SqlType::TimestampWithTimeZone(Precision::MILLIS));
    /// ```
    pub fn resolve(
        operator: ScalarOperator,
        left: SqlType,
        right: SqlType,
    ) -> Option<BoundOperator> {
        use SqlType::TimestampWithTimeZone as Tstz;

        let (kind, precision) = match (operator, left, right) {
            (ScalarOperator::Add, Tstz(p), SqlType::IntervalDayToSecond) => {
                (OperatorKind::TimestampPlusIntervalDayToSecond, p)
            }
            (ScalarOperator::Add, SqlType::IntervalDayToSecond, Tstz(p)) => {
                (OperatorKind::IntervalDayToSecondPlusTimestamp, p)
            }
            (ScalarOperator::Add, Tstz(p), SqlType::IntervalYearToMonth) => {
                (OperatorKind::TimestampPlusIntervalYearToMonth, p)
            }
            (ScalarOperator::Add, SqlType::IntervalYearToMonth, Tstz(p)) => {
                (OperatorKind::IntervalYearToMonthPlusTimestamp, p)
            }
            (ScalarOperator::Subtract, Tstz(p), SqlType::IntervalDayToSecond) => {
                (OperatorKind::TimestampMinusIntervalDayToSecond, p)
            }
            (ScalarOperator::Subtract, Tstz(p), SqlType::IntervalYearToMonth) => {
                (OperatorKind::TimestampMinusIntervalYearToMonth, p)
            }
            (ScalarOperator::Subtract, Tstz(p), Tstz(q)) if p == q => {
                (OperatorKind::TimestampMinusTimestamp, p)
            }
            _ => {
                log::trace!("no overload for {left} {operator} {right}");
                return None;
            }
        };
        Some(BoundOperator::new(kind, precision))
    }
}

/// An overload bound to the precision `p` of its timestamp argument(s).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundOperator {
    kind: OperatorKind,
    precision: Precision,
}

impl BoundOperator {
    pub fn new(kind: OperatorKind, precision: Precision) -> BoundOperator {
        BoundOperator { kind, precision }
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Declared precision `p` of the timestamp argument(s).
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Representation of the timestamp argument(s), and of a timestamp result.
    pub fn representation(&self) -> Representation {
        self.precision.representation()
    }

    pub fn argument_types(&self) -> [SqlType; 2] {
        let ts = SqlType::TimestampWithTimeZone(self.precision);
        match self.kind {
            OperatorKind::TimestampPlusIntervalDayToSecond
            | OperatorKind::TimestampMinusIntervalDayToSecond => [ts, SqlType::IntervalDayToSecond],
            OperatorKind::IntervalDayToSecondPlusTimestamp => [SqlType::IntervalDayToSecond, ts],
            OperatorKind::TimestampPlusIntervalYearToMonth
            | OperatorKind::TimestampMinusIntervalYearToMonth => [ts, SqlType::IntervalYearToMonth],
            OperatorKind::IntervalYearToMonthPlusTimestamp => [SqlType::IntervalYearToMonth, ts],
            OperatorKind::TimestampMinusTimestamp => [ts, ts],
        }
    }

    /// Result type: `timestamp(max(3, p))` for day-to-second overloads,
    /// `timestamp(p)` for year-to-month ones, and `interval day to second`
    /// for a difference.
    pub fn return_type(&self) -> SqlType {
        match self.kind {
            OperatorKind::TimestampPlusIntervalDayToSecond
            | OperatorKind::IntervalDayToSecondPlusTimestamp
            | OperatorKind::TimestampMinusIntervalDayToSecond => {
                SqlType::TimestampWithTimeZone(self.precision.with_day_to_second())
            }
            OperatorKind::TimestampPlusIntervalYearToMonth
            | OperatorKind::IntervalYearToMonthPlusTimestamp
            | OperatorKind::TimestampMinusIntervalYearToMonth => {
                SqlType::TimestampWithTimeZone(self.precision.with_year_to_month())
            }
            OperatorKind::TimestampMinusTimestamp => SqlType::IntervalDayToSecond,
        }
    }

    /// Evaluates the overload on `(left, right)`.
    ///
    /// # Returns
    /// * `Ok(Value)` of [`Self::return_type`]
    /// * `Err` with an invalid argument if the values do not match the signature
    ///   (including a timestamp in the wrong representation for `p`), or with an
    ///   arithmetic overflow if the result is not representable
    pub fn invoke(&self, left: &Value, right: &Value) -> Result<Value> {
        match (self.kind, left, right) {
            (
                OperatorKind::TimestampPlusIntervalDayToSecond,
                Value::TimestampTz(ts),
                Value::IntervalDayToSecond(interval),
            ) => self.timestamp(ts)?.plus(*interval).map(Value::TimestampTz),
            (
                OperatorKind::IntervalDayToSecondPlusTimestamp,
                Value::IntervalDayToSecond(interval),
                Value::TimestampTz(ts),
            ) => interval
                .plus_timestamp(self.timestamp(ts)?)
                .map(Value::TimestampTz),
            (
                OperatorKind::TimestampPlusIntervalYearToMonth,
                Value::TimestampTz(ts),
                Value::IntervalYearToMonth(interval),
            ) => self.timestamp(ts)?.plus(*interval).map(Value::TimestampTz),
            (
                OperatorKind::IntervalYearToMonthPlusTimestamp,
                Value::IntervalYearToMonth(interval),
                Value::TimestampTz(ts),
            ) => interval
                .plus_timestamp(self.timestamp(ts)?)
                .map(Value::TimestampTz),
            (
                OperatorKind::TimestampMinusIntervalDayToSecond,
                Value::TimestampTz(ts),
                Value::IntervalDayToSecond(interval),
            ) => self.timestamp(ts)?.minus(*interval).map(Value::TimestampTz),
            (
                OperatorKind::TimestampMinusIntervalYearToMonth,
                Value::TimestampTz(ts),
                Value::IntervalYearToMonth(interval),
            ) => self.timestamp(ts)?.minus(*interval).map(Value::TimestampTz),
            (
                OperatorKind::TimestampMinusTimestamp,
                Value::TimestampTz(left),
                Value::TimestampTz(right),
            ) => self
                .timestamp(left)?
                .difference(self.timestamp(right)?)
                .map(Value::IntervalDayToSecond),
            (kind, left, right) => {
                log::debug!(
                    "{kind:?} invoked with ({}, {})",
                    left.type_name(),
                    right.type_name()
                );
                Err(Error::invalid_arg(
                    "arguments",
                    format!(
                        "{kind:?} does not accept ({}, {})",
                        left.type_name(),
                        right.type_name()
                    ),
                ))
            }
        }
    }

    /// Checks that a timestamp argument is stored the way `p` requires.
    fn timestamp<'a>(&self, ts: &'a TimestampTz) -> Result<&'a TimestampTz> {
        if ts.representation() == self.representation() {
            Ok(ts)
        } else {
            log::debug!(
                "{:?} at precision {} received a {:?} timestamp",
                self.kind,
                self.precision,
                ts.representation()
            );
            Err(Error::invalid_arg(
                "timestamp",
                format!(
                    "timestamp({}) with time zone must use the {:?} representation",
                    self.precision,
                    self.representation()
                ),
            ))
        }
    }
}
