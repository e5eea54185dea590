//! Currency amounts stored as a whole number of paise.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Serialize, Serializer};

use crate::Error;

/// The number of paise in one rupee.
const PAISE_PER_RUPEE: i128 = 100;

/// Amounts with more whole digits than this are rejected so that a single
/// record always fits in an SQLite integer.
const MAX_WHOLE_DIGITS: usize = 13;

/// An amount of money in rupees, held as an integer number of paise.
///
/// Keeping amounts as integers means totals are exact and do not depend on
/// the order in which records are summed. Each stored record fits in an
/// `i64`; totals are held as `i128` so that summing any number of records
/// that fit in memory cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i128);

impl Amount {
    /// Zero rupees.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a number of paise.
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise as i128)
    }

    /// Create an amount from a whole number of rupees.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees as i128 * PAISE_PER_RUPEE)
    }

    /// The amount as a number of paise.
    pub const fn paise(self) -> i128 {
        self.0
    }

    /// The whole rupee part of the amount, ignoring the sign.
    pub fn whole_rupees(self) -> u128 {
        self.0.unsigned_abs() / PAISE_PER_RUPEE as u128
    }

    /// The paise part of the amount, ignoring the sign.
    pub fn fractional_paise(self) -> u128 {
        self.0.unsigned_abs() % PAISE_PER_RUPEE as u128
    }

    /// The amount in rupees as a float, for JSON output.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / PAISE_PER_RUPEE as f64
    }

    /// Whether the amount is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Whether the amount is strictly less than zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parse a decimal string such as "1000", "1000.5" or "-12.34".
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidAmount] if `text` is not a plain decimal
    /// number with at most two digits after the decimal point.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAmount(text.to_owned());
        let trimmed = text.trim();

        let (is_negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

        if (whole.is_empty() && fraction.is_empty())
            || whole.len() > MAX_WHOLE_DIGITS
            || fraction.len() > 2
            || !is_digits(whole)
            || !is_digits(fraction)
        {
            return Err(invalid());
        }

        let whole: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let fraction: i128 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i128>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let paise = whole * PAISE_PER_RUPEE + fraction;

        Ok(Self(if is_negative { -paise } else { paise }))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        write!(
            f,
            "{sign}{}.{:02}",
            self.whole_rupees(),
            self.fractional_paise()
        )
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let paise = i64::try_from(self.0)
            .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))?;

        Ok(ToSqlOutput::from(paise))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::from_paise)
    }
}
