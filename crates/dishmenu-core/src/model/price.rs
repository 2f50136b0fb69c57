use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MenuError;

/// Price - a fixed-point amount with two fractional digits
///
/// Stored as a signed count of hundredths ("minor units"), so `56.99` is
/// `5699`. Negative prices are representable; nothing in the menu rejects
/// them. Serialized as a decimal string to keep JSON exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(i64);

impl Price {
    const DECIMALS: usize = 2;
    const SCALE: i64 = 100;

    /// Construct from minor units (hundredths). No scaling applied.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Raw value in hundredths
    pub const fn minor(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / scale,
            abs % scale,
            width = Self::DECIMALS
        )
    }
}

impl FromStr for Price {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MenuError::InvalidPrice {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("only digits and a single '.' are allowed"));
        }
        if frac.len() > Self::DECIMALS {
            return Err(invalid("at most two fractional digits are allowed"));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is out of range"))?
        };
        let cents: i64 = if frac.is_empty() {
            0
        } else {
            // "5" means fifty hundredths, "05" means five
            let padded = format!("{:0<width$}", frac, width = Self::DECIMALS);
            padded.parse().map_err(|_| invalid("amount is out of range"))?
        };

        // Accumulate with the sign applied so i64::MIN stays reachable
        let minor = if negative {
            units
                .checked_mul(-Self::SCALE)
                .and_then(|v| v.checked_sub(cents))
        } else {
            units
                .checked_mul(Self::SCALE)
                .and_then(|v| v.checked_add(cents))
        }
        .ok_or_else(|| invalid("amount is out of range"))?;

        Ok(Self(minor))
    }
}

impl TryFrom<String> for Price {
    type Error = MenuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}
