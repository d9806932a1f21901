//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw integers the marketplace sends, so they can be used directly in wire
//! types without conversion overhead.

pub mod fmt;

pub use fmt::money::{
    bips_to_decimal, commission_major, decimal_to_percent_string, format_cents, format_currency,
    minor_to_major,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Newtype for marketplace order identifiers (e.g. `123`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(OrderId)
    }
}

impl Serialize for OrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(OrderId(id))
    }
}

// ─── Cents ───────────────────────────────────────────────────────────────────

/// A currency amount in minor units (USD cents).
///
/// Amounts stay integer until the display step; see [`fmt::money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Cents {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Cents> for Decimal {
    fn from(cents: Cents) -> Self {
        Decimal::from(cents.0)
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_cents(*self))
    }
}

// ─── Bips ────────────────────────────────────────────────────────────────────

/// A rate in basis points: 1 bp = 0.01%, 10,000 bp = 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bips(u32);

impl Bips {
    pub const fn new(bips: u32) -> Self {
        Self(bips)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The rate as a decimal fraction (`250` → `0.025`).
    pub fn as_decimal(&self) -> Decimal {
        bips_to_decimal(*self)
    }
}

impl From<u32> for Bips {
    fn from(bips: u32) -> Self {
        Self(bips)
    }
}

impl From<Bips> for Decimal {
    fn from(bips: Bips) -> Self {
        Decimal::from(bips.0)
    }
}

impl std::fmt::Display for Bips {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", decimal_to_percent_string(self.as_decimal()))
    }
}
