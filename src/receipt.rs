// 🧾 Receipt Model - Typed receipt after validation
// The Scorer only ever sees these types; raw JSON stays in validation.rs

use chrono::{NaiveDate, NaiveTime};
use std::fmt;

// ============================================================================
// AMOUNT
// ============================================================================

/// Monetary amount stored as whole cents.
///
/// Receipts carry amounts as text (`"12.25"`); keeping them as integer cents
/// makes the round-dollar, quarter and percentage rules exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub fn from_cents(cents: u64) -> Self {
        Amount { cents }
    }

    /// Parse `<digits>.<two digits>` into cents.
    ///
    /// Returns `None` for any other shape, or when the value does not fit.
    pub fn parse(text: &str) -> Option<Self> {
        let (whole, frac) = text.split_once('.')?;

        if whole.is_empty() || frac.len() != 2 {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let dollars: u64 = whole.parse().ok()?;
        let cents: u64 = frac.parse().ok()?;

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Amount::from_cents)
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// True when there is nothing after the decimal point.
    pub fn is_round_dollar(&self) -> bool {
        self.cents % 100 == 0
    }

    pub fn is_multiple_of_quarter(&self) -> bool {
        self.cents % 25 == 0
    }

    /// `ceil(amount * 0.2)` computed on cents: ceil(cents / 500).
    pub fn fifth_rounded_up(&self) -> u64 {
        self.cents / 500 + u64::from(self.cents % 500 != 0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// A receipt that has passed every validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Amount,
    pub items: Vec<Item>,
}

// ============================================================================
// TESTS
// ============================================================================
