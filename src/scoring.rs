// 🏆 Points Scoring - Reward rules over a validated receipt
// Each rule is independent and additive

use crate::receipt::{Item, Receipt};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_TOTAL_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Points contributed by each rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }

    /// (rule name, points) pairs in rule order
    pub fn rules(&self) -> [(&'static str, u64); 7] {
        [
            ("retailer alphanumerics", self.retailer),
            ("round dollar total", self.round_total),
            ("quarter multiple total", self.quarter_total),
            ("item pairs", self.item_pairs),
            ("item descriptions", self.item_descriptions),
            ("odd purchase day", self.odd_day),
            ("afternoon purchase", self.afternoon),
        ]
    }
}

// ============================================================================
// SCORER
// ============================================================================

/// Total points for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: if receipt.total.is_round_dollar() {
            ROUND_TOTAL_POINTS
        } else {
            0
        },
        quarter_total: if receipt.total.is_multiple_of_quarter() {
            QUARTER_TOTAL_POINTS
        } else {
            0
        },
        item_pairs: (receipt.items.len() as u64 / 2) * ITEM_PAIR_POINTS,
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: if receipt.purchase_date.day() % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon: if is_afternoon(receipt.purchase_time.hour(), receipt.purchase_time.minute()) {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

/// One point per alphanumeric character.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// `ceil(price * 0.2)` when the trimmed description length is a positive
/// multiple of three.
pub fn description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length > 0 && length % 3 == 0 {
        item.price.fifth_rounded_up()
    } else {
        0
    }
}

/// After 14:00 and before 16:00, both exclusive.
fn is_afternoon(hour: u32, minute: u32) -> bool {
    (hour == 14 && minute > 0) || hour == 15
}

// ============================================================================
// TESTS
// ============================================================================
