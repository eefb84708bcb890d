// ✅ Receipt Validation - Shape and format checks on raw JSON
// Every check runs; all failures are reported together.

use crate::receipt::{Amount, Item, Receipt};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVALID_RETAILER: &str = "Invalid retailer";
pub const INVALID_PURCHASE_DATE: &str = "Invalid purchase date";
pub const INVALID_PURCHASE_TIME: &str = "Invalid purchase time";
pub const INVALID_TOTAL: &str = "Invalid total";
pub const INVALID_ITEMS: &str = "Invalid items";

// ============================================================================
// Patterns (compiled once)
// ============================================================================

static RETAILER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w\s\-&]+$").expect("Invalid retailer regex")
});

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w\s\-]+$").expect("Invalid description regex")
});

static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex")
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("Invalid date regex")
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}$").expect("Invalid time regex")
});

static NULL: Value = Value::Null;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Reasons in rule order: retailer, date, time, total, items
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: false,
            errors,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Check a raw receipt document.
///
/// Anything that is not a JSON object (including `null`) is treated as a
/// receipt with every field missing, so all five reasons are reported.
pub fn validate(document: &Value) -> ValidationResult {
    match parse(document) {
        Ok(_) => ValidationResult::valid(),
        Err(result) => result,
    }
}

/// Validate and convert a raw document into a typed [`Receipt`].
pub fn parse(document: &Value) -> Result<Receipt, ValidationResult> {
    let retailer = check_retailer(field(document, "retailer"));
    let purchase_date = check_purchase_date(field(document, "purchaseDate"));
    let purchase_time = check_purchase_time(field(document, "purchaseTime"));
    let total = check_amount(field(document, "total"));
    let items = check_items(field(document, "items"));

    let mut errors = Vec::new();
    if retailer.is_none() {
        errors.push(INVALID_RETAILER.to_string());
    }
    if purchase_date.is_none() {
        errors.push(INVALID_PURCHASE_DATE.to_string());
    }
    if purchase_time.is_none() {
        errors.push(INVALID_PURCHASE_TIME.to_string());
    }
    if total.is_none() {
        errors.push(INVALID_TOTAL.to_string());
    }
    if items.is_none() {
        errors.push(INVALID_ITEMS.to_string());
    }

    match (retailer, purchase_date, purchase_time, total, items) {
        (Some(retailer), Some(purchase_date), Some(purchase_time), Some(total), Some(items)) => {
            Ok(Receipt {
                retailer,
                purchase_date,
                purchase_time,
                total,
                items,
            })
        }
        _ => Err(ValidationResult::invalid(errors)),
    }
}

fn field<'a>(document: &'a Value, name: &str) -> &'a Value {
    document.get(name).unwrap_or(&NULL)
}

fn check_retailer(value: &Value) -> Option<String> {
    let retailer = value.as_str()?;
    RETAILER_PATTERN
        .is_match(retailer)
        .then(|| retailer.to_string())
}

fn check_purchase_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    if !DATE_PATTERN.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn check_purchase_time(value: &Value) -> Option<NaiveTime> {
    let text = value.as_str()?;
    if !TIME_PATTERN.is_match(text) {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

fn check_amount(value: &Value) -> Option<Amount> {
    let text = value.as_str()?;
    if !AMOUNT_PATTERN.is_match(text) {
        return None;
    }
    // None here means the amount overflowed
    Amount::parse(text)
}

fn check_items(value: &Value) -> Option<Vec<Item>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(check_item).collect()
}

fn check_item(value: &Value) -> Option<Item> {
    if !value.is_object() {
        return None;
    }

    let description = field(value, "shortDescription").as_str()?;
    if !DESCRIPTION_PATTERN.is_match(description) {
        return None;
    }

    let price = check_amount(field(value, "price"))?;

    Some(Item {
        short_description: description.to_string(),
        price,
    })
}

// ============================================================================
// TESTS
// ============================================================================
