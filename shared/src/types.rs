//! Common types and display helpers used by both views

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sort keys offered by the stock table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[serde(rename = "judul")]
    TitleAsc,
    #[serde(rename = "judul-desc")]
    TitleDesc,
    #[serde(rename = "qty")]
    QtyAsc,
    #[serde(rename = "qty-desc")]
    QtyDesc,
    #[serde(rename = "harga")]
    PriceAsc,
    #[serde(rename = "harga-desc")]
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::QtyAsc,
        SortKey::QtyDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "judul",
            SortKey::TitleDesc => "judul-desc",
            SortKey::QtyAsc => "qty",
            SortKey::QtyDesc => "qty-desc",
            SortKey::PriceAsc => "harga",
            SortKey::PriceDesc => "harga-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidSortKey(s.to_string()))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock level of an item relative to its safety threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// qty == 0
    Empty,
    /// 0 < qty < safety
    Low,
    Sufficient,
}

impl StockLevel {
    pub fn of(qty: u32, safety: u32) -> Self {
        match qty {
            0 => StockLevel::Empty,
            q if q < safety => StockLevel::Low,
            _ => StockLevel::Sufficient,
        }
    }
}

/// Table row highlighting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RowClass {
    Danger,
    Warning,
    Neutral,
}

impl RowClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            RowClass::Danger => "row-danger",
            RowClass::Warning => "row-warning",
            RowClass::Neutral => "",
        }
    }
}

impl From<StockLevel> for RowClass {
    fn from(level: StockLevel) -> Self {
        match level {
            StockLevel::Empty => RowClass::Danger,
            StockLevel::Low => RowClass::Warning,
            StockLevel::Sufficient => RowClass::Neutral,
        }
    }
}

/// Row highlighting for a (qty, safety) pair
pub fn row_class(qty: u32, safety: u32) -> RowClass {
    StockLevel::of(qty, safety).into()
}

/// Render an integer with `.` as thousands separator (1234567 -> "1.234.567")
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Render a price rounded to whole rupiah
pub fn format_price(amount: Decimal) -> String {
    format_number(amount.round().to_i64().unwrap_or_default())
}

/// Timestamp in the id-ID locale shape, e.g. "5/10/2026, 14.03.09"
pub fn format_waktu(at: NaiveDateTime) -> String {
    at.format("%-d/%-m/%Y, %H.%M.%S").to_string()
}

/// Title ordering: case-insensitive first, raw text breaks ties
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
