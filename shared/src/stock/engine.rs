//! Derived views over the stock ledger
//!
//! Everything here is a pure function of (ledger, filter). Nothing mutates the
//! ledger; sorted output is always a fresh vector of references.

use serde::{Deserialize, Serialize};

use crate::models::StockItem;
use crate::types::{compare_titles, SortKey, StockLevel};

/// Filter and sort selections of the stock table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockFilter {
    /// Region (UPBJJ); `None` shows every region
    pub upbjj: Option<String>,
    pub kategori: Option<String>,
    /// Only 0 < qty < safety
    pub low_stock: bool,
    /// Only qty == 0
    pub empty_stock: bool,
    pub sort: Option<SortKey>,
}

impl StockFilter {
    pub fn is_cleared(&self) -> bool {
        *self == StockFilter::default()
    }

    /// Whether an item passes every active predicate
    pub fn matches(&self, item: &StockItem) -> bool {
        if let Some(upbjj) = &self.upbjj {
            if item.upbjj != *upbjj {
                return false;
            }
        }
        if let Some(kategori) = &self.kategori {
            if item.kategori != *kategori {
                return false;
            }
        }
        if self.low_stock && item.level() != StockLevel::Low {
            return false;
        }
        if self.empty_stock && item.level() != StockLevel::Empty {
            return false;
        }
        true
    }
}

/// Counts over the whole ledger, regardless of the active filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStats {
    pub total: usize,
    pub low_stock: usize,
    pub empty_stock: usize,
}

impl StockStats {
    /// Items with stock at or above their safety threshold; an item with
    /// qty 0 counts as empty even when its threshold is 0
    pub fn sufficient(&self) -> usize {
        self.total - self.low_stock - self.empty_stock
    }
}

pub fn stock_stats(items: &[StockItem]) -> StockStats {
    items.iter().fold(
        StockStats {
            total: items.len(),
            ..StockStats::default()
        },
        |mut stats, item| {
            match item.level() {
                StockLevel::Low => stats.low_stock += 1,
                StockLevel::Empty => stats.empty_stock += 1,
                StockLevel::Sufficient => {}
            }
            stats
        },
    )
}

/// Categories offered for the current region selection.
///
/// With no region every known category is offered; with a region only the
/// categories carried by that region's items, in first-seen order.
pub fn available_categories(
    items: &[StockItem],
    known: &[String],
    upbjj: Option<&str>,
) -> Vec<String> {
    let Some(upbjj) = upbjj else {
        return known.to_vec();
    };

    let mut categories: Vec<String> = Vec::new();
    for item in items.iter().filter(|i| i.upbjj == upbjj) {
        if !categories.contains(&item.kategori) {
            categories.push(item.kategori.clone());
        }
    }
    categories
}

/// Items passing the filter, in ledger order
pub fn filter_items<'a>(items: &'a [StockItem], filter: &StockFilter) -> Vec<&'a StockItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Stable sort of a projection
pub fn sort_items(rows: &mut [&StockItem], key: SortKey) {
    match key {
        SortKey::TitleAsc => rows.sort_by(|a, b| compare_titles(&a.judul, &b.judul)),
        SortKey::TitleDesc => rows.sort_by(|a, b| compare_titles(&b.judul, &a.judul)),
        SortKey::QtyAsc => rows.sort_by(|a, b| a.qty.cmp(&b.qty)),
        SortKey::QtyDesc => rows.sort_by(|a, b| b.qty.cmp(&a.qty)),
        SortKey::PriceAsc => rows.sort_by(|a, b| a.harga.cmp(&b.harga)),
        SortKey::PriceDesc => rows.sort_by(|a, b| b.harga.cmp(&a.harga)),
    }
}

/// What the stock table shows: filtered, then sorted when a key is set
pub fn project<'a>(items: &'a [StockItem], filter: &StockFilter) -> Vec<&'a StockItem> {
    let mut rows = filter_items(items, filter);
    if let Some(key) = filter.sort {
        sort_items(&mut rows, key);
    }
    rows
}
