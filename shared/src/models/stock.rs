//! Stock (bahan ajar) models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::StockLevel;

/// A stocked course module held at a regional center
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    /// Course code, e.g. "EKMA4116"
    pub kode: String,
    pub judul: String,
    pub kategori: String,
    /// Regional distribution center (UPBJJ)
    pub upbjj: String,
    pub lokasi_rak: String,
    pub harga: Decimal,
    pub qty: u32,
    /// Safety-stock threshold
    pub safety: u32,
    #[serde(rename = "catatanHTML", default)]
    pub catatan_html: String,
}

impl StockItem {
    pub fn level(&self) -> StockLevel {
        StockLevel::of(self.qty, self.safety)
    }

    pub fn is_low_stock(&self) -> bool {
        self.level() == StockLevel::Low
    }

    pub fn is_empty_stock(&self) -> bool {
        self.level() == StockLevel::Empty
    }
}
