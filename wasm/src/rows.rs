//! JSON shapes handed to the page templates

use serde::Serialize;
use shared::{
    format_price, row_class, Catalog, DeliveryOrder, FieldErrors, StockItem, StockStats,
};

/// A stock table row with its presentation extras
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow<'a> {
    #[serde(flatten)]
    pub item: &'a StockItem,
    pub row_class: &'static str,
    pub harga_label: String,
    pub qty_label: String,
}

impl<'a> From<&'a StockItem> for StockRow<'a> {
    fn from(item: &'a StockItem) -> Self {
        Self {
            item,
            row_class: row_class(item.qty, item.safety).css_class(),
            harga_label: format_price(item.harga),
            qty_label: shared::format_number(i64::from(item.qty)),
        }
    }
}

/// A delivery order row with names resolved against the catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow<'a> {
    #[serde(flatten)]
    pub order: &'a DeliveryOrder,
    pub status_class: &'static str,
    pub ekspedisi_nama: &'a str,
    pub paket_nama: &'a str,
    pub total_label: String,
}

impl<'a> OrderRow<'a> {
    pub fn new(order: &'a DeliveryOrder, catalog: &'a Catalog) -> Self {
        Self {
            order,
            status_class: order.status.css_class(),
            ekspedisi_nama: catalog.shipper_name(&order.ekspedisi),
            paket_nama: catalog
                .package(&order.paket)
                .map_or(order.paket.as_str(), |p| p.nama.as_str()),
            total_label: format_price(order.total),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total: usize,
    pub low_stock_count: usize,
    pub empty_stock_count: usize,
}

impl From<StockStats> for StockSummary {
    fn from(stats: StockStats) -> Self {
        Self {
            total: stats.total,
            low_stock_count: stats.low_stock,
            empty_stock_count: stats.empty_stock,
        }
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn errors_json(errors: &FieldErrors) -> Result<String, serde_json::Error> {
    to_json(errors)
}
