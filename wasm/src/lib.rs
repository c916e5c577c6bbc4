//! WebAssembly module for the SITTA bahan ajar pages
//!
//! Exposes the two view-models to the browser:
//! - `StockApp` for the stock management page
//! - `TrackingApp` for the delivery order page
//!
//! Both are constructed from the seed dataset as a JSON string; lists and form
//! buffers cross the boundary as JSON.

use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

mod browser;
mod rows;

pub use browser::{BrowserClock, BrowserSink};
pub use rows::{OrderRow, StockRow, StockSummary};

// Re-export shared types for use in JavaScript glue
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{StockView, TrackingView};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("SITTA bahan ajar module loaded"));
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn load_catalog(seed_json: &str) -> Result<Rc<Catalog>, JsValue> {
    Catalog::from_json(seed_json)
        .map(Rc::new)
        .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {}", e)))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// Stock page
// ============================================================================

#[wasm_bindgen]
pub struct StockApp {
    view: StockView<BrowserSink>,
}

#[wasm_bindgen]
impl StockApp {
    #[wasm_bindgen(constructor)]
    pub fn new(seed_json: &str) -> Result<StockApp, JsValue> {
        Ok(StockApp {
            view: StockView::new(load_catalog(seed_json)?, BrowserSink),
        })
    }

    /// Empty string selects every region
    pub fn set_region_filter(&mut self, upbjj: &str) {
        self.view.set_region_filter(non_empty(upbjj));
    }

    pub fn set_category_filter(&mut self, kategori: &str) {
        self.view.set_category_filter(non_empty(kategori));
    }

    pub fn set_low_stock_filter(&mut self, enabled: bool) {
        self.view.set_low_stock_filter(enabled);
    }

    pub fn set_empty_stock_filter(&mut self, enabled: bool) {
        self.view.set_empty_stock_filter(enabled);
    }

    /// One of `judul`, `judul-desc`, `qty`, `qty-desc`, `harga`, `harga-desc`;
    /// empty string removes sorting
    pub fn set_sort(&mut self, sort: &str) -> Result<(), JsValue> {
        let key = match sort {
            "" => None,
            s => Some(s.parse::<SortKey>().map_err(js_err)?),
        };
        self.view.set_sort(key);
        Ok(())
    }

    pub fn reset_filters(&mut self) {
        self.view.reset_filters();
    }

    pub fn filter_json(&self) -> Result<String, JsValue> {
        rows::to_json(self.view.filter()).map_err(js_err)
    }

    pub fn rows_json(&self) -> Result<String, JsValue> {
        let rows: Vec<StockRow> = self
            .view
            .filtered_items()
            .into_iter()
            .map(StockRow::from)
            .collect();
        rows::to_json(&rows).map_err(js_err)
    }

    pub fn regions_json(&self) -> Result<String, JsValue> {
        rows::to_json(&self.view.catalog().regions).map_err(js_err)
    }

    pub fn available_categories_json(&self) -> Result<String, JsValue> {
        rows::to_json(&self.view.available_categories()).map_err(js_err)
    }

    pub fn summary_json(&self) -> Result<String, JsValue> {
        rows::to_json(&StockSummary::from(self.view.stats())).map_err(js_err)
    }

    pub fn low_stock_count(&self) -> usize {
        self.view.low_stock_count()
    }

    pub fn empty_stock_count(&self) -> usize {
        self.view.empty_stock_count()
    }

    /// Start editing; returns the edit buffer
    pub fn begin_edit(&mut self, kode: &str) -> Result<String, JsValue> {
        let buffer = self.view.begin_edit(kode).map_err(js_err)?;
        rows::to_json(&*buffer).map_err(js_err)
    }

    /// Replace the edit buffer with the form contents
    pub fn update_edit(&mut self, item_json: &str) -> Result<(), JsValue> {
        let item: StockItem = serde_json::from_str(item_json).map_err(js_err)?;
        let buffer = self
            .view
            .editing_mut()
            .ok_or_else(|| js_err(shared::Error::NotEditing))?;
        *buffer = item;
        Ok(())
    }

    pub fn save_edit(&mut self) -> Result<(), JsValue> {
        self.view.save_edit().map_err(js_err)
    }

    pub fn cancel_edit(&mut self) {
        self.view.cancel_edit();
    }

    pub fn open_add_form(&mut self) {
        self.view.open_add_form();
    }

    pub fn is_add_form_open(&self) -> bool {
        self.view.is_add_form_open()
    }

    pub fn set_new_item(&mut self, item_json: &str) -> Result<(), JsValue> {
        *self.view.new_item_mut() = serde_json::from_str(item_json).map_err(js_err)?;
        Ok(())
    }

    /// `false` when validation failed; see `validation_errors_json`
    pub fn submit_new_item(&mut self) -> bool {
        self.view.submit_new_item().is_ok()
    }

    pub fn cancel_add(&mut self) {
        self.view.cancel_add();
    }

    pub fn validation_errors_json(&self) -> Result<String, JsValue> {
        rows::errors_json(self.view.validation_errors()).map_err(js_err)
    }
}

// ============================================================================
// Tracking page
// ============================================================================

#[wasm_bindgen]
pub struct TrackingApp {
    view: TrackingView<BrowserSink, BrowserClock>,
}

#[wasm_bindgen]
impl TrackingApp {
    #[wasm_bindgen(constructor)]
    pub fn new(seed_json: &str) -> Result<TrackingApp, JsValue> {
        let view = TrackingView::new(load_catalog(seed_json)?, BrowserSink, BrowserClock)
            .map_err(js_err)?;
        Ok(TrackingApp { view })
    }

    pub fn next_nomor_do(&self) -> String {
        self.view.next_nomor_do()
    }

    pub fn set_nim(&mut self, nim: &str) {
        self.view.set_nim(nim);
    }

    pub fn set_nama(&mut self, nama: &str) {
        self.view.form_mut().nama = nama.to_string();
    }

    pub fn set_ekspedisi(&mut self, ekspedisi: &str) {
        self.view.form_mut().ekspedisi = ekspedisi.to_string();
    }

    /// Date as `YYYY-MM-DD`
    pub fn set_tanggal_kirim(&mut self, tanggal: &str) -> Result<(), JsValue> {
        let date = NaiveDate::parse_from_str(tanggal, "%Y-%m-%d").map_err(js_err)?;
        self.view.form_mut().tanggal_kirim = date;
        Ok(())
    }

    pub fn select_package(&mut self, kode: &str) {
        self.view.select_package(non_empty(kode));
    }

    /// Selected package, or `null`
    pub fn selected_package_json(&self) -> Result<String, JsValue> {
        rows::to_json(&self.view.selected_package()).map_err(js_err)
    }

    pub fn form_json(&self) -> Result<String, JsValue> {
        rows::to_json(self.view.form()).map_err(js_err)
    }

    pub fn shippers_json(&self) -> Result<String, JsValue> {
        rows::to_json(&self.view.catalog().shippers).map_err(js_err)
    }

    pub fn packages_json(&self) -> Result<String, JsValue> {
        rows::to_json(&self.view.catalog().packages).map_err(js_err)
    }

    /// `false` when validation failed; see `validation_errors_json`
    pub fn submit(&mut self) -> bool {
        self.view.submit().is_ok()
    }

    pub fn reset_form(&mut self) {
        self.view.reset_form();
    }

    pub fn validation_errors_json(&self) -> Result<String, JsValue> {
        rows::errors_json(self.view.validation_errors()).map_err(js_err)
    }

    pub fn orders_json(&self) -> Result<String, JsValue> {
        let catalog = self.view.catalog();
        let rows: Vec<OrderRow> = self
            .view
            .orders()
            .iter()
            .map(|order| OrderRow::new(order, catalog))
            .collect();
        rows::to_json(&rows).map_err(js_err)
    }

    pub fn course_title(&self, kode: &str) -> String {
        self.view.course_title(kode).to_string()
    }

    pub fn shipper_name(&self, kode: &str) -> String {
        self.view.shipper_name(kode).to_string()
    }
}

/// Badge class for a status string; unknown statuses get none
#[wasm_bindgen]
pub fn status_class(status: &str) -> String {
    DeliveryStatus::from(status.to_string()).css_class().to_string()
}

/// Thousands-separated integer, e.g. 1234567 -> "1.234.567"
#[wasm_bindgen]
pub fn format_thousands(value: f64) -> String {
    shared::format_number(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("Diproses"), "status-processing");
        assert_eq!(status_class("Dalam Perjalanan"), "status-shipping");
        assert_eq!(status_class("Terkirim"), "status-delivered");
        assert_eq!(status_class("Hilang"), "");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(120000.0), "120.000");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.4), "1.234.567");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("Jakarta"), Some("Jakarta".to_string()));
    }
}
