//! Stock management view-model
//!
//! Owns the stock ledger and the transient UI state (filters, edit buffer,
//! add form). Every ledger mutation goes through [`StockView::commit`], which
//! runs the stock threshold observer.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::models::{Catalog, StockItem};
use crate::notify::{NotificationSink, TracingSink, ViewEvent};
use crate::types::{SortKey, StockLevel};
use crate::validation::{
    validate_judul, validate_kode_format, validate_kode_unique, Field, FieldErrors,
};

use super::engine::{self, StockFilter, StockStats};

pub const MSG_ITEM_UPDATED: &str = "Data berhasil diupdate!";
pub const MSG_ITEM_ADDED: &str = "Data berhasil ditambahkan!";

pub struct StockView<S: NotificationSink = TracingSink> {
    catalog: Rc<Catalog>,
    items: Vec<StockItem>,
    filter: StockFilter,
    editing: Option<StockItem>,
    show_add_form: bool,
    new_item: StockItem,
    validation_errors: FieldErrors,
    sink: S,
}

impl<S: NotificationSink> StockView<S> {
    /// The ledger starts as an independent copy of the catalog's stock
    pub fn new(catalog: Rc<Catalog>, sink: S) -> Self {
        let items = catalog.stock.clone();
        Self {
            catalog,
            items,
            filter: StockFilter::default(),
            editing: None,
            show_add_form: false,
            new_item: StockItem::default(),
            validation_errors: FieldErrors::new(),
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn item(&self, kode: &str) -> Option<&StockItem> {
        self.items.iter().find(|i| i.kode == kode)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &StockFilter {
        &self.filter
    }

    /// Select a region (`None` or empty = all). A change is reported and
    /// always clears the category selection.
    pub fn set_region_filter(&mut self, upbjj: Option<String>) {
        let upbjj = upbjj.filter(|s| !s.is_empty());
        if upbjj == self.filter.upbjj {
            return;
        }

        let old = std::mem::replace(&mut self.filter.upbjj, upbjj);
        self.sink.notify(&ViewEvent::RegionFilterChanged {
            old: old.unwrap_or_default(),
            new: self.filter.upbjj.clone().unwrap_or_default(),
        });
        self.filter.kategori = None;
    }

    pub fn set_category_filter(&mut self, kategori: Option<String>) {
        self.filter.kategori = kategori.filter(|s| !s.is_empty());
    }

    pub fn set_low_stock_filter(&mut self, enabled: bool) {
        self.filter.low_stock = enabled;
    }

    pub fn set_empty_stock_filter(&mut self, enabled: bool) {
        self.filter.empty_stock = enabled;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.filter.sort = sort;
    }

    pub fn reset_filters(&mut self) {
        self.set_region_filter(None);
        self.filter = StockFilter::default();
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn available_categories(&self) -> Vec<String> {
        engine::available_categories(
            &self.items,
            &self.catalog.categories,
            self.filter.upbjj.as_deref(),
        )
    }

    pub fn filtered_items(&self) -> Vec<&StockItem> {
        engine::project(&self.items, &self.filter)
    }

    pub fn stats(&self) -> StockStats {
        engine::stock_stats(&self.items)
    }

    pub fn low_stock_count(&self) -> usize {
        self.stats().low_stock
    }

    pub fn empty_stock_count(&self) -> usize {
        self.stats().empty_stock
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    /// Copy an item into the edit buffer
    pub fn begin_edit(&mut self, kode: &str) -> Result<&mut StockItem> {
        let item = self
            .item(kode)
            .cloned()
            .ok_or_else(|| Error::UnknownItem(kode.to_string()))?;
        Ok(self.editing.insert(item))
    }

    pub fn editing(&self) -> Option<&StockItem> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut StockItem> {
        self.editing.as_mut()
    }

    /// Replace the ledger entry carrying the buffer's `kode` with the buffer.
    ///
    /// When no entry carries that code the buffer is kept.
    pub fn save_edit(&mut self) -> Result<()> {
        let kode = match &self.editing {
            Some(buffer) => buffer.kode.clone(),
            None => return Err(Error::NotEditing),
        };
        let index = self
            .items
            .iter()
            .position(|i| i.kode == kode)
            .ok_or_else(|| Error::UnknownItem(kode.clone()))?;
        let Some(buffer) = self.editing.take() else {
            return Err(Error::NotEditing);
        };

        self.items[index] = buffer;
        tracing::debug!(kode = %kode, "stock item updated");
        self.commit();
        self.sink.alert(MSG_ITEM_UPDATED);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ------------------------------------------------------------------
    // Add
    // ------------------------------------------------------------------

    pub fn open_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn is_add_form_open(&self) -> bool {
        self.show_add_form
    }

    pub fn new_item(&self) -> &StockItem {
        &self.new_item
    }

    pub fn new_item_mut(&mut self) -> &mut StockItem {
        &mut self.new_item
    }

    pub fn validation_errors(&self) -> &FieldErrors {
        &self.validation_errors
    }

    /// Run every add-form rule; the previous messages are discarded first
    pub fn validate_new_item(&mut self) -> bool {
        self.validation_errors.clear();

        let kode = &self.new_item.kode;
        self.validation_errors.check(
            Field::Kode,
            validate_kode_unique(kode, self.items.iter().map(|i| i.kode.as_str())),
        );
        self.validation_errors
            .check(Field::Kode, validate_kode_format(kode));
        self.validation_errors
            .check(Field::Judul, validate_judul(&self.new_item.judul));

        self.validation_errors.is_empty()
    }

    /// Validate the add form and append it to the ledger
    pub fn submit_new_item(&mut self) -> Result<&StockItem> {
        if !self.validate_new_item() {
            return Err(Error::Validation(self.validation_errors.clone()));
        }

        let item = std::mem::take(&mut self.new_item);
        tracing::debug!(kode = %item.kode, "stock item added");
        self.items.push(item);
        self.show_add_form = false;
        self.reset_new_item();
        self.commit();
        self.sink.alert(MSG_ITEM_ADDED);

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    pub fn cancel_add(&mut self) {
        self.show_add_form = false;
        self.reset_new_item();
    }

    fn reset_new_item(&mut self) {
        self.new_item = StockItem::default();
        self.validation_errors.clear();
    }

    // ------------------------------------------------------------------
    // Observer
    // ------------------------------------------------------------------

    /// Rescan the ledger after a mutation and report every item below its
    /// safety threshold
    fn commit(&mut self) {
        for item in &self.items {
            let event = match item.level() {
                StockLevel::Empty => ViewEvent::StockEmpty {
                    kode: item.kode.clone(),
                    judul: item.judul.clone(),
                },
                StockLevel::Low => ViewEvent::StockLow {
                    kode: item.kode.clone(),
                    judul: item.judul.clone(),
                    qty: item.qty,
                    safety: item.safety,
                },
                StockLevel::Sufficient => continue,
            };
            self.sink.notify(&event);
        }
    }
}
