//! Notification sink shared by both views
//!
//! Two channels: blocking confirmations shown to the user after an action,
//! and a continuous stream of typed diagnostic events.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::format_price;

/// Diagnostic events emitted by the view observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Region (UPBJJ) filter changed; empty string means "all"
    RegionFilterChanged { old: String, new: String },
    StockEmpty { kode: String, judul: String },
    StockLow { kode: String, judul: String, qty: u32, safety: u32 },
    PackageSelected { kode: String, nama: String, harga: Decimal },
    NimNotNumeric { nim: String },
}

impl ViewEvent {
    /// Stock threshold alerts, as opposed to plain UI traces
    pub fn is_stock_alert(&self) -> bool {
        matches!(self, ViewEvent::StockEmpty { .. } | ViewEvent::StockLow { .. })
    }
}

impl std::fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewEvent::RegionFilterChanged { old, new } => {
                write!(f, "Filter UT Daerah berubah dari \"{}\" ke \"{}\"", old, new)
            }
            ViewEvent::StockEmpty { kode, judul } => {
                write!(f, "ALERT: Stok {} - {} KOSONG!", kode, judul)
            }
            ViewEvent::StockLow { kode, judul, qty, safety } => {
                write!(f, "WARNING: Stok {} - {} menipis ({}/{})", kode, judul, qty, safety)
            }
            ViewEvent::PackageSelected { nama, harga, .. } => {
                write!(f, "Paket dipilih: {} - Rp {}", nama, format_price(*harga))
            }
            ViewEvent::NimNotNumeric { .. } => write!(f, "NIM harus berupa angka"),
        }
    }
}

pub trait NotificationSink {
    /// Confirmation the user must acknowledge (create/update results)
    fn alert(&mut self, message: &str);

    /// Diagnostic stream
    fn notify(&mut self, event: &ViewEvent);
}

/// Emit a view event through `tracing`
pub fn trace_event(event: &ViewEvent) {
    match event {
        ViewEvent::StockEmpty { kode, .. } => {
            tracing::warn!(kode = %kode, "{}", event)
        }
        ViewEvent::StockLow { kode, qty, safety, .. } => {
            tracing::warn!(kode = %kode, qty, safety, "{}", event)
        }
        ViewEvent::RegionFilterChanged { old, new } => {
            tracing::info!(old = %old, new = %new, "{}", event)
        }
        ViewEvent::PackageSelected { kode, .. } => {
            tracing::info!(paket = %kode, "{}", event)
        }
        ViewEvent::NimNotNumeric { nim } => {
            tracing::info!(nim = %nim, "{}", event)
        }
    }
}

/// Sends everything to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn alert(&mut self, message: &str) {
        tracing::info!(target: "alert", "{}", message);
    }

    fn notify(&mut self, event: &ViewEvent) {
        trace_event(event);
    }
}

/// Keeps every alert and event in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub alerts: Vec<String>,
    pub events: Vec<ViewEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.alerts.clear();
        self.events.clear();
    }

    pub fn stock_alerts(&self) -> impl Iterator<Item = &ViewEvent> {
        self.events.iter().filter(|e| e.is_stock_alert())
    }
}

impl NotificationSink for MemorySink {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn notify(&mut self, event: &ViewEvent) {
        self.events.push(event.clone());
    }
}
