//! Shared core of the SITTA bahan ajar screens
//!
//! This crate holds the catalog, the two ledgers (stock items and delivery
//! orders), the derived-view engine and validation. It is used natively by the
//! console host and in the browser through the WASM crate.

pub mod clock;
pub mod error;
pub mod models;
pub mod notify;
pub mod stock;
pub mod tracking;
pub mod types;
pub mod validation;

pub use clock::*;
pub use error::{Error, Result};
pub use models::*;
pub use notify::*;
pub use stock::{StockFilter, StockStats, StockView};
pub use tracking::{DoSequence, TrackingView};
pub use types::*;
pub use validation::*;
