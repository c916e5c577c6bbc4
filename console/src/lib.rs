//! SITTA bahan ajar console
//!
//! Terminal host for the stock and delivery order pages, driven by line
//! commands over the same view-models the browser build uses.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod sink;

pub use command::{Command, EditChange, StockCommand, TrackingCommand};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use session::{Outcome, Session};
pub use sink::ConsoleSink;

use shared::Catalog;

/// Read and parse the seed dataset
pub fn load_catalog(path: &str) -> AppResult<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::SeedIo {
        path: path.to_string(),
        source,
    })?;
    Ok(Catalog::from_json(&json)?)
}
