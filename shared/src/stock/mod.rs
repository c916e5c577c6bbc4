//! Stock management: derived-view engine and view-model

pub mod engine;
mod view;

pub use engine::{StockFilter, StockStats};
pub use view::*;
