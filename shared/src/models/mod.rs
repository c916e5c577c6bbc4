//! Domain models for the bahan ajar stock and delivery views

mod catalog;
mod stock;
mod tracking;

pub use catalog::*;
pub use stock::*;
pub use tracking::*;
