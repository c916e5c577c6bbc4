//! Delivery order tracking: numbering and view-model

mod sequence;
mod view;

pub use sequence::*;
pub use view::*;
