//! Delivery order numbering

use crate::error::{Error, Result};
use crate::models::{do_sequence_digits, DeliveryOrder};

/// Counter behind `DO<year>-<nnn>` numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoSequence {
    next: u64,
}

impl Default for DoSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl DoSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Continue after the last preloaded order.
    ///
    /// Preloads are expected in ascending order. A last entry without a
    /// numeric suffix falls back to counting the preloads. A suffix with no
    /// successor in `u64` is rejected.
    pub fn after_preload(orders: &[DeliveryOrder]) -> Result<Self> {
        let Some(last) = orders.last() else {
            return Ok(Self::default());
        };
        match do_sequence_digits(&last.nomor_do) {
            Some(digits) => digits
                .parse::<u64>()
                .ok()
                .and_then(|seq| seq.checked_add(1))
                .map(Self::starting_at)
                .ok_or_else(|| Error::SequenceExhausted(last.nomor_do.clone())),
            None => {
                tracing::warn!(
                    nomor_do = %last.nomor_do,
                    "last preloaded order has no numeric sequence, counting preloads instead"
                );
                Ok(Self::starting_at(orders.len() as u64 + 1))
            }
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    /// DO number the next created order will get
    pub fn format(&self, year: i32) -> String {
        format_nomor_do(year, self.next)
    }

    /// Move past the current number; fails without changing the counter
    /// when the current number is the last one available
    pub fn advance(&mut self) -> Result<()> {
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| Error::SequenceExhausted(self.next.to_string()))?;
        Ok(())
    }
}

pub fn format_nomor_do(year: i32, sequence: u64) -> String {
    format!("DO{}-{:03}", year, sequence)
}
