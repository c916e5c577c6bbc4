//! Delivery order tracking view-model

use std::rc::Rc;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::models::{Catalog, DeliveryOrder, DeliveryStatus, Milestone, OrderForm, Package};
use crate::notify::{NotificationSink, TracingSink, ViewEvent};
use crate::types::format_waktu;
use crate::validation::{is_numeric, validate_nama, validate_nim, Field, FieldErrors};

use super::sequence::DoSequence;

pub const MSG_CHECK_INPUT: &str = "Mohon periksa kembali data yang diisi";
pub const MILESTONE_CREATED: &str = "Pesanan dibuat dan sedang diproses";

pub struct TrackingView<S: NotificationSink = TracingSink, C: Clock = SystemClock> {
    catalog: Rc<Catalog>,
    orders: Vec<DeliveryOrder>,
    sequence: DoSequence,
    form: OrderForm,
    validation_errors: FieldErrors,
    sink: S,
    clock: C,
}

impl<S: NotificationSink, C: Clock> TrackingView<S, C> {
    /// Load preloaded orders and default the ship date to today.
    ///
    /// Fails when the last preloaded DO number leaves no number to continue with.
    pub fn new(catalog: Rc<Catalog>, sink: S, clock: C) -> Result<Self> {
        let orders = catalog.tracking.clone();
        let sequence = DoSequence::after_preload(&orders)?;
        tracing::debug!(preloaded = orders.len(), next = sequence.peek(), "tracking view mounted");
        Ok(Self {
            form: OrderForm::new(clock.today()),
            catalog,
            orders,
            sequence,
            validation_errors: FieldErrors::new(),
            sink,
            clock,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders(&self) -> &[DeliveryOrder] {
        &self.orders
    }

    pub fn order(&self, nomor_do: &str) -> Option<&DeliveryOrder> {
        self.orders.iter().find(|o| o.nomor_do == nomor_do)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Number the next created order will carry
    pub fn next_nomor_do(&self) -> String {
        self.sequence.format(self.clock.year())
    }

    pub fn sequence(&self) -> DoSequence {
        self.sequence
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Direct access for fields without observers (nama, ekspedisi, date)
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    pub fn set_nim(&mut self, nim: impl Into<String>) {
        self.form.nim = nim.into();
        if !self.form.nim.is_empty() && !is_numeric(&self.form.nim) {
            self.sink.notify(&ViewEvent::NimNotNumeric {
                nim: self.form.nim.clone(),
            });
        }
    }

    /// Select a package by code (`None` or empty clears the selection)
    pub fn select_package(&mut self, kode: Option<String>) {
        let kode = kode.unwrap_or_default();
        if kode == self.form.paket {
            return;
        }
        self.form.paket = kode;
        if self.form.paket.is_empty() {
            return;
        }

        let event = self.selected_package().map(|p| ViewEvent::PackageSelected {
            kode: p.kode.clone(),
            nama: p.nama.clone(),
            harga: p.harga,
        });
        match event {
            Some(event) => self.sink.notify(&event),
            None => tracing::warn!(paket = %self.form.paket, "selected package is not in the catalog"),
        }
    }

    /// Catalog entry for the selected package, if any
    pub fn selected_package(&self) -> Option<&Package> {
        if self.form.paket.is_empty() {
            return None;
        }
        self.catalog.package(&self.form.paket)
    }

    pub fn validation_errors(&self) -> &FieldErrors {
        &self.validation_errors
    }

    pub fn validate_form(&mut self) -> bool {
        self.validation_errors.clear();
        self.validation_errors
            .check(Field::Nim, validate_nim(&self.form.nim));
        self.validation_errors
            .check(Field::Nama, validate_nama(&self.form.nama));
        self.validation_errors.is_empty()
    }

    /// Validate the form and record a new delivery order
    pub fn submit(&mut self) -> Result<&DeliveryOrder> {
        if !self.validate_form() {
            self.sink.alert(MSG_CHECK_INPUT);
            return Err(Error::Validation(self.validation_errors.clone()));
        }

        let total = self.selected_package().map_or(Decimal::ZERO, |p| p.harga);
        let now = self.clock.now();
        let order = DeliveryOrder {
            nomor_do: self.sequence.format(now.year()),
            nim: self.form.nim.clone(),
            nama: self.form.nama.clone(),
            ekspedisi: self.form.ekspedisi.clone(),
            paket: self.form.paket.clone(),
            tanggal_kirim: self.form.tanggal_kirim,
            total,
            status: DeliveryStatus::Diproses,
            perjalanan: vec![Milestone {
                waktu: format_waktu(now),
                keterangan: MILESTONE_CREATED.to_string(),
            }],
        };

        if let Err(err) = self.sequence.advance() {
            tracing::error!(nomor_do = %order.nomor_do, error = %err, "delivery order not created");
            return Err(err);
        }

        tracing::info!(nomor_do = %order.nomor_do, paket = %order.paket, total = %order.total, "delivery order created");
        self.sink
            .alert(&format!("Delivery Order {} berhasil dibuat!", order.nomor_do));
        self.orders.push(order);
        self.reset_form();

        let last = self.orders.len() - 1;
        Ok(&self.orders[last])
    }

    /// Clear the form; the ship date goes back to today
    pub fn reset_form(&mut self) {
        self.form = OrderForm::new(self.clock.today());
        self.validation_errors.clear();
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn course_title<'a>(&'a self, kode: &'a str) -> &'a str {
        self.catalog.course_title(kode)
    }

    pub fn shipper_name<'a>(&'a self, kode: &'a str) -> &'a str {
        self.catalog.shipper_name(kode)
    }
}
