//! A console session holding both pages over one catalog

use std::rc::Rc;

use shared::{Catalog, Clock, StockView, SystemClock, TrackingView};

use crate::command::{Command, StockCommand, TrackingCommand};
use crate::error::{AppError, AppResult};
use crate::render;
use crate::sink::ConsoleSink;

/// Result of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Vec<String>),
    Quit,
}

impl Outcome {
    /// Output lines; empty for `Quit`
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Outcome::Continue(lines) => lines,
            Outcome::Quit => Vec::new(),
        }
    }
}

pub struct Session<C: Clock = SystemClock> {
    stock: StockView<ConsoleSink>,
    tracking: TrackingView<ConsoleSink, C>,
}

impl Session<SystemClock> {
    pub fn new(catalog: Catalog) -> AppResult<Self> {
        Self::with_clock(catalog, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(catalog: Catalog, clock: C) -> AppResult<Self> {
        let catalog = Rc::new(catalog);
        Ok(Self {
            stock: StockView::new(Rc::clone(&catalog), ConsoleSink::new()),
            tracking: TrackingView::new(catalog, ConsoleSink::new(), clock)?,
        })
    }

    pub fn stock(&self) -> &StockView<ConsoleSink> {
        &self.stock
    }

    pub fn tracking(&self) -> &TrackingView<ConsoleSink, C> {
        &self.tracking
    }

    /// Parse and run one line; failures become output, never an exit
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let result = line.parse::<Command>().and_then(|command| self.execute(command));
        let mut lines = match result {
            Ok(Outcome::Quit) => return Outcome::Quit,
            Ok(Outcome::Continue(lines)) => lines,
            Err(err) => error_lines(&err),
        };

        lines.extend(self.stock.sink_mut().drain().into_iter().map(|m| format!(">> {}", m)));
        lines.extend(self.tracking.sink_mut().drain().into_iter().map(|m| format!(">> {}", m)));
        Outcome::Continue(lines)
    }

    pub fn execute(&mut self, command: Command) -> AppResult<Outcome> {
        let lines = match command {
            Command::Help => render::HELP.lines().map(str::to_string).collect(),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Stock(command) => self.execute_stock(command)?,
            Command::Tracking(command) => self.execute_tracking(command)?,
        };
        Ok(Outcome::Continue(lines))
    }

    fn stock_listing(&self) -> Vec<String> {
        let mut lines = vec![render::filter_line(self.stock.filter())];
        lines.extend(render::stock_table(&self.stock.filtered_items()));
        lines.push(render::stats_line(&self.stock.stats()));
        lines
    }

    fn execute_stock(&mut self, command: StockCommand) -> AppResult<Vec<String>> {
        let lines = match command {
            StockCommand::List => self.stock_listing(),
            StockCommand::Stats => vec![render::stats_line(&self.stock.stats())],
            StockCommand::Categories => self.stock.available_categories(),
            StockCommand::FilterRegion(upbjj) => {
                self.stock.set_region_filter(upbjj);
                self.stock_listing()
            }
            StockCommand::FilterCategory(kategori) => {
                self.stock.set_category_filter(kategori);
                self.stock_listing()
            }
            StockCommand::FilterLow(enabled) => {
                self.stock.set_low_stock_filter(enabled);
                self.stock_listing()
            }
            StockCommand::FilterEmpty(enabled) => {
                self.stock.set_empty_stock_filter(enabled);
                self.stock_listing()
            }
            StockCommand::Sort(key) => {
                self.stock.set_sort(key);
                self.stock_listing()
            }
            StockCommand::Reset => {
                self.stock.reset_filters();
                self.stock_listing()
            }
            StockCommand::Edit(kode) => render::item_detail(self.stock.begin_edit(&kode)?),
            StockCommand::Set(change) => {
                let buffer = self
                    .stock
                    .editing_mut()
                    .ok_or(shared::Error::NotEditing)?;
                change.apply(buffer);
                render::item_detail(buffer)
            }
            StockCommand::Save => {
                self.stock.save_edit()?;
                self.stock_listing()
            }
            StockCommand::Cancel => {
                self.stock.cancel_edit();
                self.stock.cancel_add();
                Vec::new()
            }
            StockCommand::Add(item) => {
                self.stock.open_add_form();
                *self.stock.new_item_mut() = *item;
                let added = self.stock.submit_new_item()?;
                render::item_detail(added)
            }
        };
        Ok(lines)
    }

    fn execute_tracking(&mut self, command: TrackingCommand) -> AppResult<Vec<String>> {
        let lines = match command {
            TrackingCommand::List => {
                let catalog = self.tracking.catalog();
                let mut lines: Vec<String> = self
                    .tracking
                    .orders()
                    .iter()
                    .flat_map(|order| render::order_lines(order, catalog))
                    .collect();
                lines.push(format!("Nomor DO berikutnya: {}", self.tracking.next_nomor_do()));
                lines
            }
            TrackingCommand::Next => vec![self.tracking.next_nomor_do()],
            TrackingCommand::Nim(nim) => {
                self.tracking.set_nim(nim);
                vec![render::form_line(self.tracking.form())]
            }
            TrackingCommand::Nama(nama) => {
                self.tracking.form_mut().nama = nama;
                vec![render::form_line(self.tracking.form())]
            }
            TrackingCommand::Ekspedisi(ekspedisi) => {
                self.tracking.form_mut().ekspedisi = ekspedisi;
                vec![render::form_line(self.tracking.form())]
            }
            TrackingCommand::Paket(kode) => {
                self.tracking.select_package(kode);
                match self.tracking.selected_package() {
                    Some(package) => render::package_lines(package, self.tracking.catalog()),
                    None => vec![render::form_line(self.tracking.form())],
                }
            }
            TrackingCommand::Tanggal(date) => {
                self.tracking.form_mut().tanggal_kirim = date;
                vec![render::form_line(self.tracking.form())]
            }
            TrackingCommand::Submit => {
                let order = self.tracking.submit()?.clone();
                render::order_lines(&order, self.tracking.catalog())
            }
            TrackingCommand::Reset => {
                self.tracking.reset_form();
                vec![render::form_line(self.tracking.form())]
            }
        };
        Ok(lines)
    }
}

fn error_lines(err: &AppError) -> Vec<String> {
    match err {
        AppError::View(view) => match view.field_errors() {
            Some(errors) => {
                let mut lines = vec!["Validasi gagal:".to_string()];
                lines.extend(render::field_errors(errors));
                lines
            }
            None => vec![format!("error: {}", view)],
        },
        other => vec![format!("error: {}", other)],
    }
}
