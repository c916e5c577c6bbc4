//! Line commands understood by the console
//!
//! ```text
//! stock list | stats | categories | reset | save | cancel
//! stock region <name>|all        stock category <name>|all
//! stock low on|off               stock empty on|off
//! stock sort <key>|none          stock edit <kode>
//! stock set <field> <value>      stock add <item json>
//! do list | next | submit | reset
//! do nim <nim>   do nama <nama>  do ekspedisi <kode>
//! do paket <kode>|none           do tanggal YYYY-MM-DD
//! help | quit
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{SortKey, StockItem};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stock(StockCommand),
    Tracking(TrackingCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StockCommand {
    List,
    Stats,
    Categories,
    FilterRegion(Option<String>),
    FilterCategory(Option<String>),
    FilterLow(bool),
    FilterEmpty(bool),
    Sort(Option<SortKey>),
    Reset,
    Edit(String),
    Set(EditChange),
    Save,
    Cancel,
    Add(Box<StockItem>),
}

/// One field change applied to the edit buffer
#[derive(Debug, Clone, PartialEq)]
pub enum EditChange {
    Judul(String),
    Kategori(String),
    Upbjj(String),
    LokasiRak(String),
    Harga(Decimal),
    Qty(u32),
    Safety(u32),
    Catatan(String),
}

impl EditChange {
    pub fn apply(self, item: &mut StockItem) {
        match self {
            EditChange::Judul(v) => item.judul = v,
            EditChange::Kategori(v) => item.kategori = v,
            EditChange::Upbjj(v) => item.upbjj = v,
            EditChange::LokasiRak(v) => item.lokasi_rak = v,
            EditChange::Harga(v) => item.harga = v,
            EditChange::Qty(v) => item.qty = v,
            EditChange::Safety(v) => item.safety = v,
            EditChange::Catatan(v) => item.catatan_html = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackingCommand {
    List,
    Next,
    Nim(String),
    Nama(String),
    Ekspedisi(String),
    Paket(Option<String>),
    Tanggal(NaiveDate),
    Submit,
    Reset,
}

/// Split off the first word; the remainder is trimmed
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, AppError> {
    if value.is_empty() {
        Err(AppError::command(format!("missing {}", what)))
    } else {
        Ok(value)
    }
}

/// `all`, `none` and the empty string clear an optional selection
fn optional(value: &str) -> Option<String> {
    match value {
        "" | "all" | "none" => None,
        v => Some(v.to_string()),
    }
}

fn switch(value: &str) -> Result<bool, AppError> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(AppError::command(format!("expected on/off, got '{}'", other))),
    }
}

fn number<T: FromStr>(value: &str, what: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::command(format!("invalid {}: '{}'", what, value)))
}

impl FromStr for EditChange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = split_word(s);
        let change = match field {
            "judul" => EditChange::Judul(value.to_string()),
            "kategori" => EditChange::Kategori(value.to_string()),
            "upbjj" => EditChange::Upbjj(value.to_string()),
            "lokasi" | "lokasiRak" => EditChange::LokasiRak(value.to_string()),
            "harga" => EditChange::Harga(number(required(value, "harga")?, "harga")?),
            "qty" => EditChange::Qty(number(required(value, "qty")?, "qty")?),
            "safety" => EditChange::Safety(number(required(value, "safety")?, "safety")?),
            "catatan" | "catatanHTML" => EditChange::Catatan(value.to_string()),
            "" => return Err(AppError::command("missing field name")),
            other => return Err(AppError::command(format!("unknown field '{}'", other))),
        };
        Ok(change)
    }
}

impl FromStr for StockCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(s);
        let command = match verb {
            "list" | "" => StockCommand::List,
            "stats" => StockCommand::Stats,
            "categories" => StockCommand::Categories,
            "region" => StockCommand::FilterRegion(optional(rest)),
            "category" => StockCommand::FilterCategory(optional(rest)),
            "low" => StockCommand::FilterLow(switch(rest)?),
            "empty" => StockCommand::FilterEmpty(switch(rest)?),
            "sort" => StockCommand::Sort(match optional(rest) {
                Some(key) => Some(key.parse()?),
                None => None,
            }),
            "reset" => StockCommand::Reset,
            "edit" => StockCommand::Edit(required(rest, "kode")?.to_string()),
            "set" => StockCommand::Set(rest.parse()?),
            "save" => StockCommand::Save,
            "cancel" => StockCommand::Cancel,
            "add" => {
                let item: StockItem = serde_json::from_str(required(rest, "item JSON")?)
                    .map_err(|e| AppError::command(format!("invalid item JSON: {}", e)))?;
                StockCommand::Add(Box::new(item))
            }
            other => return Err(AppError::command(format!("unknown stock command '{}'", other))),
        };
        Ok(command)
    }
}

impl FromStr for TrackingCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(s);
        let command = match verb {
            "list" | "" => TrackingCommand::List,
            "next" => TrackingCommand::Next,
            "nim" => TrackingCommand::Nim(rest.to_string()),
            "nama" => TrackingCommand::Nama(rest.to_string()),
            "ekspedisi" => TrackingCommand::Ekspedisi(rest.to_string()),
            "paket" => TrackingCommand::Paket(optional(rest)),
            "tanggal" => TrackingCommand::Tanggal(
                NaiveDate::parse_from_str(required(rest, "tanggal")?, "%Y-%m-%d")
                    .map_err(|e| AppError::command(format!("invalid tanggal: {}", e)))?,
            ),
            "submit" => TrackingCommand::Submit,
            "reset" => TrackingCommand::Reset,
            other => return Err(AppError::command(format!("unknown do command '{}'", other))),
        };
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, rest) = split_word(s);
        match head {
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "stock" | "stok" => rest.parse().map(Command::Stock),
            "do" | "tracking" => rest.parse().map(Command::Tracking),
            "" => Err(AppError::command("empty command")),
            other => Err(AppError::command(format!("unknown command '{}'", other))),
        }
    }
}
