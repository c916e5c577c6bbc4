//! Read-only reference data supplied at startup

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{DeliveryOrder, StockItem};
use crate::error::Result;

/// Shipping company (ekspedisi)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shipper {
    pub kode: String,
    pub nama: String,
}

/// A bundle of course modules sold as one package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub kode: String,
    pub nama: String,
    /// Course codes contained in the package
    #[serde(default)]
    pub isi: Vec<String>,
    pub harga: Decimal,
}

/// The seed dataset both views are constructed from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Catalog {
    #[serde(rename = "upbjjList", default)]
    pub regions: Vec<String>,
    #[serde(rename = "kategoriList", default)]
    pub categories: Vec<String>,
    #[serde(rename = "pengirimanList", default)]
    pub shippers: Vec<Shipper>,
    #[serde(rename = "paket", default)]
    pub packages: Vec<Package>,
    /// Initial stock ledger contents
    #[serde(rename = "stok", default)]
    pub stock: Vec<StockItem>,
    /// Preloaded delivery orders in document order
    #[serde(rename = "tracking", default, deserialize_with = "deserialize_tracking")]
    pub tracking: Vec<DeliveryOrder>,
}

impl Catalog {
    /// Parse the seed dataset from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn package(&self, kode: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.kode == kode)
    }

    pub fn shipper(&self, kode: &str) -> Option<&Shipper> {
        self.shippers.iter().find(|s| s.kode == kode)
    }

    pub fn stock_item(&self, kode: &str) -> Option<&StockItem> {
        self.stock.iter().find(|s| s.kode == kode)
    }

    /// Course title for a code, or the code itself when unknown
    pub fn course_title<'a>(&'a self, kode: &'a str) -> &'a str {
        self.stock_item(kode).map_or(kode, |s| s.judul.as_str())
    }

    /// Shipper name for a code, or the code itself when unknown
    pub fn shipper_name<'a>(&'a self, kode: &'a str) -> &'a str {
        self.shipper(kode).map_or(kode, |s| s.nama.as_str())
    }
}

/// `tracking` is an object keyed by DO number; the key becomes `nomorDO`
/// and entry order is kept as written.
fn deserialize_tracking<'de, D>(deserializer: D) -> std::result::Result<Vec<DeliveryOrder>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TrackingVisitor;

    impl<'de> Visitor<'de> for TrackingVisitor {
        type Value = Vec<DeliveryOrder>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of delivery orders keyed by DO number")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut orders = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((nomor_do, mut record)) =
                map.next_entry::<String, serde_json::Value>()?
            {
                let fields = record
                    .as_object_mut()
                    .ok_or_else(|| de::Error::custom(format!("tracking entry {nomor_do} is not an object")))?;
                fields.insert("nomorDO".to_string(), serde_json::Value::String(nomor_do));
                let order = serde_json::from_value(record).map_err(de::Error::custom)?;
                orders.push(order);
            }
            Ok(orders)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(TrackingVisitor)
}
