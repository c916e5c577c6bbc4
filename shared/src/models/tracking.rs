//! Delivery order (DO) models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipment status of a delivery order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    #[default]
    Diproses,
    DalamPerjalanan,
    Terkirim,
    /// Status text not known to this system (kept verbatim)
    Other(String),
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryStatus::Diproses => "Diproses",
            DeliveryStatus::DalamPerjalanan => "Dalam Perjalanan",
            DeliveryStatus::Terkirim => "Terkirim",
            DeliveryStatus::Other(s) => s,
        }
    }

    /// Presentation class for the status badge. Unknown statuses get none.
    pub fn css_class(&self) -> &'static str {
        match self {
            DeliveryStatus::Diproses => "status-processing",
            DeliveryStatus::DalamPerjalanan => "status-shipping",
            DeliveryStatus::Terkirim => "status-delivered",
            DeliveryStatus::Other(_) => "",
        }
    }
}

impl From<String> for DeliveryStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Diproses" => DeliveryStatus::Diproses,
            "Dalam Perjalanan" => DeliveryStatus::DalamPerjalanan,
            "Terkirim" => DeliveryStatus::Terkirim,
            _ => DeliveryStatus::Other(s),
        }
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a delivery order's journey
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Locale-formatted timestamp (id-ID)
    pub waktu: String,
    pub keterangan: String,
}

/// A shipment record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOrder {
    /// Generated identifier, e.g. "DO2025-001"
    #[serde(rename = "nomorDO")]
    pub nomor_do: String,
    /// Student number
    pub nim: String,
    pub nama: String,
    /// Shipper code
    pub ekspedisi: String,
    /// Package code
    pub paket: String,
    pub tanggal_kirim: NaiveDate,
    /// Package price at creation time
    pub total: Decimal,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub perjalanan: Vec<Milestone>,
}

impl DeliveryOrder {
    /// Numeric sequence suffix of the DO number ("DO2024-007" -> 7)
    pub fn sequence(&self) -> Option<u64> {
        parse_do_sequence(&self.nomor_do)
    }
}

/// Leading digits of the part after the first `-` ("DO2024-012b" -> "012")
pub fn do_sequence_digits(nomor_do: &str) -> Option<&str> {
    let suffix = nomor_do.split('-').nth(1)?;
    let end = suffix
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(suffix.len());
    (end > 0).then(|| &suffix[..end])
}

/// Extract the sequence part of a DO number; `None` when it has no digits
/// or does not fit in `u64`
pub fn parse_do_sequence(nomor_do: &str) -> Option<u64> {
    do_sequence_digits(nomor_do)?.parse().ok()
}

/// Input buffer of the delivery order form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(default)]
    pub nim: String,
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub ekspedisi: String,
    /// Selected package code, empty when nothing is selected
    #[serde(default)]
    pub paket: String,
    pub tanggal_kirim: NaiveDate,
}

impl OrderForm {
    pub fn new(tanggal_kirim: NaiveDate) -> Self {
        Self {
            nim: String::new(),
            nama: String::new(),
            ekspedisi: String::new(),
            paket: String::new(),
            tanggal_kirim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_known_strings() {
        assert_eq!(DeliveryStatus::from("Diproses".to_string()), DeliveryStatus::Diproses);
        assert_eq!(
            DeliveryStatus::from("Dalam Perjalanan".to_string()),
            DeliveryStatus::DalamPerjalanan
        );
        assert_eq!(DeliveryStatus::from("Terkirim".to_string()), DeliveryStatus::Terkirim);
    }

    #[test]
    fn test_status_class_mapping() {
        assert_eq!(DeliveryStatus::Diproses.css_class(), "status-processing");
        assert_eq!(DeliveryStatus::DalamPerjalanan.css_class(), "status-shipping");
        assert_eq!(DeliveryStatus::Terkirim.css_class(), "status-delivered");
        assert_eq!(DeliveryStatus::Other("Dikembalikan".into()).css_class(), "");
    }

    #[test]
    fn test_unknown_status_roundtrips_verbatim() {
        let status: DeliveryStatus = serde_json::from_str("\"Dikembalikan\"").unwrap();
        assert_eq!(status, DeliveryStatus::Other("Dikembalikan".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Dikembalikan\"");
    }

    #[test]
    fn test_parse_do_sequence() {
        assert_eq!(parse_do_sequence("DO2024-007"), Some(7));
        assert_eq!(parse_do_sequence("DO2025-120"), Some(120));
        assert_eq!(parse_do_sequence("DO2025"), None);
        assert_eq!(parse_do_sequence("DO2025-abc"), None);
        assert_eq!(parse_do_sequence("DO2025-012b"), Some(12));
        assert_eq!(parse_do_sequence("DO2024-99999999999"), Some(99_999_999_999));
        assert_eq!(parse_do_sequence("DO2024-99999999999999999999"), None);
    }

    #[test]
    fn test_order_field_names() {
        let order = DeliveryOrder {
            nomor_do: "DO2025-001".into(),
            nim: "123456789".into(),
            nama: "Rina".into(),
            ekspedisi: "JNE".into(),
            paket: "PAKET-UT-001".into(),
            tanggal_kirim: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
            total: Decimal::from(120000),
            status: DeliveryStatus::Diproses,
            perjalanan: vec![],
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["nomorDO"], "DO2025-001");
        assert_eq!(value["tanggalKirim"], "2025-08-25");
        assert_eq!(value["status"], "Diproses");
    }
}
