//! Form validation for the stock and delivery order views
//!
//! Validators return `Err(message)` with the user-facing (Indonesian) message,
//! the same way for every rule. Forms collect them into [`FieldErrors`].

use serde::{Serialize, Serializer};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Kode,
    Judul,
    Nim,
    Nama,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Kode => "kode",
            Field::Judul => "judul",
            Field::Nim => "nim",
            Field::Nama => "nama",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field, in the order the rules ran.
///
/// A field may carry more than one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    /// Record the outcome of a validator against a field
    pub fn check(&mut self, field: Field, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// First message recorded for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages(field).next()
    }

    pub fn messages(&self, field: Field) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Serialized as `{ "kode": ["..."], "judul": ["..."] }`
impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut fields: Vec<Field> = Vec::new();
        for (field, _) in &self.entries {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }

        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            let messages: Vec<&str> = self.messages(field).collect();
            map.serialize_entry(field.as_str(), &messages)?;
        }
        map.end()
    }
}

// ============================================================================
// Stock item rules
// ============================================================================

pub const MIN_JUDUL_LEN: usize = 5;
pub const MIN_NAMA_LEN: usize = 3;
pub const NIM_LEN: usize = 9;

/// Course code: 4 uppercase letters followed by 4 digits (e.g. EKMA4116)
pub fn validate_kode_format(kode: &str) -> Result<(), &'static str> {
    let bytes = kode.as_bytes();
    let well_formed = bytes.len() == 8
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4..].iter().all(u8::is_ascii_digit);

    if well_formed {
        Ok(())
    } else {
        Err("Format kode harus 4 huruf kapital + 4 angka (contoh: EKMA4116)")
    }
}

/// Course code must not already be in the ledger
pub fn validate_kode_unique<'a, I>(kode: &str, existing: I) -> Result<(), &'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    if existing.into_iter().any(|k| k == kode) {
        Err("Kode mata kuliah sudah ada")
    } else {
        Ok(())
    }
}

pub fn validate_judul(judul: &str) -> Result<(), &'static str> {
    if judul.chars().count() < MIN_JUDUL_LEN {
        return Err("Nama mata kuliah minimal 5 karakter");
    }
    Ok(())
}

// ============================================================================
// Delivery order rules
// ============================================================================

/// Student number: exactly 9 digits
pub fn validate_nim(nim: &str) -> Result<(), &'static str> {
    if nim.len() == NIM_LEN && is_numeric(nim) {
        Ok(())
    } else {
        Err("NIM harus 9 digit angka")
    }
}

pub fn validate_nama(nama: &str) -> Result<(), &'static str> {
    if nama.chars().count() < MIN_NAMA_LEN {
        return Err("Nama minimal 3 karakter");
    }
    Ok(())
}

/// Non-empty and ASCII digits only
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kode_format_valid() {
        assert!(validate_kode_format("EKMA4116").is_ok());
        assert!(validate_kode_format("BIOL4110").is_ok());
    }

    #[test]
    fn test_kode_format_invalid() {
        assert!(validate_kode_format("abcd1234").is_err()); // Lowercase
        assert!(validate_kode_format("EKMA411").is_err()); // Too short
        assert!(validate_kode_format("EKMA41166").is_err()); // Too long
        assert!(validate_kode_format("EKM44116").is_err());
        assert!(validate_kode_format("EKMAA116").is_err());
        assert!(validate_kode_format("").is_err());
        assert!(validate_kode_format("ÉKMA4116").is_err());
    }

    #[test]
    fn test_kode_unique() {
        let existing = ["EKMA4116", "EKMA4115"];
        assert!(validate_kode_unique("EKMA4116", existing).is_err());
        assert!(validate_kode_unique("BIOL4110", existing).is_ok());
    }

    #[test]
    fn test_judul_length() {
        assert!(validate_judul("Intro").is_ok());
        assert!(validate_judul("Intr").is_err());
        assert!(validate_judul("").is_err());
    }

    #[test]
    fn test_nim() {
        assert!(validate_nim("123456789").is_ok());
        assert!(validate_nim("12345678").is_err());
        assert!(validate_nim("1234567890").is_err());
        assert!(validate_nim("12345678a").is_err());
        assert!(validate_nim("").is_err());
    }

    #[test]
    fn test_nama_length() {
        assert!(validate_nama("Ani").is_ok());
        assert!(validate_nama("Al").is_err());
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_field_errors_keep_all_messages() {
        let mut errors = FieldErrors::new();
        errors.check(Field::Kode, Err("first"));
        errors.check(Field::Judul, Ok(()));
        errors.check(Field::Kode, Err("second"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Kode), Some("first"));
        assert_eq!(errors.messages(Field::Kode).collect::<Vec<_>>(), vec!["first", "second"]);
        assert!(!errors.contains(Field::Judul));
        assert_eq!(errors.to_string(), "kode: first; kode: second");
    }

    #[test]
    fn test_field_errors_serialize_grouped() {
        let mut errors = FieldErrors::new();
        errors.push(Field::Nim, "NIM harus 9 digit angka");
        errors.push(Field::Nama, "Nama minimal 3 karakter");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["nim"][0], "NIM harus 9 digit angka");
        assert_eq!(json["nama"][0], "Nama minimal 3 karakter");
    }
}
