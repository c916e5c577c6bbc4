//! Console command tests
//!
//! Tests for the line interface including:
//! - Command parsing
//! - Stock page flows (filters, edit, add)
//! - Delivery order flows (form, submit, numbering)

use bahan_ajar_console::{
    Command, EditChange, Outcome, Session, StockCommand, TrackingCommand,
};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use shared::{Catalog, FixedClock, SortKey};

const SEED: &str = include_str!("../data/bahan_ajar.json");

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 15)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap()
}

fn session() -> Session<FixedClock> {
    Session::with_clock(Catalog::from_json(SEED).unwrap(), FixedClock(now())).unwrap()
}

fn run(session: &mut Session<FixedClock>, line: &str) -> Vec<String> {
    match session.execute_line(line) {
        Outcome::Continue(lines) => lines,
        Outcome::Quit => panic!("unexpected quit on '{}'", line),
    }
}

/// Data rows of a stock listing (filter line, header and stats line removed)
fn data_rows(lines: &[String]) -> Vec<&String> {
    lines
        .iter()
        .skip(2)
        .take_while(|l| !l.starts_with("Total:"))
        .filter(|l| !l.contains("tidak ada data"))
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_top_level() {
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "stock".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::List)
        );
        assert_eq!(
            "do".parse::<Command>().unwrap(),
            Command::Tracking(TrackingCommand::List)
        );
        assert!("".parse::<Command>().is_err());
        assert!("gudang list".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_stock_filters() {
        assert_eq!(
            "stock region Jakarta".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::FilterRegion(Some("Jakarta".into())))
        );
        assert_eq!(
            "stock region all".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::FilterRegion(None))
        );
        assert_eq!(
            "stock category MK Wajib".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::FilterCategory(Some("MK Wajib".into())))
        );
        assert_eq!(
            "stock low on".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::FilterLow(true))
        );
        assert_eq!(
            "stock sort harga-desc".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::Sort(Some(SortKey::PriceDesc)))
        );
        assert_eq!(
            "stock sort none".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::Sort(None))
        );
        assert!("stock sort warna".parse::<Command>().is_err());
        assert!("stock low maybe".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_edit_and_add() {
        assert_eq!(
            "stock set qty 5".parse::<Command>().unwrap(),
            Command::Stock(StockCommand::Set(EditChange::Qty(5)))
        );
        assert!("stock edit".parse::<Command>().is_err());

        let cmd = r#"stock add {"kode":"ABCD1234","judul":"Statistika Dasar","kategori":"MK Wajib","upbjj":"Padang","lokasiRak":"R5-A1","harga":50000,"qty":10,"safety":5}"#;
        match cmd.parse::<Command>().unwrap() {
            Command::Stock(StockCommand::Add(item)) => {
                assert_eq!(item.kode, "ABCD1234");
                assert_eq!(item.qty, 10);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!("stock add {not json".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_tracking() {
        assert_eq!(
            "do nama Siti Aminah".parse::<Command>().unwrap(),
            Command::Tracking(TrackingCommand::Nama("Siti Aminah".into()))
        );
        assert_eq!(
            "do paket none".parse::<Command>().unwrap(),
            Command::Tracking(TrackingCommand::Paket(None))
        );
        assert_eq!(
            "do tanggal 2026-10-20".parse::<Command>().unwrap(),
            Command::Tracking(TrackingCommand::Tanggal(
                NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
            ))
        );
        assert!("do tanggal 20/10/2026".parse::<Command>().is_err());
    }
}

// ============================================================================
// Stock page
// ============================================================================

#[cfg(test)]
mod stock_tests {
    use super::*;

    #[test]
    fn test_initial_listing() {
        let mut s = session();
        let lines = run(&mut s, "stock list");
        assert_eq!(data_rows(&lines).len(), 5);
        assert_eq!(
            lines.last().unwrap(),
            "Total: 5 | Stok menipis: 2 | Stok kosong: 1"
        );
    }

    #[test]
    fn test_region_change_clears_category() {
        let mut s = session();
        run(&mut s, "stock category Praktikum");
        let lines = run(&mut s, "stock region Jakarta");

        assert_eq!(s.stock().filter().kategori, None);
        assert_eq!(data_rows(&lines).len(), 2);
        assert_eq!(
            run(&mut s, "stock categories"),
            vec!["MK Wajib".to_string()]
        );
    }

    #[test]
    fn test_low_stock_filter() {
        let mut s = session();
        let lines = run(&mut s, "stock low on");
        let rows = data_rows(&lines);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.starts_with("! ")));
    }

    #[test]
    fn test_sort_by_qty() {
        let mut s = session();
        let lines = run(&mut s, "stock sort qty");
        let rows = data_rows(&lines);
        assert!(rows[0].contains("PBLS4012"));
        assert!(rows[4].contains("EKMA4116"));

        // Ledger order untouched
        assert_eq!(s.stock().items()[0].kode, "EKMA4116");
    }

    #[test]
    fn test_edit_save_flow() {
        let mut s = session();
        run(&mut s, "stock edit EKMA4116");
        run(&mut s, "stock set qty 3");

        // Not committed yet
        assert_eq!(s.stock().item("EKMA4116").unwrap().qty, 28);

        let lines = run(&mut s, "stock save");
        assert!(lines.contains(&">> Data berhasil diupdate!".to_string()));
        assert_eq!(s.stock().item("EKMA4116").unwrap().qty, 3);
        assert!(s.stock().editing().is_none());
    }

    #[test]
    fn test_edit_cancel_discards() {
        let mut s = session();
        run(&mut s, "stock edit EKMA4115");
        run(&mut s, "stock set judul Akuntansi Lanjutan");
        run(&mut s, "stock cancel");
        assert_eq!(
            s.stock().item("EKMA4115").unwrap().judul,
            "Pengantar Akuntansi"
        );
    }

    #[test]
    fn test_set_without_edit_reports_error() {
        let mut s = session();
        let lines = run(&mut s, "stock set qty 3");
        assert_eq!(lines, vec!["error: No item is being edited".to_string()]);
    }

    #[test]
    fn test_edit_unknown_item() {
        let mut s = session();
        let lines = run(&mut s, "stock edit ZZZZ9999");
        assert!(lines[0].contains("ZZZZ9999"));
    }

    #[test]
    fn test_add_valid_item() {
        let mut s = session();
        let lines = run(
            &mut s,
            r#"stock add {"kode":"ABCD1234","judul":"Statistika Dasar","kategori":"MK Wajib","upbjj":"Padang","lokasiRak":"R5-A1","harga":50000,"qty":10,"safety":5}"#,
        );
        assert!(lines.contains(&">> Data berhasil ditambahkan!".to_string()));
        assert_eq!(s.stock().items().len(), 6);
        assert!(!s.stock().is_add_form_open());
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let mut s = session();
        let lines = run(
            &mut s,
            r#"stock add {"kode":"EKMA4116","judul":"Duplikat","kategori":"MK Wajib","upbjj":"Jakarta","lokasiRak":"R1","harga":1,"qty":1,"safety":1}"#,
        );
        assert_eq!(lines[0], "Validasi gagal:");
        assert!(lines.iter().any(|l| l.starts_with("  kode:")));
        assert_eq!(s.stock().items().len(), 5);
    }
}

// ============================================================================
// Delivery order page
// ============================================================================

#[cfg(test)]
mod tracking_tests {
    use super::*;

    fn fill(s: &mut Session<FixedClock>) {
        run(s, "do nim 012345678");
        run(s, "do nama Siti Aminah");
        run(s, "do ekspedisi EXP");
    }

    #[test]
    fn test_preloaded_order_listed() {
        let mut s = session();
        let lines = run(&mut s, "do list");
        assert!(lines[0].starts_with("DO2025-0001 [Dalam Perjalanan] Rina Wulandari"));
        assert!(lines[0].contains("PAKET IPS Dasar"));
        assert_eq!(lines.last().unwrap(), "Nomor DO berikutnya: DO2026-002");
    }

    #[test]
    fn test_select_package_shows_contents() {
        let mut s = session();
        let lines = run(&mut s, "do paket PAKET-UT-001");
        assert_eq!(lines[0], "Paket PAKET-UT-001 - PAKET IPS Dasar - Rp 120.000");
        assert_eq!(lines[1], "    EKMA4116 Pengantar Manajemen");
    }

    #[test]
    fn test_submit_creates_order() {
        let mut s = session();
        fill(&mut s);
        run(&mut s, "do paket PAKET-UT-002");
        let lines = run(&mut s, "do submit");

        assert!(lines[0].starts_with("DO2026-002 [Diproses] Siti Aminah (012345678)"));
        assert!(lines[0].contains("Rp 140.000"));
        assert!(lines.contains(&"    15/10/2026, 09.05.07  Pesanan dibuat dan sedang diproses".to_string()));
        assert!(lines.contains(&">> Delivery Order DO2026-002 berhasil dibuat!".to_string()));

        assert_eq!(s.tracking().orders().len(), 2);
        assert_eq!(s.tracking().next_nomor_do(), "DO2026-003");
        assert!(s.tracking().form().nim.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_number() {
        let mut s = session();
        run(&mut s, "do nim 12ab");
        let lines = run(&mut s, "do submit");

        assert_eq!(lines[0], "Validasi gagal:");
        assert!(lines.iter().any(|l| l.starts_with("  nim:")));
        assert!(lines.iter().any(|l| l.starts_with("  nama:")));
        assert_eq!(
            lines.last().unwrap(),
            ">> Mohon periksa kembali data yang diisi"
        );
        assert_eq!(s.tracking().next_nomor_do(), "DO2026-002");
    }

    #[test]
    fn test_quit() {
        let mut s = session();
        assert_eq!(s.execute_line("quit"), Outcome::Quit);
        assert_eq!(s.execute_line("exit"), Outcome::Quit);
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut s = session();
        let lines = run(&mut s, "gudang");
        assert_eq!(lines, vec!["error: unknown command 'gudang'".to_string()]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Any input line yields output or quit, never a panic
    #[test]
    fn prop_any_line_is_handled(line in "\\PC{0,60}") {
        let mut s = session();
        let _ = s.execute_line(&line);
    }

    /// Filter commands never change the ledger
    #[test]
    fn prop_filter_commands_do_not_mutate(
        region in prop::sample::select(vec!["Jakarta", "Surabaya", "Makassar", "all"]),
        low in any::<bool>(),
        sort in prop::sample::select(vec!["judul", "judul-desc", "qty", "qty-desc", "harga", "harga-desc", "none"]),
    ) {
        let mut s = session();
        let before = s.stock().items().to_vec();
        run(&mut s, &format!("stock region {}", region));
        run(&mut s, &format!("stock low {}", if low { "on" } else { "off" }));
        run(&mut s, &format!("stock sort {}", sort));
        prop_assert_eq!(s.stock().items(), before.as_slice());
    }
}
