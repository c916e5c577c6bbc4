//! Plain-text rendering of the two pages

use shared::{
    format_number, format_price, Catalog, DeliveryOrder, FieldErrors, OrderForm, Package,
    StockFilter, StockItem, StockLevel, StockStats,
};

pub const HELP: &str = "\
stock list | stats | categories | reset
stock region <name>|all      stock category <name>|all
stock low on|off             stock empty on|off
stock sort judul|judul-desc|qty|qty-desc|harga|harga-desc|none
stock edit <kode>            stock set <field> <value>
stock save | cancel          stock add <item json>
do list | next | submit | reset
do nim <nim>                 do nama <nama>
do ekspedisi <kode>          do paket <kode>|none
do tanggal YYYY-MM-DD
help | quit";

fn level_marker(item: &StockItem) -> &'static str {
    match item.level() {
        StockLevel::Empty => "!!",
        StockLevel::Low => "! ",
        StockLevel::Sufficient => "  ",
    }
}

pub fn stock_table(rows: &[&StockItem]) -> Vec<String> {
    let mut lines = vec![format!(
        "   {:<9} {:<36} {:<12} {:<10} {:<8} {:>10} {:>7} {:>7}",
        "Kode", "Judul", "Kategori", "UT-Daerah", "Rak", "Harga", "Qty", "Safety"
    )];
    lines.extend(rows.iter().map(|item| {
        format!(
            "{} {:<9} {:<36} {:<12} {:<10} {:<8} {:>10} {:>7} {:>7}",
            level_marker(item),
            item.kode,
            item.judul,
            item.kategori,
            item.upbjj,
            item.lokasi_rak,
            format_price(item.harga),
            format_number(i64::from(item.qty)),
            format_number(i64::from(item.safety)),
        )
    }));
    if rows.is_empty() {
        lines.push("   (tidak ada data)".to_string());
    }
    lines
}

pub fn stats_line(stats: &StockStats) -> String {
    format!(
        "Total: {} | Stok menipis: {} | Stok kosong: {}",
        stats.total, stats.low_stock, stats.empty_stock
    )
}

pub fn filter_line(filter: &StockFilter) -> String {
    format!(
        "Filter: UT-Daerah={} Kategori={} Menipis={} Kosong={} Urut={}",
        filter.upbjj.as_deref().unwrap_or("semua"),
        filter.kategori.as_deref().unwrap_or("semua"),
        filter.low_stock,
        filter.empty_stock,
        filter.sort.map_or("-", |s| s.as_str()),
    )
}

pub fn item_detail(item: &StockItem) -> Vec<String> {
    vec![
        format!("Kode      : {}", item.kode),
        format!("Judul     : {}", item.judul),
        format!("Kategori  : {}", item.kategori),
        format!("UT-Daerah : {}", item.upbjj),
        format!("Rak       : {}", item.lokasi_rak),
        format!("Harga     : Rp {}", format_price(item.harga)),
        format!("Qty       : {} (safety {})", item.qty, item.safety),
        format!("Catatan   : {}", item.catatan_html),
    ]
}

pub fn field_errors(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect()
}

pub fn order_lines(order: &DeliveryOrder, catalog: &Catalog) -> Vec<String> {
    let paket = catalog
        .package(&order.paket)
        .map_or(order.paket.as_str(), |p| p.nama.as_str());
    let mut lines = vec![format!(
        "{} [{}] {} ({}) - {} via {} - kirim {} - Rp {}",
        order.nomor_do,
        order.status.as_str(),
        order.nama,
        order.nim,
        paket,
        catalog.shipper_name(&order.ekspedisi),
        order.tanggal_kirim.format("%d/%m/%Y"),
        format_price(order.total),
    )];
    lines.extend(
        order
            .perjalanan
            .iter()
            .map(|m| format!("    {}  {}", m.waktu, m.keterangan)),
    );
    lines
}

pub fn package_lines(package: &Package, catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![format!(
        "Paket {} - {} - Rp {}",
        package.kode,
        package.nama,
        format_price(package.harga)
    )];
    lines.extend(
        package
            .isi
            .iter()
            .map(|kode| format!("    {} {}", kode, catalog.course_title(kode))),
    );
    lines
}

pub fn form_line(form: &OrderForm) -> String {
    format!(
        "Form: NIM={} Nama={} Ekspedisi={} Paket={} Tanggal={}",
        form.nim,
        form.nama,
        form.ekspedisi,
        form.paket,
        form.tanggal_kirim.format("%Y-%m-%d"),
    )
}
