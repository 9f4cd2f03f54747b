//! Shared test fixtures for the sales insights integration tests.
//!
//! Provides `sample_dataset()` with a small hand-written record set spread
//! over a few months, and `record()` for building one-off records.

#![allow(dead_code)]

use std::io::Write;

use sales_insights::{Dataset, SaleRecord};

/// Build a record with the fields the queries look at.
pub fn record(id: i64, title: &str, price: f64, category: Option<&str>, date: &str) -> SaleRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "price": price,
        "category": category,
        "sold": id % 2 == 0,
        "dateOfSale": date
    }))
    .unwrap()
}

/// The three-record example: two May sales and one June sale.
pub fn may_june_records() -> Vec<SaleRecord> {
    vec![
        record(1, "Canvas Backpack", 50.0, Some("A"), "2023-05-01"),
        record(2, "Rain Jacket", 150.0, Some("B"), "2023-05-15"),
        record(3, "Gold Ring", 99.0, Some("A"), "2023-06-01"),
    ]
}

/// A richer set covering several months, categories and price ranges.
pub fn sample_records() -> Vec<SaleRecord> {
    vec![
        record(1, "Fjallraven Backpack", 109.95, Some("men's clothing"), "2021-11-27T20:29:54+05:30"),
        record(2, "Slim Fit T-Shirts", 22.3, Some("men's clothing"), "2021-10-27T20:29:54+05:30"),
        record(3, "Cotton Jacket", 55.99, Some("men's clothing"), "2022-03-27T20:29:54+05:30"),
        record(4, "Silver Dragon Bracelet", 695.0, Some("jewelery"), "2021-03-27T20:29:54+05:30"),
        record(5, "Solid Gold Petite Micropave", 168.0, Some("jewelery"), "2022-03-27T20:29:54+05:30"),
        record(6, "WD 2TB External Hard Drive", 64.0, Some("electronics"), "2021-09-27T20:29:54+05:30"),
        record(7, "Samsung 49-Inch Monitor", 999.99, Some("electronics"), "2022-03-27T20:29:54+05:30"),
        record(8, "Snowboard Jacket", 56.99, Some("women's clothing"), "2022-03-27T20:29:54+05:30"),
        record(9, "Rain Jacket", 39.99, None, "2022-03-27T20:29:54+05:30"),
        record(10, "Short Sleeve Boat Neck", 9.85, Some(""), "2022-07-27T20:29:54+05:30"),
    ]
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(sample_records())
}

/// Write `records` as a JSON snapshot into a fresh temp directory.
///
/// The caller must keep the returned `TempDir` alive for the duration of the
/// test.
pub fn snapshot_dir_with(records: &[SaleRecord]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("product_transaction.json")).unwrap();
    file.write_all(&serde_json::to_vec(records).unwrap()).unwrap();
    file.flush().unwrap();
    dir
}
