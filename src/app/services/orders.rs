use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::Regex;
use tracing::{error, info};

use crate::app::infrastructure::error::Result;

pub const CSV_HEADER: [&str; 4] = ["date", "orderId", "status", "customer"];

static ORDER_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"[0-9]{2,}") {
    Ok(re) => Some(re),
    Err(e) => {
        error!("invalid order number pattern: {e}");
        None
    }
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub date: String,
    pub order_id: u32,
    pub status: String,
    pub customer: String,
}

impl OrderSummary {
    fn new(date: &str, order_id: u32, status: &str, customer: &str) -> Self {
        Self {
            date: date.to_string(),
            order_id,
            status: status.to_string(),
            customer: customer.to_string(),
        }
    }

    /// Result line shown on the orders page.
    pub fn label(&self) -> String {
        format!("Order {} - {}", self.order_id, self.customer)
    }
}

/// Placeholder data until the shop backend is wired in.
pub fn sample_orders() -> Vec<OrderSummary> {
    vec![
        OrderSummary::new("2024-01-15", 1001, "completed", "Customer 1"),
        OrderSummary::new("2024-01-16", 1002, "pending", "Customer 2"),
        OrderSummary::new("2024-01-17", 1003, "completed", "Customer 3"),
    ]
}

/// Suggested file name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("orders-{}.csv", date.format("%Y-%m-%d"))
}

/// Write `orders` as CSV to any writer.
pub fn write_orders_csv<W: Write>(writer: W, orders: &[OrderSummary]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for order in orders {
        let order_id = order.order_id.to_string();
        csv.write_record([
            order.date.as_str(),
            order_id.as_str(),
            order.status.as_str(),
            order.customer.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Create (or overwrite) `path` with the orders CSV.
pub fn export_orders(path: &Path, orders: &[OrderSummary]) -> Result<()> {
    let file = File::create(path)?;
    write_orders_csv(file, orders)?;
    info!(path = %path.display(), rows = orders.len(), "orders exported");
    Ok(())
}

/// Distinct runs of two or more digits, in first-seen order.
pub fn parse_order_numbers(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let Some(pattern) = ORDER_NUMBER.as_ref() else {
        return seen;
    };
    for m in pattern.find_iter(text) {
        let number = m.as_str();
        if !seen.iter().any(|s: &String| s == number) {
            seen.push(number.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_content() {
        let mut out = Vec::new();
        write_orders_csv(&mut out, &sample_orders()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "date,orderId,status,customer\n\
             2024-01-15,1001,completed,Customer 1\n\
             2024-01-16,1002,pending,Customer 2\n\
             2024-01-17,1003,completed,Customer 3\n"
        );
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        export_orders(&path, &sample_orders()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("date,orderId,status,customer\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("orders.csv");
        assert!(export_orders(&path, &sample_orders()).is_err());
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "orders-2024-03-09.csv");
    }

    #[test]
    fn test_parse_order_numbers() {
        let parsed = parse_order_numbers("1001, 1002\n#1001 x7 and 42");
        assert_eq!(parsed, vec!["1001", "1002", "42"]);
    }

    #[test]
    fn test_order_number_pattern_compiles() {
        assert!(ORDER_NUMBER.is_some());
    }

    #[test]
    fn test_parse_order_numbers_empty() {
        assert!(parse_order_numbers("").is_empty());
        assert!(parse_order_numbers("a 1 b 2").is_empty());
    }

    #[test]
    fn test_result_label() {
        assert_eq!(sample_orders()[0].label(), "Order 1001 - Customer 1");
    }
}
