//! Row reshaping for product lookups
//!
//! Turns positional product rows into a mapping keyed by one of the row's
//! columns, each value carrying the row's cells under their column names.

use serde_json::Value;
use thiserror::Error;

use crate::models::product::{GroupedProducts, ProductRecord};

/// Column names by row position. Order must match the `product` table.
pub const VOCABULARY: [&str; 14] = [
    "date",
    "product_name",
    "price_per_pack",
    "price_per_unit",
    "unit_of_measure",
    "discount_verbose",
    "discount_percentage",
    "old_price",
    "department_l1",
    "department_l2",
    "department_l3",
    "plu",
    "category",
    "ean",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReshapeError {
    #[error("product row has {found} columns, expected {expected}")]
    RowWidth { found: usize, expected: usize },
}

/// Column whose value keys the reshaped output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingKey {
    Date,
    ProductName,
    Ean,
}

impl GroupingKey {
    pub fn position(&self) -> usize {
        match self {
            GroupingKey::Date => 0,
            GroupingKey::ProductName => 1,
            GroupingKey::Ean => 13,
        }
    }

    pub fn as_str(&self) -> &'static str {
        VOCABULARY[self.position()]
    }
}

/// Build one named record from a positional row
pub fn to_record(row: Vec<Value>) -> Result<ProductRecord, ReshapeError> {
    if row.len() != VOCABULARY.len() {
        return Err(ReshapeError::RowWidth {
            found: row.len(),
            expected: VOCABULARY.len(),
        });
    }

    Ok(ProductRecord::new(VOCABULARY.iter().copied().zip(row).collect()))
}

/// Group rows under the value of `key`.
///
/// Rows sharing a key collapse into one entry; the row that comes later in
/// `rows` replaces the earlier one. Output is ordered by key.
pub fn reshape<I>(rows: I, key: GroupingKey) -> Result<GroupedProducts, ReshapeError>
where
    I: IntoIterator<Item = Vec<Value>>,
{
    let mut grouped = GroupedProducts::new();

    for row in rows {
        let header = row.get(key.position()).map(header_text);
        let record = to_record(row)?;

        // to_record already checked the width, so the header cell exists
        if let Some(header) = header {
            if grouped.insert(header.clone(), record).is_some() {
                tracing::debug!("Row with {} '{}' replaced an earlier one", key.as_str(), header);
            }
        }
    }

    Ok(grouped)
}

fn header_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(date: &str, name: &str, price: f64, ean: &str) -> Vec<Value> {
        vec![
            json!(date),
            json!(name),
            json!(price),
            Value::Null,
            json!("ks"),
            Value::Null,
            Value::Null,
            Value::Null,
            json!("mliecne-vyrobky-a-vajcia"),
            Value::Null,
            Value::Null,
            json!("100"),
            Value::Null,
            json!(ean),
        ]
    }

    #[test]
    fn test_single_row_keyed_by_ean() {
        let grouped = reshape(vec![row("2024-01-01", "Mlieko", 0.89, "111")], GroupingKey::Ean).unwrap();

        assert_eq!(grouped.len(), 1);
        let record = &grouped["111"];
        assert_eq!(record.len(), 14);
        assert_eq!(record.get("date"), Some(&json!("2024-01-01")));
        assert_eq!(record.get("product_name"), Some(&json!("Mlieko")));
        assert_eq!(record.get("price_per_pack"), Some(&json!(0.89)));
        assert_eq!(record.get("plu"), Some(&json!("100")));
        assert_eq!(record.get("ean"), Some(&json!("111")));
    }

    #[test]
    fn test_rows_keyed_by_date() {
        let rows = vec![
            row("2024-01-01", "Mlieko", 0.89, "111"),
            row("2024-01-02", "Mlieko", 0.79, "111"),
        ];

        let grouped = reshape(rows, GroupingKey::Date).unwrap();

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(grouped["2024-01-02"].get("price_per_pack"), Some(&json!(0.79)));
    }

    #[test]
    fn test_same_key_last_row_wins() {
        let rows = vec![
            row("2024-01-01", "Mlieko", 0.89, "111"),
            row("2024-01-01", "Mlieko", 0.99, "222"),
        ];

        let grouped = reshape(rows, GroupingKey::ProductName).unwrap();

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["Mlieko"].get("ean"), Some(&json!("222")));
        assert_eq!(grouped["Mlieko"].get("price_per_pack"), Some(&json!(0.99)));
    }

    #[test]
    fn test_output_sorted_by_key_not_insertion() {
        let rows = vec![
            row("2024-01-01", "Rožok", 0.09, "3"),
            row("2024-01-01", "Chlieb", 1.19, "1"),
            row("2024-01-01", "Maslo", 2.49, "2"),
        ];

        let grouped = reshape(rows, GroupingKey::ProductName).unwrap();

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Chlieb", "Maslo", "Rožok"]);
    }

    #[test]
    fn test_row_width_mismatch_fails() {
        let mut short = row("2024-01-01", "Mlieko", 0.89, "111");
        short.pop();

        let err = reshape(vec![short], GroupingKey::Date).unwrap_err();
        assert_eq!(err, ReshapeError::RowWidth { found: 13, expected: 14 });
    }

    #[test]
    fn test_empty_input_gives_empty_mapping() {
        let grouped = reshape(Vec::<Vec<Value>>::new(), GroupingKey::Date).unwrap();
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_vocabulary_matches_entity_columns() {
        use crate::entities::product;
        use sea_orm::{IdenStatic, Iterable};

        let columns: Vec<String> = product::Column::iter()
            .map(|c| c.as_str().to_string())
            .collect();
        let expected: Vec<String> = VOCABULARY.iter().map(|name| name.to_string()).collect();
        assert_eq!(columns, expected);
    }
}
