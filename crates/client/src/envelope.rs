//! List response envelope handling.
//!
//! Every list endpoint answers `{ "data": [...] }`. Any other shape is
//! treated as an empty list rather than an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the rows of a list envelope.
///
/// Returns an empty vector when the body is not an object, has no `data`
/// key, or `data` is not an array. Rows that do not deserialize as `T` are
/// skipped one by one; the rest are kept in order.
pub fn extract_rows<T: DeserializeOwned>(resource: &str, body: Value) -> Vec<T> {
    let data = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };

    let Some(Value::Array(rows)) = data else {
        tracing::warn!(resource, "List response has no `data` array, treating as empty");
        return Vec::new();
    };

    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<T>(row) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(resource, index, error = %e, "Skipping list row with unexpected shape");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use myron_core::models::Category;
    use serde_json::json;

    #[test]
    fn extracts_data_array() {
        let rows: Vec<Category> = extract_rows(
            "categories",
            json!({"data": [{"id": 1, "title": "Food", "image": "m/a.png"}]}),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Food");
    }

    #[test]
    fn empty_data_is_empty() {
        let rows: Vec<Category> = extract_rows("categories", json!({"data": []}));
        assert!(rows.is_empty());
    }

    #[test]
    fn malformed_shapes_are_empty() {
        for body in [
            json!(null),
            json!([{"id": 1}]),
            json!({"results": [{"id": 1}]}),
            json!({"data": {"id": 1}}),
            json!({"data": "nope"}),
            json!({"data": [{"title": "no id"}]}),
        ] {
            let rows: Vec<Category> = extract_rows("categories", body);
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn loose_rows_are_kept() {
        let rows: Vec<Category> = extract_rows(
            "categories",
            json!({"data": [
                {"id": 1, "title": "Food"},
                {"id": "2", "title": "Health"},
                {"id": 3, "title": "Edu", "image": 7},
            ]}),
        );
        let ids: Vec<_> = rows.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(rows[2].image.as_deref(), Some("7"));
    }

    #[test]
    fn bad_rows_are_skipped_individually() {
        let rows: Vec<Category> = extract_rows(
            "categories",
            json!({"data": [
                {"id": 1, "title": "Food"},
                {"title": "no id"},
                "not a row",
                {"id": 4, "title": "Health"},
            ]}),
        );
        let titles: Vec<_> = rows.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Food", "Health"]);
    }
}
