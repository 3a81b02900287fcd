//! 持久化集合与 LinkRecord 之间的转换
//!
//! Decoding never fails as a whole: an unparsable document is an empty
//! collection and a malformed element is dropped on its own.

use serde_json::Value;
use tracing::warn;

use super::models::{LinkRecord, VisitEvent, iso_millis};
use crate::errors::Result;

/// Parse a stored collection, normalizing every element against the record schema.
pub fn decode_collection(raw: &str, origin: &str) -> Vec<LinkRecord> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(
                "Stored collection is not an array (found {}), treating as empty",
                value_kind(&other)
            );
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to parse stored collection, treating as empty: {}", e);
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = value_to_record(item, origin);
            if record.is_none() {
                warn!("Dropping malformed link record at index {}", index);
            }
            record
        })
        .collect()
}

pub fn encode_collection(links: &[LinkRecord]) -> Result<String> {
    Ok(serde_json::to_string(links)?)
}

/// 将单个 JSON 元素转换为 LinkRecord
///
/// `code` and `original` are required; every other field has a fallback.
fn value_to_record(item: &Value, origin: &str) -> Option<LinkRecord> {
    let obj = item.as_object()?;
    let code = obj.get("code")?.as_str()?.to_string();
    let original = obj.get("original")?.as_str()?.to_string();

    let id = obj
        .get("id")
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0);

    let short = obj
        .get("short")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| super::short_link(origin, &code));

    let expiry = obj
        .get("expiry")
        .and_then(Value::as_str)
        .and_then(iso_millis::parse)
        .or_else(|| chrono::DateTime::<chrono::Utc>::from_timestamp_millis(id))
        .unwrap_or(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);

    let history: Vec<VisitEvent> = obj
        .get("history")
        .and_then(Value::as_array)
        .map(|events| events.iter().filter_map(value_to_visit).collect())
        .unwrap_or_default();

    let stored_clicks = obj.get("clicks").and_then(Value::as_u64);
    let clicks = history.len() as u64;
    if let Some(stored) = stored_clicks
        && stored != clicks
    {
        warn!(
            "Link '{}' stored {} clicks but {} history entries, using history length",
            code, stored, clicks
        );
    }

    Some(LinkRecord {
        id,
        original,
        short,
        code,
        expiry,
        clicks,
        history,
    })
}

fn value_to_visit(item: &Value) -> Option<VisitEvent> {
    let obj = item.as_object()?;
    let time = obj.get("time")?.as_str().and_then(iso_millis::parse)?;
    let referrer = obj
        .get("referrer")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(VisitEvent { time, referrer })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:5173";

    #[test]
    fn test_decode_full_record() {
        let raw = r#"[{
            "id": 1714564800000,
            "original": "https://example.com",
            "short": "http://localhost:5173/#/abc123",
            "code": "abc123",
            "expiry": "2024-05-01T12:30:00.000Z",
            "clicks": 1,
            "history": [{"time": "2024-05-01T12:00:05.000Z", "referrer": "https://ref.example"}]
        }]"#;

        let links = decode_collection(raw, ORIGIN);
        assert_eq!(links.len(), 1);
        let link = &links[0];
        assert_eq!(link.code, "abc123");
        assert_eq!(link.clicks, 1);
        assert_eq!(link.history[0].referrer, "https://ref.example");
        assert_eq!(iso_millis::format(&link.expiry), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode_collection("not json", ORIGIN).is_empty());
        assert!(decode_collection("", ORIGIN).is_empty());
        assert!(decode_collection("{\"code\":\"x\"}", ORIGIN).is_empty());
        assert!(decode_collection("null", ORIGIN).is_empty());
    }

    #[test]
    fn test_decode_drops_malformed_elements_only() {
        let raw = r#"[
            {"code": "good", "original": "https://a.example", "id": 1},
            {"code": 42, "original": "https://b.example"},
            "string",
            {"original": "https://c.example"}
        ]"#;

        let links = decode_collection(raw, ORIGIN);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].code, "good");
    }

    #[test]
    fn test_decode_fills_missing_fields() {
        let raw = r#"[{"code": "abc", "original": "https://a.example", "id": 1714564800000}]"#;

        let link = &decode_collection(raw, ORIGIN)[0];
        assert_eq!(link.short, "http://localhost:5173/#/abc");
        assert_eq!(link.expiry, link.created_at());
        assert_eq!(link.clicks, 0);
        assert!(link.history.is_empty());
    }

    #[test]
    fn test_decode_normalizes_clicks_to_history() {
        let raw = r#"[{
            "code": "abc", "original": "https://a.example", "id": 1,
            "clicks": 7,
            "history": [
                {"time": "2024-05-01T12:00:00.000Z", "referrer": ""},
                {"time": "broken", "referrer": ""},
                {"time": "2024-05-01T12:01:00.000Z"}
            ]
        }]"#;

        let link = &decode_collection(raw, ORIGIN)[0];
        assert_eq!(link.history.len(), 2);
        assert_eq!(link.clicks, 2);
        assert_eq!(link.history[1].referrer, "");
    }

    #[test]
    fn test_encode_then_decode_preserves_order() {
        let raw = r#"[
            {"code": "b", "original": "https://b.example", "id": 2},
            {"code": "a", "original": "https://a.example", "id": 1}
        ]"#;
        let links = decode_collection(raw, ORIGIN);
        let encoded = encode_collection(&links).unwrap();

        let again = decode_collection(&encoded, ORIGIN);
        assert_eq!(again, links);
        assert_eq!(again[0].code, "b");
    }
}
