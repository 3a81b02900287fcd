use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL and its visit statistics.
///
/// `clicks` always equals `history.len()`; `LinkStore::record_visit` is the
/// only code path that changes either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Creation time in milliseconds since the Unix epoch
    pub id: i64,
    pub original: String,
    pub short: String,
    pub code: String,
    #[serde(with = "iso_millis")]
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    pub history: Vec<VisitEvent>,
}

impl LinkRecord {
    /// Creation instant, recovered from `id`
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.id).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    #[serde(with = "iso_millis")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub referrer: String,
}

/// RFC 3339 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> LinkRecord {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        LinkRecord {
            id: created.timestamp_millis(),
            original: "https://example.com".to_string(),
            short: "http://localhost:5173/#/abc123".to_string(),
            code: "abc123".to_string(),
            expiry: created + Duration::minutes(30),
            clicks: 1,
            history: vec![VisitEvent {
                time: created + Duration::seconds(5),
                referrer: String::new(),
            }],
        }
    }

    #[test]
    fn test_serialized_layout() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["id"], 1714564800000i64);
        assert_eq!(value["expiry"], "2024-05-01T12:30:00.000Z");
        assert_eq!(value["history"][0]["time"], "2024-05-01T12:00:05.000Z");
        assert_eq!(value["history"][0]["referrer"], "");
        assert_eq!(value["clicks"], 1);
    }

    #[test]
    fn test_created_at_from_id() {
        let link = sample();
        assert_eq!(link.created_at(), Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_is_expired_at() {
        let link = sample();
        assert!(!link.is_expired_at(link.created_at()));
        assert!(link.is_expired_at(link.expiry));
        assert!(link.is_expired_at(link.expiry + Duration::minutes(1)));
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let parsed = iso_millis::parse("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(iso_millis::format(&parsed), "2024-05-01T12:00:00.000Z");
        assert!(iso_millis::parse("yesterday").is_none());
    }
}
