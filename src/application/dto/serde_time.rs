//! RFC 3339 wire form for post timestamps (`published_at`, `created_at`,
//! `updated_at`). Output is always UTC with a `+00:00` offset; input may
//! carry any offset and is normalized to UTC.
use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

fn parse<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| E::custom(format!("invalid RFC 3339 timestamp '{raw}': {err}")))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw)
}

/// Optional timestamps in request bodies, such as an omitted
/// `published_at` that falls back to the clock.
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw))
            .transpose()
    }
}
