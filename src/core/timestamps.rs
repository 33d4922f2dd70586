use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Convert epoch milliseconds to a UTC timestamp
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Format timestamp as ISO 8601 UTC
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiry {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

/// Deserialize a token expiry that must still lie in the future
///
/// Accepts epoch milliseconds (integer or float) or an RFC 3339 string.
pub fn deserialize_future_expiry<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let expires_at = match RawExpiry::deserialize(deserializer)? {
        RawExpiry::Millis(ms) => from_epoch_millis(ms),
        RawExpiry::FractionalMillis(ms) if ms.is_finite() => from_epoch_millis(ms.trunc() as i64),
        RawExpiry::FractionalMillis(_) => None,
        RawExpiry::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
    }
    .ok_or_else(|| D::Error::custom("invalid expiresIn format"))?;

    if expires_at <= Utc::now() {
        return Err(D::Error::custom(format!(
            "token already expired: {}",
            format_iso8601(expires_at)
        )));
    }

    Ok(expires_at)
}
