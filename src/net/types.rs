//! Wire DTOs for the booking API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON exactly: camelCase everywhere except
//! `teacher_id`, which the server emits in snake_case. Timestamps arrive in
//! several shapes (RFC 3339, offset-less local date-times, bare dates, epoch
//! millis) so they go through a lenient deserializer and are normalised to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// The authenticated principal returned by `POST api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    /// Opaque bearer credential.
    pub token: String,
    /// Credential scheme, normally `"Bearer"`.
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Acknowledgement / error envelope used by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// DIRECTORY RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A bookable yoga session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<Utc>,
    #[serde(rename = "teacher_id")]
    pub teacher_id: u64,
    pub description: String,
    /// Ids of participating users.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Body of `POST api/session` and `PUT api/session/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    /// Calendar day, serialised as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub teacher_id: u64,
    pub description: String,
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTimestamp::deserialize(deserializer)?;
    timestamp_from_raw(raw).map_err(D::Error::custom)
}

fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    raw.map(timestamp_from_raw).transpose().map_err(D::Error::custom)
}

fn timestamp_from_raw(raw: RawTimestamp) -> Result<DateTime<Utc>, String> {
    match raw {
        RawTimestamp::Millis(ms) => {
            DateTime::from_timestamp_millis(ms).ok_or_else(|| format!("timestamp out of range: {ms}"))
        }
        RawTimestamp::Text(text) => parse_timestamp(&text),
    }
}

/// Parse any timestamp shape the server is known to emit. Offset-less values
/// are taken as UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, String> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(day.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!("unrecognised timestamp: {text:?}"))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
