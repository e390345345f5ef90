use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct PantryCamConfig {
    pub database: Option<DatabaseConfig>,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_keys: Vec<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Trims every entry and drops the blank ones, keeping order.
pub fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Picks one API key at random from the configured pool.
///
/// Blank entries are ignored. Returns `None` when nothing usable is left, in
/// which case every LLM call will fail until a key is configured.
pub fn pick_api_key(pool: &[String]) -> Option<String> {
    let keys: Vec<&str> = pool
        .iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .collect();

    if keys.is_empty() {
        tracing::warn!("No GEMINI_API_KEYS or GEMINI_API_KEY configured");
        return None;
    }

    keys.choose(&mut rand::thread_rng())
        .map(|key| key.to_string())
}
