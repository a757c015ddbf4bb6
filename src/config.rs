use serde::Deserialize;

/// Number of users inserted per run.
pub const NUM_USERS: usize = 1000;
/// Documents per unordered bulk insert.
pub const BATCH_SIZE: usize = 100;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/beathub";
pub const DEFAULT_DATABASE: &str = "beathub";
pub const DEFAULT_COLLECTION: &str = "users";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database: String,   // used when the URI names no database
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let collection = var("USERS_COLLECTION", DEFAULT_COLLECTION);
        anyhow::ensure!(
            !collection.contains('$'),
            "USERS_COLLECTION must not contain '$': {collection}"
        );

        Ok(Self {
            mongodb_uri: var("MONGODB_URI", DEFAULT_MONGODB_URI),
            database: var("MONGODB_DATABASE", DEFAULT_DATABASE),
            collection,
        })
    }
}
