use anyhow::Context;
use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::info;

use crate::config::AppConfig;
use crate::users::{MongoUserStore, UserRecord};

const APP_NAME: &str = "user-seeder";

/// The single client handle a seeding run holds from start to finish.
pub struct Database {
    client: Client,
    db: mongodb::Database,
    collection: String,
}

impl Database {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("parse MONGODB_URI")?;
        options.app_name = Some(APP_NAME.to_string());
        let name = database_name(&options, &config.database);

        let client = Client::with_options(options).context("build mongodb client")?;
        let db = client.database(&name);

        // the driver connects lazily; ping so a dead server fails here
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .context("ping mongodb")?;

        info!(database = %name, "✓ Connected to MongoDB");
        Ok(Self {
            client,
            db,
            collection: config.collection.clone(),
        })
    }

    pub fn users(&self) -> MongoUserStore {
        MongoUserStore::new(self.db.collection::<UserRecord>(&self.collection))
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        info!("✓ Database connection closed");
    }
}

/// Database named in the URI, or `fallback` when the URI names none.
fn database_name(options: &ClientOptions, fallback: &str) -> String {
    options
        .default_database
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
