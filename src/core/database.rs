// SPDX-License-Identifier: GPL-3.0-only

//! Durable deck persistence.
//!
//! Storage is deliberately a single document: one row keyed `decks` holds
//! the whole collection as a JSON array, read and rewritten as a unit. There
//! are no partial updates; the last writer wins.

use std::{fs, sync::Arc};

use sqlx::{Pool, Sqlite, SqlitePool};

use crate::core::models::deck::Deck;

const DECKS_KEY: &str = "decks";

/// Opens (creating if needed) the application database under the platform
/// data directory.
pub async fn init_database(app_id: &str) -> Result<Arc<Pool<Sqlite>>, anywho::Error> {
    let db_path = dirs::data_dir()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no platform data directory")
        })?
        .join(app_id)
        .join("database")
        .join("anatomia.db");
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !db_path.exists() {
        fs::File::create(&db_path)?;
    }

    let pool = SqlitePool::connect(&db_path.to_string_lossy()).await?;
    prepare(&pool).await?;

    Ok(Arc::new(pool))
}

/// An in-memory database with the same schema, for tests. Pinned to a
/// single connection: every sqlite `:memory:` connection is its own
/// database.
pub async fn init_memory_database() -> Result<Arc<Pool<Sqlite>>, anywho::Error> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    prepare(&pool).await?;
    Ok(Arc::new(pool))
}

async fn prepare(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE TABLE IF NOT EXISTS documents (key TEXT PRIMARY KEY, payload TEXT NOT NULL)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Repository owning reads and writes of the deck collection.
#[derive(Clone)]
pub struct DeckStore {
    pool: Arc<Pool<Sqlite>>,
}

impl DeckStore {
    pub fn new(pool: Arc<Pool<Sqlite>>) -> Self {
        Self { pool }
    }

    /// Loads the whole collection. A missing document is an empty
    /// collection. An unparseable one is too: that case is logged and
    /// recovered from locally, never surfaced as an error.
    pub async fn load(&self) -> Result<Vec<Deck>, anywho::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM documents WHERE key = $1")
                .bind(DECKS_KEY)
                .fetch_optional(self.pool.as_ref())
                .await?;

        let Some((payload,)) = row else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&payload) {
            Ok(decks) => Ok(decks),
            Err(err) => {
                log::warn!("malformed deck document, starting from an empty collection: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Serializes the full collection and overwrites the stored document.
    pub async fn save_all(&self, decks: &[Deck]) -> Result<(), anywho::Error> {
        let payload = serde_json::to_string(decks)?;

        sqlx::query(
            "INSERT INTO documents (key, payload) VALUES ($1, $2)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload",
        )
        .bind(DECKS_KEY)
        .bind(payload)
        .execute(self.pool.as_ref())
        .await?;

        log::info!("persisted {} decks", decks.len());
        Ok(())
    }

    /// Fires a write without blocking the caller. The returned handle is the
    /// completion signal: await it to observe the result, drop it to keep
    /// the old optimistic behavior.
    pub fn spawn_save_all(&self, decks: Vec<Deck>) -> tokio::task::JoinHandle<Result<(), anywho::Error>> {
        let store = self.clone();
        tokio::spawn(async move { store.save_all(&decks).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::flashcard::Flashcard;

    async fn store() -> DeckStore {
        DeckStore::new(init_memory_database().await.unwrap())
    }

    fn deck(title: &str) -> Deck {
        let mut deck = Deck::new(title);
        deck.cards.push(Flashcard::new("tibia", "shin bone"));
        deck
    }

    #[tokio::test]
    async fn missing_document_loads_as_empty() {
        let store = store().await;
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = store().await;
        let decks = vec![deck("Skull"), deck("Thorax")];

        store.save_all(&decks).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, decks);
    }

    #[tokio::test]
    async fn save_overwrites_the_whole_document() {
        let store = store().await;
        store.save_all(&[deck("Skull"), deck("Thorax")]).await.unwrap();
        store.save_all(&[deck("Pelvis")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Pelvis");
    }

    #[tokio::test]
    async fn malformed_payload_recovers_as_empty() {
        let store = store().await;
        sqlx::query("INSERT INTO documents (key, payload) VALUES ('decks', 'not json')")
            .execute(store.pool.as_ref())
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn spawned_save_reports_completion() {
        let store = store().await;
        let handle = store.spawn_save_all(vec![deck("Abdomen")]);
        handle.await.unwrap().unwrap();

        assert_eq!(store.load().await.unwrap()[0].title, "Abdomen");
    }
}
