//! Video Store.
//!
//! Implements `VideoStoreTrait`: an append-only, insertion-ordered collection
//! of video records backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::VideoStoreError;
use crate::types::video::VideoRecord;

/// Trait defining video store operations.
pub trait VideoStoreTrait {
    fn add_video(&self, name: &str, cover_image: &str) -> Result<VideoRecord, VideoStoreError>;
    fn get_all_videos(&self) -> Result<Vec<VideoRecord>, VideoStoreError>;
    fn video_count(&self) -> Result<usize, VideoStoreError>;
}

/// Video store backed by a SQLite connection.
pub struct VideoStore<'a> {
    conn: &'a Connection,
}

impl<'a> VideoStore<'a> {
    /// Creates a new `VideoStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<VideoRecord> {
        Ok(VideoRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            cover_image: row.get(2)?,
        })
    }
}

impl<'a> VideoStoreTrait for VideoStore<'a> {
    /// Appends a video and returns it with its store-assigned id.
    fn add_video(&self, name: &str, cover_image: &str) -> Result<VideoRecord, VideoStoreError> {
        self.conn
            .execute(
                "INSERT INTO videos (name, cover_image, created_at) VALUES (?1, ?2, ?3)",
                params![name, cover_image, Self::now()],
            )
            .map_err(|e| {
                tracing::warn!(error = %e, name, "failed to insert video");
                VideoStoreError::from(e)
            })?;

        let record = VideoRecord {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            cover_image: cover_image.to_string(),
        };
        tracing::info!(id = record.id, name = %record.name, "added video");
        Ok(record)
    }

    /// Returns every video in insertion order.
    fn get_all_videos(&self) -> Result<Vec<VideoRecord>, VideoStoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, cover_image FROM videos ORDER BY id ASC")?;

        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        tracing::debug!(count = results.len(), "loaded videos");
        Ok(results)
    }

    fn video_count(&self) -> Result<usize, VideoStoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM videos", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
