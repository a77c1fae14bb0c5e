//! File-backed channel repository.
//!
//! The whole collection lives in memory and is rewritten to a single
//! pretty-printed JSON file after each accepted create. There is no update
//! or delete; the directory is append-only.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info};

use directory_core::types::{normalized_handle, Channel};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("channel with url {0} already exists")]
    DuplicateUrl(String),
    #[error("store file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct NewChannel {
    pub name: String,
    pub url: String,
    pub category: Option<String>,
    pub official: bool,
}

#[derive(Debug)]
pub struct ChannelStore {
    path: PathBuf,
    channels: RwLock<Vec<Channel>>,
}

impl ChannelStore {
    /// Reads the collection from `path`, or seeds the built-in defaults when
    /// the file does not exist. A present-but-malformed file is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let channels = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            info!(path = %path.display(), "store file absent, seeding default channels");
            default_channels()
        };

        Ok(Self {
            path,
            channels: RwLock::new(channels),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every channel, in insertion order.
    pub async fn list(&self) -> Vec<Channel> {
        self.channels.read().await.clone()
    }

    /// Case-insensitive lookup by bare handle. Only stored urls are
    /// `@`-stripped; a leading `@` on the input never matches.
    pub async fn find_by_handle(&self, raw: &str) -> Option<Channel> {
        let needle = raw.to_lowercase();
        self.channels
            .read()
            .await
            .iter()
            .find(|channel| channel.handle() == needle)
            .cloned()
    }

    /// Appends a channel and rewrites the store file. The write lock is held
    /// across the uniqueness check and the append, so two racing creates
    /// cannot both claim the same handle. A failed file write is logged and
    /// does not fail the create; the record stays in memory.
    pub async fn create(&self, new: NewChannel) -> Result<Channel, StoreError> {
        let mut channels = self.channels.write().await;

        let handle = normalized_handle(&new.url);
        if channels.iter().any(|channel| channel.handle() == handle) {
            return Err(StoreError::DuplicateUrl(new.url));
        }

        let id = channels.iter().map(|channel| channel.id).max().unwrap_or(0) + 1;
        let channel = Channel {
            id,
            name: new.name,
            url: new.url,
            category: new.category.unwrap_or_else(|| "other".to_string()),
            official: new.official,
            created_at: Some(Utc::now()),
        };
        channels.push(channel.clone());

        if let Err(err) = self.persist(&channels) {
            error!(path = %self.path.display(), %err, "failed to persist channel store");
        }

        Ok(channel)
    }

    fn persist(&self, channels: &[Channel]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(channels)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// The directory the service starts with on a fresh deployment.
pub fn default_channels() -> Vec<Channel> {
    let seed = [
        ("Telegram", "@telegram", "news", true),
        ("Stasya Games", "@stasya_games", "games", false),
        ("Postistasi", "@postistasi", "blog", false),
    ];

    seed.iter()
        .enumerate()
        .map(|(idx, (name, url, category, official))| Channel {
            id: idx as i64 + 1,
            name: name.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            official: *official,
            created_at: None,
        })
        .collect()
}
