//! Presence rotation
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Fixed three-entry rotation every 10 seconds, Do Not Disturb status

use anyhow::{bail, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use serenity::model::gateway::{Activity, ActivityType};
use serenity::model::user::OnlineStatus;
use serenity::prelude::Context;
use std::time::Duration;

/// Time each entry stays visible
pub const PRESENCE_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Free-form status text, shown as a Playing activity
    Custom,
    Listening,
    Watching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEntry {
    pub label: String,
    pub kind: ActivityKind,
}

impl PresenceEntry {
    pub fn new(label: &str, kind: ActivityKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
        }
    }

    /// Gateway activity for this entry.
    ///
    /// Presence updates carry only name, type and url. Free-form entries go
    /// out as Playing so the text lands in `name`.
    pub fn to_activity(&self) -> Activity {
        match self.kind {
            ActivityKind::Listening => Activity::listening(&self.label),
            ActivityKind::Watching => Activity::watching(&self.label),
            ActivityKind::Custom => Activity::playing(&self.label),
        }
    }
}

pub const DEFAULT_ENTRIES: [(&str, ActivityKind); 3] = [
    ("Welcome To D4 Community", ActivityKind::Custom),
    ("DR4GY BOY", ActivityKind::Listening),
    ("D4 Community", ActivityKind::Watching),
];

/// Where presence updates go
#[async_trait]
pub trait PresenceSink: Send + Sync {
    async fn show(&self, entry: &PresenceEntry) -> Result<()>;
}

#[async_trait]
impl PresenceSink for Context {
    async fn show(&self, entry: &PresenceEntry) -> Result<()> {
        self.set_presence(Some(entry.to_activity()), OnlineStatus::DoNotDisturb)
            .await;
        Ok(())
    }
}

/// Owns the rotation cursor; moved into the background task that drives it.
#[derive(Debug, Clone)]
pub struct PresenceRotator {
    entries: Vec<PresenceEntry>,
    cursor: usize,
}

impl PresenceRotator {
    pub fn new(entries: Vec<PresenceEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("presence rotation needs at least one entry");
        }
        Ok(Self { entries, cursor: 0 })
    }

    pub fn standard() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(label, kind)| PresenceEntry::new(label, *kind))
                .collect(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current entry; advances the cursor, wrapping at the end
    pub fn tick(&mut self) -> &PresenceEntry {
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.entries.len();
        &self.entries[index]
    }

    /// Show the next entry on `sink`
    pub async fn step(&mut self, sink: &dyn PresenceSink) {
        let entry = self.tick().clone();
        match sink.show(&entry).await {
            Ok(()) => debug!("Presence set to {:?} '{}'", entry.kind, entry.label),
            Err(e) => warn!("Failed to update presence: {e}"),
        }
    }

    /// Rotate forever, showing the first entry immediately
    pub async fn run<S: PresenceSink>(mut self, sink: S) {
        let mut interval = tokio::time::interval(PRESENCE_INTERVAL);

        info!(
            "Presence rotation started ({} entries, interval: {}s)",
            self.entries.len(),
            PRESENCE_INTERVAL.as_secs()
        );

        loop {
            interval.tick().await;
            self.step(&sink).await;
        }
    }
}
