//! In-memory and no-op interaction logs

use async_trait::async_trait;
use tokio::sync::Mutex;

use call_agent_core::{Error, InteractionEntry, InteractionLog};

/// In-memory interaction log for tests and ad-hoc inspection.
#[derive(Default)]
pub struct MemoryInteractionLog {
    entries: Mutex<Vec<InteractionEntry>>,
}

impl MemoryInteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, in append order
    pub async fn entries(&self) -> Vec<InteractionEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl InteractionLog for MemoryInteractionLog {
    async fn record(&self, entry: InteractionEntry) -> Result<(), Error> {
        self.entries.lock().await.push(entry);
        Ok(())
    }
}

/// Discards every entry. Used when the recorder is disabled in settings.
#[derive(Default, Clone, Copy)]
pub struct NullInteractionLog;

#[async_trait]
impl InteractionLog for NullInteractionLog {
    async fn record(&self, _entry: InteractionEntry) -> Result<(), Error> {
        Ok(())
    }
}
