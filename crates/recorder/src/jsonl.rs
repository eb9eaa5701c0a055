//! JSONL file-backed interaction log

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use call_agent_core::{Error, InteractionEntry, InteractionLog};

use crate::RecorderError;

/// Append-only JSONL interaction log.
///
/// One JSON object per line, `{timestamp, call_sid, utterance, reply}`.
/// Writes are serialized through a mutex so concurrent turns cannot
/// interleave partial lines. The file is opened per write; the recorder is
/// low-volume (one line per turn) and an unopened file means a missing
/// directory shows up in the error instead of at startup.
pub struct JsonlInteractionLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlInteractionLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, entry: &InteractionEntry) -> Result<(), RecorderError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl InteractionLog for JsonlInteractionLog {
    async fn record(&self, entry: InteractionEntry) -> Result<(), Error> {
        self.append(&entry).await.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        let log = JsonlInteractionLog::new(&path);

        log.record(InteractionEntry::now(
            Some("CA123".to_string()),
            "what hours are you open?",
            "We're open 9 to 5, anything else?",
        ))
        .await
        .unwrap();
        log.record(InteractionEntry::now(None, "tell me a joke", "Sorry, I had trouble processing that."))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: InteractionEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.call_sid.as_deref(), Some("CA123"));
        assert_eq!(first.utterance, "what hours are you open?");
    }

    #[tokio::test]
    async fn missing_directory_reports_log_error() {
        let log = JsonlInteractionLog::new("/nonexistent-dir/interactions.jsonl");
        let err = log
            .record(InteractionEntry::now(None, "hello", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Log(_)));
    }
}
