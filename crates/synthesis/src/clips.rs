//! In-process store for synthesized audio clips
//!
//! Clips are written once by the renderer and fetched by the telephony
//! provider over `GET /audio/{id}`. Nothing persists across restarts.
//! A background sweep reclaims clips older than [`CLIP_MAX_AGE`], so a
//! clip that outlives its call is reclaimed instead of held for the
//! process lifetime.

use std::time::{Duration, Instant};

use bytes::Bytes;
use dashmap::DashMap;
use uuid::Uuid;

/// How long a clip stays servable before the sweep reclaims it. Far
/// longer than any plausible fetch delay, including provider retries.
pub const CLIP_MAX_AGE: Duration = Duration::from_secs(300);

/// Cadence of the background eviction sweep.
pub const CLIP_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct StoredClip {
    audio: Bytes,
    stored_at: Instant,
}

/// Concurrent clip store keyed by clip id
#[derive(Default)]
pub struct ClipStore {
    clips: DashMap<Uuid, StoredClip>,
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a clip and return its id
    pub fn insert(&self, audio: Bytes) -> Uuid {
        let id = Uuid::new_v4();
        self.clips.insert(
            id,
            StoredClip {
                audio,
                stored_at: Instant::now(),
            },
        );
        id
    }

    /// Fetch a clip by id
    pub fn get(&self, id: &Uuid) -> Option<Bytes> {
        self.clips.get(id).map(|entry| entry.value().audio.clone())
    }

    /// Drop a clip
    pub fn remove(&self, id: &Uuid) -> Option<Bytes> {
        self.clips.remove(id).map(|(_, clip)| clip.audio)
    }

    /// Reclaim every clip stored longer than `max_age` ago. Returns the
    /// number of clips removed.
    pub fn evict_expired(&self, max_age: Duration) -> usize {
        let expired: Vec<Uuid> = self
            .clips
            .iter()
            .filter(|entry| entry.value().stored_at.elapsed() >= max_age)
            .map(|entry| *entry.key())
            .collect();

        let mut evicted = 0;
        for id in expired {
            if self.remove(&id).is_some() {
                evicted += 1;
            }
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let store = ClipStore::new();
        let id = store.insert(Bytes::from_static(b"mpeg-bytes"));
        assert_eq!(store.get(&id).unwrap(), Bytes::from_static(b"mpeg-bytes"));
    }

    #[test]
    fn unknown_id_is_none() {
        let store = ClipStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn expired_clips_are_reclaimed() {
        let store = ClipStore::new();
        let first = store.insert(Bytes::from_static(b"a"));
        let second = store.insert(Bytes::from_static(b"b"));
        assert_eq!(store.len(), 2);

        // With a zero max-age every stored clip is already expired
        assert_eq!(store.evict_expired(Duration::ZERO), 2);
        assert!(store.is_empty());
        assert!(store.get(&first).is_none());
        assert!(store.get(&second).is_none());
    }

    #[test]
    fn fresh_clips_survive_a_sweep() {
        let store = ClipStore::new();
        let id = store.insert(Bytes::from_static(b"mpeg-bytes"));

        assert_eq!(store.evict_expired(CLIP_MAX_AGE), 0);
        assert!(store.get(&id).is_some());
    }
}
