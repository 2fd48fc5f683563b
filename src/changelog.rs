use crate::models::ChangedTalk;
use crate::store::TalkStore;

/// A logged (title, timestamp) pair marking that a talk was created,
/// mutated, or deleted. References the talk by title only; the talk may
/// already be gone by the time the event is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub title: String,
    pub timestamp: u64,
}

/// How much change history to retain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep every event for the life of the process.
    Unbounded,
    /// Drop events more than `keep_ms` behind the newest event.
    Window { keep_ms: u64 },
}

/// Append-only, time-ordered history of talk mutations, independent of
/// current talk content.
#[derive(Debug)]
pub struct ChangeLog {
    events: Vec<ChangeEvent>,
    retention: RetentionPolicy,
}

impl ChangeLog {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            events: Vec::new(),
            retention,
        }
    }

    /// Append an event. `timestamp` must be at least the previous event's
    /// timestamp; the board guarantees this by always stamping with its
    /// clock at append time, never with caller-supplied time.
    pub fn append(&mut self, title: impl Into<String>, timestamp: u64) {
        debug_assert!(self
            .events
            .last()
            .map_or(true, |event| event.timestamp <= timestamp));

        self.events.push(ChangeEvent {
            title: title.into(),
            timestamp,
        });

        if let RetentionPolicy::Window { keep_ms } = self.retention {
            let cutoff = timestamp.saturating_sub(keep_ms);
            let first_kept = self.events.partition_point(|event| event.timestamp < cutoff);
            if first_kept > 0 {
                self.events.drain(..first_kept);
            }
        }
    }

    /// Events with timestamp strictly after `since`, most recent first.
    pub fn since(&self, since: u64) -> Vec<&ChangeEvent> {
        // Events are ordered by timestamp, so scanning backwards can stop
        // at the first event at or before the baseline.
        self.events
            .iter()
            .rev()
            .take_while(|event| event.timestamp > since)
            .collect()
    }

    /// Resolve candidate events against the store's current state.
    ///
    /// The events come newest first and the first occurrence per title
    /// wins, so each title appears at most once and reflects its most
    /// recent known state. A title no longer in the store becomes a
    /// tombstone.
    pub fn resolve(events: &[&ChangeEvent], store: &TalkStore) -> Vec<ChangedTalk> {
        let mut found: Vec<ChangedTalk> = Vec::new();
        for event in events {
            if found.iter().any(|entry| entry.title() == event.title) {
                continue;
            }
            match store.get(&event.title) {
                Some(talk) => found.push(ChangedTalk::live(talk.clone())),
                None => found.push(ChangedTalk::deleted(event.title.clone())),
            }
        }
        found
    }

    /// The deduplicated changed/deleted set for everything after `since`.
    pub fn changed_since(&self, since: u64, store: &TalkStore) -> Vec<ChangedTalk> {
        Self::resolve(&self.since(since), store)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
