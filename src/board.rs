use std::sync::Mutex;
use std::time::Duration;

use crate::changelog::{ChangeLog, RetentionPolicy};
use crate::clock::Clock;
use crate::error::StoreError;
use crate::models::{ChangedTalk, Comment, Talk, TalkUpdates};
use crate::store::TalkStore;
use crate::waiters::WaiterRegistry;

struct Inner {
    store: TalkStore,
    log: ChangeLog,
    waiters: WaiterRegistry,
}

/// Owns the talk store, the change log, and the parked waiters, and
/// serializes every mutation and park through one lock. A change appended
/// between a caller's since-check and its park would otherwise be lost;
/// holding the same lock across check-then-park and append-then-notify
/// closes that window.
pub struct TalkBoard {
    clock: Clock,
    poll_timeout: Duration,
    inner: Mutex<Inner>,
}

impl TalkBoard {
    pub fn new(poll_timeout: Duration, retention: RetentionPolicy) -> Self {
        Self {
            clock: Clock::new(),
            poll_timeout,
            inner: Mutex::new(Inner {
                store: TalkStore::new(),
                log: ChangeLog::new(retention),
                waiters: WaiterRegistry::new(),
            }),
        }
    }

    /// Apply a mutation to the store. On success, log the change with a
    /// fresh timestamp and resolve every parked waiter against its own
    /// recomputed baseline. A failed mutation writes no event and wakes
    /// nobody.
    pub fn apply_change<F>(&self, title: &str, mutation: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut TalkStore) -> Result<(), StoreError>,
    {
        let mut inner = self.inner.lock().unwrap();

        mutation(&mut inner.store)?;
        let now = self.clock.now();
        inner.log.append(title, now);

        let waiters = inner.waiters.drain();
        if !waiters.is_empty() {
            tracing::debug!(title, count = waiters.len(), "resolving parked waiters");
        }
        for waiter in waiters {
            let changed = inner.log.changed_since(waiter.since(), &inner.store);
            waiter.resolve(changed);
        }
        Ok(())
    }

    /// Create or fully replace a talk.
    pub fn put_talk(&self, talk: Talk) {
        let title = talk.title.clone();
        // Insertion cannot fail, so the error branch is unreachable.
        let _ = self.apply_change(&title, move |store| {
            store.put(talk);
            Ok(())
        });
    }

    pub fn get_talk(&self, title: &str) -> Option<Talk> {
        self.inner.lock().unwrap().store.get(title).cloned()
    }

    /// Delete a talk. Returns whether it existed; deleting an absent talk
    /// logs nothing and wakes nobody.
    pub fn delete_talk(&self, title: &str) -> bool {
        self.apply_change(title, |store| {
            if store.remove(title) {
                Ok(())
            } else {
                Err(StoreError::TalkNotFound(title.to_string()))
            }
        })
        .is_ok()
    }

    /// Append a comment to an existing talk.
    pub fn add_comment(&self, title: &str, comment: Comment) -> Result<(), StoreError> {
        self.apply_change(title, |store| {
            store.mutate(title, |talk| talk.comments.push(comment))
        })
    }

    /// All current talks plus the server time. The path for requests with
    /// no baseline; bypasses the change log entirely.
    pub fn list_all(&self) -> TalkUpdates {
        let inner = self.inner.lock().unwrap();
        TalkUpdates {
            server_time: self.clock.now(),
            talks: inner
                .store
                .list_all()
                .into_iter()
                .map(ChangedTalk::live)
                .collect(),
        }
    }

    /// Changes with a timestamp after `since`, waiting up to the poll
    /// timeout when there are none yet. A timed-out wait resolves with an
    /// empty set, indistinguishable from "nothing changed, ask again".
    pub async fn query_or_wait(&self, since: u64) -> TalkUpdates {
        let (token, mut rx) = {
            let mut inner = self.inner.lock().unwrap();
            let changed = inner.log.changed_since(since, &inner.store);
            if !changed.is_empty() {
                return TalkUpdates {
                    server_time: self.clock.now(),
                    talks: changed,
                };
            }
            // Nothing new. Park under the same lock apply_change takes,
            // so no change can slip in between check and park.
            tracing::debug!(since, "parking long-poll waiter");
            inner.waiters.park(since)
        };

        let talks = match tokio::time::timeout(self.poll_timeout, &mut rx).await {
            Ok(Ok(talks)) => talks,
            // Sender dropped without resolving; treat as no changes.
            Ok(Err(_)) => Vec::new(),
            Err(_elapsed) => {
                let expired = self.inner.lock().unwrap().waiters.expire(token);
                match expired {
                    // Still parked: the timeout owns the resolution.
                    Some(_waiter) => Vec::new(),
                    // A notification drained the waiter first; its result
                    // was sent under the lock and is already buffered.
                    None => rx.await.unwrap_or_default(),
                }
            }
        };

        TalkUpdates {
            server_time: self.clock.now(),
            talks,
        }
    }
}
