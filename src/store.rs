use std::collections::HashMap;

use crate::error::StoreError;
use crate::models::Talk;

/// Current state of every talk, keyed by title.
///
/// The single source of truth for "does this talk exist and what is it".
/// Not synchronized on its own; the `TalkBoard` owns it behind a lock.
#[derive(Debug, Default)]
pub struct TalkStore {
    talks: HashMap<String, Talk>,
}

impl TalkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, title: &str) -> Option<&Talk> {
        self.talks.get(title)
    }

    /// Create or fully replace a talk.
    pub fn put(&mut self, talk: Talk) {
        self.talks.insert(talk.title.clone(), talk);
    }

    /// Remove a talk. Returns whether it existed.
    pub fn remove(&mut self, title: &str) -> bool {
        self.talks.remove(title).is_some()
    }

    /// Apply an in-place update to an existing talk.
    pub fn mutate<F>(&mut self, title: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Talk),
    {
        match self.talks.get_mut(title) {
            Some(talk) => {
                f(talk);
                Ok(())
            }
            None => Err(StoreError::TalkNotFound(title.to_string())),
        }
    }

    /// All current talks, in no particular order.
    pub fn list_all(&self) -> Vec<Talk> {
        self.talks.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }
}
