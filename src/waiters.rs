use tokio::sync::oneshot;

use crate::models::ChangedTalk;

/// Identifies a parked waiter so the timeout path can find it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterToken(u64);

/// A parked long-poll request, holding the baseline its caller already
/// has and the channel that delivers its single result.
#[derive(Debug)]
pub struct Waiter {
    token: WaiterToken,
    since: u64,
    tx: oneshot::Sender<Vec<ChangedTalk>>,
}

impl Waiter {
    pub fn since(&self) -> u64 {
        self.since
    }

    /// Resolve this waiter. Consumes it, so a second resolution is
    /// impossible by construction.
    pub fn resolve(self, talks: Vec<ChangedTalk>) {
        // The receiver may be gone if the client disconnected.
        let _ = self.tx.send(talks);
    }
}

/// The set of currently parked long-poll waiters.
///
/// Removal is the ownership transfer: whichever of `drain` and `expire`
/// removes a waiter is the one path allowed to resolve it.
#[derive(Debug, Default)]
pub struct WaiterRegistry {
    waiters: Vec<Waiter>,
    next_token: u64,
}

impl WaiterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a new waiter with the caller's baseline.
    pub fn park(&mut self, since: u64) -> (WaiterToken, oneshot::Receiver<Vec<ChangedTalk>>) {
        self.next_token += 1;
        let token = WaiterToken(self.next_token);
        let (tx, rx) = oneshot::channel();
        self.waiters.push(Waiter { token, since, tx });
        (token, rx)
    }

    /// Take every parked waiter, emptying the registry. The caller must
    /// resolve each one against its own baseline.
    pub fn drain(&mut self) -> Vec<Waiter> {
        std::mem::take(&mut self.waiters)
    }

    /// Remove a single waiter if it is still parked. Returns `None` when
    /// a notification already drained it, in which case the timeout path
    /// must not resolve anything.
    pub fn expire(&mut self, token: WaiterToken) -> Option<Waiter> {
        let idx = self.waiters.iter().position(|w| w.token == token)?;
        Some(self.waiters.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.waiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiters.is_empty()
    }
}
