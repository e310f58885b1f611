// SPDX-License-Identifier: MPL-2.0
//! Observable store holding the most recently published toast.
//!
//! Publishers call [`ToastStore::success`] and friends; containers call
//! [`ToastStore::watch`] and receive every later publish through a channel.
//! Each watcher owns an unbounded tokio channel, so publishing never blocks
//! and works from any thread.

use super::toast::{Status, ToastData};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

/// Identity of a store, used to key its container subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

impl StoreId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifier of a registered watcher within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

#[derive(Debug, Default)]
struct Inner {
    data: Option<ToastData>,
    watchers: Vec<(WatchId, mpsc::UnboundedSender<ToastData>)>,
    next_watch: u64,
}

/// Shared handle to a toast store. Clones refer to the same store.
#[derive(Debug, Clone)]
pub struct ToastStore {
    id: StoreId,
    inner: Arc<Mutex<Inner>>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ToastStore {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ToastStore {}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: StoreId::new(),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Process-wide store shared by every caller.
    pub fn global() -> &'static ToastStore {
        static GLOBAL: OnceLock<ToastStore> = OnceLock::new();
        GLOBAL.get_or_init(ToastStore::new)
    }

    #[must_use]
    pub fn id(&self) -> StoreId {
        self.id
    }

    // No critical section leaves `Inner` half-updated, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current data and notifies every live watcher.
    ///
    /// Watchers whose receiving end has been dropped are removed.
    pub fn publish(&self, data: ToastData) {
        let mut inner = self.lock();
        inner
            .watchers
            .retain(|(_, sender)| sender.send(data.clone()).is_ok());
        tracing::debug!(
            status = %data.status,
            watchers = inner.watchers.len(),
            "toast published"
        );
        inner.data = Some(data);
    }

    pub fn success(
        &self,
        message: impl Into<String>,
        timer: Option<Duration>,
        class_names: Option<String>,
    ) {
        self.publish_status(Status::Success, message, timer, class_names);
    }

    pub fn info(
        &self,
        message: impl Into<String>,
        timer: Option<Duration>,
        class_names: Option<String>,
    ) {
        self.publish_status(Status::Info, message, timer, class_names);
    }

    pub fn warning(
        &self,
        message: impl Into<String>,
        timer: Option<Duration>,
        class_names: Option<String>,
    ) {
        self.publish_status(Status::Warning, message, timer, class_names);
    }

    pub fn error(
        &self,
        message: impl Into<String>,
        timer: Option<Duration>,
        class_names: Option<String>,
    ) {
        self.publish_status(Status::Error, message, timer, class_names);
    }

    fn publish_status(
        &self,
        status: Status,
        message: impl Into<String>,
        timer: Option<Duration>,
        class_names: Option<String>,
    ) {
        self.publish(ToastData {
            status,
            message: message.into(),
            timer,
            class_names,
        });
    }

    /// Last published data, if any.
    #[must_use]
    pub fn data(&self) -> Option<ToastData> {
        self.lock().data.clone()
    }

    /// Registers a watcher that receives every publish made from now on.
    ///
    /// Dropping the returned [`Watch`] unregisters it.
    #[must_use]
    pub fn watch(&self) -> Watch {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.lock();
        let id = WatchId(inner.next_watch);
        inner.next_watch += 1;
        inner.watchers.push((id, sender));
        tracing::debug!(watch = id.0, "toast store watcher registered");

        Watch {
            id,
            store: self.clone(),
            receiver,
        }
    }

    /// Unregisters a watcher. Returns `false` if `id` was not registered.
    pub fn unwatch(&self, id: WatchId) -> bool {
        let mut inner = self.lock();
        let before = inner.watchers.len();
        inner.watchers.retain(|(watch_id, _)| *watch_id != id);
        before != inner.watchers.len()
    }

    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.lock().watchers.len()
    }
}

/// Receiving side of a store watch.
#[derive(Debug)]
pub struct Watch {
    id: WatchId,
    store: ToastStore,
    receiver: mpsc::UnboundedReceiver<ToastData>,
}

impl Watch {
    #[must_use]
    pub fn id(&self) -> WatchId {
        self.id
    }

    /// Waits for the next publish.
    ///
    /// Returns `None` once the watch has been unregistered and drained.
    pub async fn recv(&mut self) -> Option<ToastData> {
        self.receiver.recv().await
    }

    /// Returns the next pending publish without waiting.
    pub fn try_recv(&mut self) -> Option<ToastData> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.store.unwatch(self.id);
    }
}
