//! Identifier -> lesson-content cache with de-duplicated on-demand fetching.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;

use course_core::model::{LessonContent, SectionId};

use crate::error::RegistryError;
use crate::provider::ContentProvider;

type FetchResult = Result<Arc<LessonContent>, RegistryError>;

/// Loaded/pending counts, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryStats {
    pub loaded: usize,
    pub pending: usize,
}

/// Caches lesson content by section id.
///
/// Content arrives either eagerly via [`ContentRegistry::register`] at startup
/// or lazily through the injected [`ContentProvider`]. Concurrent resolves for
/// one id join the same in-flight fetch; a failed fetch clears its pending
/// entry so a later call may retry.
pub struct ContentRegistry {
    provider: Arc<dyn ContentProvider>,
    loaded: Mutex<HashMap<SectionId, Arc<LessonContent>>>,
    pending: Mutex<HashMap<SectionId, broadcast::Sender<FetchResult>>>,
}

impl ContentRegistry {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            loaded: Mutex::new(HashMap::new()),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Store preloaded content, or warn when a section has none yet.
    ///
    /// Absent content is non-fatal: not every catalog section has an authored
    /// payload, and the provider may still know the id later.
    pub fn register(&self, id: &SectionId, content: Option<LessonContent>) {
        let Some(content) = content else {
            log::warn!("no preloaded content for {id}; leaving it to the provider");
            return;
        };
        if content.id != *id {
            log::warn!("content registered under {id} declares id {}", content.id);
        }
        self.loaded_lock().insert(id.clone(), Arc::new(content));
    }

    /// Cached content for a section, without triggering a fetch.
    #[must_use]
    pub fn cached(&self, id: &SectionId) -> Option<Arc<LessonContent>> {
        self.loaded_lock().get(id).cloned()
    }

    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        // Taken one at a time; resolve acquires pending before loaded, and
        // holding both here in the opposite order could deadlock.
        let loaded = self.loaded_lock().len();
        let pending = self.pending_lock().len();
        RegistryStats { loaded, pending }
    }

    /// Resolve a section's content, fetching it at most once.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` when no source knows the id, or
    /// `RegistryError::Fetch` when the provider fails; every caller joined to
    /// the same fetch sees the same error.
    pub async fn resolve(&self, id: &SectionId) -> FetchResult {
        if let Some(content) = self.cached(id) {
            return Ok(content);
        }

        let waiter = {
            let mut pending = self.pending_lock();
            // A fetch may have completed and cleared its pending entry between
            // the cache check above and taking this lock; re-check the cache
            // under the lock so we never start a second fetch for a cached id.
            if let Some(content) = self.loaded_lock().get(id).cloned() {
                return Ok(content);
            }
            match pending.get(id) {
                Some(tx) => Some(tx.subscribe()),
                None => {
                    let (tx, _) = broadcast::channel(1);
                    pending.insert(id.clone(), tx);
                    None
                }
            }
        };

        if let Some(mut rx) = waiter {
            return match rx.recv().await {
                Ok(result) => result,
                // The fetching caller was dropped mid-flight.
                Err(_) => Err(RegistryError::Fetch {
                    id: id.clone(),
                    reason: "load interrupted".to_string(),
                }),
            };
        }

        // If this future is dropped before completion, the guard clears the
        // pending entry so waiters fail fast and a later resolve can refetch.
        let guard = PendingGuard {
            registry: self,
            id,
            armed: true,
        };

        let result = match self.provider.fetch(id).await {
            Ok(content) => {
                let content = Arc::new(content);
                self.loaded_lock()
                    .insert(id.clone(), Arc::clone(&content));
                Ok(content)
            }
            Err(err) => Err(RegistryError::from_provider(id, &err)),
        };

        guard.complete(result.clone());
        result
    }

    fn loaded_lock(&self) -> MutexGuard<'_, HashMap<SectionId, Arc<LessonContent>>> {
        self.loaded.lock().expect("registry cache lock poisoned")
    }

    fn pending_lock(&self) -> MutexGuard<'_, HashMap<SectionId, broadcast::Sender<FetchResult>>> {
        self.pending.lock().expect("registry pending lock poisoned")
    }

    fn finish_pending(&self, id: &SectionId, result: FetchResult) {
        let tx = self.pending_lock().remove(id);
        if let Some(tx) = tx {
            // No receivers is fine: nobody joined this fetch.
            let _ = tx.send(result);
        }
    }
}

struct PendingGuard<'a> {
    registry: &'a ContentRegistry,
    id: &'a SectionId,
    armed: bool,
}

impl PendingGuard<'_> {
    fn complete(mut self, result: FetchResult) {
        self.armed = false;
        self.registry.finish_pending(self.id, result);
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.registry.finish_pending(
                self.id,
                Err(RegistryError::Fetch {
                    id: self.id.clone(),
                    reason: "load interrupted".to_string(),
                }),
            );
        }
    }
}
