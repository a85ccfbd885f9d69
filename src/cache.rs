//! In-process cache for read queries against the users API.
//!
//! Entries are keyed by `:`-separated query keys. Invalidating a key marks that key
//! and every key below it (`users` covers `users:page:2`) as stale, so the next
//! read goes back to the API.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<RwLock<Inner>>,
    stale_time: Duration,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    /// Bumped on every invalidation, so a fetch that raced one is not stored as fresh.
    generation: u64,
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
    invalidated: bool,
}

impl Entry {
    fn is_fresh(&self, stale_time: Duration) -> bool {
        !self.invalidated && self.fetched_at.elapsed() < stale_time
    }
}

fn key_matches(key: &str, prefix: &str) -> bool {
    match key.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(':'),
        None => false,
    }
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            stale_time,
        }
    }

    /// Returns the cached value for `key` when it is fresh, otherwise runs `fetcher`
    /// and stores its result. Errors are passed through and never cached.
    pub async fn fetch<T, E, F, Fut>(&self, key: &str, fetcher: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let generation = {
            let inner = self.inner.read().await;
            let cached = inner
                .entries
                .get(key)
                .filter(|entry| entry.is_fresh(self.stale_time))
                .and_then(|entry| entry.value.downcast_ref::<T>());

            if let Some(value) = cached {
                tracing::debug!(key, "query cache hit");
                return Ok(value.clone());
            }
            inner.generation
        };

        tracing::debug!(key, "query cache miss");
        let value = fetcher().await?;

        let mut inner = self.inner.write().await;
        let invalidated = inner.generation != generation;
        inner.entries.insert(
            key.to_owned(),
            Entry {
                value: Arc::new(value.clone()),
                fetched_at: Instant::now(),
                invalidated,
            },
        );

        Ok(value)
    }

    /// Marks every entry under `key` as stale. Returns how many entries were hit.
    #[tracing::instrument(name = "Invalidate queries", skip(self))]
    pub async fn invalidate(&self, key: &str) -> usize {
        let mut inner = self.inner.write().await;
        inner.generation += 1;

        let mut invalidated = 0;
        for (_, entry) in inner
            .entries
            .iter_mut()
            .filter(|(cached_key, _)| key_matches(cached_key, key))
        {
            entry.invalidated = true;
            invalidated += 1;
        }

        tracing::debug!(invalidated, "queries invalidated");
        invalidated
    }
}
