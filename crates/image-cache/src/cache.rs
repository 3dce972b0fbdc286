//! The image cache
//!
//! One `ImageCache` instance owns a byte-budgeted LRU map of fetched images
//! and a registry of in-flight fetches. All map mutations happen under a
//! single mutex; the network fetch itself always runs outside it, so a slow
//! fetch never blocks unrelated cache operations.
//!
//! Per-locator lifecycle: absent -> fetching -> cached, or absent ->
//! fetching -> failed. Failures leave nothing behind, so the next `fetch`
//! for that locator starts over. A cached locator re-enters fetching only
//! via `invalidate` followed by a new `fetch`.

use crate::disk::{DiskError, DiskStore};
use crate::fetcher::{FetchError, HttpImageFetcher, ImageFetcher};
use lru::LruCache;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;

/// Shared, read-only view of cached image bytes
pub type ImageBytes = Arc<Vec<u8>>;

type FetchOutcome = Result<ImageBytes, FetchError>;

/// Cache construction error types
#[derive(Debug, Error)]
pub enum CacheError {
    /// The disk tier could not be opened
    #[error("disk store error: {0}")]
    Disk(#[from] DiskError),

    /// The default fetcher could not be built
    #[error("fetcher error: {0}")]
    Fetcher(#[from] FetchError),
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct ImageCacheConfig {
    /// Total byte budget for cached entries
    pub max_bytes: usize,
    /// Whether fetched bytes must sniff as a known image format
    pub validate_bytes: bool,
    /// Disk tier location (None = memory only)
    pub disk_path: Option<PathBuf>,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024 * 1024, // 64MB
            validate_bytes: true,
            disk_path: None,
        }
    }
}

impl ImageCacheConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the byte budget
    pub fn max_bytes(mut self, bytes: usize) -> Self {
        self.max_bytes = bytes;
        self
    }

    /// Enable or disable image-format validation
    pub fn validate_bytes(mut self, validate: bool) -> Self {
        self.validate_bytes = validate;
        self
    }

    /// Enable the disk tier at the given path
    pub fn with_disk_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_path = Some(path.into());
        self
    }
}

/// Fetch-path counters
///
/// `peek` does not touch these; they describe `fetch` traffic only. A fetch
/// folded into an existing in-flight operation counts as a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Fetches answered from cache or an in-flight operation
    pub hits: u64,
    /// Fetches that had to load bytes
    pub misses: u64,
    /// Entries evicted to stay under budget
    pub evictions: u64,
}

struct CacheEntry {
    bytes: ImageBytes,
    size_bytes: usize,
}

struct InFlight {
    subscribers: Vec<oneshot::Sender<FetchOutcome>>,
}

struct CacheState {
    entries: LruCache<String, CacheEntry>,
    total_bytes: usize,
    in_flight: HashMap<String, InFlight>,
    stats: CacheStats,
}

impl CacheState {
    fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            total_bytes: 0,
            in_flight: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Insert fetched bytes, evicting least-recently-used entries until the
    /// total is back under budget. Entries larger than the whole budget are
    /// served but never stored, so the budget invariant always holds.
    fn insert(&mut self, locator: &str, bytes: Vec<u8>, max_bytes: usize) -> ImageBytes {
        let shared: ImageBytes = Arc::new(bytes);
        let size_bytes = shared.len();

        if size_bytes > max_bytes {
            tracing::warn!(locator, size_bytes, "entry exceeds cache budget, serving uncached");
            return shared;
        }

        if let Some(old) = self.entries.pop(locator) {
            self.total_bytes = self.total_bytes.saturating_sub(old.size_bytes);
        }

        self.entries.put(
            locator.to_string(),
            CacheEntry { bytes: Arc::clone(&shared), size_bytes },
        );
        self.total_bytes += size_bytes;
        tracing::debug!(locator, size_bytes, total = self.total_bytes, "cached");

        while self.total_bytes > max_bytes {
            match self.entries.pop_lru() {
                Some((evicted_key, evicted)) => {
                    self.total_bytes = self.total_bytes.saturating_sub(evicted.size_bytes);
                    self.stats.evictions += 1;
                    tracing::debug!(locator = %evicted_key, "evicted");
                }
                None => break,
            }
        }

        shared
    }
}

enum Claim {
    Hit(ImageBytes),
    Joined(oneshot::Receiver<FetchOutcome>),
    Owner,
}

/// Process-local cache of fetched image bytes
///
/// Cheap to share: wrap it in an `Arc` and hand clones to every
/// image-displaying component.
pub struct ImageCache {
    state: Mutex<CacheState>,
    fetcher: Arc<dyn ImageFetcher>,
    disk: Option<DiskStore>,
    config: ImageCacheConfig,
}

impl ImageCache {
    /// Create a cache backed by the default HTTP fetcher
    pub fn new(config: ImageCacheConfig) -> Result<Self, CacheError> {
        let fetcher = Arc::new(HttpImageFetcher::new()?);
        Self::with_fetcher(fetcher, config)
    }

    /// Create a cache with a custom fetcher
    pub fn with_fetcher(
        fetcher: Arc<dyn ImageFetcher>,
        config: ImageCacheConfig,
    ) -> Result<Self, CacheError> {
        let disk = match &config.disk_path {
            Some(path) => Some(DiskStore::open(path)?),
            None => None,
        };

        Ok(Self {
            state: Mutex::new(CacheState::new()),
            fetcher,
            disk,
            config,
        })
    }

    /// Fetch the bytes for a locator
    ///
    /// Returns cached bytes immediately when present. When a fetch for the
    /// same locator is already in flight the caller is attached to it and
    /// receives the same eventual result; at most one underlying fetch per
    /// locator exists at any time.
    pub async fn fetch(&self, locator: &str) -> Result<ImageBytes, FetchError> {
        let claim = {
            let mut state = self.state.lock();
            if let Some(entry) = state.entries.get(locator) {
                let bytes = Arc::clone(&entry.bytes);
                state.stats.hits += 1;
                tracing::debug!(locator, "cache hit");
                Claim::Hit(bytes)
            } else if let Some(flight) = state.in_flight.get_mut(locator) {
                let (tx, rx) = oneshot::channel();
                flight.subscribers.push(tx);
                state.stats.hits += 1;
                tracing::debug!(locator, "joined in-flight fetch");
                Claim::Joined(rx)
            } else {
                state
                    .in_flight
                    .insert(locator.to_string(), InFlight { subscribers: Vec::new() });
                state.stats.misses += 1;
                Claim::Owner
            }
        };

        match claim {
            Claim::Hit(bytes) => Ok(bytes),
            Claim::Joined(rx) => rx.await.unwrap_or(Err(FetchError::Cancelled)),
            Claim::Owner => self.drive_fetch(locator).await,
        }
    }

    /// Synchronous, cache-only lookup
    ///
    /// Never triggers network or disk activity. A hit refreshes the entry's
    /// recency, since recency is what the eviction order is built from.
    pub fn peek(&self, locator: &str) -> Option<ImageBytes> {
        let mut state = self.state.lock();
        state.entries.get(locator).map(|entry| Arc::clone(&entry.bytes))
    }

    /// Drop the cached entry for a locator
    ///
    /// An in-flight fetch for the locator is left to complete. Returns
    /// whether anything was removed.
    pub fn invalidate(&self, locator: &str) -> bool {
        let removed = {
            let mut state = self.state.lock();
            match state.entries.pop(locator) {
                Some(entry) => {
                    state.total_bytes = state.total_bytes.saturating_sub(entry.size_bytes);
                    true
                }
                None => false,
            }
        };

        let removed_disk = match &self.disk {
            Some(disk) => disk.remove(locator).unwrap_or_else(|err| {
                tracing::warn!(locator, error = %err, "disk invalidate failed");
                false
            }),
            None => false,
        };

        removed || removed_disk
    }

    /// Drop every cached entry (and the disk tier's records, if enabled)
    pub fn clear(&self) {
        {
            let mut state = self.state.lock();
            state.entries.clear();
            state.total_bytes = 0;
        }

        if let Some(disk) = &self.disk {
            if let Err(err) = disk.clear() {
                tracing::warn!(error = %err, "disk clear failed");
            }
        }
    }

    /// Whether a locator is cached, without touching recency
    pub fn contains(&self, locator: &str) -> bool {
        self.state.lock().entries.contains(locator)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Total bytes currently cached
    pub fn total_bytes(&self) -> usize {
        self.state.lock().total_bytes
    }

    /// Snapshot of the fetch-path counters
    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats
    }

    /// Owner path: load bytes outside the lock, then publish the shared
    /// outcome to every subscriber that joined meanwhile.
    async fn drive_fetch(&self, locator: &str) -> FetchOutcome {
        let loaded = self.load_bytes(locator).await;

        let (outcome, subscribers) = {
            let mut state = self.state.lock();
            let outcome = match loaded {
                Ok(bytes) => Ok(state.insert(locator, bytes, self.config.max_bytes)),
                Err(err) => {
                    tracing::debug!(locator, error = %err, "fetch failed");
                    Err(err)
                }
            };
            let subscribers = state
                .in_flight
                .remove(locator)
                .map(|flight| flight.subscribers)
                .unwrap_or_default();
            (outcome, subscribers)
        };

        for tx in subscribers {
            // A subscriber that went away just drops its receiver.
            let _ = tx.send(outcome.clone());
        }

        outcome
    }

    /// Disk tier first, then the network. Disk failures degrade to misses.
    async fn load_bytes(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        if let Some(disk) = &self.disk {
            match disk.get(locator) {
                Ok(Some(bytes)) => {
                    tracing::debug!(locator, "disk tier hit");
                    return Ok(bytes);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(locator, error = %err, "disk read failed");
                }
            }
        }

        let bytes = self.fetcher.fetch_bytes(locator).await?;

        if self.config.validate_bytes {
            image::guess_format(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
        }

        if let Some(disk) = &self.disk {
            if let Err(err) = disk.put(locator, &bytes) {
                tracing::warn!(locator, error = %err, "disk write failed");
            }
        }

        Ok(bytes)
    }
}
