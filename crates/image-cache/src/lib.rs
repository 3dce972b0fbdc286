//! Async image cache for Prism UI
//!
//! Given a locator (typically a URL), [`cache::ImageCache`] returns
//! previously fetched image bytes if present, otherwise fetches, stores, and
//! returns them. Concurrent requests for the same locator are folded into a
//! single underlying fetch, and total cached bytes are bounded by a
//! configurable budget with least-recently-used eviction.
//!
//! # Modules
//!
//! - [`cache`] - The cache itself: fetch/peek/invalidate/clear
//! - [`fetcher`] - The byte-fetching seam and its HTTP implementation
//! - [`disk`] - Optional sled-backed persistence tier
//!
//! # Example
//!
//! ```rust,no_run
//! use image_cache::{ImageCache, ImageCacheConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = ImageCache::new(ImageCacheConfig::new().max_bytes(32 * 1024 * 1024))?;
//! let bytes = cache.fetch("https://example.com/avatar.png").await?;
//! assert_eq!(cache.peek("https://example.com/avatar.png").as_deref(), Some(&*bytes));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod disk;
pub mod fetcher;

pub use cache::{CacheError, CacheStats, ImageBytes, ImageCache, ImageCacheConfig};
pub use disk::DiskStore;
pub use fetcher::{FetchError, HttpImageFetcher, ImageFetcher};
