//! Networking utilities for Prism UI
//!
//! This crate provides HTTP client functionality with retry logic and
//! timeout handling, kept separate from its consumers so the image cache
//! (and any future remote-resource layer) share one transport.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod retry;

pub use client::{HttpClient, HttpConfig, HttpError};
pub use retry::{with_retry, Retryable, RetryPolicy};
