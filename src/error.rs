//! Unified error type for BoxOffice.
//!
//! The facade surfaces the engine's canonical [`Error`] unchanged: one
//! enum covers both validation failures (detected before any mutation,
//! retry with corrected input) and faults (whole-operation rollback, retry
//! later). See [`Error::is_validation`], [`Error::is_fault`], and
//! [`Error::is_retryable`] for classifying a failure programmatically.

pub use boxoffice_core::error::{Error, Result};
