//! Services module - the report pipeline on top of [`ConfigLoader`](crate::config::ConfigLoader).
//!
//! [`summary::run`] loads both configuration fragments in order and writes the
//! human-readable report to any [`std::io::Write`] sink, so the binary can
//! target stdout while tests capture a buffer.

pub mod summary;

pub use summary::{STARTUP_NOTICE, Summary, run};
