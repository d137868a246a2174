//! Filesystem utilities for strut.
//!
//! This module provides safe filesystem operations, particularly atomic writes
//! that ensure a generated artifact is never left half-written.

pub mod atomic;

pub use atomic::atomic_write_file;
