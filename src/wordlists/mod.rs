//! Word lists for waffle solving
//!
//! Provides the embedded five-letter dictionary compiled into the binary,
//! plus loading utilities for user-supplied word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
