//! Test helpers: plain-text row dumps for snapshot-style assertions.
//!
//! Use [`rows_to_string`] to turn a compiled row list into readable text
//! and compare it with `insta` inline snapshots.

pub mod snapshot;

pub use snapshot::rows_to_string;
