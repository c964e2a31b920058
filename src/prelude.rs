//! Prelude module for date_object crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::{Deref, Display, From, Into};
