#![deny(unsafe_code)]

//! Column resolution for measurement exports with unknown layouts.
//!
//! Header matching is data-driven: an ordered table of
//! (field, keywords, positional fallback) entries is evaluated once per
//! batch. Every required field resolves to some in-range column even on a
//! sheet with no recognizable header names, so downstream parsing never
//! fails on layout alone.

pub mod patterns;
pub mod resolver;

pub use patterns::{FIELD_PATTERNS, Field, FieldPattern};
pub use resolver::{ColumnMap, normalize_header, resolve_columns};
