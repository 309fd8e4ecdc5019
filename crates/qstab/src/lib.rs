//! QuickStatements-style line serialization for knowledge-base entities.
//!
//! This crate turns structured entity records (labels, descriptions,
//! aliases, statements with qualifiers and references, sitelinks) into a
//! compact, deterministic, tab-delimited text encoding: one fact per line,
//! suitable for bulk re-import or diffing.
//!
//! # Quick Start
//!
//! ```rust
//! use qstab::{encode_entity, Entity, Snak, SnakValue, Statement, Value};
//!
//! let mut entity = Entity::new("Q5");
//! entity.labels.insert("en".to_string(), "human".to_string());
//! entity.claims.insert(
//!     "P31".to_string(),
//!     vec![Statement::new(Snak::new(
//!         "P31",
//!         SnakValue::Value(Value::Item("Q5".to_string())),
//!     ))],
//! );
//!
//! let lines = encode_entity(&entity).unwrap();
//! assert_eq!(lines, "Q5\tLen\t\"human\"\nQ5\tP31\tQ5\n");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Entity records, statements, snaks, typed values
//! - [`codec`]: The serialization engine (quoting, values, statements,
//!   whole entities)
//! - [`sink`]: Mutex-guarded output sink for concurrent producers, plus a
//!   zstd writer helper
//! - [`error`]: Error types
//!
//! # Determinism
//!
//! Output is a pure function of the entity: every unordered map is sorted
//! by key before emission, claims sort by numeric property id, statements
//! by rank. Source-significant orders (aliases in a language, qualifier
//! property order, reference groups) pass through untouched.
//!
//! # Concurrency
//!
//! [`encode_entity`] is stateless; an upstream dump parser may call it from
//! any number of worker threads. [`sink::EntitySink`] serializes only the
//! final per-entity write, so entity blocks never interleave mid-line. A
//! failed entity commits nothing.

pub mod codec;
pub mod error;
pub mod model;
pub mod sink;

// Re-export commonly used items at crate root
pub use codec::{encode_entity, quote, unquote};
pub use error::{DecodeError, EncodeError};
pub use model::{
    Calendar, Entity, Rank, Reference, SiteLink, Snak, SnakGroup, SnakValue, Statement, Timestamp,
    Value,
};
pub use sink::{zstd_writer, EntitySink};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
