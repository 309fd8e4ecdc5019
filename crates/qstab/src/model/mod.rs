//! Data model types for entity serialization.
//!
//! - Entities and sitelinks
//! - Statements, snaks, ranks, references
//! - Typed values (one variant per supported datatype)

pub mod entity;
pub mod statement;
pub mod value;

pub use entity::{Entity, SiteLink};
pub use statement::{Rank, Reference, Snak, SnakGroup, SnakValue, Statement};
pub use value::{Calendar, Timestamp, Value};
