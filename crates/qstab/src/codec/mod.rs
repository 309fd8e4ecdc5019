//! Line-format encoding.
//!
//! One fact per line, fields tab-separated, terminated by `\n`. Field 1 is
//! the entity id; field 2 is the marker code (`L`/`D`/`A` + language, a bare
//! property id, or `S` + site).

pub mod entity;
pub mod quote;
pub mod statement;
pub mod value;

pub use entity::encode_entity;
pub use quote::{quote, quote_into, unquote};
pub use statement::{encode_claims, encode_statement};
pub use value::{encode_snak, encode_value};
