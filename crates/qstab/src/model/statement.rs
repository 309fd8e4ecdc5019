//! Statements, snaks, ranks and references.

use crate::model::Value;

/// Statement rank.
///
/// The discriminants are the sort key: statements within one property are
/// emitted in ascending discriminant order, so preferred statements come
/// first and deprecated ones last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Preferred = 0,
    Normal = 1,
    Deprecated = 2,
}

/// The value side of a snak.
#[derive(Debug, Clone, PartialEq)]
pub enum SnakValue {
    /// A concrete typed value.
    Value(Value),
    /// The property has some unknown value. Renders as `somevalue`.
    SomeValue,
    /// The property is known to have no value. Renders as `novalue`.
    NoValue,
    /// The source carried a datatype this format cannot express, or a value
    /// that did not match its declared datatype. Never renders; the
    /// containing statement, qualifier or reference snak is dropped.
    Unsupported,
}

/// One unit of assertion: a property paired with a value form.
#[derive(Debug, Clone, PartialEq)]
pub struct Snak {
    /// Property id, e.g. `P31`.
    pub property: String,
    pub value: SnakValue,
}

impl Snak {
    pub fn new(property: impl Into<String>, value: SnakValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

/// An ordered group of snaks under one property.
///
/// Qualifier groups keep the property order in which they first appeared in
/// the source; reference groups keep the source's group order. Neither is
/// ever re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakGroup {
    pub property: String,
    pub snaks: Vec<Snak>,
}

impl SnakGroup {
    pub fn new(property: impl Into<String>, snaks: Vec<Snak>) -> Self {
        Self {
            property: property.into(),
            snaks,
        }
    }
}

/// Provenance for a statement: an ordered sequence of snak groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
    pub snaks: Vec<SnakGroup>,
}

/// A main snak plus rank, qualifiers and references.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub main_snak: Snak,
    pub rank: Rank,
    /// Qualifier groups in first-seen property order.
    pub qualifiers: Vec<SnakGroup>,
    pub references: Vec<Reference>,
}

impl Statement {
    /// Creates a normal-rank statement with no qualifiers or references.
    pub fn new(main_snak: Snak) -> Self {
        Self {
            main_snak,
            rank: Rank::Normal,
            qualifiers: Vec::new(),
            references: Vec::new(),
        }
    }
}
