//! Entity records: the unit of serialization.

use rustc_hash::FxHashMap;

use crate::model::Statement;

/// A link from an entity to a page on some site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLink {
    /// Site identifier, e.g. `enwiki`. Compared byte-wise.
    pub site: String,
    /// Page title on that site.
    pub title: String,
}

impl SiteLink {
    pub fn new(site: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            title: title.into(),
        }
    }
}

/// One knowledge-base record.
///
/// Entities are transient: built by the upstream dump parser right before
/// serialization and dropped right after. The serializer never mutates one;
/// map iteration order is irrelevant because every map is sorted by key at
/// emission time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    /// Stable external id, e.g. `Q42`.
    pub id: String,
    /// Language code -> label text.
    pub labels: FxHashMap<String, String>,
    /// Language code -> description text.
    pub descriptions: FxHashMap<String, String>,
    /// Language code -> alias texts in source order.
    pub aliases: FxHashMap<String, Vec<String>>,
    /// Property id (e.g. `P31`) -> statements in source order.
    /// Keys not starting with `P` are ignored by the serializer.
    pub claims: FxHashMap<String, Vec<Statement>>,
    pub sitelinks: Vec<SiteLink>,
}

impl Entity {
    /// Creates an empty entity with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_new() {
        let entity = Entity::new("Q42");
        assert_eq!(entity.id, "Q42");
        assert!(entity.labels.is_empty());
        assert!(entity.claims.is_empty());
        assert!(entity.sitelinks.is_empty());
    }
}
