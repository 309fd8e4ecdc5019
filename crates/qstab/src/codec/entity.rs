//! Whole-entity serialization.

use rustc_hash::FxHashMap;

use crate::codec::quote::quote_into;
use crate::codec::statement::encode_claims;
use crate::error::EncodeError;
use crate::model::Entity;

/// Serializes one entity into its complete line-format output.
///
/// Pure function: no state survives between calls, so any number of worker
/// threads may serialize different entities at once. Output order is fixed:
/// labels, descriptions, aliases, claims, sitelinks, each section sorted by
/// its own key.
pub fn encode_entity(entity: &Entity) -> Result<String, EncodeError> {
    // One entity rarely exceeds 64 KiB of output; reserve up front so large
    // entities do not reallocate per section.
    let mut out = String::with_capacity(65535);
    encode_terms(&entity.id, 'L', &entity.labels, &mut out);
    encode_terms(&entity.id, 'D', &entity.descriptions, &mut out);
    encode_aliases(entity, &mut out);
    encode_claims(&entity.id, &entity.claims, &mut out)?;
    encode_sitelinks(entity, &mut out);
    Ok(out)
}

/// Appends `id<TAB><marker><lang><TAB>"text"` lines sorted by language code.
fn encode_terms(
    entity_id: &str,
    marker: char,
    terms: &FxHashMap<String, String>,
    out: &mut String,
) {
    let mut sorted: Vec<(&str, &str)> = terms
        .iter()
        .map(|(lang, text)| (lang.as_str(), text.as_str()))
        .collect();
    sorted.sort();
    for (lang, text) in sorted {
        out.push_str(entity_id);
        out.push('\t');
        out.push(marker);
        out.push_str(lang);
        out.push('\t');
        quote_into(text, out);
        out.push('\n');
    }
}

/// Appends alias lines: languages sorted, aliases within a language in
/// source order.
fn encode_aliases(entity: &Entity, out: &mut String) {
    let mut languages: Vec<&str> = entity.aliases.keys().map(String::as_str).collect();
    languages.sort_unstable();
    for lang in languages {
        for alias in &entity.aliases[lang] {
            out.push_str(&entity.id);
            out.push_str("\tA");
            out.push_str(lang);
            out.push('\t');
            quote_into(alias, out);
            out.push('\n');
        }
    }
}

/// Appends sitelink lines sorted by site identifier.
fn encode_sitelinks(entity: &Entity, out: &mut String) {
    let mut links: Vec<(&str, &str)> = entity
        .sitelinks
        .iter()
        .map(|link| (link.site.as_str(), link.title.as_str()))
        .collect();
    links.sort();
    for (site, title) in links {
        out.push_str(&entity.id);
        out.push_str("\tS");
        out.push_str(site);
        out.push('\t');
        quote_into(title, out);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{SiteLink, Snak, SnakValue, Statement, Value};

    use super::*;

    fn item_statement(property: &str, target: &str) -> Statement {
        Statement::new(Snak::new(
            property,
            SnakValue::Value(Value::Item(target.to_string())),
        ))
    }

    #[test]
    fn test_empty_entity() {
        let entity = Entity::new("Q1");
        assert_eq!(encode_entity(&entity).unwrap(), "");
    }

    #[test]
    fn test_label_and_claim() {
        let mut entity = Entity::new("Q5");
        entity.labels.insert("en".to_string(), "human".to_string());
        entity
            .claims
            .insert("P31".to_string(), vec![item_statement("P31", "Q5")]);

        assert_eq!(
            encode_entity(&entity).unwrap(),
            "Q5\tLen\t\"human\"\nQ5\tP31\tQ5\n"
        );
    }

    #[test]
    fn test_terms_sorted_by_language() {
        let mut entity = Entity::new("Q1");
        entity.labels.insert("fr".to_string(), "chat".to_string());
        entity.labels.insert("de".to_string(), "Katze".to_string());
        entity.labels.insert("en".to_string(), "cat".to_string());
        entity
            .descriptions
            .insert("en".to_string(), "small felid".to_string());

        assert_eq!(
            encode_entity(&entity).unwrap(),
            "Q1\tLde\t\"Katze\"\n\
             Q1\tLen\t\"cat\"\n\
             Q1\tLfr\t\"chat\"\n\
             Q1\tDen\t\"small felid\"\n"
        );
    }

    #[test]
    fn test_aliases_sorted_by_language_only() {
        let mut entity = Entity::new("Q1");
        entity.aliases.insert(
            "en".to_string(),
            vec!["puss".to_string(), "housecat".to_string()],
        );
        entity
            .aliases
            .insert("de".to_string(), vec!["Hauskatze".to_string()]);

        // Languages sort; aliases within a language keep source order.
        assert_eq!(
            encode_entity(&entity).unwrap(),
            "Q1\tAde\t\"Hauskatze\"\n\
             Q1\tAen\t\"puss\"\n\
             Q1\tAen\t\"housecat\"\n"
        );
    }

    #[test]
    fn test_sitelinks_sorted_by_site() {
        let mut entity = Entity::new("Q1");
        entity.sitelinks.push(SiteLink::new("frwiki", "Chat"));
        entity.sitelinks.push(SiteLink::new("enwiki", "Cat"));

        assert_eq!(
            encode_entity(&entity).unwrap(),
            "Q1\tSenwiki\t\"Cat\"\nQ1\tSfrwiki\t\"Chat\"\n"
        );
    }

    #[test]
    fn test_section_order() {
        let mut entity = Entity::new("Q1");
        entity.labels.insert("en".to_string(), "cat".to_string());
        entity
            .descriptions
            .insert("en".to_string(), "small felid".to_string());
        entity
            .aliases
            .insert("en".to_string(), vec!["puss".to_string()]);
        entity
            .claims
            .insert("P31".to_string(), vec![item_statement("P31", "Q146")]);
        entity.sitelinks.push(SiteLink::new("enwiki", "Cat"));

        assert_eq!(
            encode_entity(&entity).unwrap(),
            "Q1\tLen\t\"cat\"\n\
             Q1\tDen\t\"small felid\"\n\
             Q1\tAen\t\"puss\"\n\
             Q1\tP31\tQ146\n\
             Q1\tSenwiki\t\"Cat\"\n"
        );
    }

    #[test]
    fn test_bad_property_id_aborts_entity() {
        let mut entity = Entity::new("Q1");
        entity
            .claims
            .insert("P".to_string(), vec![item_statement("P", "Q1")]);
        assert!(encode_entity(&entity).is_err());
    }

    #[test]
    fn test_unsupported_statement_emits_nothing() {
        let mut entity = Entity::new("Q1");
        entity.claims.insert(
            "P31".to_string(),
            vec![Statement::new(Snak::new("P31", SnakValue::Unsupported))],
        );
        assert_eq!(encode_entity(&entity).unwrap(), "");
    }
}
