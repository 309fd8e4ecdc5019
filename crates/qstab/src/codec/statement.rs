//! Statement linearization: one tab-delimited line per statement.

use rustc_hash::FxHashMap;

use crate::codec::value::{encode_snak, encode_value};
use crate::error::EncodeError;
use crate::model::{Rank, Reference, SnakValue, Statement};

/// Appends the lines for every claim of one entity.
///
/// Claims keys that do not start with `P` are skipped; a `P` key whose
/// suffix is not a number aborts the entity. Properties are emitted in
/// ascending numeric order, and statements within a property in ascending
/// rank order (stable, so source order breaks ties).
pub fn encode_claims(
    entity_id: &str,
    claims: &FxHashMap<String, Vec<Statement>>,
    out: &mut String,
) -> Result<(), EncodeError> {
    let mut properties: Vec<(u64, &str, &[Statement])> = Vec::with_capacity(claims.len());
    for (key, statements) in claims {
        let Some(suffix) = key.strip_prefix('P') else {
            continue;
        };
        let number: u64 = suffix
            .parse()
            .map_err(|_| EncodeError::InvalidPropertyId { id: key.clone() })?;
        properties.push((number, key.as_str(), statements.as_slice()));
    }
    properties.sort_by_key(|(number, _, _)| *number);

    for (_, property, statements) in properties {
        let mut ordered: Vec<&Statement> = statements.iter().collect();
        ordered.sort_by_key(|statement| statement.rank);
        for statement in ordered {
            encode_statement(entity_id, property, statement, out);
        }
    }
    Ok(())
}

/// Appends one statement line, or nothing if the main snak cannot render.
///
/// Shape: `id<TAB>property<TAB>[rank]value` followed by qualifier and
/// reference fields, terminated by a newline.
pub fn encode_statement(entity_id: &str, property: &str, statement: &Statement, out: &mut String) {
    let mut line = String::with_capacity(64);
    line.push_str(entity_id);
    line.push('\t');
    line.push_str(property);
    line.push('\t');
    match statement.rank {
        Rank::Preferred => line.push('↑'),
        Rank::Deprecated => line.push('↓'),
        Rank::Normal => {}
    }

    if !encode_snak(&statement.main_snak.value, &mut line) {
        return;
    }

    // Qualifier groups stay in first-seen property order. Only concrete
    // values render here; somevalue/novalue/unsupported qualifiers drop
    // without affecting their siblings.
    for group in &statement.qualifiers {
        for snak in &group.snaks {
            if let SnakValue::Value(value) = &snak.value {
                line.push('\t');
                line.push_str(&group.property);
                line.push('\t');
                encode_value(value, &mut line);
            }
        }
    }

    for (index, reference) in statement.references.iter().enumerate() {
        encode_reference(reference, index == 0, &mut line);
    }

    line.push('\n');
    out.push_str(&line);
}

/// Appends the snaks of one reference as `<TAB>[!]S<number><TAB>value`
/// fields.
///
/// The first emitted snak of every reference after the first carries the
/// `!` separator. Snaks that cannot render are dropped individually and do
/// not consume the separator.
fn encode_reference(reference: &Reference, first: bool, out: &mut String) {
    let mut emitted = false;
    for group in &reference.snaks {
        for snak in &group.snaks {
            let mut field = String::with_capacity(16);
            field.push('\t');
            if !first && !emitted {
                field.push('!');
            }
            field.push('S');
            field.push_str(snak.property.strip_prefix('P').unwrap_or(&snak.property));
            field.push('\t');
            if encode_snak(&snak.value, &mut field) {
                out.push_str(&field);
                emitted = true;
            }
        }
    }
}
