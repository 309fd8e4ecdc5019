//! Throughput harness for the line serializer using city data.
//!
//! Loads a JSON array of city records, converts each into an entity record,
//! serializes them across worker threads through a shared sink, and reports
//! sizes and throughput for plain and zstd-compressed output.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;

use serde::Deserialize;

use qstab::{
    Calendar, Entity, EntitySink, Rank, Reference, SiteLink, Snak, SnakGroup, SnakValue,
    Statement, Timestamp, Value,
};

/// Wikidata property ids used by the generated statements.
mod props {
    pub const INSTANCE_OF: &str = "P31";
    pub const COUNTRY: &str = "P17";
    pub const COORDINATES: &str = "P625";
    pub const POPULATION: &str = "P1082";
    pub const POINT_IN_TIME: &str = "P585";
    pub const STATED_IN: &str = "P248";
}

/// Well-known item ids.
mod items {
    pub const CITY: &str = "Q515";
    pub const GEONAMES: &str = "Q830106";
}

const ENTITY_NS: &str = "http://www.wikidata.org/entity/";
const WORKERS: usize = 8;
const ZSTD_LEVEL: i32 = 11;

#[derive(Debug, Deserialize)]
struct City {
    id: u32,
    name: String,
    country_code: String,
    country_name: String,
    latitude: String,
    longitude: String,
    native: Option<String>,
    population: Option<i64>,
    translations: Option<HashMap<String, String>>,
    #[serde(rename = "wikiDataId")]
    wikidata_id: Option<String>,
}

fn item_snak(property: &str, target: &str) -> Snak {
    Snak::new(property, SnakValue::Value(Value::Item(target.to_string())))
}

/// Converts one city record into an entity record.
fn build_city_entity(city: &City) -> Entity {
    let id = city
        .wikidata_id
        .clone()
        .unwrap_or_else(|| format!("Q{}", 100_000_000 + u64::from(city.id)));
    let mut entity = Entity::new(id);

    entity.labels.insert("en".to_string(), city.name.clone());
    entity.descriptions.insert(
        "en".to_string(),
        format!("city in {}", city.country_name),
    );
    if let Some(native) = &city.native {
        if !native.is_empty() && native != &city.name {
            entity
                .aliases
                .insert("en".to_string(), vec![native.clone()]);
        }
    }
    if let Some(translations) = &city.translations {
        for (lang, translation) in translations {
            entity.labels.insert(lang.clone(), translation.clone());
        }
    }

    // instance of: city, sourced from GeoNames
    let mut instance_of = Statement::new(item_snak(props::INSTANCE_OF, items::CITY));
    instance_of.references.push(Reference {
        snaks: vec![SnakGroup::new(
            props::STATED_IN,
            vec![item_snak(props::STATED_IN, items::GEONAMES)],
        )],
    });
    entity
        .claims
        .insert(props::INSTANCE_OF.to_string(), vec![instance_of]);

    entity.claims.insert(
        props::COUNTRY.to_string(),
        vec![Statement::new(Snak::new(
            props::COUNTRY,
            SnakValue::Value(Value::Text(city.country_code.clone())),
        ))],
    );

    if let (Ok(latitude), Ok(longitude)) = (
        city.latitude.parse::<f64>(),
        city.longitude.parse::<f64>(),
    ) {
        entity.claims.insert(
            props::COORDINATES.to_string(),
            vec![Statement::new(Snak::new(
                props::COORDINATES,
                SnakValue::Value(Value::Coordinate {
                    latitude,
                    longitude,
                }),
            ))],
        );
    }

    if let Some(population) = city.population {
        let mut statement = Statement::new(Snak::new(
            props::POPULATION,
            SnakValue::Value(Value::Quantity {
                amount: format!("+{population}"),
                lower_bound: None,
                upper_bound: None,
                unit: Some(format!("{ENTITY_NS}Q11573")),
            }),
        ));
        statement.rank = Rank::Preferred;
        statement.qualifiers.push(SnakGroup::new(
            props::POINT_IN_TIME,
            vec![Snak::new(
                props::POINT_IN_TIME,
                SnakValue::Value(Value::Time {
                    timestamp: Timestamp::date(2024, 1, 1),
                    precision: 9,
                    calendar: Calendar::Gregorian,
                }),
            )],
        ));
        entity
            .claims
            .insert(props::POPULATION.to_string(), vec![statement]);
    }

    entity
        .sitelinks
        .push(SiteLink::new("enwiki", city.name.clone()));

    entity
}

fn main() {
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../../../out/cities.json".to_string());

    println!("Loading cities from: {}", data_path);
    let json_data = fs::read_to_string(&data_path).expect("Failed to read cities file");
    let cities: Vec<City> = serde_json::from_str(&json_data).expect("Failed to parse cities JSON");
    println!("Loaded {} cities", cities.len());

    // Serialize across worker threads into one shared in-memory sink,
    // the way a dump run drives the serializer.
    let encode_start = Instant::now();
    let sink = EntitySink::new(Vec::new());
    let chunk_size = cities.len().div_ceil(WORKERS).max(1);
    thread::scope(|scope| {
        for chunk in cities.chunks(chunk_size) {
            let sink = &sink;
            scope.spawn(move || {
                for city in chunk {
                    let entity = build_city_entity(city);
                    sink.write_entity(&entity).expect("Failed to encode city");
                }
            });
        }
    });
    let encoded = sink.into_inner();
    let encode_time = encode_start.elapsed();

    println!(
        "\nEncode ({} workers): {:?}",
        WORKERS, encode_time
    );
    println!(
        "  Throughput: {:.2} MB/s",
        (encoded.len() as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );

    let compress_start = Instant::now();
    let compressed =
        zstd::encode_all(encoded.as_slice(), ZSTD_LEVEL).expect("Failed to compress output");
    let compress_time = compress_start.elapsed();
    println!("Compress (zstd -{}): {:?}", ZSTD_LEVEL, compress_time);

    // Write output files next to the input.
    let input_path = Path::new(&data_path);
    let stem = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let parent = input_path.parent().unwrap_or(Path::new("."));

    let output_plain = parent.join(format!("{}.tsv", stem));
    let output_compressed = parent.join(format!("{}.tsv.zst", stem));
    fs::write(&output_plain, &encoded).expect("Failed to write .tsv file");
    fs::write(&output_compressed, &compressed).expect("Failed to write .tsv.zst file");

    println!("\n=== Output Files ===");
    println!("Plain:      {}", output_plain.display());
    println!("Compressed: {}", output_compressed.display());

    let line_count = encoded.iter().filter(|b| **b == b'\n').count();

    println!("\n=== Summary ===");
    println!("Cities: {}", cities.len());
    println!("Fact lines: {}", line_count);
    println!(
        "JSON size: {} bytes ({:.1} MB)",
        json_data.len(),
        json_data.len() as f64 / 1_000_000.0
    );
    println!(
        "TSV size: {} bytes ({:.1} MB)",
        encoded.len(),
        encoded.len() as f64 / 1_000_000.0
    );
    println!(
        "Compressed: {} bytes ({:.1} MB)",
        compressed.len(),
        compressed.len() as f64 / 1_000_000.0
    );
    println!(
        "Size vs JSON: {:.1}% (plain), {:.1}% (compressed)",
        100.0 * encoded.len() as f64 / json_data.len() as f64,
        100.0 * compressed.len() as f64 / json_data.len() as f64
    );
}
