#![allow(missing_docs)]

use avm_core::{CategoryResolver, MissingEntry, ResolveError, prepare_labels};
use avm_model::{
    CategoryLabel, DistanceValue, InputRecord, Letter, ReferenceTables, TaxonomyWord,
};
use avm_standards::load_default_tables;

fn default_tables() -> ReferenceTables {
    load_default_tables().expect("embedded tables load")
}

fn resolve(tables: &ReferenceTables, distance: &str, category: &str) -> (String, String) {
    let resolution = CategoryResolver::new(tables)
        .resolve(&DistanceValue::parse(distance), &prepare_labels(category))
        .unwrap();
    (resolution.number(), resolution.word())
}

#[test]
fn test_every_default_label_resolves_with_table_values() {
    let tables = default_tables();
    for (label, number) in tables.numbers.iter() {
        for distance in ["", "0", "5", "50000", "D", "far"] {
            let (resolved_number, resolved_word) = resolve(&tables, distance, label.as_str());
            let letter = avm_core::classify(label.as_str(), &DistanceValue::parse(distance));
            assert_eq!(resolved_number, format!("{}{}", letter.prefix(), number));
            assert_eq!(
                Some(resolved_word.as_str()),
                tables.words.get(number.as_str()).map(TaxonomyWord::as_str),
                "{label}"
            );
        }
    }
}

#[test]
fn test_galaxy_spiral_at_zero() {
    let tables = default_tables();
    assert_eq!(
        resolve(&tables, "0", "Galaxy > Spiral"),
        ("A.5.1.1".to_string(), "Galaxy.Spiral".to_string())
    );
}

#[test]
fn test_supernova_at_fifty_thousand() {
    let tables = default_tables();
    assert_eq!(
        resolve(&tables, "50000", "Star > Supernova"),
        ("C.3.1.8".to_string(), "Star.Blue Supergiant".to_string())
    );
}

#[test]
fn test_unknown_alone_is_blank() {
    let tables = default_tables();
    assert_eq!(
        resolve(&tables, "50000", "unknown"),
        (String::new(), String::new())
    );
}

#[test]
fn test_escaped_release_export_field() {
    let tables = default_tables();
    assert_eq!(
        resolve(
            &tables,
            "-;z=1.5",
            "X.Galaxy &gt; Interacting, Galaxy &gt; Spiral"
        ),
        (
            "D.5.1.7, D.5.5.2; D.5.1.1".to_string(),
            "Galaxy.Interacting, Galaxy.Multiple; Galaxy.Spiral".to_string()
        )
    );
}

#[test]
fn test_unlisted_category_fails() {
    let tables = default_tables();
    let record = InputRecord {
        release_id: "2013-07-c".to_string(),
        category_text: "Galaxy > Spiral, Galaxy > Ring".to_string(),
        object_name: "Hoag's Object".to_string(),
        distance: "600000000".to_string(),
    };

    let error = CategoryResolver::new(&tables)
        .resolve_record(&record)
        .unwrap_err();

    assert_eq!(
        error,
        ResolveError::UnresolvableCategory {
            label: CategoryLabel::from("Galaxy > Ring"),
            missing: MissingEntry::Number,
        }
    );
}

#[test]
fn test_resolved_record_letter_ignores_magellanic_override() {
    let tables = default_tables();
    let record = InputRecord {
        release_id: "2013-08-a".to_string(),
        category_text: "Galaxy > Magellanic Cloud".to_string(),
        object_name: "LMC".to_string(),
        distance: "".to_string(),
    };

    let resolved = CategoryResolver::new(&tables)
        .resolve_record(&record)
        .unwrap();

    assert_eq!(resolved.letter, Letter::None);
    assert_eq!(resolved.number, "C.5.1.6");
}
