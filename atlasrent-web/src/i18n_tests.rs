//! Locale bundle coverage tests: every locale must expose the same keys so
//! a missing translation is caught here instead of falling back silently.

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

/// Collect dotted leaf-key paths. A plural object (carrying `_`, `one` or
/// `other`) counts as one leaf so locales may differ in plural categories.
fn leaf_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            if map.contains_key("_") || map.contains_key("one") || map.contains_key("other") {
                out.insert(prefix.to_string());
                return;
            }
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_keys(&path, child, out);
            }
        }
        _ => {
            out.insert(prefix.to_string());
        }
    }
}

fn keys_of(locale: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    leaf_keys("", &load_locale(locale), &mut keys);
    keys
}

#[test]
fn bundle_files_cover_exactly_the_supported_set() {
    let codes = locale_codes();
    assert_eq!(codes, vec!["ar", "en", "fr"]);
    let supported: Vec<&str> = crate::i18n::locales().iter().map(|m| m.code).collect();
    for code in &codes {
        assert!(supported.contains(&code.as_str()));
    }
}

#[test]
fn every_locale_exposes_the_same_keys() {
    let reference = keys_of("fr");
    assert!(!reference.is_empty());
    for locale in locale_codes() {
        let keys = keys_of(&locale);
        let missing: Vec<_> = reference.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&reference).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{locale}: missing {missing:?}, extra {extra:?}"
        );
    }
}

#[test]
fn keys_used_by_the_code_resolve() {
    const REQUIRED: &[&str] = &[
        "nav.home",
        "nav.booking",
        "hero.title",
        "fleet.title",
        "fleet.results_count",
        "fleet.categories.suv-premium",
        "specs.transmission.auto",
        "specs.fuel.petrol",
        "detail.price_note",
        "booking.form.whatsapp",
        "booking.errors.missing_fields",
        "booking.errors.return_before_pickup",
        "booking.days",
        "errors.network",
        "errors.not_found",
        "errors.vehicle_not_found",
        "errors.rejected",
        "common.loading",
        "notfound.title",
    ];
    let keys = keys_of("fr");
    for key in REQUIRED {
        assert!(keys.contains(*key), "missing required key {key}");
    }
}

#[test]
fn plural_entries_carry_a_default_category() {
    for locale in locale_codes() {
        let value = load_locale(&locale);
        for key in ["fleet.results_count", "booking.days"] {
            let mut node = &value;
            for part in key.split('.') {
                node = node.get(part).unwrap_or_else(|| panic!("{locale}: {key}"));
            }
            assert!(
                node.get("_").and_then(Value::as_str).is_some(),
                "{locale}: {key} needs a `_` default"
            );
        }
    }
}
