//! Localization provider.
//!
//! String bundles are static JSON embedded per locale and resident in
//! memory; the active bundle lives in a thread-local initialized once from
//! the persisted preference. French is the default and the fallback for any
//! missing key or unsupported stored code.

use atlasrent_core::Lang;
#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const STORAGE_KEY: &str = "atlasrent.locale";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "fr",
        name: "Français",
        rtl: false,
    },
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("fr", include_str!("../i18n/fr.json")),
    ("en", include_str!("../i18n/en.json")),
    ("ar", include_str!("../i18n/ar.json")),
];

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    translations: Value,
    fallback: Value,
}

fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let rtl = LOCALE_META.iter().any(|m| m.code == lang && m.rtl);

    let fallback = load_translations("fr")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl,
        translations,
        fallback,
    })
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("fr").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "fr".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

/// Persisted preference, validated against the supported set. Absent or
/// unknown stored values resolve to French.
fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .filter(|stored| is_supported(stored))
            .unwrap_or_else(|| "fr".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "fr".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

/// Switch the active language.
///
/// A no-op for codes outside the supported set. Otherwise swaps the active
/// bundle, persists the choice and updates the `<html lang, dir>` attributes
/// (right-to-left only for Arabic).
pub fn set_lang(lang: &str) {
    if !is_supported(lang) {
        return;
    }
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    CURRENT.with(|cell| {
                        let read = cell.borrow();
                        let _ = el.set_attribute("lang", &read.lang);
                        let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
                    });
                }
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, lang);
            }
        }
    }
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// Current language as the core [`Lang`] value, for description lookups and
/// message composition.
#[must_use]
pub fn current() -> Lang {
    Lang::parse(&current_lang()).unwrap_or_default()
}

/// Check if the current language uses right-to-left text direction.
#[must_use]
pub fn is_rtl() -> bool {
    CURRENT.with(|c| c.borrow().rtl)
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let keys: Vec<&str> = key.split('.').collect();
    let mut current = obj;

    for k in keys {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        match rules.select(count).as_string() {
            Some(selected) => selected,
            None => {
                if (count - 1.0).abs() < f64::EPSILON {
                    "one".to_string()
                } else if count.abs() < f64::EPSILON {
                    "zero".to_string()
                } else {
                    "other".to_string()
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        if (count - 1.0).abs() < f64::EPSILON {
            "one".to_string()
        } else if count.abs() < f64::EPSILON {
            "zero".to_string()
        } else {
            "other".to_string()
        }
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            // Prefer plural categories if count provided
            if let Some(count_str) = args.and_then(|m| m.get("count")).copied() {
                if let Ok(count) = count_str.parse::<f64>() {
                    let category = plural_category(lang, count);
                    if let Some(s) = map.get(&category).and_then(Value::as_str) {
                        s.to_string()
                    } else if let Some(default) = map.get("_").and_then(Value::as_str) {
                        default.to_string()
                    } else {
                        return None;
                    }
                } else {
                    map.get("_")
                        .and_then(Value::as_str)
                        .map(std::string::ToString::to_string)?
                }
            } else if let Some(default) = map.get("_").and_then(Value::as_str) {
                default.to_string()
            } else {
                return None;
            }
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language.
///
/// Falls back to French when the key is missing from the active bundle and
/// to the key itself when no bundle knows it.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution.
///
/// Variables in the translated string use the format `{key}` or `{{key}}`;
/// a `count` argument selects the plural category.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Format a number using the current locale via Intl.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        CURRENT.with(|c| {
            let lang = c.borrow().lang.clone();
            let locales = {
                let arr = Array::new();
                arr.push(&JsValue::from_str(&lang));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Format an ISO 8601 date string using the current locale (browser-side).
#[must_use]
pub fn fmt_date_iso(date_iso: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        CURRENT.with(|c| {
            let lang = c.borrow().lang.clone();
            let date = js_sys::Date::new(&JsValue::from_str(date_iso));
            date.to_locale_date_string(&lang, &JsValue::UNDEFINED)
                .as_string()
                .unwrap_or_else(|| date_iso.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        date_iso.to_string()
    }
}
