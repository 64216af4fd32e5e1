use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

// English and Dutch share the one/other split.
fn host_plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| host_plural_category(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        host_plural_category(count).to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|raw| raw.parse::<f64>().ok());
            count
                .and_then(|count| map.get(&plural_category(lang, count)))
                .or_else(|| map.get("other"))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
///
/// Plural objects pick their `one`/`other` branch from the `count` argument.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Shorthand for a plural key whose only argument is `count`.
#[must_use]
pub fn tr_count(key: &str, count: u64) -> String {
    let count = count.to_string();
    let args = BTreeMap::from([("count", count.as_str())]);
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_branch_follows_count() {
        let value = serde_json::json!({ "one": "{count} book", "other": "{count} books" });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "1 book");
        args.insert("count", "0");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "0 books");
        assert_eq!(render_value(&value, "en", None).unwrap(), "{count} books");
    }

    #[test]
    fn missing_keys_fall_back_to_english_then_key() {
        crate::i18n::set_lang("nl");
        assert_eq!(t("nav.books"), "Boeken");
        assert_eq!(t("no.such.key"), "no.such.key");
        assert_eq!(tr_count("books.count", 6), "6 boeken");
        crate::i18n::set_lang("en");
        assert_eq!(tr_count("points.count", 1), "1 point");
    }
}
