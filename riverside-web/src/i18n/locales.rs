use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LOCALE: &str = "en";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "nl",
        name: "Nederlands",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("nl", include_str!("../../i18n/nl.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parsed bundle for `lang`, or `None` when the locale is unknown.
pub fn load_translations(lang: &str) -> Option<Value> {
    let raw = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(raw)
        .inspect_err(|err| log::error!("locale {lang} is malformed: {err}"))
        .ok()
}
