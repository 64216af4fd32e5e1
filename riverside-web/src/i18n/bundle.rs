use crate::i18n::locales::{DEFAULT_LOCALE, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_STORAGE_KEY: &str = "riverside.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LOCALE)?;
    let translations = if lang == DEFAULT_LOCALE {
        fallback.clone()
    } else {
        load_translations(lang)?
    };
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LOCALE.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .filter(|code| is_supported(code))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LOCALE.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang())
            .or_else(|| build_bundle(DEFAULT_LOCALE))
            .unwrap_or_else(empty_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active locale.
///
/// Unknown codes are ignored. In the browser the choice is persisted and
/// `<html lang>` is updated.
pub fn set_lang(lang: &str) {
    if !is_supported(lang) {
        log::warn!("ignoring unsupported locale {lang}");
        return;
    }
    let Some(bundle) = build_bundle(lang) else {
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().document_element() {
            let _ = el.set_attribute("lang", lang);
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dutch_bundle_keeps_english_fallback() {
        let bundle = build_bundle("nl").expect("nl bundle");
        assert_eq!(bundle.lang, "nl");
        assert_eq!(bundle.translations["nav"]["books"], "Boeken");
        assert_eq!(bundle.fallback["nav"]["books"], "Books");
    }

    #[test]
    fn unsupported_locale_leaves_current_bundle() {
        set_lang("nl");
        set_lang("tlh");
        assert_eq!(current_lang(), "nl");
        set_lang("en");
        assert_eq!(current_lang(), "en");
    }
}
