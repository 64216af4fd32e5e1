#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
use chrono::NaiveDate;
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn locale_list(lang: &str) -> js_sys::Array {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str(lang));
    arr
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let nf = Intl::NumberFormat::new(&locale_list(&bundle.lang), &Object::new());
            nf.format()
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

/// Format an ISO 8601 date string using the current locale (browser-side)
#[must_use]
pub fn fmt_date_iso(date_iso: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let date = Date::new(&JsValue::from_str(date_iso));
            date.to_locale_date_string(&bundle.lang, &JsValue::UNDEFINED)
                .as_string()
                .unwrap_or_else(|| date_iso.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        date_iso.to_string()
    }
}

#[must_use]
pub fn fmt_date(date: NaiveDate) -> String {
    fmt_date_iso(&date.format("%Y-%m-%d").to_string())
}

/// Format a euro amount given in cents.
#[must_use]
pub fn fmt_currency(cents: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let amount = riverside_core::numbers::cents_to_f64(cents);
        with_bundle(|bundle| {
            let opts = Object::new();
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("style"),
                &JsValue::from_str("currency"),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("currency"),
                &JsValue::from_str("EUR"),
            );
            let nf = Intl::NumberFormat::new(&locale_list(&bundle.lang), &opts);
            nf.format()
                .call1(&nf, &JsValue::from_f64(amount))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| riverside_core::format_euros(cents))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        riverside_core::format_euros(cents)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_formatters_fall_back_to_plain_text() {
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_date_iso("2025-11-02"), "2025-11-02");
        assert_eq!(
            fmt_date(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()),
            "2025-11-09"
        );
    }

    #[test]
    fn currency_is_euros() {
        assert_eq!(fmt_currency(8000), "€80.00");
        assert_eq!(fmt_currency(1850), "€18.50");
    }
}
