mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_currency, fmt_date, fmt_date_iso, fmt_number};
pub use locales::{DEFAULT_LOCALE, LocaleMeta, locales};
pub use render::{t, tr, tr_count};
