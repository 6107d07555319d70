use tracing::warn;

/// Locale used when the configured one has no translations
pub const FALLBACK_LOCALE: &str = "en";

/// Switch user-facing messages to `locale`, falling back to English
pub fn set_locale(locale: &str) {
    let available = rust_i18n::available_locales!();

    if available.iter().any(|l| *l == locale) {
        rust_i18n::set_locale(locale);
    } else {
        warn!(
            "Locale '{}' not available ({:?}), using '{}'",
            locale, available, FALLBACK_LOCALE
        );
        rust_i18n::set_locale(FALLBACK_LOCALE);
    }
}
