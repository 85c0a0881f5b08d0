//! Display formatting with language-aware fallbacks
//!
//! Every helper takes the language explicitly so the functions stay pure and
//! usable from tests; nothing here reads ambient state.

use crate::state::Language;

/// Localized fallback for missing fields
pub fn not_specified(lang: Language) -> &'static str {
    match lang {
        Language::English => "Not specified",
        // غير محدد
        Language::Arabic => "\u{63A}\u{64A}\u{631} \u{645}\u{62D}\u{62F}\u{62F}",
    }
}

/// A value or the localized fallback when it is absent or empty
pub fn display_or_fallback(value: Option<&str>, lang: Language) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => not_specified(lang).to_string(),
    }
}

/// "12 years" / fallback when unknown
pub fn experience_label(years: Option<u32>, lang: Language) -> String {
    match years {
        Some(n) => match lang {
            Language::English => format!("{} years", n),
            // N سنة
            Language::Arabic => format!("{} \u{633}\u{646}\u{629}", n),
        },
        None => not_specified(lang).to_string(),
    }
}

/// First specialization of a record, or the localized fallback
pub fn primary_specialization(specializations: Option<&[String]>, lang: Language) -> String {
    specializations
        .and_then(|list| list.first())
        .cloned()
        .unwrap_or_else(|| not_specified(lang).to_string())
}

/// Render an RFC 3339 timestamp as a short date; unparseable input is shown
/// as-is rather than dropped.
pub fn format_join_date(date_string: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(date_string) {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => date_string.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_specified_per_language() {
        assert_eq!(not_specified(Language::English), "Not specified");
        assert_ne!(not_specified(Language::Arabic), not_specified(Language::English));
    }

    #[test]
    fn test_display_or_fallback() {
        assert_eq!(
            display_or_fallback(Some("Cardiology"), Language::English),
            "Cardiology"
        );
        assert_eq!(
            display_or_fallback(None, Language::English),
            "Not specified"
        );
        assert_eq!(
            display_or_fallback(Some("   "), Language::English),
            "Not specified"
        );
    }

    #[test]
    fn test_experience_label() {
        assert_eq!(experience_label(Some(12), Language::English), "12 years");
        assert_eq!(experience_label(None, Language::English), "Not specified");
    }

    #[test]
    fn test_primary_specialization() {
        let specs = vec!["Neurology".to_string(), "Stroke Care".to_string()];
        assert_eq!(
            primary_specialization(Some(&specs), Language::English),
            "Neurology"
        );
        assert_eq!(
            primary_specialization(Some(&[]), Language::English),
            "Not specified"
        );
        assert_eq!(
            primary_specialization(None, Language::English),
            "Not specified"
        );
    }

    #[test]
    fn test_format_join_date() {
        assert_eq!(format_join_date("2024-03-01T09:00:00Z"), "Mar 01, 2024");
        // unparseable input passes through
        assert_eq!(format_join_date("yesterday"), "yesterday");
    }
}
