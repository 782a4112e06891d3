// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-request language resolution.
//!
//! Precedence: `lang` query parameter, then `lang` cookie, then an
//! `Accept-Language` substring scan (Italian before English before Arabic),
//! then the Arabic default. The query parameter also decides whether the
//! preference gets persisted: any non-empty value, valid or not, marks the
//! resolution as explicit and the *resolved* language is written back to the
//! cookie.

use std::str::FromStr;

use atelier_core::Language;

/// Outcome of resolving the request language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub lang: Language,
    /// True when a non-empty `lang` query parameter was present.
    pub explicit: bool,
}

/// Resolve the language for one request.
pub fn resolve(
    query: Option<&str>,
    cookie: Option<&str>,
    accept_language: Option<&str>,
) -> Resolution {
    let explicit = query.is_some_and(|q| !q.is_empty());

    if let Some(q) = query {
        if let Ok(lang) = Language::from_str(q) {
            return Resolution { lang, explicit };
        }
    }

    if let Some(c) = cookie {
        if let Ok(lang) = Language::from_str(c) {
            return Resolution { lang, explicit };
        }
    }

    if let Some(al) = accept_language {
        let al = al.to_ascii_lowercase();
        for lang in [Language::It, Language::En, Language::Ar] {
            if al.contains(lang.code()) {
                return Resolution { lang, explicit };
            }
        }
    }

    Resolution {
        lang: Language::Ar,
        explicit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_wins_over_cookie_and_header() {
        let r = resolve(Some("it"), Some("en"), Some("ar"));
        assert_eq!(r.lang, Language::It);
        assert!(r.explicit);
    }

    #[test]
    fn query_is_case_insensitive() {
        let r = resolve(Some("EN"), None, None);
        assert_eq!(r.lang, Language::En);
        assert!(r.explicit);
    }

    #[test]
    fn invalid_query_is_still_explicit_and_falls_through() {
        let r = resolve(Some("fr"), Some("en"), None);
        assert_eq!(r.lang, Language::En);
        assert!(r.explicit, "invalid value still persists the fallback");
    }

    #[test]
    fn empty_query_is_not_explicit() {
        let r = resolve(Some(""), Some("it"), None);
        assert_eq!(r.lang, Language::It);
        assert!(!r.explicit);
    }

    #[test]
    fn cookie_wins_over_header() {
        let r = resolve(None, Some("en"), Some("it-IT,it;q=0.9"));
        assert_eq!(r.lang, Language::En);
        assert!(!r.explicit);
    }

    #[test]
    fn invalid_cookie_falls_through_to_header() {
        let r = resolve(None, Some("xx"), Some("en-US,en;q=0.9"));
        assert_eq!(r.lang, Language::En);
    }

    #[test]
    fn header_scan_prefers_italian_then_english_then_arabic() {
        assert_eq!(
            resolve(None, None, Some("it-IT,en;q=0.8")).lang,
            Language::It
        );
        assert_eq!(
            resolve(None, None, Some("en-US,ar;q=0.8")).lang,
            Language::En
        );
        assert_eq!(resolve(None, None, Some("ar-LY")).lang, Language::Ar);
    }

    #[test]
    fn everything_absent_defaults_to_arabic() {
        let r = resolve(None, None, None);
        assert_eq!(r.lang, Language::Ar);
        assert!(!r.explicit);
    }

    #[test]
    fn unrelated_header_defaults_to_arabic() {
        let r = resolve(None, None, Some("de-DE,fr;q=0.9"));
        assert_eq!(r.lang, Language::Ar);
    }
}
