// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The trilingual UI string catalog.
//!
//! Strings are embedded at compile time from `locales/{ar,en,it}.json` and
//! loaded once at startup into an immutable [`Catalog`]. Loading is strict:
//! a malformed file or a key-set mismatch between the three languages is a
//! startup error, so a deployed binary can never be missing a translation.

use std::collections::{BTreeSet, HashMap};

use atelier_core::{AtelierError, Language};

const AR_JSON: &str = include_str!("../locales/ar.json");
const EN_JSON: &str = include_str!("../locales/en.json");
const IT_JSON: &str = include_str!("../locales/it.json");

/// Immutable translation tables for the three site languages.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Load and cross-check the embedded locale files.
    pub fn load() -> Result<Self, AtelierError> {
        let sources = [
            (Language::Ar, AR_JSON),
            (Language::En, EN_JSON),
            (Language::It, IT_JSON),
        ];

        let mut tables = HashMap::new();
        for (lang, raw) in sources {
            let table: HashMap<String, String> = serde_json::from_str(raw).map_err(|e| {
                AtelierError::Config(format!("malformed locale file for '{lang}': {e}"))
            })?;
            tables.insert(lang, table);
        }

        let catalog = Self { tables };
        catalog.check_key_sets()?;
        Ok(catalog)
    }

    /// Look up a UI string.
    ///
    /// A missing key is a programming error: it trips a `debug_assert!` in
    /// development builds and falls back to the English value, then to the
    /// key itself, in release builds.
    pub fn get(&self, lang: Language, key: &str) -> &str {
        if let Some(text) = self.tables.get(&lang).and_then(|t| t.get(key)) {
            return text;
        }
        debug_assert!(false, "missing translation key {key:?} for '{lang}'");
        self.tables
            .get(&Language::En)
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Every language must carry exactly the same key set.
    fn check_key_sets(&self) -> Result<(), AtelierError> {
        let keys = |lang: Language| -> BTreeSet<&str> {
            self.tables
                .get(&lang)
                .map(|t| t.keys().map(String::as_str).collect())
                .unwrap_or_default()
        };

        let reference = keys(Language::En);
        for lang in [Language::Ar, Language::It] {
            let other = keys(lang);
            if other != reference {
                let missing: Vec<&str> = reference.difference(&other).copied().collect();
                let extra: Vec<&str> = other.difference(&reference).copied().collect();
                return Err(AtelierError::Config(format!(
                    "locale key sets differ for '{lang}': missing {missing:?}, extra {extra:?}"
                )));
            }
        }
        Ok(())
    }
}
