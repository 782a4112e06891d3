// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Atelier workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One of the three site languages.
///
/// Arabic is the default and the only right-to-left language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
    It,
}

impl Language {
    /// All languages, in the order the site's language switcher shows them.
    pub const ALL: [Language; 3] = [Language::Ar, Language::En, Language::It];

    /// The lowercase ISO 639-1 code (`ar`, `en`, `it`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::It => "it",
        }
    }

    /// Text direction for the HTML `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En | Language::It => "ltr",
        }
    }
}

/// A single portfolio entry as stored in the `items` table.
///
/// `kind` maps to the SQL column `type` (reserved word in Rust). Localized
/// titles and bodies are all optional; a missing localization renders as
/// empty rather than falling back to another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub kind: String,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub title_it: Option<String>,
    pub body_ar: Option<String>,
    pub body_en: Option<String>,
    pub body_it: Option<String>,
    /// Public-relative path (`/public/uploads/<name>`) of the attached file.
    pub file_path: Option<String>,
    /// ISO-8601 UTC timestamp with millisecond precision, set once at insert.
    pub created_at: String,
}

impl Item {
    /// The title in the requested language, empty when unset.
    pub fn title(&self, lang: Language) -> &str {
        let title = match lang {
            Language::Ar => &self.title_ar,
            Language::En => &self.title_en,
            Language::It => &self.title_it,
        };
        title.as_deref().unwrap_or("")
    }

    /// The body in the requested language, empty when unset.
    pub fn body(&self, lang: Language) -> &str {
        let body = match lang {
            Language::Ar => &self.body_ar,
            Language::En => &self.body_en,
            Language::It => &self.body_it,
        };
        body.as_deref().unwrap_or("")
    }
}

/// The write-side value for creating or updating an [`Item`].
///
/// `file_path` is the candidate path for this save only: `Some` replaces the
/// stored path, `None` leaves an existing one untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub kind: String,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub title_it: Option<String>,
    pub body_ar: Option<String>,
    pub body_en: Option<String>,
    pub body_it: Option<String>,
    pub file_path: Option<String>,
}
