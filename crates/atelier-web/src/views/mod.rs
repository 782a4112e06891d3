// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-rendered HTML.
//!
//! Pages are plain `format!`-built strings wrapped in a shared [`layout`]
//! shell: header with site name, kind filters and language switcher, the
//! page body, and a footer with the admin link. All dynamic text passes
//! through [`escape_html`]. The `dir` attribute flips the whole document
//! to right-to-left for Arabic.

pub mod admin;
pub mod public;

use atelier_core::Language;
use atelier_i18n::Catalog;
use axum::response::Html;

use crate::locale::{PageContext, query_param};

/// Gallery filters in nav order: the item kind and its catalog label key.
pub const NAV_FILTERS: &[(&str, &str)] = &[
    ("all", "home"),
    ("photo", "photos"),
    ("art", "art"),
    ("writing", "writings"),
    ("audio", "audio"),
    ("video", "video"),
    ("pdf", "pdf"),
];

/// Catalog label key for an item kind, `None` for unknown kinds.
pub(crate) fn kind_label_key(kind: &str) -> Option<&'static str> {
    NAV_FILTERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, key)| *key)
}

/// Minimal HTML escaping for text nodes and attribute values.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
:root{color-scheme:light dark}\
body{font-family:system-ui,sans-serif;max-width:960px;margin:0 auto;padding:0 1rem;line-height:1.6}\
header{display:flex;flex-wrap:wrap;align-items:baseline;gap:1rem;border-bottom:1px solid #8884;padding:.75rem 0}\
header h1{font-size:1.3rem;margin:0}\
header h1 a{text-decoration:none;color:inherit}\
nav a{margin-inline-end:.6rem}\
nav a.active,.langs a.active{font-weight:bold;text-decoration:underline}\
.langs{margin-inline-start:auto}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem;padding:0;list-style:none}\
.card{border:1px solid #8884;border-radius:8px;padding:.75rem}\
.card img,.card video{width:100%;height:auto;border-radius:4px}\
.card audio{width:100%}\
.card h3{margin:.5rem 0 0}\
.media img,.media video{max-width:100%}\
.prose{white-space:pre-wrap}\
.muted{color:#888;font-size:.85rem}\
.error{color:#c0392b}\
form.stack label{display:block;margin-top:.75rem}\
input,select,textarea{width:100%;box-sizing:border-box;padding:.4rem;margin-top:.25rem;font:inherit}\
textarea{min-height:6rem}\
button{margin-top:1rem;padding:.5rem 1.25rem;cursor:pointer}\
.inline{display:inline}\
.inline button{margin:0}\
table{width:100%;border-collapse:collapse}\
th,td{border-bottom:1px solid #8884;padding:.5rem;text-align:start}\
.actions{display:flex;gap:1rem;align-items:center;margin:1rem 0}\
footer{border-top:1px solid #8884;margin-top:2rem;padding:.75rem 0;font-size:.85rem}";

/// Wrap a page body in the full document shell.
pub(crate) fn layout(catalog: &Catalog, ctx: &PageContext, title: &str, body: &str) -> Html<String> {
    let lang = ctx.lang;
    let site = escape_html(&ctx.site_name);

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\" dir=\"{dir}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <h1><a href=\"/?lang={lang}\">{site}</a></h1>\n\
         <nav>{nav}</nav>\n\
         <div class=\"langs\">{langs}</div>\n\
         </header>\n\
         <main>\n{body}\n</main>\n\
         <footer><a href=\"/admin?lang={lang}\">{admin}</a></footer>\n\
         </body>\n\
         </html>\n",
        dir = lang.dir(),
        title = escape_html(title),
        nav = nav_links(catalog, ctx),
        langs = lang_switcher(ctx),
        admin = escape_html(catalog.get(lang, "admin")),
    ))
}

fn nav_links(catalog: &Catalog, ctx: &PageContext) -> String {
    let current = if ctx.active_path == "/" {
        query_param(&ctx.preserved_query, "type")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "all".to_string())
    } else {
        String::new()
    };

    let mut out = String::new();
    for (kind, label_key) in NAV_FILTERS {
        let href = if *kind == "all" {
            format!("/?lang={}", ctx.lang)
        } else {
            format!("/?type={kind}&lang={}", ctx.lang)
        };
        let class = if current == *kind {
            " class=\"active\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<a href=\"{}\"{class}>{}</a>",
            escape_html(&href),
            escape_html(catalog.get(ctx.lang, label_key)),
        ));
    }
    out
}

fn lang_switcher(ctx: &PageContext) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let class = if *lang == ctx.lang {
                " class=\"active\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{class}>{}</a>",
                escape_html(&switch_href(ctx, *lang)),
                lang.code().to_uppercase(),
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Link to the current page in another language, keeping the rest of the
/// query string intact.
fn switch_href(ctx: &PageContext, lang: Language) -> String {
    if ctx.preserved_query.is_empty() {
        format!("{}?lang={lang}", ctx.active_path)
    } else {
        format!("{}?{}&lang={lang}", ctx.active_path, ctx.preserved_query)
    }
}

/// The item's date for listings, the `YYYY-MM-DD` part of `created_at`.
pub(crate) fn display_date(created_at: &str) -> &str {
    created_at.split('T').next().unwrap_or(created_at)
}
