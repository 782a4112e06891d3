// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public gallery pages.

use atelier_core::{Item, Language};
use atelier_i18n::Catalog;
use axum::response::Html;

use super::{display_date, escape_html, kind_label_key, layout};
use crate::locale::PageContext;

/// The gallery listing, filtered to one kind or showing everything.
pub fn index_page(
    catalog: &Catalog,
    ctx: &PageContext,
    items: &[Item],
    kind: &str,
) -> Html<String> {
    let lang = ctx.lang;
    let heading = match kind {
        "all" => catalog.get(lang, "latest").to_string(),
        other => match kind_label_key(other) {
            Some(key) => catalog.get(lang, key).to_string(),
            None => other.to_string(),
        },
    };

    let mut body = format!("<h2>{}</h2>\n", escape_html(&heading));
    if items.is_empty() {
        body.push_str(&format!(
            "<p class=\"muted\">{}</p>\n",
            escape_html(catalog.get(lang, "no_items"))
        ));
    } else {
        body.push_str("<ul class=\"cards\">\n");
        for item in items {
            body.push_str(&card(catalog, ctx, item));
            body.push('\n');
        }
        body.push_str("</ul>\n");
    }

    layout(catalog, ctx, &heading, &body)
}

/// The detail page for a single item.
pub fn item_page(catalog: &Catalog, ctx: &PageContext, item: &Item) -> Html<String> {
    let lang = ctx.lang;
    let title = display_title(item, lang);

    let mut body = format!(
        "<article>\n<h2>{}</h2>\n<p class=\"muted\">{}</p>\n",
        escape_html(&title),
        display_date(&item.created_at),
    );
    if let Some(media) = media_html(catalog, lang, item) {
        body.push_str(&format!("<div class=\"media\">{media}</div>\n"));
    }
    let text = item.body(lang);
    if !text.is_empty() {
        body.push_str(&format!(
            "<div class=\"prose\">{}</div>\n",
            escape_html(text)
        ));
    }
    body.push_str("</article>\n");
    body.push_str(&format!(
        "<p><a href=\"/?lang={lang}\">{}</a></p>\n",
        escape_html(catalog.get(lang, "back"))
    ));

    layout(catalog, ctx, &title, &body)
}

fn display_title(item: &Item, lang: Language) -> String {
    let title = item.title(lang);
    if title.is_empty() {
        format!("#{}", item.id)
    } else {
        title.to_string()
    }
}

fn card(catalog: &Catalog, ctx: &PageContext, item: &Item) -> String {
    let lang = ctx.lang;
    let media = media_html(catalog, lang, item).unwrap_or_else(|| excerpt(item.body(lang)));
    format!(
        "<li class=\"card\">{media}<h3><a href=\"/item/{id}?lang={lang}\">{title}</a></h3>\
         <p class=\"muted\">{date}</p></li>",
        id = item.id,
        title = escape_html(&display_title(item, lang)),
        date = display_date(&item.created_at),
    )
}

/// Inline player or preview for the attached file, by item kind.
///
/// Photos and artwork embed an image, audio and video get native players,
/// everything else falls back to a plain "open" link. `None` when the item
/// has no file.
fn media_html(catalog: &Catalog, lang: Language, item: &Item) -> Option<String> {
    let src = escape_html(item.file_path.as_deref()?);
    let html = match item.kind.as_str() {
        "photo" | "art" => format!(
            "<img src=\"{src}\" alt=\"{}\">",
            escape_html(item.title(lang))
        ),
        "audio" => format!("<audio controls src=\"{src}\"></audio>"),
        "video" => format!("<video controls src=\"{src}\"></video>"),
        _ => format!(
            "<p><a href=\"{src}\">{}</a></p>",
            escape_html(catalog.get(lang, "open"))
        ),
    };
    Some(html)
}

fn excerpt(body: &str) -> String {
    const MAX_CHARS: usize = 160;
    let mut chars = body.chars();
    let mut out: String = chars.by_ref().take(MAX_CHARS).collect();
    if chars.next().is_some() {
        out.push('…');
    }
    format!("<p>{}</p>", escape_html(&out))
}
