// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin pages: login form, item table, and the create/edit form.

use atelier_core::Item;
use atelier_i18n::Catalog;
use axum::response::Html;

use super::{NAV_FILTERS, display_date, escape_html, layout};
use crate::locale::PageContext;

/// The login form, with an optional error line above it.
pub fn login_page(catalog: &Catalog, ctx: &PageContext, error: Option<&str>) -> Html<String> {
    let lang = ctx.lang;
    let login = escape_html(catalog.get(lang, "login"));

    let mut body = format!("<h2>{login}</h2>\n");
    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }
    body.push_str(&format!(
        "<form class=\"stack\" method=\"post\" action=\"/admin/login?lang={lang}\">\n\
         <input name=\"user\" placeholder=\"User\" autocomplete=\"username\" required>\n\
         <input type=\"password\" name=\"pass\" placeholder=\"Password\" \
         autocomplete=\"current-password\" required>\n\
         <button>{login}</button>\n\
         </form>\n",
    ));

    layout(catalog, ctx, catalog.get(lang, "login"), &body)
}

/// The item table with add, edit, delete and logout controls.
pub fn panel_page(catalog: &Catalog, ctx: &PageContext, items: &[Item]) -> Html<String> {
    let lang = ctx.lang;
    let t = |key: &str| escape_html(catalog.get(lang, key));

    let mut body = format!("<h2>{}</h2>\n", t("admin"));
    body.push_str(&format!(
        "<div class=\"actions\">\n\
         <a href=\"/admin/new?lang={lang}\">{add}</a>\n\
         <form class=\"inline\" method=\"post\" action=\"/admin/logout?lang={lang}\">\
         <button>{logout}</button></form>\n\
         </div>\n",
        add = t("add"),
        logout = t("logout"),
    ));

    if items.is_empty() {
        body.push_str(&format!("<p class=\"muted\">{}</p>\n", t("no_items")));
    } else {
        body.push_str(&format!(
            "<table>\n<tr><th>#</th><th></th><th>{title}</th><th></th><th></th><th></th></tr>\n",
            title = t("title"),
        ));
        for item in items {
            let title = item.title(lang);
            let title = if title.is_empty() {
                "-".to_string()
            } else {
                escape_html(title)
            };
            body.push_str(&format!(
                "<tr><td>{id}</td><td>{kind}</td><td>{title}</td><td class=\"muted\">{date}</td>\
                 <td><a href=\"/admin/edit/{id}?lang={lang}\">{edit}</a></td>\
                 <td><form class=\"inline\" method=\"post\" action=\"/admin/delete/{id}?lang={lang}\">\
                 <button>{delete}</button></form></td></tr>\n",
                id = item.id,
                kind = escape_html(&item.kind),
                date = display_date(&item.created_at),
                edit = t("edit"),
                delete = t("delete"),
            ));
        }
        body.push_str("</table>\n");
    }

    layout(catalog, ctx, catalog.get(lang, "admin"), &body)
}

/// The create/edit form. `item` is `None` for a new entry and for the
/// re-render after a save without a kind; both start blank.
pub fn edit_page(
    catalog: &Catalog,
    ctx: &PageContext,
    item: Option<&Item>,
    error: Option<&str>,
) -> Html<String> {
    let lang = ctx.lang;
    let t = |key: &str| escape_html(catalog.get(lang, key));
    let heading = if item.is_some() { t("edit") } else { t("add") };
    let text = |field: Option<&str>| escape_html(field.unwrap_or(""));

    let mut body = format!("<h2>{heading}</h2>\n");
    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }
    body.push_str(&format!(
        "<form class=\"stack\" method=\"post\" action=\"/admin/save?lang={lang}\" \
         enctype=\"multipart/form-data\">\n",
    ));
    if let Some(item) = item {
        body.push_str(&format!(
            "<input type=\"hidden\" name=\"id\" value=\"{}\">\n",
            item.id
        ));
        if let Some(file_path) = item.file_path.as_deref() {
            body.push_str(&format!(
                "<input type=\"hidden\" name=\"existing_file_path\" value=\"{}\">\n",
                escape_html(file_path)
            ));
        }
    }

    body.push_str(&format!(
        "<label>{choose}\n<select name=\"type\" required>\n<option value=\"\">{choose}</option>\n",
        choose = t("choose"),
    ));
    for (kind, label_key) in NAV_FILTERS.iter().filter(|(kind, _)| *kind != "all") {
        let selected = if item.is_some_and(|i| i.kind == *kind) {
            " selected"
        } else {
            ""
        };
        body.push_str(&format!(
            "<option value=\"{kind}\"{selected}>{}</option>\n",
            t(label_key),
        ));
    }
    body.push_str("</select></label>\n");

    let title = t("title");
    let content = t("content");
    for (code, title_field, body_field) in [
        ("AR", item.and_then(|i| i.title_ar.as_deref()), item.and_then(|i| i.body_ar.as_deref())),
        ("EN", item.and_then(|i| i.title_en.as_deref()), item.and_then(|i| i.body_en.as_deref())),
        ("IT", item.and_then(|i| i.title_it.as_deref()), item.and_then(|i| i.body_it.as_deref())),
    ] {
        let name = code.to_lowercase();
        body.push_str(&format!(
            "<label>{title} ({code})\
             <input name=\"title_{name}\" value=\"{}\"></label>\n",
            text(title_field),
        ));
        body.push_str(&format!(
            "<label>{content} ({code})\
             <textarea name=\"body_{name}\">{}</textarea></label>\n",
            text(body_field),
        ));
    }

    body.push_str(&format!(
        "<label>{file}<input type=\"file\" name=\"file\"></label>\n",
        file = t("file"),
    ));
    if let Some(file_path) = item.and_then(|i| i.file_path.as_deref()) {
        body.push_str(&format!(
            "<p class=\"muted\"><a href=\"{}\">{}</a></p>\n",
            escape_html(file_path),
            t("open"),
        ));
    }
    body.push_str(&format!("<button>{}</button>\n</form>\n", t("save")));
    body.push_str(&format!(
        "<p><a href=\"/admin?lang={lang}\">{}</a></p>\n",
        t("back"),
    ));

    layout(catalog, ctx, &heading, &body)
}

#[cfg(test)]
mod tests {
    use atelier_core::Language;

    use super::*;

    fn ctx(lang: Language) -> PageContext {
        PageContext {
            lang,
            site_name: "Atelier".to_string(),
            active_path: "/admin".to_string(),
            preserved_query: String::new(),
        }
    }

    fn item() -> Item {
        Item {
            id: 12,
            kind: "audio".to_string(),
            title_ar: None,
            title_en: Some("Night song".to_string()),
            title_it: Some("Canto".to_string()),
            body_ar: None,
            body_en: Some("Recorded <live>".to_string()),
            body_it: None,
            file_path: Some("/public/uploads/3_song.mp3".to_string()),
            created_at: "2026-01-15T20:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn login_page_shows_error_only_when_present() {
        let catalog = Catalog::load().unwrap();
        let clean = login_page(&catalog, &ctx(Language::En), None).0;
        assert!(clean.contains("action=\"/admin/login?lang=en\""));
        assert!(!clean.contains("class=\"error\""));

        let failed = login_page(&catalog, &ctx(Language::En), Some("Wrong credentials")).0;
        assert!(failed.contains("<p class=\"error\">Wrong credentials</p>"));
    }

    #[test]
    fn panel_lists_items_with_edit_and_delete_controls() {
        let catalog = Catalog::load().unwrap();
        let html = panel_page(&catalog, &ctx(Language::En), &[item()]).0;
        assert!(html.contains("href=\"/admin/edit/12?lang=en\""));
        assert!(html.contains("action=\"/admin/delete/12?lang=en\""));
        assert!(html.contains("action=\"/admin/logout?lang=en\""));
        assert!(html.contains(">Night song</td>"));
    }

    #[test]
    fn empty_panel_shows_the_no_items_message() {
        let catalog = Catalog::load().unwrap();
        let html = panel_page(&catalog, &ctx(Language::It), &[]).0;
        assert!(html.contains("Nessun contenuto"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn blank_form_has_placeholder_kind_and_no_hidden_id() {
        let catalog = Catalog::load().unwrap();
        let html = edit_page(&catalog, &ctx(Language::En), None, None).0;
        assert!(html.contains("<option value=\"\">Choose</option>"));
        assert!(!html.contains("name=\"id\""));
        assert!(!html.contains("name=\"existing_file_path\""));
        assert!(!html.contains(" selected"));
    }

    #[test]
    fn edit_form_prefills_fields_and_keeps_the_stored_file() {
        let catalog = Catalog::load().unwrap();
        let it = item();
        let html = edit_page(&catalog, &ctx(Language::En), Some(&it), None).0;
        assert!(html.contains("name=\"id\" value=\"12\""));
        assert!(html.contains("name=\"existing_file_path\" value=\"/public/uploads/3_song.mp3\""));
        assert!(html.contains("<option value=\"audio\" selected>"));
        assert!(html.contains("name=\"title_en\" value=\"Night song\""));
        assert!(html.contains("name=\"title_ar\" value=\"\""));
        assert!(html.contains("Recorded &lt;live&gt;</textarea>"));
    }

    #[test]
    fn save_error_renders_a_blank_form_with_the_message() {
        let catalog = Catalog::load().unwrap();
        let html = edit_page(&catalog, &ctx(Language::Ar), None, Some("اختر نوع المحتوى.")).0;
        assert!(html.contains("<p class=\"error\">اختر نوع المحتوى.</p>"));
        assert!(html.contains("dir=\"rtl\""));
    }
}
