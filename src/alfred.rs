//! Alfred script filter output.
//!
//! Alfred reads an `<items>` document from stdout and shows one row per
//! `<item>`. The `arg` of the chosen row is passed to the next workflow step:
//! a Bear note id to open, or `create:<title>` to start a new note.

use crate::db::{Backlink, SearchResult};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Prefix of the arg that asks the workflow to create a note
pub const CREATE_PREFIX: &str = "create:";

struct Item<'a> {
    uid: Option<&'a str>,
    valid: bool,
    title: String,
    subtitle: String,
    arg: Option<String>,
}

impl Item<'_> {
    fn write(&self, out: &mut String) {
        out.push_str("<item");
        if let Some(uid) = self.uid {
            out.push_str(&format!(r#" uid="{}""#, escape(uid)));
        }
        out.push_str(if self.valid { r#" valid="yes">"# } else { r#" valid="no">"# });
        out.push_str(&format!("<title>{}</title>", escape(&self.title)));
        out.push_str(&format!("<subtitle>{}</subtitle>", escape(&self.subtitle)));
        if let Some(arg) = &self.arg {
            out.push_str(&format!("<arg>{}</arg>", escape(arg)));
        }
        out.push_str("</item>");
    }
}

fn document(items: &[Item<'_>]) -> String {
    let mut out = String::from(XML_HEADER);
    out.push_str("<items>");
    for item in items {
        item.write(&mut out);
    }
    out.push_str("</items>");
    out
}

fn open_item(result: &SearchResult) -> Item<'_> {
    Item {
        uid: Some(&result.id),
        valid: true,
        title: result.title_case(),
        subtitle: result.unique_tags().join(", "),
        arg: Some(result.id.clone()),
    }
}

fn create_item(title: &str) -> Item<'static> {
    Item {
        uid: None,
        valid: true,
        title: format!("Create \"{title}\""),
        subtitle: "New Bear note".to_string(),
        arg: Some(format!("{CREATE_PREFIX}{title}")),
    }
}

/// One row per result, each opening its note
pub fn open_xml(results: &[SearchResult]) -> String {
    let items: Vec<_> = results.iter().map(open_item).collect();
    document(&items)
}

/// A single row offering to create a note titled `title`
pub fn create_xml(title: &str) -> String {
    document(&[create_item(title)])
}

/// Results when there are any, otherwise the offer to create `query`
pub fn results_xml(results: &[SearchResult], query: &str) -> String {
    if results.is_empty() {
        create_xml(query)
    } else {
        open_xml(results)
    }
}

/// Rows of `Source → Target`, each opening the linking note
pub fn backlinks_xml(links: &[Backlink]) -> String {
    if links.is_empty() {
        return document(&[Item {
            uid: None,
            valid: false,
            title: "No backlinks found".to_string(),
            subtitle: String::new(),
            arg: None,
        }]);
    }

    let items: Vec<_> = links
        .iter()
        .map(|link| Item {
            title: format!(
                "{} → {}",
                link.source.title_case(),
                link.target.title_case()
            ),
            ..open_item(&link.source)
        })
        .collect();
    document(&items)
}

/// Escape the five XML special characters
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
