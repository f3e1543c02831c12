use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Separator for nested tags (`work/coffee`)
pub const TAG_SEPARATOR: &str = "/";

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    // #multi word tag# first, then #single or #nested/tag
    TAG_RE.get_or_init(|| {
        Regex::new(r"(?m)(?:^|\s)#(?:([^\s#][^#\n]*[^\s#])#|([\p{L}\p{N}_/\-]+))")
            .expect("tag pattern is valid")
    })
}

/// Extract hashtag-style tags from a note body, in order of first appearance
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for caps in tag_regex().captures_iter(text) {
        let tag = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim_end_matches('/'))
            .unwrap_or_default();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_string()) {
            tags.push(tag.to_string());
        }
    }

    tags
}

/// Drop every tag that is only an intermediate step of a longer nested tag.
///
/// `["work", "work/coffee"]` keeps just `work/coffee`. The input is untouched
/// and the surviving tags keep their original order.
pub fn remove_intermediate_prefixes(tags: &[String], sep: &str) -> Vec<String> {
    tags.iter()
        .filter(|tag| {
            let prefix = format!("{tag}{sep}");
            !tags.iter().any(|other| other.starts_with(&prefix))
        })
        .cloned()
        .collect()
}

/// De-duplicated leaf tags, ready for display
pub fn unique_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let deduped: Vec<String> = tags
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect();
    remove_intermediate_prefixes(&deduped, TAG_SEPARATOR)
}

/// Upper-case the first letter of every whitespace-separated word
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}
