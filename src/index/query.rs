//! Rewriting user input into FTS5 query syntax.
//!
//! FTS5 only treats `AND`, `OR`, `NOT` and `NEAR(` as operators when they are
//! upper case. Users type them however they like, so they are upper-cased here
//! whenever they appear as whole words. See <https://sqlite.org/fts5.html>.

use regex::Regex;
use std::sync::OnceLock;

fn operator_regex() -> &'static Regex {
    static OPERATOR_RE: OnceLock<Regex> = OnceLock::new();
    // NEAR is a function, so it has no trailing boundary
    OPERATOR_RE.get_or_init(|| {
        Regex::new(r"(?i)\bnear\(|\b(?:and|or|not)\b").expect("operator pattern is valid")
    })
}

/// Upper-case FTS5 operators, leaving every other byte of `raw` as typed
pub fn normalize(raw: &str) -> String {
    operator_regex()
        .replace_all(raw, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// Quote `s` as an SQL string literal.
///
/// The MATCH expression is spliced into the statement text, so this is the
/// only thing standing between user input and the SQL parser.
pub fn sql_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
