// src/core/sanitize.rs

use std::sync::OnceLock;

use regex::Regex;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Remove footnote markers of the shape `[<word> <digits>]`, e.g. `[n 1]`.
/// Anything else in brackets stays put.
pub fn strip_footnote(s: &str) -> String {
    static FOOTNOTE: OnceLock<Regex> = OnceLock::new();
    let re = FOOTNOTE.get_or_init(|| Regex::new(r"\[\w+ \d+\]").unwrap());
    re.replace_all(s, "").trim().to_string()
}

/// Drop thousands separators so `"2,500"` parses as a number.
pub fn strip_separators(s: &str) -> String {
    s.replace(',', "").trim().to_string()
}
