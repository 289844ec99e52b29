use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // non greedy so "Rai 1 (HD) (Backup)" loses both groups and keeps the text between them
    static ref PARENTHESIZED: Regex = Regex::new(r"\(.*?\)").expect("static regex should compile");
}

/// canonical key for a channel name, "Rai 1 (HD)" -> "rai 1"
///
/// the logo table keys and the genre keywords are both written against this form so both lookups
/// have to go through here
pub fn normalize_name(name: &str) -> String {
    PARENTHESIZED.replace_all(name, "").trim().to_lowercase()
}
