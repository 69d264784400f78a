//! District label derived from a sheet title

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading run of digits, whitespace and list punctuation ("1. ", "3) ", "4 - ")
static ORDINAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s.\-)\]]+").expect("ordinal prefix pattern is valid"));

/// Strip a numbering prefix from a sheet title and trim the rest
///
/// e.g. "1. 본당구역" -> "본당구역", "3) 장년구역" -> "장년구역"
pub fn clean_group_label(title: &str) -> String {
    ORDINAL_PREFIX.replace(title, "").trim().to_string()
}
