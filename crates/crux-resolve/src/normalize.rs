//! Canonical-form helpers shared by the resolver and the detectors.

use crux_core::models::{EdgeSign, NodeSpec};

/// Canonical variable key: lowercase, runs of non-alphanumerics collapsed to
/// a single underscore, trimmed.
pub fn canonical_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut last_was_sep = true;
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            key.extend(ch.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            key.push('_');
            last_was_sep = true;
        }
    }
    while key.ends_with('_') {
        key.pop();
    }
    key
}

/// Normalized form for free-text statements (assumptions, confounders):
/// lowercase with punctuation stripped, used only for set comparison.
pub fn normalized_statement(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_space = true;
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_was_space = false;
        } else if (ch.is_whitespace() || ch.is_ascii_punctuation()) && !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// A node spec reduced to its canonical record, or `None` when malformed.
pub fn node_record(spec: &NodeSpec) -> Option<(String, String)> {
    let raw_id = spec.raw_id()?;
    let key = canonical_key(raw_id);
    if key.is_empty() {
        return None;
    }
    let display = spec.raw_display().unwrap_or(raw_id).to_string();
    Some((key, display))
}

/// Parse the accepted sign spellings; anything unrecognized is positive.
pub fn parse_sign(raw: Option<&str>) -> EdgeSign {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("negative") | Some("neg") | Some("-") | Some("-1") => EdgeSign::Negative,
        _ => EdgeSign::Positive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_collapses_separators() {
        assert_eq!(canonical_key("Blood Pressure"), "blood_pressure");
        assert_eq!(canonical_key("  LDL--cholesterol  "), "ldl_cholesterol");
        assert_eq!(canonical_key("a.b.c"), "a_b_c");
    }

    #[test]
    fn normalized_statement_drops_case_and_punctuation() {
        assert_eq!(
            normalized_statement("No unmeasured confounding."),
            normalized_statement("no unmeasured CONFOUNDING")
        );
    }

    #[test]
    fn sign_defaults_to_positive() {
        assert_eq!(parse_sign(None), EdgeSign::Positive);
        assert_eq!(parse_sign(Some("weird")), EdgeSign::Positive);
        assert_eq!(parse_sign(Some("NEG")), EdgeSign::Negative);
    }
}
