//! Traffic Type Taxonomy
//!
//! Feed records name the traffic type inconsistently: the field varies,
//! the casing varies, and separators vary. Ingestion funnels every raw
//! label through [`normalize_label`] before using it for category
//! lookups or colors.

use serde_json::Value;

/// The eight traffic types the advanced taxonomy distinguishes.
pub const ADVANCED_LABELS: [&str; 8] = [
    "Audio",
    "Background",
    "Bruteforce",
    "DoS",
    "Information Gathering",
    "Mirai",
    "Text",
    "Video",
];

/// Collapsed two-class taxonomy.
pub const SIMPLE_LABELS: [&str; 2] = ["Normal", "Malicious"];

/// Traffic types treated as attacks.
pub const MALICIOUS_LABELS: [&str; 4] = ["Bruteforce", "DoS", "Information Gathering", "Mirai"];

/// Category used when a record carries no usable label.
pub const DEFAULT_LABEL: &str = "Background";

/// Fields checked for a type label, in priority order.
const LABEL_KEYS: [&str; 5] = ["type", "label", "category", "trafficType", "class"];

/// Substring fallbacks, in priority order. Earlier entries win.
const FUZZY_MATCHES: [(&str, &str); 7] = [
    ("mirai", "Mirai"),
    ("dos", "DoS"),
    ("brute", "Bruteforce"),
    ("info", "Information Gathering"),
    ("audio", "Audio"),
    ("video", "Video"),
    ("text", "Text"),
];

/// Whether a normalized label names an attack category.
pub fn is_malicious(label: &str) -> bool {
    MALICIOUS_LABELS.contains(&label)
}

/// Pull the raw type label out of a JSON record, trying each known field.
pub fn extract_label(record: &Value) -> Option<String> {
    for key in LABEL_KEYS {
        match record.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Null) | Some(Value::String(_)) | None => continue,
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}

/// Map a raw label of unknown shape onto the canonical taxonomy.
///
/// Exact matches (ignoring case and punctuation) win, then substring
/// fallbacks for the known categories, then a title-cased rendering of the
/// input. Input with no alphanumeric content at all, or no input, maps to
/// [`DEFAULT_LABEL`].
pub fn normalize_label(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return DEFAULT_LABEL.to_string(),
    };

    let cleaned = canonical_key(raw);
    if cleaned.is_empty() {
        return DEFAULT_LABEL.to_string();
    }

    for label in ADVANCED_LABELS {
        if cleaned == canonical_key(label) {
            return label.to_string();
        }
    }

    for (needle, label) in FUZZY_MATCHES {
        if cleaned.contains(needle) {
            return label.to_string();
        }
    }

    title_case(raw)
}

/// Lowercased alphanumerics only.
fn canonical_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// `_` and `-` become spaces, whitespace runs collapse, each word starts
/// uppercase with the rest lowered.
fn title_case(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_is_idempotent_on_canonical_labels() {
        for label in ADVANCED_LABELS {
            assert_eq!(normalize_label(Some(label)), label);
        }
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        assert_eq!(normalize_label(Some("information_gathering")), "Information Gathering");
        assert_eq!(normalize_label(Some("DOS")), "DoS");
        assert_eq!(normalize_label(Some("back-ground")), "Background");
    }

    #[test]
    fn test_fuzzy_fallbacks_in_priority_order() {
        assert_eq!(normalize_label(Some("mirai-botnet")), "Mirai");
        assert_eq!(normalize_label(Some("dos attack")), "DoS");
        assert_eq!(normalize_label(Some("bruteforcing ssh")), "Bruteforce");
        assert_eq!(normalize_label(Some("info leak")), "Information Gathering");
        // "dos" outranks "brute" when both appear
        assert_eq!(normalize_label(Some("brute dos combo")), "DoS");
    }

    #[test]
    fn test_unknown_labels_title_case() {
        assert_eq!(normalize_label(Some("lateral_movement")), "Lateral Movement");
        assert_eq!(normalize_label(Some("WEIRD  stuff")), "Weird Stuff");
    }

    #[test]
    fn test_garbage_and_missing_map_to_default() {
        assert_eq!(normalize_label(None), DEFAULT_LABEL);
        assert_eq!(normalize_label(Some("")), DEFAULT_LABEL);
        assert_eq!(normalize_label(Some("###")), DEFAULT_LABEL);
        assert_eq!(normalize_label(Some("___")), DEFAULT_LABEL);
    }

    #[test]
    fn test_extract_label_priority() {
        let record = json!({ "label": "Audio", "type": "dos" });
        assert_eq!(extract_label(&record), Some("dos".to_string()));

        let record = json!({ "type": "", "label": "Video" });
        assert_eq!(extract_label(&record), Some("Video".to_string()));

        let record = json!({ "type": null, "class": "Mirai" });
        assert_eq!(extract_label(&record), Some("Mirai".to_string()));

        let record = json!({ "bytes": 4000 });
        assert_eq!(extract_label(&record), None);
    }

    #[test]
    fn test_extract_label_stringifies_non_strings() {
        let record = json!({ "category": 7 });
        assert_eq!(extract_label(&record), Some("7".to_string()));
    }

    #[test]
    fn test_malicious_set_membership() {
        for label in MALICIOUS_LABELS {
            assert!(is_malicious(label));
        }
        assert!(!is_malicious("Background"));
        assert!(!is_malicious("Audio"));
        assert!(!is_malicious("Normal"));
    }
}
